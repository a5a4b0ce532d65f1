/// Converts a `camelCase` identifier to `snake_case`.
///
/// ASCII uppercase letters become `_` plus their lowercase form, and every char in
/// `'0'..=';'` (digits plus `:` and `;`) is prefixed with `_`. Other chars are kept.
///
/// ```rust
/// use satchel_text::case::camel_to_underline;
///
/// assert_eq!(camel_to_underline("userName"), "user_name");
/// assert_eq!(camel_to_underline("address2Line"), "address_2_line");
/// ```
#[must_use]
pub fn camel_to_underline(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + camel.len() / 2);
    for c in camel.chars() {
        match c {
            'A'..='Z' => {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            },
            '0'..=';' => {
                out.push('_');
                out.push(c);
            },
            _ => out.push(c),
        }
    }
    out
}
