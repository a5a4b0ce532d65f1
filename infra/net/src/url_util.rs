use crate::error::{NetError, NetErrorExt};
use satchel_io::IoError;
use satchel_kernel::{Assert, UtilError};
use satchel_text::{Charset, char_util, str_util};
use std::fs::File;
use std::io::{self, BufRead, ErrorKind};
use std::path::Path;
use tracing::debug;
use url::form_urlencoded::byte_serialize;
use url::{ParseError, Url};

pub const URL_PROTOCOL_FILE: &str = "file";
pub const URL_PROTOCOL_VFSFILE: &str = "vfsfile";
pub const URL_PROTOCOL_VFS: &str = "vfs";

/// Parses `s` as a URL, falling back to a `file:` URL for the absolute form of `s` as a path.
///
/// # Errors
/// Returns [`NetError::Parse`] when `s` is neither a URL nor usable as a path.
pub fn url(s: &str) -> Result<Url, NetError> {
    match Url::parse(s) {
        Ok(url) => Ok(url),
        Err(e) => {
            debug!(input = s, error = %e, "Not a URL, trying as file path");
            file_url(Path::new(s)).ok_or(e).context("Failed to parse URL")
        },
    }
}

/// Parses an HTTP URL after replacing every blank character with `%20`.
///
/// # Errors
/// Returns [`NetError::Argument`] for blank input and [`NetError::Parse`] for malformed URLs.
pub fn to_url_for_http(s: &str) -> Result<Url, NetError> {
    Assert::not_blank(s, "Url is blank !", &[])?;
    Url::parse(&encode_blank(s)).context("Failed to parse HTTP URL")
}

/// Replaces every blank character with `%20`.
#[must_use]
pub fn encode_blank(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if char_util::is_blank_char(c) {
            out.push_str("%20");
        } else {
            out.push(c);
        }
    }
    out
}

/// `file:` URL of `path`, made absolute against the working directory.
///
/// # Errors
/// Returns [`NetError::Internal`] when the path cannot be expressed as a URL.
pub fn get_url(path: impl AsRef<Path>) -> Result<Url, NetError> {
    let path = path.as_ref();
    file_url(path).ok_or_else(|| NetError::Internal {
        message: format!("Error occurred when get URL for {}", path.display()).into(),
        context: None,
    })
}

/// # Errors
/// Fails on the first path [`get_url`] rejects.
pub fn get_urls<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Url>, NetError> {
    paths.iter().map(get_url).collect()
}

fn file_url(path: &Path) -> Option<Url> {
    let absolute = std::path::absolute(path).ok()?;
    Url::from_file_path(absolute).ok()
}

/// Resolves `relative` against the normalized `base`. A blank base yields `None`.
///
/// # Errors
/// Returns [`NetError::Parse`] when either part does not parse.
pub fn complete_url(base: &str, relative: &str) -> Result<Option<String>, NetError> {
    let base = normalize(base, false);
    if str_util::is_blank(&base) {
        return Ok(None);
    }
    let absolute = Url::parse(&base).context("Failed to parse base URL")?;
    let joined = absolute.join(relative).context("Failed to resolve relative URL")?;
    Ok(Some(joined.into()))
}

/// `application/x-www-form-urlencoded` encoding of the UTF-8 bytes of `s`.
#[must_use]
pub fn encode_all(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

/// Form-encodes `s` as `charset` bytes: ASCII alphanumerics and `.-*_` stay, spaces become
/// `+`, everything else is `%XX`.
#[must_use]
pub fn encode(s: &str, charset: Charset) -> String {
    if s.is_empty() {
        return String::new();
    }
    byte_serialize(&charset.encode(s)).collect()
}

/// Reverses [`encode`]: `+` is a space and each run of `%XX` escapes is decoded with `charset`.
///
/// # Errors
/// Returns [`NetError::Argument`] for an incomplete or non-hex escape.
pub fn decode(s: &str, charset: Charset) -> Result<String, NetError> {
    percent_decode(s, true, charset)
}

fn percent_decode(s: &str, plus_as_space: bool, charset: Charset) -> Result<String, NetError> {
    let mut out = String::with_capacity(s.len());
    let mut pending = Vec::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '%' {
            let byte = chars
                .next()
                .zip(chars.next())
                .and_then(|(hi, lo)| Some(hi.to_digit(16)? * 16 + lo.to_digit(16)?))
                .ok_or_else(|| UtilError::illegal_argument(format!("Malformed escape in {s:?}")))?;
            pending.push(byte as u8);
            continue;
        }
        if !pending.is_empty() {
            out.push_str(&charset.decode(&pending));
            pending.clear();
        }
        out.push(if plus_as_space && c == '+' { ' ' } else { c });
    }
    if !pending.is_empty() {
        out.push_str(&charset.decode(&pending));
    }
    Ok(out)
}

/// Decoded path of `uri`. Relative references are accepted and keep their relative form.
///
/// # Errors
/// Returns [`NetError::Parse`] for malformed absolute URIs and [`NetError::Argument`] for
/// malformed escapes.
pub fn get_path(uri: &str) -> Result<String, NetError> {
    match Url::parse(uri) {
        Ok(url) => percent_decode(url.path(), false, Charset::Utf8),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let end = uri.find(['?', '#']).unwrap_or(uri.len());
            percent_decode(&uri[..end], false, Charset::Utf8)
        },
        Err(e) => Err(e).context("Failed to parse URI"),
    }
}

/// Path of `url` with escapes decoded, or the raw path when they are malformed.
#[must_use]
pub fn get_decoded_path(url: &Url) -> String {
    percent_decode(url.path(), false, Charset::Utf8).unwrap_or_else(|_| url.path().to_owned())
}

/// # Errors
/// Returns [`NetError::Parse`] when `location` does not parse after escaping spaces.
pub fn to_uri(location: &str) -> Result<Url, NetError> {
    Url::parse(&location.replace(' ', "%20")).context("Failed to parse URI")
}

#[must_use]
pub fn is_file_url(url: &Url) -> bool {
    matches!(url.scheme(), URL_PROTOCOL_FILE | URL_PROTOCOL_VFSFILE | URL_PROTOCOL_VFS)
}

/// Opens a `file:` URL for reading.
///
/// # Errors
/// Returns [`NetError::Io`] when the file cannot be opened or the scheme is not `file`.
pub fn get_stream(url: &Url) -> Result<File, NetError> {
    if url.scheme() != URL_PROTOCOL_FILE {
        let unsupported =
            io::Error::new(ErrorKind::Unsupported, format!("cannot open {} URLs", url.scheme()));
        return Err(IoError::from(unsupported)).context("Failed to open URL stream");
    }
    let path = url.to_file_path().map_err(|()| NetError::Internal {
        message: format!("{url} has no local file path").into(),
        context: None,
    })?;
    File::open(&path)
        .map_err(IoError::from)
        .with_context(|| format!("Failed to open {}", path.display()))
}

/// # Errors
/// Returns [`NetError::Io`] when [`get_stream`] fails or the content cannot be read.
pub fn get_reader(url: &Url, charset: Charset) -> Result<impl BufRead, NetError> {
    let stream = get_stream(url)?;
    satchel_io::util::get_reader(stream, charset).context("Failed to read URL stream")
}

/// Tidies a loose URL string: defaults the scheme to `http://`, strips leading `/` from the
/// body, turns `\` into `/`, collapses repeated slashes and optionally form-encodes the body.
/// The query string is kept verbatim. Blank input is returned unchanged.
#[must_use]
pub fn normalize(url: &str, encode_body: bool) -> String {
    if str_util::is_blank(url) {
        return url.to_owned();
    }
    let (pre, rest) = match url.find("://") {
        Some(sep) if sep > 0 => url.split_at(sep + 3),
        _ => ("http://", url),
    };
    let (body, params) = match rest.find('?') {
        Some(q) if q > 0 => rest.split_at(q),
        _ => (rest, ""),
    };

    let mut cleaned = String::with_capacity(body.len());
    for c in body.trim_start_matches('/').chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && cleaned.ends_with('/') {
            continue;
        }
        cleaned.push(c);
    }
    if encode_body {
        cleaned = encode(&cleaned, Charset::Utf8);
    }
    format!("{pre}{cleaned}{params}")
}
