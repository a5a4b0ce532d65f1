//! Validation patterns.
//!
//! Every pattern is matched against the whole input, so none of them carries `^`/`$` anchors.

pub const GENERAL: &str = r"[0-9A-Za-z_]+";
pub const NUMBERS: &str = r"[0-9]+";
pub const WORD: &str = r"[a-zA-Z]+";
pub const MONEY: &str = r"[0-9]+(?:\.[0-9]+)?";
pub const EMAIL: &str = r"[0-9A-Za-z_.+\-]+@[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)+";
/// Mainland mobile numbers with an optional `0`, `86` or `+86` prefix.
pub const MOBILE: &str = r"(?:0|86|\+86)?1[3-9][0-9]{9}";
/// 18-digit resident identity number.
pub const CITIZEN_ID: &str =
    r"[1-9][0-9]{5}[12][0-9]{3}(?:0[0-9]|1[0-2])(?:[012][0-9]|3[01])[0-9]{3}[0-9Xx]";
pub const ZIP_CODE: &str =
    r"(?:0[1-7]|1[0-356]|2[0-7]|3[0-6]|4[0-7]|5[0-7]|6[0-7]|7[0-5]|8[0-9]|9[0-8])[0-9]{4}";
/// Groups: 1 year, 3 month, 5 day.
pub const BIRTHDAY: &str = r"([0-9]{2,4})([/\-.年]?)([0-9]{1,2})([/\-.月]?)([0-9]{1,2})日?";
pub const IPV4: &str = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])){3}";
pub const MAC_ADDRESS: &str = r"(?:[0-9A-Fa-f]{2}[:\-]){5}[0-9A-Fa-f]{2}";
pub const HEX: &str = r"[0-9A-Fa-f]+";
/// CJK ideographs, radicals and the common extension blocks.
pub const CHINESE: &str = r"[\x{2E80}-\x{2EFF}\x{2F00}-\x{2FDF}\x{31C0}-\x{31EF}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}\x{20000}-\x{2A6DF}\x{2A700}-\x{2B73F}\x{2B740}-\x{2B81F}\x{2B820}-\x{2CEAF}\x{2F800}-\x{2FA1F}]";
pub const GENERAL_WITH_CHINESE: &str = r"[\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}0-9A-Za-z_]+";
pub const UUID: &str = r"[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}";
pub const UUID_SIMPLE: &str = r"[0-9A-Fa-f]{32}";
/// Province prefix, issuing letter, then five (fuel) or six (new energy) plate characters.
pub const PLATE_NUMBER: &str = r"[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领][A-Z][A-HJ-NP-Z0-9]{4,5}[A-HJ-NP-Z0-9挂学警港澳]";
