use super::Reply;
use crate::args::ValidateKind;
use anyhow::Result;
use satchel::lang::Validator;
use satchel::lang::validator as rules;

pub fn validate(validator: &Validator, kind: ValidateKind, value: &str) -> Result<Reply> {
    let valid = match kind {
        ValidateKind::General => rules::is_general(value),
        ValidateKind::Letter => rules::is_letter(value),
        ValidateKind::Number => rules::is_number(value),
        ValidateKind::Word => rules::is_word(value),
        ValidateKind::Money => rules::is_money(value),
        ValidateKind::Email => rules::is_email(value),
        ValidateKind::Mobile => rules::is_mobile(value),
        ValidateKind::CitizenId => rules::is_citizen_id(value),
        ValidateKind::ZipCode => rules::is_zip_code(value),
        ValidateKind::Birthday => validator.is_birthday(value),
        ValidateKind::Ipv4 => rules::is_ipv4(value),
        ValidateKind::Ipv6 => rules::is_ipv6(value),
        ValidateKind::Mac => rules::is_mac(value),
        ValidateKind::PlateNumber => rules::is_plate_number(value),
        ValidateKind::Url => rules::is_url(value),
        ValidateKind::Chinese => rules::is_chinese(value),
        ValidateKind::Uuid => rules::is_uuid(value),
        ValidateKind::Hex => rules::is_hex(value),
    };
    Reply::of(&valid)
}
