use super::Reply;
use crate::args::UrlAction;
use anyhow::Result;
use satchel::net::url_util;
use satchel::text::Charset;

pub fn run(action: &UrlAction) -> Result<Reply> {
    let out = match action {
        UrlAction::Normalize { value, encode } => url_util::normalize(value, *encode),
        UrlAction::Encode { value, charset } => {
            url_util::encode(value, Charset::from_name(charset)?)
        },
        UrlAction::Decode { value, charset } => {
            url_util::decode(value, Charset::from_name(charset)?)?
        },
    };
    Reply::of(&out)
}
