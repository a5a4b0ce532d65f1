use super::Reply;
use anyhow::Result;
use satchel::text::{case, format, similarity};
use std::fmt::Display;

pub fn format(template: &str, args: &[String]) -> Result<Reply> {
    let params: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
    Reply::of(&format::format(template, &params))
}

pub fn similarity(a: &str, b: &str) -> Result<Reply> {
    Reply::of(&similarity::similarity(Some(a), Some(b)))
}

pub fn camel(value: &str) -> Result<Reply> {
    Reply::of(&case::camel_to_underline(value))
}
