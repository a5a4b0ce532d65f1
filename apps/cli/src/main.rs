#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use crate::handlers::{Reply, convert, file, text, url, validate};
use anyhow::{Context, Result};
use clap::Parser;
use satchel::domain::config::SatchelConfig;
use satchel::kernel::config::{load_config, load_config_or_default};
use satchel::lang::result::success_result;
use satchel::logger::Logger;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: SatchelConfig = match &cli.config {
        Some(path) => load_config::<SatchelConfig>(Some(path)),
        None => load_config_or_default::<SatchelConfig>(None::<&Path>),
    }
    .context("Critical: Configuration is malformed")?;

    let _log = Logger::from_settings(env!("CARGO_PKG_NAME"), &cfg.log)?;
    let tools = satchel::init(&cfg);

    let reply = match &cli.command {
        Commands::Convert { to, value, default } => {
            convert::convert(&tools.registry, to, value, default.as_deref())?
        },
        Commands::Validate { kind, value } => validate::validate(&tools.validator, *kind, value)?,
        Commands::Format { template, args } => text::format(template, args)?,
        Commands::Similarity { a, b } => text::similarity(a, b)?,
        Commands::Url { action } => url::run(action)?,
        Commands::Camel { value } => text::camel(value)?,
        Commands::Hex { path, length, lower } => file::hex(&cfg.io, path, *length, *lower)?,
    };

    print_reply(reply, cli.json)
}

fn print_reply(reply: Reply, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&success_result(reply.data))?);
    } else {
        println!("{}", reply.text);
    }
    Ok(())
}
