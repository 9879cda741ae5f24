//! Command line arguments.

use clap::{Args, Parser, Subcommand};
use lingo_common::parse_assignment;
use std::path::PathBuf;

/// Render and inspect translations.
#[derive(Parser, Debug, Clone)]
#[command(name = "lingo", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "LINGO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `lingo_i18n=trace`
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render one message
    Get(GetArgs),
    /// Resolve the active locale from request signals
    Detect(DetectArgs),
    /// Print every message of a locale as JSON
    Dump(DumpArgs),
}

/// Arguments for `lingo get`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GetArgs {
    /// Message key
    pub key: String,

    /// Locale to render in; the active locale otherwise
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Positional argument for `%s`-style templates, repeatable
    #[arg(short = 'a', long = "arg", conflicts_with = "vars")]
    pub args: Vec<String>,

    /// Named argument `name=value` for `{:name}` templates, repeatable
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Resource file to load first, repeatable
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,
}

/// Arguments for `lingo detect`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DetectArgs {
    /// Value of the locale request parameter
    #[arg(long)]
    pub param: Option<String>,

    /// Value of the locale cookie
    #[arg(long)]
    pub cookie: Option<String>,

    /// `Accept-Language` header value
    #[arg(long)]
    pub accept_language: Option<String>,
}

/// Arguments for `lingo dump`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DumpArgs {
    /// Locale to dump; the active locale otherwise
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Resource file to load first, repeatable
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,
}

/// Parses `name=value`.
pub fn parse_var(input: &str) -> Result<(String, String), String> {
    parse_assignment(input)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{input}'"))
}
