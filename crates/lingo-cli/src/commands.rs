//! Subcommand implementations.
//!
//! Each command returns its output instead of printing it so the binary
//! stays a thin shell.

use crate::cli::{Cli, Command, DetectArgs, DumpArgs, GetArgs};
use anyhow::{Context, Result};
use lingo_config::{ConfigLoader, LangConfig};
use lingo_i18n::{RequestSignals, Translator, Vars, ACCEPT_LANGUAGE};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds a translator from the config file, or from defaults and
/// environment overrides when there is none.
pub fn build_translator(config: Option<&Path>) -> Result<Translator> {
    let config: LangConfig = match config {
        Some(path) => ConfigLoader::new(path)
            .load()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::from_env().context("invalid configuration from environment")?,
    };

    Translator::from_config(&config).context("failed to initialise translator")
}

/// Runs the parsed command line and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let mut translator = build_translator(cli.config.as_deref())?;
    info!(locale = %translator.locale(), "translator ready");
    execute(&cli.command, &mut translator)
}

/// Runs one subcommand against `translator`.
pub fn execute(command: &Command, translator: &mut Translator) -> Result<String> {
    match command {
        Command::Get(args) => Ok(get(args, translator)),
        Command::Detect(args) => Ok(detect(args, translator)),
        Command::Dump(args) => dump(args, translator),
    }
}

fn get(args: &GetArgs, translator: &mut Translator) -> String {
    let locale = args.locale.as_deref();
    load_resources(translator, &args.files, locale);

    let vars = if !args.args.is_empty() {
        Vars::positional(args.args.iter().map(String::as_str))
    } else if !args.vars.is_empty() {
        Vars::named(args.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    } else {
        Vars::none()
    };

    if !translator.has(&args.key, locale) {
        debug!(key = %args.key, "key not defined, rendering the key itself");
    }
    translator.get(&args.key, &vars, locale)
}

fn detect(args: &DetectArgs, translator: &mut Translator) -> String {
    let mut request = RequestSignals::new();
    if let Some(value) = &args.param {
        request = request.with_param(translator.detect_var(), value.as_str());
    }
    if let Some(value) = &args.cookie {
        request = request.with_cookie(translator.cookie_var(), value.as_str());
    }
    if let Some(value) = &args.accept_language {
        request = request.with_header(ACCEPT_LANGUAGE, value.as_str());
    }

    translator.detect(&request).to_string()
}

fn dump(args: &DumpArgs, translator: &mut Translator) -> Result<String> {
    let locale = args.locale.as_deref();
    load_resources(translator, &args.files, locale);

    let sorted: BTreeMap<&str, &str> = translator
        .all(locale)
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    serde_json::to_string_pretty(&sorted).context("failed to serialise messages")
}

/// Explicit files first so they win over the locale pack.
fn load_resources(translator: &mut Translator, files: &[PathBuf], locale: Option<&str>) {
    if !files.is_empty() {
        let entries = translator.load(files, locale).len();
        debug!(files = files.len(), entries, "loaded resource files");
    }
    if translator.lang_dir().is_some() {
        translator.load_locale_pack(locale);
    }
}
