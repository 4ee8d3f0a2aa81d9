use std::collections::BTreeMap;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use flatconf::{
    presets,
    style::{StyleConfig, STYLE_FILE_NAME},
    ConfigStore, Layer, RuleRegistry,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log config discovery and loading to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration of a file as JSON.
    PrintConfig {
        file: PathBuf,

        /// Layer list to use instead of the nearest config file.
        #[arg(long, value_name = "FILE", conflicts_with = "preset")]
        config: Option<PathBuf>,

        /// Resolve against a built-in preset only.
        #[arg(long, value_name = "NAME")]
        preset: Option<String>,
    },
    /// List the known rules, or the rules each layer of a preset enables.
    Rules {
        #[arg(long, value_name = "NAME")]
        preset: Option<String>,
    },
    /// Print the formatter options of a file as JSON.
    Style {
        file: PathBuf,

        /// Style file. Defaults to `.flatconf-stylerc.json` when it exists.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    ConfigError = 1,
    OtherError = 2,
}

/// Run CLI processing and return `Ok(())` or an `ExitCode` on error.
pub fn run(cli: Cli) -> Result<(), ExitCode> {
    match cli.command {
        Command::PrintConfig {
            file,
            config,
            preset,
        } => print_config(&file, config, preset.as_deref()),
        Command::Rules { preset } => print_rules(preset.as_deref()),
        Command::Style { file, config } => print_style(&file, config.as_deref()),
    }
}

fn print_config(
    file: &Path,
    config: Option<PathBuf>,
    preset: Option<&str>,
) -> Result<(), ExitCode> {
    let cwd = env::current_dir().map_err(|err| {
        eprintln!("error: failed to get cwd: {err}");
        ExitCode::OtherError
    })?;
    let registry = RuleRegistry::with_builtin_rules();

    let store = match preset {
        Some(name) => {
            let layers = presets::preset_layers(name, &registry).map_err(config_error)?;
            ConfigStore::from_layers(&cwd, layers)
        }
        None => ConfigStore::new(&cwd, config, &registry).map_err(config_error)?,
    };

    let file = if file.is_absolute() {
        file.to_path_buf()
    } else {
        cwd.join(file)
    };
    debug!(file = %file.display(), layers = store.layers().len(), "resolving");

    if store.is_ignored(&file) {
        return Ok(());
    }
    write_json(&store.resolve(&file))
}

fn print_rules(preset: Option<&str>) -> Result<(), ExitCode> {
    let registry = RuleRegistry::with_builtin_rules();

    let lines: Vec<String> = match preset {
        None => registry.ids().into_iter().map(str::to_string).collect(),
        Some(name) => {
            let layers = presets::preset_layers(name, &registry).map_err(config_error)?;
            // layers are scoped by `files`, so a rule may be enabled by several of them
            let mut enabled: BTreeMap<&str, Vec<String>> = BTreeMap::new();
            for layer in &layers {
                for (id, setting) in layer.rules() {
                    if setting.is_enabled() {
                        enabled.entry(id.as_str()).or_default().push(format!(
                            "{id}: {} ({})",
                            setting.level.as_str(),
                            layer_scope(layer)
                        ));
                    }
                }
            }
            enabled.into_values().flatten().collect()
        }
    };

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}").map_err(|_| ExitCode::OtherError)?;
    }
    Ok(())
}

/// A layer's name, or its file patterns when it has none.
fn layer_scope(layer: &Layer) -> String {
    match (layer.name(), layer.file_patterns()) {
        (Some(name), _) => name.to_string(),
        (None, Some(files)) => files.join(", "),
        (None, None) => "all files".to_string(),
    }
}

fn print_style(file: &Path, config: Option<&Path>) -> Result<(), ExitCode> {
    // only the default style file is optional
    let default_path = Path::new(STYLE_FILE_NAME);
    let config_path = config.or_else(|| default_path.exists().then_some(default_path));

    let style = StyleConfig::new(None, config_path).map_err(config_error)?;
    let options = style
        .options_for(&file.to_string_lossy())
        .map_err(config_error)?;
    write_json(&options)
}

fn config_error(err: impl std::fmt::Display) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::ConfigError
}

fn write_json<T: Serialize>(value: &T) -> Result<(), ExitCode> {
    let json = serde_json::to_string_pretty(value).map_err(|_| ExitCode::OtherError)?;
    let mut stdout = io::stdout();
    stdout
        .write_all(json.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
        .map_err(|_| ExitCode::OtherError)
}
