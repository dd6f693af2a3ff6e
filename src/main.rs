//! Dialog View CLI
//!
//! Usage:
//!   dialog-view [OPTIONS] [CONTENT]
//!
//! Options:
//!   -f, --file <FILE>          Read content from a file
//!   -p, --preset <PRESET>      dialog, modal, confirm or alert
//!   -i, --id <ID>              Dialog id (generated when omitted)
//!   -t, --title <TITLE>        Dialog title
//!   -b, --button-text <TEXT>   Trigger button label
//!   --set <KEY=VALUE>          Extra template variable (repeatable)
//!   --theme-dir <DIR>          Directory with template overrides (repeatable)
//!   -s, --settings <FILE>      Settings file (TOML format)
//!   --log-level <LEVEL>        Log filter, e.g. debug (default: RUST_LOG or warn)
//!   -h, --help                 Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dialog_view::{DialogArgs, Error, Output, Preset, Settings};

#[derive(Parser)]
#[command(name = "dialog-view")]
#[command(about = "Render dialog, modal, confirm and alert markup")]
struct Cli {
    /// Dialog content as HTML (reads from --file or stdin if not provided)
    content: Option<String>,

    /// Read dialog content from a file
    #[arg(short, long, conflicts_with = "content")]
    file: Option<PathBuf>,

    /// Which dialog variant to render
    #[arg(short, long, value_enum, default_value_t = Preset::Dialog)]
    preset: Preset,

    /// Dialog id (generated when omitted)
    #[arg(short, long)]
    id: Option<String>,

    /// Dialog title
    #[arg(short, long)]
    title: Option<String>,

    /// Trigger button label
    #[arg(short, long)]
    button_text: Option<String>,

    /// Extra template variable as KEY=VALUE
    #[arg(long = "set", value_parser = parse_key_value)]
    extra: Vec<(String, String)>,

    /// Directory containing template overrides
    #[arg(long = "theme-dir")]
    theme_dirs: Vec<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Log filter directive
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .ok();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    // Load settings
    let settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let settings = cli
        .theme_dirs
        .iter()
        .fold(settings, |s, dir| s.with_theme_dir(dir.clone()));

    // Read content
    let content = match (&cli.content, &cli.file) {
        (Some(content), _) => content.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) if io::stdin().is_terminal() => {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no content given (pass it as an argument, with --file, or on stdin)",
            )));
        }
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut args = DialogArgs::new();
    if let Some(title) = &cli.title {
        args = args.with_title(title.as_str());
    }
    if let Some(text) = &cli.button_text {
        args = args.with_button_text(text.as_str());
    }
    for (key, value) in &cli.extra {
        args = args.with_extra(key.as_str(), value.as_str());
    }
    let args = args.over(settings.args.clone());

    let mut view = settings.build_view();
    view.render_preset(
        cli.preset,
        content.trim_end(),
        args,
        cli.id.as_deref(),
        Output::Echo,
    );
    println!();
    Ok(())
}
