use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linemark_config::Config;
use linemark_engine::{convert, io};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

mod preview;

#[derive(Parser)]
#[command(name = "linemark", version, about = "Convert line-oriented markdown to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a markdown file (or stdin) to an HTML fragment
    Convert {
        /// Input file; reads stdin when omitted or `-`
        input: Option<PathBuf>,
        /// Output file; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Edit a document with a live HTML preview
    Preview {
        /// Document to edit; defaults to `draft_path` from the config file
        path: Option<PathBuf>,
    },
    /// Change the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the document `linemark preview` opens by default
    SetDraft { path: PathBuf },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        Command::Convert { input, output } => run_convert(
            input.as_deref(),
            output.as_deref(),
            std::io::stdin().lock(),
            std::io::stdout().lock(),
        ),
        Command::Preview { path } => {
            let config = Config::load()
                .with_context(|| {
                    format!("Failed to load config file at {}", Config::path().display())
                })?
                .unwrap_or_default();
            preview::run(path.or(config.draft_path), config.preview)
        }
        Command::Config {
            action: ConfigAction::SetDraft { path },
        } => {
            let config_path = Config::path();
            set_draft(&config_path, &path)?;
            println!("draft_path set in {}", config_path.display());
            Ok(())
        }
    }
}

/// Converts `input` (stdin when absent or `-`) into `output` (stdout when absent).
fn run_convert(
    input: Option<&Path>,
    output: Option<&Path>,
    mut stdin: impl Read,
    mut stdout: impl Write,
) -> Result<()> {
    let input = input.filter(|path| *path != Path::new("-"));

    if let (Some(source), Some(target)) = (input, output) {
        return io::convert_file(source, target).with_context(|| {
            format!("Failed to convert {} to {}", source.display(), target.display())
        });
    }

    let markdown = match input {
        Some(path) => io::read_source(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let html = convert(&markdown);

    match output {
        Some(path) => {
            io::write_file(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Stores `draft` as the default preview document, keeping the other settings.
fn set_draft(config_path: &Path, draft: &Path) -> Result<()> {
    let mut config = Config::load_from(config_path)?.unwrap_or_default();
    config.draft_path = Some(
        std::path::absolute(draft)
            .with_context(|| format!("Failed to resolve {}", draft.display()))?,
    );
    config.save_to(config_path)?;
    log::info!("draft_path set to {}", draft.display());
    Ok(())
}
