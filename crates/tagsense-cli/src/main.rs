use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tagsense_complete::{classify, complete, quote_complete, tag_complete, Candidate, Context};
use tagsense_lexer::Scanner;
use tagsense_parser::Document;
use tagsense_vocab::{ConfigError, Configuration};
use thiserror::Error;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Cursor marker recognized with `--cursor-marker`.
const MARKER: char = '|';

#[derive(Parser)]
#[command(name = "tagsense")]
#[command(about = "tagsense: HTML completion engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a file as JSON
    Tokens {
        /// Input HTML file
        path: PathBuf,
    },

    /// Print completion candidates at a cursor position
    Complete {
        #[command(flatten)]
        cursor: CursorArgs,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the document with this candidate applied instead
        #[arg(long, value_name = "LABEL")]
        apply: Option<String>,
    },

    /// Print the closing text to insert after `>` or `</`
    TagComplete {
        #[command(flatten)]
        cursor: CursorArgs,

        /// JSON configuration file (for quote insertion after `=`)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CursorArgs {
    /// Input HTML file
    path: PathBuf,

    /// Cursor offset in characters
    #[arg(long)]
    offset: Option<usize>,

    /// Take the cursor from the first `|` in the file (the marker is removed)
    #[arg(long)]
    cursor_marker: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no cursor: pass --offset or --cursor-marker")]
    NoCursor,

    #[error("no `|` cursor marker in {}", .0.display())]
    NoMarker(PathBuf),

    #[error("no candidate labelled `{0}`")]
    NoCandidate(String),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Completions {
    context: Context,
    items: Vec<Candidate>,
}

#[derive(Serialize)]
struct PairInsertions {
    tag: Option<String>,
    quote: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Tokens { path } => cmd_tokens(&path),
        Command::Complete {
            cursor,
            config,
            apply,
        } => cmd_complete(&cursor, config.as_deref(), apply.as_deref()),
        Command::TagComplete { cursor, config } => cmd_tag_complete(&cursor, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the file named by `args` and resolve the cursor offset.
fn read_with_cursor(args: &CursorArgs) -> Result<(String, usize), CliError> {
    let source = read_source(&args.path)?;
    if args.cursor_marker {
        let offset = source
            .chars()
            .position(|c| c == MARKER)
            .ok_or_else(|| CliError::NoMarker(args.path.clone()))?;
        return Ok((source.replacen(MARKER, "", 1), offset));
    }
    let offset = args.offset.ok_or(CliError::NoCursor)?;
    Ok((source, offset))
}

fn load_config(path: Option<&Path>) -> Result<Configuration, CliError> {
    match path {
        Some(path) => Ok(Configuration::load(path)?),
        None => Ok(Configuration::default()),
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_tokens(path: &Path) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tokens = Scanner::tokenize(&source);
    debug!(count = tokens.len(), "scanned");
    print_json(&tokens)
}

fn cmd_complete(
    cursor: &CursorArgs,
    config: Option<&Path>,
    apply: Option<&str>,
) -> Result<(), CliError> {
    let (text, offset) = read_with_cursor(cursor)?;
    let config = load_config(config)?;
    let document = Document::parse(&text);
    let items = complete(&text, offset, &document, &config);

    if let Some(label) = apply {
        let item = items
            .iter()
            .find(|c| c.label == label)
            .ok_or_else(|| CliError::NoCandidate(label.to_string()))?;
        print!("{}", item.edit.apply(&text));
        return Ok(());
    }

    let context = classify(&Scanner::tokenize(&text), offset);
    print_json(&Completions { context, items })
}

fn cmd_tag_complete(cursor: &CursorArgs, config: Option<&Path>) -> Result<(), CliError> {
    let (text, offset) = read_with_cursor(cursor)?;
    let config = load_config(config)?;
    let document = Document::parse(&text);
    print_json(&PairInsertions {
        tag: tag_complete(&text, offset, &document),
        quote: quote_complete(&text, offset, &document, &config),
    })
}
