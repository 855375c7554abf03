use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_tokenizer_config::Config;
use markdown_tokenizer_engine::{
    OutputFormat, TokenizerOptions, UnmatchedDelimiters, io, render, tokenize_with,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Markdown,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "markdown-tokenizer")]
#[command(about = "Tokenize a Markdown document and print the token tree")]
struct Args {
    /// Markdown file to read, or `-` for stdin. Defaults to the configured input path
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Turn unmatched emphasis openers back into literal text
    #[arg(long)]
    literal_delimiters: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Settings after merging command-line flags over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    input: PathBuf,
    format: OutputFormat,
    pretty: bool,
    options: TokenizerOptions,
}

impl Settings {
    fn resolve(args: &Args, config: Config) -> Self {
        let options = if args.literal_delimiters {
            TokenizerOptions::default().with_unmatched_delimiters(UnmatchedDelimiters::Literal)
        } else {
            config.tokenizer_options()
        };
        Self {
            input: args.input.clone().unwrap_or(config.input_path),
            format: args.format.map_or(config.format, OutputFormat::from),
            pretty: args.pretty || config.pretty,
            options,
        }
    }
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        return io::read_from(std::io::stdin().lock()).context("Failed to read stdin");
    }
    io::read_document(input).with_context(|| format!("Failed to read '{}'", input.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("Failed to load config file '{}'", config_path.display()))?
        .unwrap_or_default();
    log::debug!("Config: {config:?}");

    let settings = Settings::resolve(&args, config);
    log::info!("Reading {}", settings.input.display());

    let content = read_input(&settings.input)?;
    let tokens = tokenize_with(&content, &settings.options);
    log::info!("Produced {} top-level token(s)", tokens.len());

    let output = render::render(&tokens, settings.format, settings.pretty)?;
    if settings.format == OutputFormat::Json {
        println!("{output}");
    } else {
        print!("{output}");
    }
    Ok(())
}
