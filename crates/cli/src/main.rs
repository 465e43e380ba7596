mod echo;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use digest_core::{
    ConfigLoaderBuilder, GeneratedArticle, NavigationStyle, OutputFormat, Publication, RestructureConfig,
    RestructureConfigBuilder, read_file, read_stdin,
};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Format(OutputFormat);

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self(OutputFormat::Html)),
            "json" => Ok(Self(OutputFormat::Json)),
            "summary" => Ok(Self(OutputFormat::Summary)),
            _ => Err(format!("Invalid format: {}. Valid options: html, json, summary", s)),
        }
    }
}

/// Restructure a generated weekly digest into a navigable publication
#[derive(Parser, Debug)]
#[command(name = "digest")]
#[command(author = "Digest Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Restructure generated weekly digests", long_about = None)]
struct Args {
    /// Local HTML file, or "-" for stdin (default: stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Settings file (default: <config dir>/digest/digest.conf)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (html, json, summary)
    #[arg(short, long, default_value = "html", value_name = "FORMAT")]
    format: Format,

    /// Do not insert the navigation block
    #[arg(long)]
    no_toc: bool,

    /// Navigation layout (list, paragraph)
    #[arg(long, value_name = "STYLE")]
    style: Option<NavigationStyle>,

    /// Heading text of the navigation block
    #[arg(long, value_name = "TITLE")]
    navigation_title: Option<String>,

    /// Keep items in their original order instead of grouping by source
    #[arg(long)]
    no_split: bool,

    /// Reorder sections by the configured priority
    #[arg(long)]
    reorder: bool,

    /// Drop matching section headings that precede the first item
    #[arg(long)]
    strip_sections: bool,

    /// Section heading substring to drop (repeatable)
    #[arg(long = "strip-title", value_name = "TEXT")]
    strip_titles: Vec<String>,

    /// Channel name whose links count as official (repeatable)
    #[arg(long = "official", value_name = "ORIGIN")]
    official: Vec<String>,

    /// Input is a raw generator response with a summary marker
    #[arg(long)]
    raw: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layer command-line flags over the loaded configuration
    fn apply_overrides(&self, config: RestructureConfig) -> RestructureConfig {
        let mut builder = RestructureConfigBuilder::from_config(config);

        if self.no_toc {
            builder = builder.enable_toc(false);
        }
        if let Some(style) = self.style {
            builder = builder.navigation_style(style);
        }
        if let Some(title) = &self.navigation_title {
            builder = builder.navigation_title(title.as_str());
        }
        if self.no_split {
            builder = builder.enable_section_split(false);
        }
        if self.reorder {
            builder = builder.enable_section_reorder(true);
        }
        if self.strip_sections {
            builder = builder.strip_original_sections(true);
        }
        if !self.strip_titles.is_empty() {
            builder = builder.strip_titles(self.strip_titles.iter().map(String::as_str));
        }
        if !self.official.is_empty() {
            builder = builder.official_origins(self.official.iter().map(String::as_str));
        }

        builder.build()
    }

    fn reads_stdin(&self) -> bool {
        matches!(self.input.as_deref(), None | Some("-"))
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,digest_core=debug,digest=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Keep a stage duration for the timing summary and log it
fn record_stage(timings: &mut Vec<(String, Duration)>, label: &str, elapsed: Duration) {
    debug!(stage = label, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "stage finished");
    timings.push((label.to_string(), elapsed));
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            echo::print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let started = Instant::now();
    let mut timings: Vec<(String, Duration)> = Vec::new();

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let stage = Instant::now();
    let input = if args.reads_stdin() {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        read_stdin().context("Failed to read from stdin")?
    } else {
        let path = args.input.as_deref().unwrap_or_default();
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", path.bright_white()));
        }
        read_file(path).with_context(|| format!("Failed to read file: {}", path))?
    };
    record_stage(&mut timings, "Read", stage.elapsed());

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(input.len()).bright_white());
        eprintln!();
        echo::print_step(2, 4, "Loading settings");
    }

    let stage = Instant::now();
    let mut loader = ConfigLoaderBuilder::new();
    if let Some(path) = &args.config {
        loader = loader.path(path);
    }
    let loader = loader.build();
    match loader.resolve_path() {
        Ok(Some(path)) => {
            debug!(path = %path.display(), "resolved settings file");
            if args.verbose {
                eprintln!("  {} {}\n", "Settings:".dimmed(), path.display().bright_white());
            }
        }
        Ok(None) => {
            debug!("no settings file, using defaults");
            if args.verbose {
                eprintln!("  {} {}\n", "Settings:".dimmed(), "defaults".bright_white());
            }
        }
        Err(_) => {}
    }
    let config = args.apply_overrides(loader.load().context("Failed to load settings")?);
    record_stage(&mut timings, "Settings", stage.elapsed());

    if args.verbose {
        echo::print_step(3, 4, "Restructuring digest");
    }

    let stage = Instant::now();
    let generated = if args.raw {
        GeneratedArticle::from_response(&input)
    } else {
        GeneratedArticle { html: input, summary: String::new() }
    };
    let publication = Publication::from_generated(&generated, &config);
    record_stage(&mut timings, "Restructure", stage.elapsed());

    if publication.block_count == 0 {
        echo::print_warning("No item headings found; document left unchanged");
    }
    if args.format.0 == OutputFormat::Summary && !generated.has_summary() {
        echo::print_warning("Input carries no summary; pass --raw for generator responses");
    }
    if args.verbose {
        echo::print_restructure_details(&publication);
    }

    let output = publication.to_format(args.format.0).context("Failed to render output")?;

    if args.verbose {
        echo::print_step(4, 4, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format.0).bright_white());
        eprintln!();
    }

    match &args.output {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    if args.verbose {
        echo::print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}
