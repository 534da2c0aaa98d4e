use clap::Parser;
use feedback_core::ports::{FormRepository, ImageResolver, ReportWriter, SentimentScorer};
use feedback_core::{CoreError, ReportServiceImpl};
use html_adapter::{HtmlReportWriter, DEFAULT_CSS};
use image_adapter::FsImageResolver;
use json_adapter::JsonFormRepository;
use sentiment_adapter::VaderSentimentScorer;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Commandline tool for compiling feedback
#[derive(Parser, Debug)]
#[command(name = "feedback-report", version)]
#[command(about = "Compiles .feedback files into a single HTML report sorted by date and sentiment")]
struct Cli {
    /// Directory where feedback files reside
    #[arg(short = 'f', long = "feedback-dir", required = true)]
    feedback_dir: PathBuf,

    /// Directory where images reside (must contain default.jpg)
    #[arg(short = 'i', long = "image-dir", required = true)]
    image_dir: PathBuf,

    /// Path where the HTML report will be written
    #[arg(short = 'o', long = "output-file", default_value = "index.html")]
    output_file: PathBuf,

    /// Stylesheet to inline into the report instead of the bundled one
    #[arg(short = 'c', long = "css-file")]
    css_file: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Everything the report run needs, resolved from the command line
struct ReportConfig {
    feedback_dir: PathBuf,
    image_dir: PathBuf,
    output_file: PathBuf,
    css: String,
}

impl ReportConfig {
    fn from_cli(cli: &Cli) -> Result<Self, CoreError> {
        let css = match &cli.css_file {
            Some(path) => fs::read_to_string(path)?,
            None => DEFAULT_CSS.to_string(),
        };
        Ok(Self {
            feedback_dir: cli.feedback_dir.clone(),
            image_dir: cli.image_dir.clone(),
            output_file: cli.output_file.clone(),
            css,
        })
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match ReportConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading stylesheet: {}", e);
            std::process::exit(1);
        }
    };

    // Instantiate concrete implementations of secondary adapters
    let form_repository: Box<dyn FormRepository> =
        Box::new(JsonFormRepository::new(config.feedback_dir));
    let image_resolver: Box<dyn ImageResolver> = Box::new(FsImageResolver::new(config.image_dir));
    let sentiment_scorer: Box<dyn SentimentScorer> = Box::new(VaderSentimentScorer::new());
    let report_writer: Box<dyn ReportWriter> =
        Box::new(HtmlReportWriter::new(config.output_file, config.css));

    let service = ReportServiceImpl::new(
        form_repository,
        image_resolver,
        sentiment_scorer,
        report_writer,
    );

    match service.execute_report() {
        Ok(summary) => {
            println!(
                "Completed writing your feedback! {} feedback reports included, {} missing",
                summary.included,
                summary.missing()
            );
        }
        Err(e) => {
            eprintln!("Error during report generation: {}", e);
            std::process::exit(1);
        }
    }
}
