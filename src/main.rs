use anyhow::Result;
use clap::Parser;
use mistake_mentor::app::{App, RunOptions};
use mistake_mentor::models::{Mode, OutputLanguage};
use mistake_mentor::speech;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "mistake-mentor")]
#[command(about = "Analyze mistakes in text, code, or screenshots")]
struct CliArgs {
    /// Text or code to analyze. May be omitted when --image is given.
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Image to analyze: a file path or a data: URI.
    #[arg(long, value_name = "PATH_OR_DATA_URI")]
    image: Option<String>,

    /// Language the report is written in.
    #[arg(long, default_value = "english", value_parser = parse_language)]
    language: OutputLanguage,

    /// Analysis mode.
    #[arg(long, default_value = "general", value_parser = parse_mode)]
    mode: Mode,

    /// Also write the markdown report to a file.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print a speech-friendly plain-text rendition instead of markdown.
    #[arg(long)]
    plain: bool,
}

fn parse_mode(input: &str) -> std::result::Result<Mode, String> {
    Mode::from_str(input)
        .map_err(|_| format!("Invalid mode '{}'. Expected 'general' or 'code'", input))
}

fn parse_language(input: &str) -> std::result::Result<OutputLanguage, String> {
    OutputLanguage::from_str(input).map_err(|_| {
        let known = OutputLanguage::ALL.map(|lang| lang.as_str()).join(", ");
        format!("Invalid language '{}'. Expected one of: {}", input, known)
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mistake_mentor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mistake-mentor");

    let args = CliArgs::parse();
    let options = RunOptions {
        text: args.text,
        image: args.image,
        language: args.language,
        mode: args.mode,
        output: args.output,
    };

    match App::new() {
        Ok(app) => match app.run(&options).await {
            Ok(report) => {
                if args.plain {
                    println!("{}", speech::strip_markdown(&report));
                } else {
                    println!("{}", report);
                }
                Ok(())
            }
            Err(e) => {
                error!("Analysis failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
