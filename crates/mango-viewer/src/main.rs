//! Mango surface viewer
//!
//! Samples the mango surface, colours it by normalized height and shows it
//! as an interactive Plotly surface.
//!
//! # Usage
//!
//! ```bash
//! # Open the figure in the default browser
//! mango-viewer
//!
//! # Write the figure to a file instead
//! mango-viewer mango.html
//!
//! # Override title, camera, lighting or colours from JSON
//! mango-viewer --config look.json mango.html
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};
use mango_geometry::{MangoSurface, ParamGrid};
use mango_render::{plot_surface, BrowserRenderer, HtmlFileRenderer, RenderConfig, Renderer};

fn print_usage() {
    eprintln!(
        r#"Mango surface viewer

USAGE:
    mango-viewer [--config <file.json>] [output.html]

ARGS:
    [output.html]   Write the figure here instead of opening a browser

OPTIONS:
    --config        JSON file overriding the display configuration
    --help          Show this help message

ENVIRONMENT:
    RUST_LOG        Log filter (default: info)
"#
    );
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--config" => {
                let path = iter.next().context("--config requires a file path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown option {}", flag),
            path => {
                if parsed.output.is_some() {
                    anyhow::bail!("unexpected extra argument {}", path);
                }
                parsed.output = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let renderer: Box<dyn Renderer> = match &args.output {
        Some(path) => Box::new(HtmlFileRenderer::new(path)),
        None => Box::new(BrowserRenderer::new().context("creating temporary page")?),
    };

    let summary = plot_surface(
        &MangoSurface::default(),
        &ParamGrid::mango(),
        &config,
        renderer.as_ref(),
    )
    .context("rendering mango surface")?;

    info!("\n{}", summary);
    if let Some(path) = &args.output {
        eprintln!("Open {} in a web browser to view the surface.", path.display());
    }
    Ok(())
}

/// Stderr line for a failed run, with the whole context chain.
fn failure_message(e: &anyhow::Error) -> String {
    format!("Error: {:#}", e)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
