//! # vseprostavby
//!
//! Prerenders the VŠE PRO STAVBY.CZ landing page to static HTML.
//!
//! ```bash
//! vseprostavby render --out dist/index.html
//! vseprostavby content --pretty
//! vseprostavby css --out dist/site.css
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use vseprostavby_page::RenderOptions;

use config::SiteConfig;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "vseprostavby")]
#[command(about = "Static prerender for the VŠE PRO STAVBY.CZ landing page")]
#[command(version)]
struct Args {
    /// Config file (default: ./vseprostavby.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to a static HTML document
    Render {
        /// Output file, `-` for stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Pin the footer year instead of reading the clock
        #[arg(long)]
        year: Option<i32>,

        /// Leave out the inline mobile menu script
        #[arg(long)]
        no_script: bool,
    },
    /// Print the page content (nav links, services, references, contact) as JSON
    Content {
        /// Pretty-print
        #[arg(long)]
        pretty: bool,
    },
    /// Write the stylesheet
    Css {
        /// Output file, `-` for stdout
        #[arg(short, long, default_value = "-")]
        out: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> SiteConfig {
    match path {
        Some(path) => {
            if !path.exists() {
                warn!("Config {} not found, using defaults", path.display());
            }
            SiteConfig::load_from_path(path)
        }
        None => SiteConfig::load(&std::env::current_dir().unwrap_or_default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level.into())),
        )
        .init();

    let config = load_config(args.config.as_ref());
    debug!(?config, "configuration loaded");

    match args.command {
        Command::Render {
            out,
            year,
            no_script,
        } => {
            let options = RenderOptions {
                year: year.or(config.year),
                inline_script: config.inline_script && !no_script,
                ..Default::default()
            };
            let out = out.unwrap_or(config.output);
            commands::render(&options, &out)
        }
        Command::Content { pretty } => commands::content(pretty),
        Command::Css { out } => commands::css(&out),
    }
}
