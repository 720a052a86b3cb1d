//! Subcommand implementations.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use vseprostavby_page::content::SiteContent;
use vseprostavby_page::styles::SITE_CSS;
use vseprostavby_page::{RenderOptions, render_page};

/// Output path meaning "write to stdout".
const STDOUT: &str = "-";

/// Render the page and write it to `out`.
pub fn render(options: &RenderOptions, out: &Path) -> Result<()> {
    let html = render_page(options);
    write_output(out, &html)?;
    info!(
        "Rendered page ({} bytes, year {}) to {}",
        html.len(),
        options.resolved_year(),
        out.display()
    );
    Ok(())
}

/// Print the compiled-in content as JSON.
pub fn content(pretty: bool) -> Result<()> {
    let json = SiteContent::current()
        .to_json(pretty)
        .context("Failed to serialize site content")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write to stdout")?;
    Ok(())
}

/// Write the stylesheet on its own, for hosting it outside the page.
pub fn css(out: &Path) -> Result<()> {
    write_output(out, SITE_CSS.trim_start())?;
    info!("Wrote stylesheet to {}", out.display());
    Ok(())
}

fn write_output(out: &Path, body: &str) -> Result<()> {
    if out.as_os_str() == STDOUT {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(body.as_bytes())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(out, body).with_context(|| format!("Failed to write {}", out.display()))
}
