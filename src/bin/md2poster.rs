//! CLI binary for edgequake-md2poster.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `PosterConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_md2poster::{
    convert, convert_to_file, default_pdf_path, export_pdf, inspect, DocumentOutline,
    PosterConfig, PosterStats, Theme,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const AFTER_HELP: &str = r##"EXAMPLES:
  # Generate output/poster.html
  md2poster poster.md

  # Custom output path, self-contained HTML
  md2poster poster.md -o dist/poster.html --embed-images

  # Also print a PDF next to the HTML (dist/poster.pdf)
  md2poster poster.md -o dist/poster.html --pdf

  # Larger poster with a custom theme
  md2poster poster.md --theme a0-theme.json

  # Show the column/section structure only
  md2poster --inspect-only poster.md

  # Pipe HTML somewhere else
  md2poster poster.md --stdout > poster.html

SOURCE FORMAT:
  ---                     front matter: title, authors, logo
  ## Any text             starts a new column (text not shown)
  ### Section title       starts a new section box
  - item / * item         bullets; indent 2 spaces per level
  ![alt](fig.png)         image; bare file names resolve to ../assets/
  **bold** *italic* [text](url)

THEME FILES:
  A JSON object overriding any subset of the theme fields, e.g.
    { "poster_width": "46.8in", "poster_height": "33.1in",
      "primary_color": "#004b87" }

ENVIRONMENT VARIABLES:
  MD2POSTER_BROWSER          Browser executable used for --pdf
  PLAYWRIGHT_BROWSERS_PATH   Playwright browser cache to search for Chromium
  RUST_LOG                   Log filter (overrides -v / -q)
"##;

/// Convert structured Markdown into a print-ready HTML poster.
#[derive(Parser, Debug)]
#[command(
    name = "md2poster",
    version,
    about = "Convert structured Markdown into a print-ready HTML poster",
    long_about = "Convert a Markdown document with front matter into a fixed-layout, \
three-column HTML poster sized for printing, and optionally print it to PDF with a \
headless Chromium-family browser.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown source file.
    input: PathBuf,

    /// Output HTML file (parent directories are created).
    #[arg(short, long, env = "MD2POSTER_OUTPUT", default_value = "output/poster.html")]
    output: PathBuf,

    /// Directory prepended to bare image file names.
    #[arg(long, env = "MD2POSTER_ASSETS_DIR", default_value = "../assets")]
    assets_dir: String,

    /// Leading spaces per list nesting level.
    #[arg(long, env = "MD2POSTER_INDENT_WIDTH", default_value_t = 2,
          value_parser = clap::value_parser!(u64).range(1..=16))]
    indent_width: u64,

    /// JSON file overriding theme fields (sizes, colours, spacing).
    #[arg(long, env = "MD2POSTER_THEME")]
    theme: Option<PathBuf>,

    /// Poster title, replacing the front-matter `title`.
    #[arg(long, env = "MD2POSTER_TITLE")]
    title: Option<String>,

    /// Inline local images as base64 data: URIs.
    #[arg(long, env = "MD2POSTER_EMBED_IMAGES")]
    embed_images: bool,

    /// Also print a PDF (default path: the output with a .pdf extension).
    #[arg(long, value_name = "PATH", num_args = 0..=1, conflicts_with = "stdout")]
    pdf: Option<Option<PathBuf>>,

    /// Browser executable for --pdf (otherwise discovered automatically).
    #[arg(long, env = "MD2POSTER_BROWSER")]
    browser: Option<PathBuf>,

    /// Seconds to wait for the browser to print the PDF.
    #[arg(long, env = "MD2POSTER_PDF_TIMEOUT", default_value_t = 120)]
    pdf_timeout: u64,

    /// Print the document structure only, no rendering.
    #[arg(long)]
    inspect_only: bool,

    /// Print machine-readable JSON (stats or outline) on stdout.
    #[arg(long, env = "MD2POSTER_JSON")]
    json: bool,

    /// Write the HTML to stdout instead of a file.
    #[arg(long)]
    stdout: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2POSTER_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2POSTER_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || cli.json {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let outline = inspect(&cli.input).context("Failed to inspect document")?;
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&outline).context("Failed to serialise outline")?
            );
        } else {
            print_outline(&cli.input, &outline);
        }
        return Ok(());
    }

    let config = build_config(&cli)?;

    // ── HTML to stdout ───────────────────────────────────────────────────
    if cli.stdout {
        let output = convert(&cli.input, &config).context("Conversion failed")?;
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.html.as_bytes())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    // ── HTML to file ─────────────────────────────────────────────────────
    let stats = convert_to_file(&cli.input, &cli.output, &config).context("Conversion failed")?;

    if !cli.quiet && !cli.json {
        println!("{} Generated {}", green("✓"), cli.output.display());
        eprintln!("   {}", dim(&summary(&stats)));
    }

    // ── Optional PDF ─────────────────────────────────────────────────────
    let pdf_written = match &cli.pdf {
        Some(target) => {
            let pdf_path = target
                .clone()
                .unwrap_or_else(|| default_pdf_path(&cli.output));
            Some(print_pdf(&cli, &config, &pdf_path).await?)
        }
        None => None,
    };

    if cli.json {
        let report = serde_json::json!({
            "output": cli.output,
            "pdf": pdf_written,
            "stats": stats,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise stats")?
        );
    }

    Ok(())
}

/// Map CLI args to `PosterConfig`.
fn build_config(cli: &Cli) -> Result<PosterConfig> {
    let theme = match &cli.theme {
        Some(path) => Theme::from_json_file(path).context("Failed to load theme")?,
        None => Theme::default(),
    };

    let mut builder = PosterConfig::builder()
        .theme(theme)
        .assets_dir(cli.assets_dir.clone())
        .list_indent_width(cli.indent_width as usize)
        .embed_images(cli.embed_images)
        .pdf_timeout_secs(cli.pdf_timeout);

    if let Some(ref title) = cli.title {
        builder = builder.title_override(title.clone());
    }
    if let Some(ref browser) = cli.browser {
        builder = builder.browser_path(browser.clone());
    }

    builder.build().context("Invalid configuration")
}

/// Print the HTML file to PDF behind a spinner.
async fn print_pdf(cli: &Cli, config: &PosterConfig, pdf_path: &Path) -> Result<PathBuf> {
    let spinner = if cli.quiet || cli.json {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  {elapsed}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
        );
        bar.set_prefix("PDF");
        bar.set_message(format!("printing {}…", pdf_path.display()));
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    };

    let result = export_pdf(&cli.output, pdf_path, config).await;
    spinner.finish_and_clear();
    let written = result.context("PDF export failed")?;

    if !cli.quiet && !cli.json {
        println!("{} Generated {}", green("✓"), written.display());
    }
    Ok(written)
}

fn summary(stats: &PosterStats) -> String {
    let mut line = format!(
        "{} columns, {} sections ({} figures, {} lists, {} paragraphs)",
        stats.columns, stats.sections, stats.graphs, stats.lists, stats.paragraphs
    );
    if stats.empty_columns > 0 {
        line.push_str(&format!(", {} empty columns", stats.empty_columns));
    }
    if stats.embedded_images > 0 {
        line.push_str(&format!(", {} images embedded", stats.embedded_images));
    }
    line.push_str(&format!("  {}ms", stats.duration_ms));
    line
}

fn print_outline(input: &Path, outline: &DocumentOutline) {
    println!("File:         {}", input.display());
    for (key, value) in outline.front_matter.iter() {
        println!("{:<13} {}", format!("{key}:"), value.replace('\n', " / "));
    }
    println!(
        "Columns:      {}  ({} sections)",
        outline.columns.len(),
        outline.section_count()
    );
    for column in &outline.columns {
        println!("{}", bold(&column.label));
        if column.sections.is_empty() {
            println!("  {}", dim("(empty)"));
        }
        for section in &column.sections {
            println!(
                "  {} {}  {}",
                cyan("◆"),
                section.title.as_deref().unwrap_or("(untitled)"),
                dim(&format!("{} lines", section.lines))
            );
        }
    }
}
