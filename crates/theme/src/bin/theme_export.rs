use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use meltcd_theme::TailwindConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the console Tailwind configuration", long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Js)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long, conflicts_with = "check")]
    out: Option<PathBuf>,

    /// Fail if this file differs from the rendered config
    #[arg(long)]
    check: Option<PathBuf>,

    /// Content globs to scan (defaults to the console sources)
    #[arg(long = "content")]
    content: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// `tailwind.config.js` module
    Js,
    /// Bare JSON
    Json,
}

fn main() -> Result<()> {
    // stdout carries the rendered config
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let config = if args.content.is_empty() {
        TailwindConfig::default()
    } else {
        TailwindConfig::with_content(args.content.iter().map(String::as_str))
    };

    let rendered = match args.format {
        Format::Js => config.to_module(),
        Format::Json => config.to_json().map(|json| json + "\n"),
    }
    .context("Failed to render tailwind config")?;

    if let Some(path) = args.check {
        let on_disk = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if on_disk != rendered {
            bail!(
                "{} is out of date, regenerate it with `theme-export --out {}`",
                path.display(),
                path.display()
            );
        }
        info!(path = %path.display(), "Tailwind config is up to date");
        return Ok(());
    }

    match args.out {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote tailwind config");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
