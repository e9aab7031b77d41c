//! Command-line entry: rewrites a TeX file in place, keeping the original as
//! a timestamped backup next to it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use texflat::{MacroSpec, default_specs, process};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Apply the tracked changes in a TeX document and strip their markup",
    long_about = "Rewrites the document in place; the original is kept as <path>.<unixtime>.bak.\n\n\
        With no SPEC arguments the tracked-change macros of the easyReview and changes\n\
        LaTeX packages are flattened while applying the stated changes."
)]
struct Cli {
    /// TeX file to rewrite in place
    path: PathBuf,

    /// Macro specifications as name:action[:index]; action is d (delete) or
    /// p (preserve), index picks the argument content to keep (zero indexed)
    #[arg(value_name = "SPEC")]
    specs: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let specs = if cli.specs.is_empty() {
        default_specs()
    } else {
        cli.specs
            .iter()
            .map(|token| MacroSpec::parse(token))
            .collect::<Result<Vec<_>, _>>()?
    };

    let document = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    let rewritten = process(&document, &specs)?;

    replace_with_backup(&cli.path, &rewritten)
}

/// Renames the original to `<path>.<unixtime>.bak`, then writes the new
/// text to the original path. A failed write puts the backup back before
/// reporting, so the original is never lost.
fn replace_with_backup(path: &Path, text: &str) -> Result<()> {
    let backup = backup_path(path)?;
    fs::rename(path, &backup).with_context(|| {
        format!(
            "failed to rename {} to {}",
            path.display(),
            backup.display()
        )
    })?;

    if let Err(write_err) = fs::write(path, text) {
        if let Err(restore_err) = fs::rename(&backup, path) {
            return Err(write_err).with_context(|| {
                format!(
                    "failed to write {}; restoring {} also failed: {restore_err}",
                    path.display(),
                    backup.display()
                )
            });
        }
        return Err(write_err)
            .with_context(|| format!("failed to write {}, original restored", path.display()));
    }

    Ok(())
}

fn backup_path(path: &Path) -> Result<PathBuf> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?
        .as_secs();
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{stamp}.bak"));
    Ok(PathBuf::from(name))
}
