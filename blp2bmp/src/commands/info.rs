//! BLP2 header dump

use super::{Outcome, for_each_file, open_source};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use wow_blp2::parse_header;

pub fn execute(files: &[PathBuf]) -> Result<()> {
    for_each_file(files, show_header)
}

fn show_header(file: &Path) -> Result<Outcome> {
    let source = open_source(file)?;
    let header = parse_header(&source)
        .with_context(|| format!("Failed to parse BLP2 header: {}", file.display()))?;

    println!("{}:", file.display());
    print!("{header}");
    Ok(Outcome::Done)
}
