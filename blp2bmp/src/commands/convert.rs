//! BLP2 to BMP conversion

use super::{Outcome, for_each_file, open_source};
use crate::cli::ConvertArgs;
use anyhow::{Context, Result};
use std::path::Path;
use wow_blp2::{ConvertOptions, Converter};

pub fn execute(args: ConvertArgs) -> Result<()> {
    let options = args.options();
    log::info!(
        "Converting {} file(s), mipmaps: {:?}, layout: {:?}",
        args.files.len(),
        options.mips,
        options.layout
    );
    for_each_file(&args.files, |file| {
        convert_blp(file, &options, args.info)
    })
}

fn convert_blp(file: &Path, options: &ConvertOptions, show_info: bool) -> Result<Outcome> {
    let source = open_source(file)?;
    let converter = Converter::new(&source, options.clone())
        .with_context(|| format!("Failed to parse BLP2 header: {}", file.display()))?;

    if show_info {
        print!("{}", converter.header());
    }

    let report = converter.convert(file);
    for level in &report.converted {
        println!(
            "✓ Wrote {} ({}x{})",
            level.path.display(),
            level.width,
            level.height
        );
    }

    if report.converted.is_empty() && report.failures.is_empty() {
        log::warn!("{}: no mipmap levels present", file.display());
    }

    // every failed level was logged by the converter, naming the file
    if report.has_environment_failures() {
        return Ok(Outcome::Failed);
    }
    Ok(Outcome::Done)
}
