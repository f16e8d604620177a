//! Command implementations

pub mod convert;
pub mod info;

use anyhow::{Context, Result};
use std::path::Path;
use wow_blp2::BlpSource;

/// Map an input file, naming it in the error
pub(crate) fn open_source(file: &Path) -> Result<BlpSource> {
    BlpSource::open(file).with_context(|| format!("Failed to open BLP file: {}", file.display()))
}

/// Result of a command on one file whose own diagnostics were already emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Done,
    Failed,
}

/// Run `command` for every file and fail at the end if any file failed. An
/// error is printed once, as it happens; `Outcome::Failed` counts the file
/// without printing anything more.
pub(crate) fn for_each_file<F>(files: &[impl AsRef<Path>], mut command: F) -> Result<()>
where
    F: FnMut(&Path) -> Result<Outcome>,
{
    let mut failed = 0;
    for file in files {
        match command(file.as_ref()) {
            Ok(Outcome::Done) => {}
            Ok(Outcome::Failed) => failed += 1,
            Err(e) => {
                eprintln!("✗ {e:#}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} files failed", files.len());
    }
    Ok(())
}
