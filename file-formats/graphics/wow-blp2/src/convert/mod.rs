//! Mip level orchestration: header, per-level decode and bitmap output
//!
//! A header failure aborts the whole conversion. Everything after that is
//! isolated per level, so one corrupt or unsupported level does not prevent
//! the others from being written.

mod level;

pub use level::{decode_blocks, decode_level};

use crate::canvas::Canvas;
use crate::encode::BmpImage;
use crate::error::{Error, LevelError, Result};
use crate::parser::{ParseResult, parse_header};
use crate::path::output_path;
use crate::pixel::PixelLayout;
use crate::source::BlpSource;
use crate::types::{BlpHeader, MipEntry};
use log::{error, info, trace, warn};
use std::path::{Path, PathBuf};

/// Which mip levels to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MipSelection {
    /// Level 0 only
    #[default]
    BaseOnly,
    /// Every populated level of the directory
    All,
}

/// Conversion settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Levels to convert
    pub mips: MipSelection,
    /// Output pixel layout
    pub layout: PixelLayout,
    /// Directory for output bitmaps, beside the input when `None`
    pub output_dir: Option<PathBuf>,
}

/// A level that was written successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedLevel {
    /// Mip level
    pub level: usize,
    /// Bitmap width
    pub width: u32,
    /// Bitmap height
    pub height: u32,
    /// Bitmap file
    pub path: PathBuf,
}

/// Outcome of converting every selected level
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Levels written, in level order
    pub converted: Vec<ConvertedLevel>,
    /// Levels skipped or failed, in level order
    pub failures: Vec<LevelError>,
}

impl ConversionReport {
    /// True when a level failed for a reason other than its format
    /// (output I/O, memory)
    pub fn has_environment_failures(&self) -> bool {
        self.failures.iter().any(|f| !f.error.is_format())
    }
}

/// Converts the mip levels of one in-memory BLP2 texture
#[derive(Debug)]
pub struct Converter<'a> {
    header: BlpHeader,
    input: &'a [u8],
    options: ConvertOptions,
}

impl<'a> Converter<'a> {
    /// Parse the header of `input`. Fails on bad magic or a short header.
    pub fn new(input: &'a [u8], options: ConvertOptions) -> ParseResult<Self> {
        let header = parse_header(input)?;
        Ok(Self {
            header,
            input,
            options,
        })
    }

    /// Parsed header
    pub fn header(&self) -> &BlpHeader {
        &self.header
    }

    /// Directory entries selected by the options
    pub fn selected_levels(&self) -> Vec<MipEntry> {
        let mut entries = self.header.mip_entries();
        if self.options.mips == MipSelection::BaseOnly {
            entries.truncate(1);
        }
        entries
    }

    /// Decode the selected levels lazily, in level order. Each canvas is
    /// produced only when the iterator is advanced.
    pub fn levels(&self) -> impl Iterator<Item = (MipEntry, Result<Canvas>)> + '_ {
        self.selected_levels()
            .into_iter()
            .map(move |entry| (entry, self.decode_entry(&entry)))
    }

    /// Decode the selected levels without writing anything
    pub fn decode(&self) -> Vec<(MipEntry, Result<Canvas>)> {
        let levels = self.selected_levels();
        trace!(
            "Decoding {} of {} mip levels",
            levels.len(),
            self.header.mip_entries().len()
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            levels
                .par_iter()
                .map(|entry| (*entry, self.decode_entry(entry)))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            levels
                .iter()
                .map(|entry| (*entry, self.decode_entry(entry)))
                .collect()
        }
    }

    /// Decode the selected levels and write one bitmap per level. `input_path`
    /// is the name the outputs are derived from.
    ///
    /// Without the `parallel` feature each level is decoded, written and
    /// released before the next one is decoded.
    pub fn convert(&self, input_path: &Path) -> ConversionReport {
        let mut report = ConversionReport::default();

        #[cfg(feature = "parallel")]
        let levels = self.decode().into_iter();
        #[cfg(not(feature = "parallel"))]
        let levels = self.levels();

        for (entry, decoded) in levels {
            let written = decoded.and_then(|canvas| self.write_level(input_path, &canvas));
            self.record(&mut report, input_path, entry, written);
        }
        report
    }

    fn decode_entry(&self, entry: &MipEntry) -> Result<Canvas> {
        decode_level(&self.header, self.input, entry, self.options.layout)
    }

    fn record(
        &self,
        report: &mut ConversionReport,
        input_path: &Path,
        entry: MipEntry,
        written: Result<PathBuf>,
    ) {
        match written {
            Ok(path) => {
                let (width, height) = self.header.mipmap_size(entry.level);
                info!("Wrote mipmap {} to {}", entry.level, path.display());
                report.converted.push(ConvertedLevel {
                    level: entry.level,
                    width,
                    height,
                    path,
                });
            }
            Err(error) => {
                if error.is_skip() {
                    warn!(
                        "{}: skipping mipmap {}: {error}",
                        input_path.display(),
                        entry.level
                    );
                } else {
                    error!(
                        "{}: mipmap {} failed: {error}",
                        input_path.display(),
                        entry.level
                    );
                }
                report.failures.push(LevelError {
                    level: entry.level,
                    error,
                });
            }
        }
    }

    fn write_level(&self, input_path: &Path, canvas: &Canvas) -> Result<PathBuf> {
        let path = output_path(
            input_path,
            self.options.output_dir.as_deref(),
            canvas.width(),
            canvas.height(),
        )
        .ok_or_else(|| Error::InvalidFilename(input_path.to_owned()))?;
        BmpImage::from_canvas(canvas)?.save(&path)?;
        Ok(path)
    }
}

/// Map a BLP2 file and convert the selected levels. Errors returned here are
/// fatal for the file; per-level failures are in the report.
pub fn convert_file<P: AsRef<Path>>(path: P, options: ConvertOptions) -> Result<ConversionReport> {
    let path = path.as_ref();
    let source = BlpSource::open(path)?;
    let converter = Converter::new(&source, options)?;
    Ok(converter.convert(path))
}
