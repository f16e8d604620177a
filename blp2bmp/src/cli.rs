//! Root CLI structure for blp2bmp

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use wow_blp2::{ConvertOptions, MipSelection, PixelLayout};

#[derive(Parser)]
#[command(name = "blp2bmp")]
#[command(about = "Convert World of Warcraft BLP2 textures to BMP", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Log level requested on the command line, if any. `-v` wins over `-q`;
    /// without either, `RUST_LOG` or the default filter applies.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match (self.verbose, self.quiet) {
            (0, false) => None,
            (0, true) => Some(LevelFilter::Error),
            (1, _) => Some(LevelFilter::Info),
            (2, _) => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert BLP2 files to BMP, one bitmap per mip level
    Convert(ConvertArgs),

    /// Print the header of BLP2 files
    Info {
        /// Paths to the BLP2 files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Paths to the BLP2 files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print the header before converting
    #[arg(short, long)]
    pub info: bool,

    /// Convert every mip level instead of only the base level
    #[arg(short, long)]
    pub all: bool,

    /// Pixel layout of the output bitmaps
    #[arg(long, value_enum, default_value = "rgb565")]
    pub pixel_format: PixelFormat,

    /// Directory for output bitmaps (default: beside each input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PixelFormat {
    /// Raw 5:6:5 color with 8-bit alpha in bits 16-23
    Rgb565,
    /// 8 bits per channel, alpha in the top byte
    Argb8888,
}

impl From<PixelFormat> for PixelLayout {
    fn from(value: PixelFormat) -> PixelLayout {
        match value {
            PixelFormat::Rgb565 => PixelLayout::RGB565_A8,
            PixelFormat::Argb8888 => PixelLayout::ARGB8888,
        }
    }
}

impl ConvertArgs {
    /// Library options for these arguments
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            mips: if self.all {
                MipSelection::All
            } else {
                MipSelection::BaseOnly
            },
            layout: self.pixel_format.into(),
            output_dir: self.output_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "blp2bmp",
            "convert",
            "-a",
            "--pixel-format",
            "argb8888",
            "-o",
            "out",
            "a.blp",
        ])
        .unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        let options = args.options();
        assert_eq!(options.mips, MipSelection::All);
        assert_eq!(options.layout, PixelLayout::ARGB8888);
        assert_eq!(options.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.files, vec![PathBuf::from("a.blp")]);
    }

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["blp2bmp", "convert", "a.blp"]).unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.options(), ConvertOptions::default());
        assert!(!args.info);
    }

    #[test]
    fn test_log_level_flags() {
        let level = |args: &[&str]| {
            Cli::try_parse_from(["blp2bmp"].iter().chain(args).chain(&["info", "a.blp"]))
                .unwrap()
                .log_level()
        };
        assert_eq!(level(&[]), None);
        assert_eq!(level(&["-q"]), Some(LevelFilter::Error));
        assert_eq!(level(&["-v"]), Some(LevelFilter::Info));
        assert_eq!(level(&["-vv"]), Some(LevelFilter::Debug));
        assert_eq!(level(&["-vvvv"]), Some(LevelFilter::Trace));
        assert_eq!(level(&["-v", "-q"]), Some(LevelFilter::Info));
    }
}
