//! blp2bmp library
//!
//! Command-line surface of the BLP2 to BMP converter.

pub mod cli;
pub mod commands;
