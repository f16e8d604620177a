use wow_blp2::{ConvertOptions, MipSelection, convert_file};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <input.blp> [--all]", args[0]);
        println!("\nExample: Convert a BLP2 texture file to BMP");
        return;
    }

    let blp_filename = &args[1];
    let options = ConvertOptions {
        mips: if args.iter().any(|a| a == "--all") {
            MipSelection::All
        } else {
            MipSelection::BaseOnly
        },
        ..Default::default()
    };

    match convert_file(blp_filename, options) {
        Ok(report) => {
            for level in &report.converted {
                println!(
                    "✓ Saved mipmap {} ({}x{}) as: {}",
                    level.level,
                    level.width,
                    level.height,
                    level.path.display()
                );
            }
            for failure in &report.failures {
                eprintln!("✗ Skipped {failure}");
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to convert BLP file '{blp_filename}': {e}");
            eprintln!("\nTip: Make sure the file exists and is a valid BLP2 texture file.");
        }
    }
}
