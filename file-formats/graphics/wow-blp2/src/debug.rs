//! Debug formatting helpers for large pixel buffers

use std::fmt;

const FIRST_N_ELEMENTS: usize = 4;

/// Format only the first few elements of a slice followed by the count of
/// the rest, so `{:?}` on a canvas stays readable.
pub fn trimmed_pixels_fmt<T: AsRef<[u32]>>(pixels: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let pixels = pixels.as_ref();
    let shown = &pixels[..pixels.len().min(FIRST_N_ELEMENTS)];
    let rest = pixels.len() - shown.len();

    write!(f, "[")?;
    for (i, pixel) in shown.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{pixel:#010x}")?;
    }
    write!(f, "]")?;
    if rest > 0 {
        write!(f, " + {rest} pixels")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Wrapper(Vec<u32>);

    impl fmt::Debug for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            trimmed_pixels_fmt(&self.0, f)
        }
    }

    #[test]
    fn test_short_buffer_printed_whole() {
        let text = format!("{:?}", Wrapper(vec![1, 0x00ff_f800]));
        assert_eq!(text, "[0x00000001, 0x00fff800]");
    }

    #[test]
    fn test_long_buffer_trimmed() {
        let text = format!("{:?}", Wrapper(vec![0; 16]));
        assert_eq!(
            text,
            "[0x00000000, 0x00000000, 0x00000000, 0x00000000] + 12 pixels"
        );
    }
}
