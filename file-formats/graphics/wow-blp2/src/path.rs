use std::path::{Path, PathBuf};

/// Output bitmap path for one mip level: the input name with its extension
/// replaced by `_<width>x<height>.bmp`. Placed in `output_dir` when given,
/// otherwise beside the input. Returns `None` when the input has no file name.
pub fn output_path(
    input: &Path,
    output_dir: Option<&Path>,
    width: u32,
    height: u32,
) -> Option<PathBuf> {
    let stem = input.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(format!("_{width}x{height}.bmp"));

    let dir = match output_dir {
        Some(dir) => dir.to_owned(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Some(dir.join(name))
}
