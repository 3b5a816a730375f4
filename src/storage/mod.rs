use std::fs::File;
use std::path::Path;

pub mod write_ppm;
pub mod write_svg;

/// Creates `filepath`, making any missing parent directories first.
fn create_file(filepath: &Path) -> std::io::Result<File> {
    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    File::create(filepath)
}
