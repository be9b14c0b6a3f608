use std::io;
use std::path::{Path, PathBuf};

const OUTPUT_DIR_NAME: &str = "aqicast/country_data";

/// Default location for per-country output files, under the platform's
/// local data directory.
pub fn get_output_dir() -> io::Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine local data directory",
            )
        })
        .map(|p| p.join(OUTPUT_DIR_NAME))
}

pub fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("output path exists but is not a directory: {}", path.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => std::fs::create_dir_all(path),
        Err(e) => Err(e),
    }
}
