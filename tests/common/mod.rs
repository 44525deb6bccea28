use std::env;
use std::path::PathBuf;

/// Unique scratch path for one test's output image.
pub fn scratch_path(name: &str, ext: &str) -> PathBuf {
    env::temp_dir().join(format!("texgen-{name}-{}.{ext}", std::process::id()))
}
