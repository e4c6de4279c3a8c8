//! Project directory creation.
//!
//! ## Directory layout
//!
//! ```text
//! <dir>/
//! ├── Makefile          # NAME / HOSTNAME / SERVER_PATH filled in
//! ├── README.md
//! ├── build.zig
//! ├── build.zig.zon     # name + fingerprint from `zig init`
//! ├── index.html
//! ├── favicon.ico       # empty
//! └── src/
//! ```
//!
//! Every path is resolved against an explicit base directory; the process
//! working directory is never changed. A failure halfway through leaves the
//! partially written directory on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ScaffoldConfig;
use crate::error::{ArtInitError, Result};
use crate::templates::embedded::Variant;
use crate::templates::store::{TemplateStore, SRC_DIR};
use crate::templates::substitute::substitute;

/// Empty file created after all templates are written.
pub const SENTINEL_FILE: &str = "favicon.ico";

/// What a successful run wrote.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    /// The created project directory.
    pub directory: PathBuf,
    pub variant: Variant,
    /// Written files relative to `directory`, in write order.
    pub files: Vec<PathBuf>,
}

/// Fail with [`ArtInitError::AlreadyExists`] if `path` is taken.
///
/// Dangling symlinks count as taken.
pub fn ensure_absent(path: &Path) -> Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Err(ArtInitError::AlreadyExists(path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Create `<base>/<cfg.dir>` and fill it from the selected variant.
pub fn scaffold(cfg: &ScaffoldConfig, base: &Path) -> Result<ScaffoldReport> {
    let target = base.join(&cfg.dir);
    ensure_absent(&target)?;

    let src = target.join(SRC_DIR);
    std::fs::create_dir_all(&src).map_err(|e| ArtInitError::Write {
        path: src.clone(),
        source: e,
    })?;

    let store = TemplateStore::new(cfg.variant);
    tracing::info!(
        "scaffolding {} from the {} template",
        target.display(),
        store.variant().name()
    );

    let mut files = Vec::new();

    for file in store.entries() {
        let data = substitute(cfg, file.file_name(), file.contents);
        write_file(&target, file.relative_path, &data)?;
        files.push(file.relative_path.to_path_buf());
    }

    write_file(&target, Path::new(SENTINEL_FILE), &[])?;
    files.push(PathBuf::from(SENTINEL_FILE));

    Ok(ScaffoldReport {
        directory: target,
        variant: cfg.variant,
        files,
    })
}

fn write_file(target: &Path, relative: &Path, data: &[u8]) -> Result<()> {
    let path = target.join(relative);
    tracing::debug!("writing {} ({} bytes)", path.display(), data.len());
    std::fs::write(&path, data).map_err(|e| ArtInitError::Write { path, source: e })
}
