//! Flat view over one embedded variant.

use std::path::Path;

use include_dir::{Dir, DirEntry};

use super::embedded::Variant;

/// Name of the only nested directory that gets scaffolded.
pub const SRC_DIR: &str = "src";

/// Manifest that carries the name/fingerprint placeholders.
pub const MANIFEST_FILE: &str = "build.zig.zon";

/// One file to scaffold, with its path relative to the project root.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub relative_path: &'static Path,
    pub contents: &'static [u8],
}

impl TemplateFile {
    /// Bare file name; substitution rules are keyed on this.
    pub fn file_name(&self) -> &'static str {
        self.relative_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

/// Read-only access to the files of a single [`Variant`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateStore {
    variant: Variant,
}

impl TemplateStore {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Every top-level file followed by every file directly inside `src/`,
    /// each group sorted by name.
    ///
    /// Other directories, and directories nested inside `src/`, are skipped.
    pub fn entries(&self) -> Vec<TemplateFile> {
        let root = self.variant.root();
        let mut files = files_in(root);

        for entry in root.entries() {
            if let DirEntry::Dir(dir) = entry {
                if dir.path() == Path::new(SRC_DIR) {
                    files.extend(files_in(dir));
                } else {
                    tracing::debug!(
                        "skipping template directory {}",
                        dir.path().display()
                    );
                }
            }
        }

        files
    }

    /// Whether this variant ships a `build.zig.zon` that needs a fingerprint.
    pub fn needs_fingerprint(&self) -> bool {
        self.variant.root().get_file(MANIFEST_FILE).is_some()
    }
}

fn files_in(dir: &'static Dir<'static>) -> Vec<TemplateFile> {
    let mut files: Vec<TemplateFile> = dir
        .files()
        .map(|file| TemplateFile {
            relative_path: file.path(),
            contents: file.contents(),
        })
        .collect();
    files.sort_by_key(|file| file.relative_path);
    files
}
