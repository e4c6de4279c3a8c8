//! Compile-time embedded template trees.
//!
//! Each variant is a directory under `templates/` at the workspace root, loaded
//! with [`include_dir!`]. The paths are relative to this crate's manifest
//! (`crates/art-init-core/Cargo.toml`).
//!
//! ## Adding a file to a variant
//!
//! 1. Drop the file into `templates/<variant>/` or `templates/<variant>/src/`
//! 2. If it carries a placeholder, add a rule in [`super::substitute`]
//! 3. Run `cargo build` so the new file is picked up
//!
//! ## Warning
//!
//! Only top-level files and files directly inside `src/` are scaffolded.
//! Anything nested deeper is embedded but never written out.

use include_dir::{include_dir, Dir};
use serde::Serialize;

/// The 2D canvas template: Zig writes pixels, `script.js` blits them.
pub static CONTENT: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/../../templates/content");

/// The WebGL template: Zig drives a fragment shader through a thin JS shim.
pub static SHADERS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/../../templates/shaders");

/// Selectable template bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Content,
    Shaders,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Shaders => "shaders",
        }
    }

    /// Root of the embedded tree for this variant.
    pub fn root(&self) -> &'static Dir<'static> {
        match self {
            Self::Content => &CONTENT,
            Self::Shaders => &SHADERS,
        }
    }
}
