//! Template system for art-init project scaffolding.
//!
//! Template trees are embedded into the binary at compile-time via
//! [`include_dir!`](include_dir::include_dir) in the [`embedded`] module, listed
//! through [`store::TemplateStore`], and rewritten file by file with
//! [`substitute::substitute`].
//!
//! ## Placeholders
//!
//! Templates are ordinary files that build as they are. Substitution swaps a
//! handful of literal tokens:
//! - `art-canvas` — project name (`README.md`, `build.zig`, `script.js`, `Makefile`)
//! - `art-canvas-title` — page title (`index.html`)
//! - `.art_canvas_name` / `0x7f6ba5038cf6243c` — package name and fingerprint (`build.zig.zon`)
//!
//! **Warning**: the placeholder literals in `templates/` and the rules in
//! [`substitute`] must stay in sync. A renamed placeholder is silently skipped.

pub mod embedded;
pub mod store;
pub mod substitute;
