//! Placeholder substitution for scaffolded files.
//!
//! Templates are plain, buildable files rather than a templating language: each
//! one carries literal placeholder text (`art-canvas`, `NAME=art-canvas`, the
//! fingerprint `0x7f6ba5038cf6243c`, ...) that gets swapped for the project's
//! values. Rules are keyed by exact file name and replace only the first
//! occurrence of each literal. A literal that is absent leaves the file as is.

use crate::config::ScaffoldConfig;

/// Placeholder project name used throughout the templates.
pub const PLACEHOLDER_NAME: &str = "art-canvas";

/// Placeholder `<title>` in `index.html`.
pub const PLACEHOLDER_TITLE: &str = "art-canvas-title";

/// Module path the shaders `index.html` fetches before substitution.
pub const PLACEHOLDER_WASM: &str = "zig-out/bin/webgl.wasm";

/// Package name placeholder in `build.zig.zon`.
pub const PLACEHOLDER_ZON_NAME: &str = ".art_canvas_name";

/// Fingerprint placeholder in `build.zig.zon`.
pub const PLACEHOLDER_FINGERPRINT: &str = "0x7f6ba5038cf6243c";

/// Apply the rules for `file_name` to `data`.
///
/// Rules for one file run in order, each on the output of the previous one.
/// Files without rules are returned unchanged.
pub fn substitute(cfg: &ScaffoldConfig, file_name: &str, data: &[u8]) -> Vec<u8> {
    let rules: Vec<(&str, String)> = match file_name {
        "Makefile" => vec![
            ("NAME=art-canvas", format!("NAME={}", cfg.dir)),
            ("HOSTNAME=localhost", format!("HOSTNAME={}", cfg.hostname)),
            (
                "SERVER_PATH=~/public_html",
                format!("SERVER_PATH={}", cfg.server_path),
            ),
        ],
        "README.md" | "build.zig" | "script.js" => vec![(PLACEHOLDER_NAME, cfg.dir.clone())],
        "index.html" => vec![
            (PLACEHOLDER_TITLE, cfg.title.clone()),
            (PLACEHOLDER_WASM, format!("zig-out/bin/{}.wasm", cfg.dir)),
        ],
        "build.zig.zon" => match &cfg.fingerprint {
            Some(fp) => vec![
                (PLACEHOLDER_ZON_NAME, fp.name.clone()),
                (PLACEHOLDER_FINGERPRINT, fp.fingerprint.clone()),
            ],
            None => {
                tracing::warn!("no fingerprint acquired, build.zig.zon left as-is");
                vec![]
            }
        },
        _ => vec![],
    };

    rules
        .iter()
        .fold(data.to_vec(), |acc, (old, new)| {
            replace_once(&acc, old.as_bytes(), new.as_bytes())
        })
}

/// Replace the first occurrence of `old` in `data` with `new`.
pub fn replace_once(data: &[u8], old: &[u8], new: &[u8]) -> Vec<u8> {
    if old.is_empty() {
        return data.to_vec();
    }

    match data.windows(old.len()).position(|window| window == old) {
        Some(start) => {
            let mut out = Vec::with_capacity(data.len() - old.len() + new.len());
            out.extend_from_slice(&data[..start]);
            out.extend_from_slice(new);
            out.extend_from_slice(&data[start + old.len()..]);
            out
        }
        None => data.to_vec(),
    }
}
