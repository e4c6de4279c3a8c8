//! Package name and fingerprint acquisition via `zig init`.
//!
//! Zig refuses to build a package whose `build.zig.zon` fingerprint was not
//! minted for it, so the scaffolded manifest cannot ship a fixed value. Instead
//! `zig init` is run in a throwaway directory named after the project, and the
//! `.name` and `.fingerprint` fields are lifted out of the manifest it writes.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::process::Command;

use crate::error::{ArtInitError, Result};
use crate::templates::store::MANIFEST_FILE;

const NAME_PREFIX: &str = ".name = ";
const FINGERPRINT_PREFIX: &str = ".fingerprint = ";

/// The `(name, fingerprint)` pair from a freshly initialized Zig package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    /// Enum-literal package name, e.g. `.myart`.
    pub name: String,
    /// Hex literal, e.g. `0x9a3c5e2f1b7d4e60`.
    pub fingerprint: String,
}

/// Fields found in a manifest; either may be missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestFields {
    pub name: Option<String>,
    pub fingerprint: Option<String>,
}

/// Something that can produce a [`Fingerprint`] for a project name.
#[async_trait]
pub trait FingerprintSource: Send + Sync {
    async fn acquire(&self, dir: &str) -> Result<Fingerprint>;
}

/// Runs `<binary> init` in a temporary directory.
#[derive(Debug, Clone)]
pub struct ZigInit {
    binary: String,
    timeout: Duration,
}

impl ZigInit {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    fn missing_tool(&self) -> ArtInitError {
        ArtInitError::MissingTool {
            name: self.binary.clone(),
            install: "https://ziglang.org/download/".into(),
        }
    }
}

#[async_trait]
impl FingerprintSource for ZigInit {
    async fn acquire(&self, dir: &str) -> Result<Fingerprint> {
        let binary = which::which(&self.binary).map_err(|_| self.missing_tool())?;

        let name = package_dir_name(dir)?;

        // Removed on drop, on every return path.
        let tmp = tempfile::Builder::new().prefix("art-init-").tempdir()?;
        let work_dir = tmp.path().join(name);
        tokio::fs::create_dir(&work_dir).await?;

        tracing::info!("running `{} init` in {}", self.binary, work_dir.display());

        let mut cmd = Command::new(&binary);
        cmd.arg("init")
            .current_dir(&work_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(self.missing_tool())
            }
            Ok(Err(e)) => {
                return Err(ArtInitError::ExternalTool {
                    tool: self.binary.clone(),
                    message: e.to_string(),
                })
            }
            Err(_) => {
                return Err(ArtInitError::Timeout {
                    tool: self.binary.clone(),
                    timeout: self.timeout,
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ArtInitError::ExternalTool {
                tool: self.binary.clone(),
                message: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    stderr
                },
            });
        }

        let fingerprint = read_manifest(&work_dir.join(MANIFEST_FILE))?;
        tracing::debug!(
            "acquired name {} and fingerprint {}",
            fingerprint.name,
            fingerprint.fingerprint
        );

        if let Err(e) = tmp.close() {
            tracing::warn!("could not remove temporary directory: {e}");
        }

        Ok(fingerprint)
    }
}

/// Last component of the target directory; names the scratch package.
///
/// The scratch directory always stays inside the temporary root, whatever
/// shape the target path has (`/abs/myart`, `a/b`, `../x`).
fn package_dir_name(dir: &str) -> Result<&OsStr> {
    Path::new(dir).file_name().ok_or(ArtInitError::NoName)
}

/// Scan manifest text for the `.name` and `.fingerprint` fields.
///
/// Lines are trimmed before matching. The name keeps everything after the
/// prefix minus one trailing comma; the fingerprint stops at the first comma,
/// dropping any trailing comment. Unrelated lines are ignored.
///
/// The first occurrence of each field wins, so a nested `.name` can never
/// replace the top-level one. Earlier versions of this tool let the last
/// occurrence win; generated manifests hold each field once, so the two
/// agree on real `zig init` output.
pub fn parse_manifest(text: &str) -> ManifestFields {
    let mut fields = ManifestFields::default();

    for line in text.lines().map(str::trim) {
        if fields.name.is_none() {
            if let Some(rest) = line.strip_prefix(NAME_PREFIX) {
                let name = rest.strip_suffix(',').unwrap_or(rest).trim();
                if !name.is_empty() {
                    fields.name = Some(name.to_string());
                }
            }
        }

        if fields.fingerprint.is_none() {
            if let Some(rest) = line.strip_prefix(FINGERPRINT_PREFIX) {
                let fingerprint = rest.split(',').next().unwrap_or_default().trim();
                if !fingerprint.is_empty() {
                    fields.fingerprint = Some(fingerprint.to_string());
                }
            }
        }
    }

    fields
}

/// Read a manifest from disk and require both fields.
pub fn read_manifest(path: &Path) -> Result<Fingerprint> {
    let text = std::fs::read_to_string(path).map_err(|e| ArtInitError::ManifestNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;

    let fields = parse_manifest(&text);

    let name = fields.name.ok_or_else(|| ArtInitError::ManifestField {
        path: path.to_path_buf(),
        field: "name",
    })?;
    let fingerprint = fields.fingerprint.ok_or_else(|| ArtInitError::ManifestField {
        path: path.to_path_buf(),
        field: "fingerprint",
    })?;

    Ok(Fingerprint { name, fingerprint })
}
