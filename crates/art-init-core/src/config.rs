//! Run configuration: raw option values and the resolved [`ScaffoldConfig`].
//!
//! [`ScaffoldOptions`] mirrors what the user typed. [`ScaffoldConfig::from_options`]
//! applies the defaults (title falls back to the directory name, the shaders
//! variant deploys into a `shaders/` sub-path) and is built exactly once per run.

use std::time::Duration;

use crate::error::{ArtInitError, Result};
use crate::fingerprint::Fingerprint;
use crate::templates::embedded::Variant;

/// Host the generated `Makefile` deploys to unless overridden.
pub const DEFAULT_HOSTNAME: &str = "art.c7.se";

/// Remote directory the generated `Makefile` deploys to unless overridden.
pub const DEFAULT_SERVER_PATH: &str = "/var/www/art.c7.se";

/// Segment appended to the server path when the shaders variant is selected.
pub const SHADERS_SUBPATH: &str = "shaders";

/// Binary invoked to mint the package name and fingerprint.
pub const DEFAULT_ZIG: &str = "zig";

/// Upper bound on how long `zig init` may run.
pub const DEFAULT_INIT_TIMEOUT: Duration = Duration::from_secs(120);

/// Option values as they arrive from the command line.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Target directory name (the single positional argument).
    pub directory: Option<String>,
    /// Page title; empty means "use the directory name".
    pub title: String,
    pub hostname: String,
    pub server_path: String,
    /// Use the WebGL shaders template instead of the 2D canvas one.
    pub shaders: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            directory: None,
            title: String::new(),
            hostname: DEFAULT_HOSTNAME.into(),
            server_path: DEFAULT_SERVER_PATH.into(),
            shaders: false,
        }
    }
}

/// Fully resolved configuration for one scaffolding run.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Name of the directory to create; also the project name.
    pub dir: String,
    pub title: String,
    pub hostname: String,
    /// Deploy path, already suffixed with `shaders` for that variant.
    pub server_path: String,
    pub variant: Variant,
    /// Name/fingerprint pair from `zig init`, once acquired.
    pub fingerprint: Option<Fingerprint>,
}

impl ScaffoldConfig {
    /// Resolve raw options into a configuration.
    ///
    /// Fails with [`ArtInitError::NoName`] when no (or an empty) directory
    /// name was given. Touches nothing on disk.
    pub fn from_options(options: ScaffoldOptions) -> Result<Self> {
        let dir = match options.directory {
            Some(dir) if !dir.is_empty() => dir,
            _ => return Err(ArtInitError::NoName),
        };

        let title = if options.title.is_empty() {
            dir.clone()
        } else {
            options.title
        };

        let (variant, server_path) = if options.shaders {
            (
                Variant::Shaders,
                join_remote_path(&options.server_path, SHADERS_SUBPATH),
            )
        } else {
            (Variant::Content, options.server_path)
        };

        Ok(Self {
            dir,
            title,
            hostname: options.hostname,
            server_path,
            variant,
            fingerprint: None,
        })
    }

    /// Attach the name/fingerprint pair obtained from `zig init`.
    pub fn with_fingerprint(mut self, fingerprint: Fingerprint) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }
}

/// Append `segment` to a remote path without doubling the separator.
fn join_remote_path(base: &str, segment: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    match (trimmed.is_empty(), base.starts_with('/')) {
        (true, true) => format!("/{segment}"),
        (true, false) => segment.to_string(),
        _ => format!("{trimmed}/{segment}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(dir: &str) -> ScaffoldOptions {
        ScaffoldOptions {
            directory: Some(dir.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = ScaffoldConfig::from_options(options("myart")).unwrap();
        assert_eq!(cfg.dir, "myart");
        assert_eq!(cfg.title, "myart");
        assert_eq!(cfg.hostname, "art.c7.se");
        assert_eq!(cfg.server_path, "/var/www/art.c7.se");
        assert_eq!(cfg.variant, Variant::Content);
        assert!(cfg.fingerprint.is_none());
    }

    #[test]
    fn test_explicit_title_is_kept() {
        let mut opts = options("myart");
        opts.title = "My Art".into();
        let cfg = ScaffoldConfig::from_options(opts).unwrap();
        assert_eq!(cfg.title, "My Art");
    }

    #[test]
    fn test_shaders_suffixes_server_path() {
        let mut opts = options("myart");
        opts.shaders = true;
        let cfg = ScaffoldConfig::from_options(opts).unwrap();
        assert_eq!(cfg.variant, Variant::Shaders);
        assert_eq!(cfg.server_path, "/var/www/art.c7.se/shaders");
    }

    #[test]
    fn test_shaders_suffix_with_custom_path() {
        let mut opts = options("myart");
        opts.shaders = true;
        opts.server_path = "~/public_html/".into();
        let cfg = ScaffoldConfig::from_options(opts).unwrap();
        assert_eq!(cfg.server_path, "~/public_html/shaders");
    }

    #[test]
    fn test_missing_directory() {
        let err = ScaffoldConfig::from_options(ScaffoldOptions::default()).unwrap_err();
        assert!(matches!(err, ArtInitError::NoName));
    }

    #[test]
    fn test_empty_directory() {
        let err = ScaffoldConfig::from_options(options("")).unwrap_err();
        assert!(matches!(err, ArtInitError::NoName));
    }

    #[test]
    fn test_join_remote_path() {
        assert_eq!(join_remote_path("/srv", "shaders"), "/srv/shaders");
        assert_eq!(join_remote_path("/", "shaders"), "/shaders");
        assert_eq!(join_remote_path("", "shaders"), "shaders");
    }
}
