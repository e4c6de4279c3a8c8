use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use art_init_core::config::{ScaffoldConfig, ScaffoldOptions};
use art_init_core::fingerprint::{FingerprintSource, ZigInit};
use art_init_core::scaffold::{self, ScaffoldReport};
use art_init_core::templates::store::TemplateStore;

use crate::output;

/// Scaffold a new project into the current directory.
///
/// Resolves the options, mints a package name and fingerprint with
/// `zig init`, and writes the selected template. With `json` set the
/// [`ScaffoldReport`] is printed instead of the human summary.
pub async fn run(options: ScaffoldOptions, zig: &str, timeout: Duration, json: bool) -> Result<()> {
    let cfg = ScaffoldConfig::from_options(options)?;
    let base = std::env::current_dir()?;
    let source = ZigInit::new(zig, timeout);

    if !json {
        output::print_header(&format!("art-init: {}", cfg.dir));
    }

    let report = create(cfg, &base, &source, !json).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

/// Check the target, acquire a fingerprint if the variant needs one, scaffold.
pub async fn create(
    cfg: ScaffoldConfig,
    base: &Path,
    source: &dyn FingerprintSource,
    progress: bool,
) -> Result<ScaffoldReport> {
    // Fail fast before spending time in `zig init`.
    scaffold::ensure_absent(&base.join(&cfg.dir))?;

    let cfg = if TemplateStore::new(cfg.variant).needs_fingerprint() {
        if progress {
            output::print_step(1, 2, "Minting package fingerprint with zig init");
        }
        let fingerprint = source.acquire(&cfg.dir).await?;
        cfg.with_fingerprint(fingerprint)
    } else {
        cfg
    };

    if progress {
        output::print_step(2, 2, &format!("Writing the {} template", cfg.variant.name()));
    }

    Ok(scaffold::scaffold(&cfg, base)?)
}

fn print_summary(report: &ScaffoldReport) {
    output::print_success(&format!(
        "Created {} ({} files)",
        report.directory.display(),
        report.files.len()
    ));
    output::print_key_value("Template", report.variant.name());

    let dir = report
        .directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!();
    println!("  Next steps:");
    println!("    cd {dir}");
    println!("    make run");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use art_init_core::error::ArtInitError;
    use art_init_core::fingerprint::Fingerprint;

    struct Fixed(Fingerprint);

    #[async_trait::async_trait]
    impl FingerprintSource for Fixed {
        async fn acquire(&self, _dir: &str) -> art_init_core::error::Result<Fingerprint> {
            Ok(self.0.clone())
        }
    }

    fn options(dir: &str, shaders: bool) -> ScaffoldOptions {
        ScaffoldOptions {
            directory: Some(dir.into()),
            shaders,
            ..Default::default()
        }
    }

    fn fixed() -> Fixed {
        Fixed(Fingerprint {
            name: ".myart".into(),
            fingerprint: "0xfeedfacefeedface".into(),
        })
    }

    #[tokio::test]
    async fn test_create_shaders() {
        let base = tempfile::tempdir().unwrap();
        let cfg = ScaffoldConfig::from_options(options("myart", true)).unwrap();

        let report = create(cfg, base.path(), &fixed(), false).await.unwrap();
        assert_eq!(report.directory, base.path().join("myart"));

        let zon = std::fs::read_to_string(base.path().join("myart/build.zig.zon")).unwrap();
        assert!(zon.contains(".name = .myart,"));
        assert!(zon.contains("0xfeedfacefeedface"));
    }

    #[tokio::test]
    async fn test_create_existing_skips_fingerprint() {
        struct Unreachable;

        #[async_trait::async_trait]
        impl FingerprintSource for Unreachable {
            async fn acquire(&self, _dir: &str) -> art_init_core::error::Result<Fingerprint> {
                panic!("fingerprint acquired for an existing directory");
            }
        }

        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("myart")).unwrap();
        let cfg = ScaffoldConfig::from_options(options("myart", false)).unwrap();

        let err = create(cfg, base.path(), &Unreachable, false)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ArtInitError>(),
            Some(ArtInitError::AlreadyExists(_))
        ));
    }
}
