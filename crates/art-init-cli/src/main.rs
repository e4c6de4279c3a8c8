//! art-init CLI — scaffold a Zig + WebAssembly ART canvas project.
//!
//! `art-init [OPTIONS] DIRECTORY` creates `DIRECTORY` from an embedded
//! template, fills in the project name, title and deploy target, and mints a
//! package fingerprint with `zig init`.

mod commands;
mod output;

use std::time::Duration;

use clap::Parser;

use art_init_core::config::{
    ScaffoldOptions, DEFAULT_HOSTNAME, DEFAULT_INIT_TIMEOUT, DEFAULT_SERVER_PATH, DEFAULT_ZIG,
};

#[derive(Parser, Debug)]
#[command(
    name = "art-init",
    about = "Scaffold a new Zig + WebAssembly ART canvas project",
    version
)]
struct Cli {
    /// Directory to create (also the project name)
    #[arg(value_name = "DIRECTORY")]
    directory: Option<String>,

    /// The title of the ART project (default: DIRECTORY)
    #[arg(long)]
    title: Option<String>,

    /// The hostname to deploy the ART canvas to
    #[arg(long, env = "ART_HOSTNAME", default_value = DEFAULT_HOSTNAME)]
    hostname: String,

    /// The path on the server ART should be uploaded to
    #[arg(long, env = "ART_SERVER_PATH", default_value = DEFAULT_SERVER_PATH)]
    server_path: String,

    /// Use the WebGL shaders template
    #[arg(long)]
    shaders: bool,

    /// Zig binary used to mint the package fingerprint
    #[arg(long, env = "ART_ZIG", default_value = DEFAULT_ZIG)]
    zig: String,

    /// Seconds to wait for `zig init` before giving up
    #[arg(
        long,
        env = "ART_INIT_TIMEOUT",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        default_value_t = DEFAULT_INIT_TIMEOUT.as_secs()
    )]
    init_timeout: u64,

    /// Print the list of created files as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            directory: self.directory.clone(),
            title: self.title.clone().unwrap_or_default(),
            hostname: self.hostname.clone(),
            server_path: self.server_path.clone(),
            shaders: self.shaders,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::init::run(
        cli.options(),
        &cli.zig,
        Duration::from_secs(cli.init_timeout),
        cli.json,
    )
    .await
}
