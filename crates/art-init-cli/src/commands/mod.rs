//! CLI command implementations for art-init.

pub mod init;
