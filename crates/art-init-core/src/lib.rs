//! Core library for art-init.
//!
//! Scaffolds a Zig + WebAssembly canvas project from one of two embedded
//! template trees: a 2D pixel canvas ([`templates::embedded::Variant::Content`])
//! or a WebGL fragment shader setup ([`templates::embedded::Variant::Shaders`]).
//!
//! A run resolves a [`config::ScaffoldConfig`], obtains a package
//! name/fingerprint pair through a [`fingerprint::FingerprintSource`] (normally
//! `zig init`), then writes the substituted files with [`scaffold::scaffold`].

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod scaffold;
pub mod templates;
