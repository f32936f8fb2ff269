//! depcompare - dependency comparison library
//!
//! This library compares the `dependencies` declared in two `package.json`
//! manifests:
//! - Version compatibility judgment for exact, caret and tilde specifiers
//! - Classification into matches, mismatches and packages unique to one side
//! - Markdown report rendering and writing

pub mod cli;
pub mod compare;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
