// SPDX-License-Identifier: MIT

//! Source loading for the agent summary ("llm.txt") page.
//!
//! The summary is a static asset: the embedded copy ships inside the
//! binary, and `--asset` can point at a file on disk instead. The load
//! happens once; a failed read substitutes a fixed placeholder and the
//! page proceeds — no retry, no error state.

use crate::blocks::{parse_blocks, ContentBlock};
use std::path::Path;

/// The copy of the summary compiled into the binary.
pub const EMBEDDED_SUMMARY: &str = include_str!("../assets/llm.txt");

/// Shown verbatim when an asset override cannot be read.
pub const LOAD_FAILURE_PLACEHOLDER: &str = "Failed to load llm.txt";

/// The raw summary text plus its parsed blocks.
#[derive(Debug, Clone)]
pub struct AgentSummary {
    pub raw: String,
    pub blocks: Vec<ContentBlock>,
}

impl AgentSummary {
    fn from_raw(raw: String) -> AgentSummary {
        let blocks = parse_blocks(&raw);
        AgentSummary { raw, blocks }
    }

    /// The embedded summary asset.
    pub fn embedded() -> AgentSummary {
        AgentSummary::from_raw(EMBEDDED_SUMMARY.to_string())
    }

    /// A summary read from `path`, or the placeholder when the read
    /// fails. The placeholder still goes through the parser, so the
    /// page renders it as a single paragraph.
    pub fn from_file(path: &Path) -> AgentSummary {
        let raw = std::fs::read_to_string(path)
            .unwrap_or_else(|_| LOAD_FAILURE_PLACEHOLDER.to_string());
        AgentSummary::from_raw(raw)
    }

    /// Embedded asset unless an override path was given.
    pub fn load(override_path: Option<&Path>) -> AgentSummary {
        match override_path {
            Some(path) => AgentSummary::from_file(path),
            None => AgentSummary::embedded(),
        }
    }
}
