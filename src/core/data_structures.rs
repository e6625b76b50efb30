//! Core data structures for the assembly pipeline
//!
//! The de Bruijn graph here is deliberately edge-centric and sorted: the
//! adjacency mapping uses ordered collections so that two builds from the
//! same k-mer multiset (in any order) produce byte-identical listings.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Failure modes of the assembly pipeline.
///
/// All variants are caller-visible: the reconstructor never guesses a start
/// node and the builder never silently accepts malformed k-mers. Callers
/// holding an [`anyhow::Error`] can recover the variant with
/// `err.downcast_ref::<AssemblyError>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// A length constraint was violated (k too small for graph
    /// construction, k larger than the sequence, inconsistent k-mer or
    /// node lengths).
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// The edge set does not describe a single simple path: zero or
    /// multiple head/tail candidates, a branching node, a cycle, or
    /// edges unreachable from the head.
    #[error("ambiguous path: {0}")]
    AmbiguousPath(String),

    /// An empty sequence or edge list was passed where a non-empty
    /// result is required.
    #[error("empty input: {0}")]
    EmptyInput(String),
}

/// Check that a sequence contains only unambiguous DNA symbols (A/C/G/T).
pub fn validate_dna(sequence: &str) -> Result<()> {
    if !sequence
        .chars()
        .all(|c| matches!(c, 'A' | 'C' | 'G' | 'T' | 'a' | 'c' | 'g' | 't'))
    {
        return Err(anyhow!("Invalid DNA sequence: {}", sequence));
    }
    Ok(())
}

/// De Bruijn graph over (k-1)-length node strings.
///
/// Each k-mer contributes one directed edge from its prefix (all but the
/// last symbol) to its suffix (all but the first symbol). Target sets are
/// ordered, and repeated identical transitions collapse to a single edge
/// (non-multigraph, matching the upstream composition tooling). The graph
/// is built once by [`crate::assembly::build_de_bruijn`] and not mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeBruijnGraph {
    /// K-mer length the graph was built from; nodes have length `k - 1`.
    pub k: usize,
    /// Source node -> ordered set of target nodes.
    pub adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl DeBruijnGraph {
    /// Number of distinct nodes (sources and targets combined).
    pub fn node_count(&self) -> usize {
        let mut nodes: BTreeSet<&str> = BTreeSet::new();
        for (source, targets) in &self.adjacency {
            nodes.insert(source);
            for target in targets {
                nodes.insert(target);
            }
        }
        nodes.len()
    }

    /// Number of edges after parallel-transition collapse.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Targets reachable in one step from `node`, in sorted order.
    pub fn targets(&self, node: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(node)
    }

    /// Flatten the adjacency mapping into (source, target) pairs,
    /// sorted by source and then by target.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.adjacency
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |target| (source.clone(), target.clone()))
            })
            .collect()
    }

    /// Textual adjacency listing: one `"<node> -> <t1,t2,...>"` line per
    /// source node, targets comma-joined in sorted order, lines sorted by
    /// source node.
    pub fn adjacency_listing(&self) -> Vec<String> {
        self.adjacency
            .iter()
            .map(|(source, targets)| {
                let joined = targets
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{source} -> {joined}")
            })
            .collect()
    }
}
