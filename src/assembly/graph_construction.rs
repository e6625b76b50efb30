//! De Bruijn graph construction
//!
//! Maps each k-mer to a directed edge between its (k-1)-length prefix and
//! suffix, aggregating edges that share a source node into an ordered
//! target set. K-mers are consumed in sorted lexicographic order so two
//! builds of the same multiset yield identical adjacency listings.

use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::core::data_structures::{AssemblyError, DeBruijnGraph};

/// Build a de Bruijn graph from a collection of k-mers.
///
/// Every k-mer becomes one directed edge from its prefix (all but the last
/// symbol) to its suffix (all but the first symbol). Repeated identical
/// (prefix, suffix) transitions collapse to a single edge: the adjacency
/// values are sets, so the graph undercounts multiplicity relative to the
/// input k-mer list. This mirrors the upstream composition tooling and is
/// intentional, not a bug to fix.
///
/// # Errors
///
/// - [`AssemblyError::EmptyInput`] if `kmers` is empty.
/// - [`AssemblyError::InvalidLength`] if any k-mer is shorter than 2
///   symbols (nodes would be empty) or the k-mers disagree on length.
pub fn build_de_bruijn(kmers: &[String]) -> Result<DeBruijnGraph> {
    if kmers.is_empty() {
        return Err(AssemblyError::EmptyInput("no k-mers to build graph from".to_string()).into());
    }

    let k = kmers[0].len();
    if k < 2 {
        return Err(AssemblyError::InvalidLength(format!(
            "k-mers must have at least 2 symbols, got {k}"
        ))
        .into());
    }
    if let Some(odd) = kmers.iter().find(|kmer| kmer.len() != k) {
        return Err(AssemblyError::InvalidLength(format!(
            "inconsistent k-mer lengths: expected {k}, found {} ({odd})",
            odd.len()
        ))
        .into());
    }

    let mut sorted_kmers: Vec<&str> = kmers.iter().map(String::as_str).collect();
    sorted_kmers.sort_unstable();

    let mut adjacency: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for kmer in sorted_kmers {
        let prefix = &kmer[..k - 1];
        let suffix = &kmer[1..];
        adjacency
            .entry(prefix.to_string())
            .or_default()
            .insert(suffix.to_string());
    }

    let graph = DeBruijnGraph { k, adjacency };
    debug!(
        kmers = kmers.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built de Bruijn graph"
    );
    Ok(graph)
}
