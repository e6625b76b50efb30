//! Path reconstruction
//!
//! Walks an edge list describing a single simple path from its unique
//! head (a source that is never a target) to its unique tail (a target
//! that is never a source), stitching the overlapping node strings back
//! into the original sequence. Consecutive nodes overlap in all but one
//! symbol, so each step past the head contributes exactly one character.

use ahash::{AHashMap, AHashSet};
use anyhow::Result;
use tracing::debug;

use crate::core::data_structures::AssemblyError;

/// Reconstruct the sequence spelled by a single-path edge list.
///
/// Head and tail are found by set difference: `heads = sources − targets`,
/// `tails = targets − sources`. Both must contain exactly one node. The
/// walk then starts from the full head string and appends the final
/// character of each successive node until the tail is reached.
///
/// A duplicated identical (source, target) pair is tolerated and collapses
/// to one edge, matching the graph builder's set semantics.
///
/// # Errors
///
/// - [`AssemblyError::EmptyInput`] if `edges` is empty.
/// - [`AssemblyError::InvalidLength`] if any node string is empty or the
///   nodes disagree on length.
/// - [`AssemblyError::AmbiguousPath`] if the edges do not form a single
///   simple path: a node with two different successors (branching), zero
///   or multiple head/tail candidates (cyclic or disconnected), a walk
///   that revisits nodes (side cycle), or edges the head-to-tail walk
///   never consumes.
pub fn reconstruct(edges: &[(String, String)]) -> Result<String> {
    if edges.is_empty() {
        return Err(AssemblyError::EmptyInput("no edges to reconstruct from".to_string()).into());
    }

    let node_len = edges[0].0.len();
    if node_len == 0 {
        return Err(AssemblyError::InvalidLength("empty node string".to_string()).into());
    }
    if let Some((from, to)) = edges
        .iter()
        .find(|(from, to)| from.len() != node_len || to.len() != node_len)
    {
        return Err(AssemblyError::InvalidLength(format!(
            "inconsistent node lengths: expected {node_len}, found edge ({from}, {to})"
        ))
        .into());
    }

    // Single-path assumption: at most one outgoing edge per node.
    let mut outgoing: AHashMap<&str, &str> = AHashMap::new();
    let mut distinct_edges: AHashSet<(&str, &str)> = AHashSet::new();
    for (from, to) in edges {
        distinct_edges.insert((from.as_str(), to.as_str()));
        if let Some(previous) = outgoing.insert(from.as_str(), to.as_str()) {
            if previous != to {
                return Err(AssemblyError::AmbiguousPath(format!(
                    "branching at node {from}: successors {previous} and {to}"
                ))
                .into());
            }
        }
    }

    let sources: AHashSet<&str> = outgoing.keys().copied().collect();
    let targets: AHashSet<&str> = outgoing.values().copied().collect();

    let heads: Vec<&str> = sources.difference(&targets).copied().collect();
    if heads.len() != 1 {
        return Err(AssemblyError::AmbiguousPath(format!(
            "expected exactly one node without an incoming edge, found {}",
            heads.len()
        ))
        .into());
    }
    let tails: Vec<&str> = targets.difference(&sources).copied().collect();
    if tails.len() != 1 {
        return Err(AssemblyError::AmbiguousPath(format!(
            "expected exactly one node without an outgoing edge, found {}",
            tails.len()
        ))
        .into());
    }
    let (head, tail) = (heads[0], tails[0]);

    let mut reconstructed = String::with_capacity(node_len + distinct_edges.len());
    reconstructed.push_str(head);
    let mut current = head;
    let mut steps = 0usize;
    while current != tail {
        current = outgoing.get(current).copied().ok_or_else(|| {
            AssemblyError::AmbiguousPath(format!("path breaks at node {current}"))
        })?;
        steps += 1;
        if steps > distinct_edges.len() {
            return Err(AssemblyError::AmbiguousPath(
                "walk exceeds edge count without reaching the tail (cycle)".to_string(),
            )
            .into());
        }
        // Nodes are non-empty (checked above); each step adds the one
        // non-overlapping character.
        if let Some(symbol) = current.chars().last() {
            reconstructed.push(symbol);
        }
    }

    if steps != distinct_edges.len() {
        return Err(AssemblyError::AmbiguousPath(format!(
            "{} of {} edges unreachable from the head",
            distinct_edges.len() - steps,
            distinct_edges.len()
        ))
        .into());
    }

    debug!(
        edges = distinct_edges.len(),
        length = reconstructed.len(),
        "reconstructed sequence"
    );
    Ok(reconstructed)
}
