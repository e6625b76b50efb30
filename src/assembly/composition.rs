//! K-mer composition
//!
//! Slices a sequence into all overlapping substrings of fixed length k,
//! in left-to-right order of starting position.

/// Return the ordered k-mer composition of `sequence`.
///
/// Produces all `len - k + 1` contiguous substrings of length `k`, ordered
/// by starting position, duplicates included. Sequences are treated as
/// ASCII nucleotide text and sliced byte-wise.
///
/// Degenerate cases are explicit: `k == 0` or `k > sequence.len()` yields
/// an empty vector rather than an error, so callers can probe a k that may
/// not fit. Layers that require a usable k (graph construction, the
/// pipeline) reject those values up front with
/// [`AssemblyError::InvalidLength`](crate::core::data_structures::AssemblyError).
pub fn kmer_composition(sequence: &str, k: usize) -> Vec<String> {
    if k == 0 || k > sequence.len() {
        return Vec::new();
    }

    sequence
        .as_bytes()
        .windows(k)
        .map(|window| String::from_utf8_lossy(window).into_owned())
        .collect()
}
