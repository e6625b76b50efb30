//! # GenomeForge - K-mer Assembly Pipeline
//!
//! A small genome assembly library built around k-mer composition,
//! de Bruijn graph construction, and Eulerian-path-style string
//! reconstruction. Given a DNA sequence, the pipeline slices it into
//! overlapping k-mers, maps each k-mer to a directed edge between its
//! (k-1)-length prefix and suffix, and stitches the unique source-to-sink
//! path back into the original sequence.
//!
//! The library assumes the input decomposes cleanly into a single simple
//! path: exactly one node with no incoming edge, exactly one with no
//! outgoing edge, and balanced degree everywhere in between. Anything
//! else (cycles, branches, disconnected components) is a caller-visible
//! error, never a guessed partial answer.

pub mod assembly;
pub mod core;
pub mod pipeline;

// Re-export commonly used types at crate level
pub use crate::assembly::{build_de_bruijn, kmer_composition, reconstruct};
pub use crate::core::data_structures::{AssemblyError, DeBruijnGraph};
pub use crate::pipeline::{AssemblyPipeline, PipelineConfig, PipelineSummary};

/// Result type used throughout the crate
pub type Result<T> = anyhow::Result<T>;

/// Error type used throughout the crate
pub type Error = anyhow::Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_result_type() -> Result<()> {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(anyhow::anyhow!("test error"));

        assert!(success.is_ok());
        assert_eq!(success?, 42);

        assert!(error.is_err());
        assert!(error.unwrap_err().to_string().contains("test error"));
        Ok(())
    }

    #[test]
    fn test_module_exports() {
        // Core operations are reachable from the crate root
        let kmers = kmer_composition("ATGCGT", 3);
        assert_eq!(kmers.len(), 4);

        let graph = build_de_bruijn(&kmers).expect("valid k-mers");
        assert_eq!(graph.edge_count(), 4);

        let sequence = reconstruct(&graph.edges()).expect("single path");
        assert_eq!(sequence, "ATGCGT");
    }
}
