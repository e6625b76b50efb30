//! End-to-end assembly pipeline
//!
//! Wires the three stages together behind a validated configuration:
//! raw sequence -> k-mer composition -> de Bruijn graph -> reconstructed
//! sequence. Input sequences must be unambiguous DNA; the stages below
//! this layer stay alphabet-agnostic.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assembly::{build_de_bruijn, kmer_composition, reconstruct};
use crate::core::data_structures::{validate_dna, AssemblyError};

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// K-mer size used for composition and graph construction.
    pub k: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { k: 21 }
    }
}

impl PipelineConfig {
    /// Check that `k` is usable for a sequence of `sequence_len` symbols.
    ///
    /// Graph nodes have length `k - 1`, so `k` must be at least 2, and a
    /// composition that is empty because `k` exceeds the sequence length
    /// cannot feed the graph builder.
    pub fn validate(&self, sequence_len: usize) -> Result<()> {
        if self.k < 2 {
            return Err(AssemblyError::InvalidLength(format!(
                "k must be at least 2, got {}",
                self.k
            ))
            .into());
        }
        if self.k > sequence_len {
            return Err(AssemblyError::InvalidLength(format!(
                "k ({}) exceeds sequence length ({sequence_len})",
                self.k
            ))
            .into());
        }
        Ok(())
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub kmer_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub reconstructed: String,
}

/// Composition -> de Bruijn graph -> reconstruction, end to end.
pub struct AssemblyPipeline {
    config: PipelineConfig,
}

impl AssemblyPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over `sequence` and return the reconstructed
    /// string with graph statistics.
    ///
    /// The round trip returns the input exactly when the sequence has no
    /// repeated (k-1)-mers; repeats make the graph branch or collapse
    /// edges, which surfaces as [`AssemblyError::AmbiguousPath`].
    pub fn run(&self, sequence: &str) -> Result<PipelineSummary> {
        self.check_input(sequence)?;

        let kmers = kmer_composition(sequence, self.config.k);
        let graph = build_de_bruijn(&kmers)?;
        let reconstructed = reconstruct(&graph.edges())?;

        info!(
            k = self.config.k,
            kmers = kmers.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "assembly pipeline complete"
        );

        Ok(PipelineSummary {
            kmer_count: kmers.len(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            reconstructed,
        })
    }

    /// Produce the textual adjacency listing for `sequence`, one
    /// `"<node> -> <targets>"` line per source node, for the writer
    /// collaborator to persist.
    pub fn edge_listing(&self, sequence: &str) -> Result<Vec<String>> {
        self.check_input(sequence)?;

        let kmers = kmer_composition(sequence, self.config.k);
        let graph = build_de_bruijn(&kmers)?;
        Ok(graph.adjacency_listing())
    }

    fn check_input(&self, sequence: &str) -> Result<()> {
        if sequence.is_empty() {
            return Err(AssemblyError::EmptyInput("empty sequence".to_string()).into());
        }
        validate_dna(sequence)?;
        self.config.validate(sequence.len())
    }
}
