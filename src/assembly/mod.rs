//! Assembly stages: composition, graph construction, reconstruction
//!
//! Data flows left to right: raw sequence -> k-mer list -> de Bruijn
//! adjacency mapping -> source-to-sink path -> reconstructed sequence.
//! Each stage is a pure, synchronous transformation; wiring them together
//! end to end lives in [`crate::pipeline`].

pub mod composition;
pub mod graph_construction;
pub mod reconstruction;

pub use composition::kmer_composition;
pub use graph_construction::build_de_bruijn;
pub use reconstruction::reconstruct;
