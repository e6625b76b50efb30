pub mod data_structures;

// Re-export key types for assembly integration
pub use data_structures::{validate_dna, AssemblyError, DeBruijnGraph};
