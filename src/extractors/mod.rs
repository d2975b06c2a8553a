// src/extractors/mod.rs
pub mod options;
pub mod rewrite;

// Re-export key extraction types for convenience
pub use options::{extract, OptionExtractor};
pub use rewrite::{
    ClassMapRewriter,
    ClassRewriter,
    Collaborators,
    ComponentErrorReporter,
    TracingReporter,
};
