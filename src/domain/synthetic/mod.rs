//! Synthetic module - randomized population for exercising the pipeline.

pub mod catalog;
mod generator;

pub use generator::{GeneratorSettings, SyntheticGenerator};
