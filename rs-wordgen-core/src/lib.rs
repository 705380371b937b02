//! Word-level second-order Markov text generation library.
//!
//! This crate provides a small trigram generation system including:
//! - A weighted frequency list used for proportional sampling
//! - A context table keyed by ordered word pairs
//! - A generation loop with dead-end reseeding and explicit length bounds
//! - Boundary utilities for tokenizing and reading corpora
//!
//! Randomness is always injected through a [`model::uniform::UniformSource`],
//! so any generation can be replayed from a fixed seed.

/// Core Markov structures and generation logic.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (corpus reading, tokenizing, path helpers).
pub mod io;

pub use error::GenError;
