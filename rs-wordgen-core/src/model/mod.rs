//! Top-level module for the Markov word generator.
//!
//! This module provides:
//! - Weighted frequency lists (`FrequencyList`)
//! - Ordered context keys (`ContextPair`)
//! - The second-order table (`MarkovTable`)
//! - Injected randomness (`UniformSource`, `RngSource`)
//! - Generation configuration (`GenerationInput`) and the high-level
//!   interface (`TextGenerator`)

use std::sync::Arc;

/// Interned word token. Cloning only bumps a reference count.
pub type Word = Arc<str>;

/// Weighted frequency list with clamped-index sampling.
pub mod frequency_list;

/// Ordered word pair used as a table key.
pub mod context_pair;

/// Second-order Markov table mapping word pairs to successor lists.
pub mod markov_table;

/// Uniform value sources for replayable generation.
pub mod uniform;

/// In-memory token streams.
pub mod corpus;

/// Generation parameters and seed strategies.
pub mod generation_input;

/// High-level training and generation interface.
///
/// Owns the table and the token streams used for reseeding.
pub mod generator;
