//! Random draws for game events
//!
//! Every draw is seeded from the session's step counter, so two sessions fed
//! the same commands produce the same events.

pub use lab_rng::{RngTraceEntry, SineRng as GameRng, pseudo_random};
