//! Bounded-depth best-guess search
//!
//! The feedback cache, outcome bookkeeping, and the scoring/search engine.

mod cache;
mod engine;
mod outcome;

pub use cache::FeedbackCache;
pub use engine::{Recommendation, Scored, SearchParams, Solver};
pub use outcome::{Outcome, OutcomeError};
