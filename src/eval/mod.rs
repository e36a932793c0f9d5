//! Position evaluation for the minimax search

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::evaluate;
pub use patterns::PatternScore;
