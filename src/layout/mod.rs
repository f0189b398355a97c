//! Character-granularity text wrapping into rectangular boxes.
//!
//! Source prose is unsegmented CJK, so lines break between any two characters rather than at
//! word boundaries. Text that does not fit vertically is dropped, never reflowed.

/// Greedy wrap engine and its output types.
pub mod engine;
/// Font metrics capability used by the engine.
pub mod metrics;
