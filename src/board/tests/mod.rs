//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `castling.rs` - Castling generation, execution and rights bookkeeping
//! - `executor.rs` - Move application and snapshot immutability
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod castling;
