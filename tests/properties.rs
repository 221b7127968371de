//! Property tests for revsync.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics", "round-trips" and "sorting is
//! stable".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/revision.rs"]
mod revision;

#[path = "properties/ordering.rs"]
mod ordering;
