//! Integration tests for tagcheck.
//!
//! - `scenarios`: derived records, end to end
//! - `concurrency`: shared records validated from several threads
//! - `not_a_record`: top-level type check
//! - `manual_records`: hand-written descriptor tables
//! - `properties`: property-based checks of the `non-empty` bound

mod not_a_record;
mod scenarios;
