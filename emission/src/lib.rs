//! Synthetic-halving emission schedule.
//!
//! Each token class releases a fixed monthly amount that halves every 48
//! months ("synthetic" because there is no proof-of-work behind it). The two
//! classes are independent, non-interacting ledgers: computing one never
//! consults the other.

pub mod schedule;

pub use schedule::{EmissionSchedule, TokenClass};
