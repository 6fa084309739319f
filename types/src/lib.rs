//! Fundamental types for the Pezkuwi scoring engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account identifiers, token amounts, block heights, and the
//! deployment parameters.

pub mod account;
pub mod amount;
pub mod block;
pub mod params;

pub use account::AccountId;
pub use amount::{HezAmount, PezAmount, HEZ_UNIT, PEZ_UNIT};
pub use block::BlockHeight;
pub use params::ChainParams;
