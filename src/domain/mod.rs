//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Typed records and their decoding
//! - `wire.rs` — Raw serde structs matching backend responses (where the
//!   record needs validation beyond serde)
//! - pure transforms over decoded records (`candle::series`, free functions
//!   in `market` and `price`)
//! - `client.rs` — Sub-client that fetches and applies the transforms

pub mod candle;
pub mod market;
pub mod price;
