//! HTTP transport layer — `NomicsHttp`, the reqwest-backed [`Fetch`](crate::fetch::Fetch).

pub mod client;

pub use client::NomicsHttp;
