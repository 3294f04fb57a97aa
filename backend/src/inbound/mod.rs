//! Inbound adapters that translate external requests into domain port calls
//! while keeping framework details at the edge.
//!
//! The only transport is HTTP, under [`http`].

pub mod http;
