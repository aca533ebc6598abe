//! HTTP Digest Authentication against the device.
//!
//! Layered bottom-up: [`challenge`] parses what the device sends, [`digest`]
//! computes what gets sent back, [`nonce`] tracks the per-challenge counter,
//! and [`session`] drives the handshake lifecycle over the transport.

pub(crate) mod challenge;
pub(crate) mod digest;
pub(crate) mod nonce;
pub(crate) mod session;
