//! Taskwire: fixed-layout binary codec for task records.
//!
//! This crate encodes and decodes a small record type — a [`domain::Task`]
//! holding an owned title, a fixed pair of [`domain::Period`] intervals, and
//! a selection flag — to and from a flat byte layout:
//!
//! ```text
//! title bytes '\0' | period[0] start, end | period[1] start, end | selected
//! ```
//!
//! The layout carries no length prefix, version tag, or checksum. The title
//! is delimited by its NUL terminator and the trailing sections by their
//! fixed widths, so both sides of a round trip must be built with the same
//! timestamp width, flag width, and period count. See [`wire`] for the full
//! contract and its documented limitations.
//!
//! # Architecture
//!
//! - **Domain**: record types with ownership and validation rules, free of
//!   wire concerns ([`domain`])
//! - **Wire**: the codec itself, built on bounds-checked span cursors
//!   ([`wire`])
//!
//! Each encode or decode call is a stateless, single-shot transformation
//! over caller-supplied values and buffers; no state is shared between
//! calls.

pub mod domain;
pub mod wire;

#[cfg(test)]
mod tests;
