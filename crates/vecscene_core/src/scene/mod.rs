//! Scene ownership and mutation entry points.
//!
//! # Responsibility
//! - Own the ordered shape collection and mediate every mutation.
//! - Keep FFI/UI layers decoupled from shape internals.

pub mod manager;
