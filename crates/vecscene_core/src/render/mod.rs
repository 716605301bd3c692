//! Markup serialization entry points.
//!
//! # Responsibility
//! - Turn shapes into SVG element text with a stable attribute layout.
//! - Keep numeric formatting rules in one place.

pub mod svg;
