//! Domain model for the vector scene.
//!
//! # Responsibility
//! - Define the drawable primitives and their shared attribute set.
//! - Keep one canonical shape record usable by rendering and the FFI layer.
//!
//! # Invariants
//! - Every shape is identified by a stable `ShapeId` string.
//! - Shapes carry their own style and transform state; nothing is derived.

pub mod shape;
