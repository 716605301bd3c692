//! Shape domain model.
//!
//! # Responsibility
//! - Define the drawable primitives (rectangle, circle) and their shared
//!   style/transform attributes.
//! - Provide manager-mediated mutators for style, selection, and transform.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes afterwards.
//! - `transform` is always replaced as a whole unit, never composed with the
//!   previous value.
//! - No validation is performed on geometry or style values; callers own
//!   input sanity.

use serde::{Deserialize, Serialize};

/// Stable caller-visible identifier for one shape within a scene lifetime.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The scene manager guarantees non-empty, never-reused values of the form
/// `shape_N`.
pub type ShapeId = String;

/// Plain 2D point value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Composed 2D affine transform applied to a shape as one replaceable unit.
///
/// Serialized order is translate, then rotate, then scale. The default is
/// the identity transform: zero translation/rotation, unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation in degrees, matching the SVG `rotate()` convention.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Transform {
    /// Returns whether this transform is the identity.
    ///
    /// An identity transform contributes no `transform` attribute to markup.
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.rotation == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
    }
}

/// Closed set of drawable primitive geometries.
///
/// Deliberately a tagged enum rather than a trait hierarchy: the variant set
/// is small and closed, so dispatch on the tag keeps rendering in one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Geometry {
    /// Axis-aligned rectangle anchored at its top-left origin.
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    /// Circle defined by center and radius.
    Circle { center: Point, radius: f64 },
}

/// One drawable shape: geometry plus style, selection, and transform state.
///
/// Shapes are owned exclusively by the scene manager and are only reachable
/// through it; external callers address them by [`ShapeId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Stable ID used by the host front-end to address this shape.
    pub id: ShapeId,
    pub geometry: Geometry,
    /// Whole-unit affine transform; identity until explicitly set.
    pub transform: Transform,
    /// Fill paint reference, e.g. `none` or `#ff8800`. Not escaped on output.
    pub fill: String,
    /// Stroke paint reference. Not escaped on output.
    pub stroke: String,
    pub stroke_width: f64,
    /// Editor selection flag; rendered as `class="selected"` when set.
    pub is_selected: bool,
}

impl Shape {
    /// Creates a shape with default style and identity transform.
    ///
    /// # Invariants
    /// - `fill` starts as `"none"`, `stroke` as `"#000000"`,
    ///   `stroke_width` as `1.0`, `is_selected` as `false`.
    pub fn new(id: ShapeId, geometry: Geometry) -> Self {
        Self {
            id,
            geometry,
            transform: Transform::default(),
            fill: "none".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            is_selected: false,
        }
    }

    /// Replaces the fill paint. Unconditional write, no validation.
    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = fill.into();
    }

    /// Replaces the stroke paint. Unconditional write, no validation.
    pub fn set_stroke(&mut self, stroke: impl Into<String>) {
        self.stroke = stroke.into();
    }

    /// Replaces the stroke width. Unconditional write, no validation.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    /// Sets or clears the editor selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Replaces the entire transform with `t`.
    ///
    /// # Contract
    /// - The previous transform is discarded, not composed with.
    pub fn set_transform(&mut self, t: Transform) {
        self.transform = t;
    }

    /// Returns the current transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns the stable shape ID.
    pub fn id(&self) -> &str {
        &self.id
    }
}
