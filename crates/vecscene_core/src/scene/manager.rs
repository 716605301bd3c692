//! Scene manager: the sole mutation entry point for shapes.
//!
//! # Responsibility
//! - Own the ordered shape collection and the sequential id counter.
//! - Mediate creation, transform/style mutation, and whole-scene
//!   serialization. Callers never touch shapes directly.
//!
//! # Invariants
//! - Insertion order is render order is z-order; shapes are never removed
//!   or reordered within one manager lifetime.
//! - Ids follow `shape_N` with N monotonic from 0, shared across shape
//!   kinds, and are never reused.
//! - The id index always maps every live id to its position in the list.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{debug, info};

use crate::model::shape::{Geometry, Point, Shape, ShapeId, Transform};

pub type SceneResult<T> = Result<T, SceneError>;

/// Error for scene mutation operations addressing shapes by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No shape with the given id exists in this scene.
    ShapeNotFound(ShapeId),
}

impl Display for SceneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeNotFound(id) => write!(f, "shape not found: {id}"),
        }
    }
}

impl Error for SceneError {}

/// Owner of the scene: an append-only, ordered arena of shapes plus an
/// id-to-position index for O(1) lookup.
///
/// Single-threaded by design; the host drives it from one event loop.
#[derive(Debug, Default)]
pub struct SceneManager {
    shapes: Vec<Shape>,
    index_by_id: HashMap<ShapeId, usize>,
    next_shape_id: u64,
}

impl SceneManager {
    /// Creates an empty scene with the id counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rectangle with default style and identity transform.
    ///
    /// # Contract
    /// - Never fails; geometry values are accepted unvalidated.
    /// - Returns the newly assigned stable id.
    pub fn create_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeId {
        self.insert(Geometry::Rect {
            origin: Point::new(x, y),
            width,
            height,
        })
    }

    /// Creates a circle with default style and identity transform.
    ///
    /// # Contract
    /// - Never fails; geometry values are accepted unvalidated.
    /// - Shares the id counter with [`Self::create_rectangle`].
    pub fn create_circle(&mut self, cx: f64, cy: f64, radius: f64) -> ShapeId {
        self.insert(Geometry::Circle {
            center: Point::new(cx, cy),
            radius,
        })
    }

    /// Replaces the whole transform of the shape with the given id.
    ///
    /// # Contract
    /// - The previous transform is discarded, not composed with.
    /// - Scale components are taken as supplied, not re-defaulted to 1.
    ///
    /// # Errors
    /// - [`SceneError::ShapeNotFound`] when no shape has this id; the scene
    ///   is left untouched.
    pub fn transform_shape(
        &mut self,
        id: &str,
        tx: f64,
        ty: f64,
        rotation: f64,
        sx: f64,
        sy: f64,
    ) -> SceneResult<()> {
        let shape = self.shape_mut(id)?;
        shape.set_transform(Transform {
            translate_x: tx,
            translate_y: ty,
            rotation,
            scale_x: sx,
            scale_y: sy,
        });
        debug!("event=shape_transformed module=scene status=ok id={id}");
        Ok(())
    }

    /// Replaces fill, stroke, and stroke width of the shape with this id.
    ///
    /// # Errors
    /// - [`SceneError::ShapeNotFound`] when no shape has this id.
    pub fn set_shape_style(
        &mut self,
        id: &str,
        fill: impl Into<String>,
        stroke: impl Into<String>,
        stroke_width: f64,
    ) -> SceneResult<()> {
        let shape = self.shape_mut(id)?;
        shape.set_fill(fill);
        shape.set_stroke(stroke);
        shape.set_stroke_width(stroke_width);
        debug!("event=shape_styled module=scene status=ok id={id}");
        Ok(())
    }

    /// Sets or clears the selection flag of the shape with this id.
    ///
    /// # Errors
    /// - [`SceneError::ShapeNotFound`] when no shape has this id.
    pub fn select_shape(&mut self, id: &str, selected: bool) -> SceneResult<()> {
        let shape = self.shape_mut(id)?;
        shape.set_selected(selected);
        Ok(())
    }

    /// Returns the shape with this id, if it exists.
    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.index_by_id.get(id).map(|&pos| &self.shapes[pos])
    }

    /// Returns the number of shapes in the scene.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Returns whether the scene contains no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Renders every shape in insertion order, one element per line.
    ///
    /// # Contract
    /// - Each element is followed by exactly one `\n`.
    /// - An empty scene yields the empty string.
    /// - The result is meant to be embedded in an enclosing `<svg>` container
    ///   supplied by the host.
    pub fn all_shapes_svg(&self) -> String {
        let mut out = String::new();
        for shape in &self.shapes {
            out.push_str(&shape.to_svg());
            out.push('\n');
        }
        out
    }

    fn insert(&mut self, geometry: Geometry) -> ShapeId {
        let id = self.generate_shape_id();
        let kind = match geometry {
            Geometry::Rect { .. } => "rect",
            Geometry::Circle { .. } => "circle",
        };
        self.index_by_id.insert(id.clone(), self.shapes.len());
        self.shapes.push(Shape::new(id.clone(), geometry));
        info!("event=shape_created module=scene status=ok id={id} kind={kind}");
        id
    }

    fn generate_shape_id(&mut self) -> ShapeId {
        let id = format!("shape_{}", self.next_shape_id);
        self.next_shape_id += 1;
        id
    }

    fn shape_mut(&mut self, id: &str) -> SceneResult<&mut Shape> {
        match self.index_by_id.get(id) {
            Some(&pos) => Ok(&mut self.shapes[pos]),
            None => {
                debug!("event=shape_lookup module=scene status=not_found id={id}");
                Err(SceneError::ShapeNotFound(id.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SceneError, SceneManager};

    #[test]
    fn generated_ids_are_sequential_from_zero() {
        let mut scene = SceneManager::new();
        assert_eq!(scene.create_rectangle(0.0, 0.0, 1.0, 1.0), "shape_0");
        assert_eq!(scene.create_circle(0.0, 0.0, 1.0), "shape_1");
        assert_eq!(scene.create_rectangle(0.0, 0.0, 1.0, 1.0), "shape_2");
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut scene = SceneManager::new();
        let err = scene
            .transform_shape("shape_99", 1.0, 2.0, 0.0, 1.0, 1.0)
            .unwrap_err();
        assert_eq!(err, SceneError::ShapeNotFound("shape_99".to_string()));
        assert_eq!(err.to_string(), "shape not found: shape_99");
    }

    #[test]
    fn shape_lookup_finds_by_id() {
        let mut scene = SceneManager::new();
        let id = scene.create_circle(3.0, 4.0, 5.0);
        let shape = scene.shape(&id).expect("created shape should be found");
        assert_eq!(shape.id(), id);
        assert!(scene.shape("shape_42").is_none());
    }
}
