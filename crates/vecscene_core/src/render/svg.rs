//! SVG element serialization.
//!
//! # Responsibility
//! - Render one shape into one self-closing SVG element.
//! - Enforce the numeric formatting contract: fixed point, exactly two
//!   fraction digits, for every number emitted into markup.
//!
//! # Invariants
//! - Attribute order is fixed per tag:
//!   rect:   `id, x, y, width, height, [transform], fill, stroke,
//!           stroke-width, [class]`
//!   circle: `id, cx, cy, r, [transform], fill, stroke, stroke-width,
//!           [class]`
//! - The `transform` attribute is omitted entirely for the identity
//!   transform; individual terms are omitted when they are no-ops.
//! - `fill`/`stroke` text is emitted verbatim, no escaping. Callers are
//!   trusted to pass valid paint references.

use crate::model::shape::{Geometry, Shape, Transform};

/// Formats a number for markup output: fixed point, two fraction digits.
///
/// # Contract
/// - `0.0` -> `"0.00"`, `3.0` -> `"3.00"`, `3.14159` -> `"3.14"`.
/// - Applies to every float rendered into markup, regardless of magnitude.
pub fn format_number(value: f64) -> String {
    format!("{value:.2}")
}

/// Builds the `transform` attribute value for a shape.
///
/// Terms are emitted in fixed order with no-op terms skipped:
/// `translate(tx,ty) ` when either component is nonzero, then `rotate(r) `
/// when nonzero, then `scale(sx,sy)` when either axis differs from 1.
/// Translate and rotate each carry one trailing space; scale does not.
/// Returns the empty string for the identity transform.
pub fn transform_attribute(t: &Transform) -> String {
    let mut out = String::new();
    if t.translate_x != 0.0 || t.translate_y != 0.0 {
        out.push_str(&format!(
            "translate({},{}) ",
            format_number(t.translate_x),
            format_number(t.translate_y)
        ));
    }
    if t.rotation != 0.0 {
        out.push_str(&format!("rotate({}) ", format_number(t.rotation)));
    }
    if t.scale_x != 1.0 || t.scale_y != 1.0 {
        out.push_str(&format!(
            "scale({},{})",
            format_number(t.scale_x),
            format_number(t.scale_y)
        ));
    }
    out
}

impl Shape {
    /// Renders this shape as one self-closing SVG element.
    ///
    /// # Contract
    /// - Geometry attributes come before the optional `transform` attribute.
    /// - Style attributes (`fill`, `stroke`, `stroke-width`) are always
    ///   emitted.
    /// - `class="selected"` appears after `stroke-width` iff the shape is
    ///   selected.
    pub fn to_svg(&self) -> String {
        let mut element = String::new();
        match &self.geometry {
            Geometry::Rect {
                origin,
                width,
                height,
            } => {
                element.push_str("<rect");
                element.push_str(&format!(" id=\"{}\"", self.id));
                element.push_str(&format!(" x=\"{}\"", format_number(origin.x)));
                element.push_str(&format!(" y=\"{}\"", format_number(origin.y)));
                element.push_str(&format!(" width=\"{}\"", format_number(*width)));
                element.push_str(&format!(" height=\"{}\"", format_number(*height)));
            }
            Geometry::Circle { center, radius } => {
                element.push_str("<circle");
                element.push_str(&format!(" id=\"{}\"", self.id));
                element.push_str(&format!(" cx=\"{}\"", format_number(center.x)));
                element.push_str(&format!(" cy=\"{}\"", format_number(center.y)));
                element.push_str(&format!(" r=\"{}\"", format_number(*radius)));
            }
        }

        let transform_text = transform_attribute(&self.transform);
        if !transform_text.is_empty() {
            element.push_str(&format!(" transform=\"{transform_text}\""));
        }

        element.push_str(&format!(" fill=\"{}\"", self.fill));
        element.push_str(&format!(" stroke=\"{}\"", self.stroke));
        element.push_str(&format!(
            " stroke-width=\"{}\"",
            format_number(self.stroke_width)
        ));

        if self.is_selected {
            element.push_str(" class=\"selected\"");
        }

        element.push_str("/>");
        element
    }
}

#[cfg(test)]
mod tests {
    use super::{format_number, transform_attribute};
    use crate::model::shape::Transform;

    #[test]
    fn format_number_always_emits_two_fraction_digits() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(1.0), "1.00");
        assert_eq!(format_number(3.14159), "3.14");
        assert_eq!(format_number(-7.5), "-7.50");
        assert_eq!(format_number(1234.0), "1234.00");
    }

    #[test]
    fn identity_transform_produces_empty_attribute() {
        assert_eq!(transform_attribute(&Transform::default()), "");
    }

    #[test]
    fn translate_only_keeps_trailing_space() {
        let t = Transform {
            translate_x: 5.0,
            translate_y: 0.0,
            ..Transform::default()
        };
        assert_eq!(transform_attribute(&t), "translate(5.00,0.00) ");
    }

    #[test]
    fn full_transform_emits_terms_in_fixed_order() {
        let t = Transform {
            translate_x: 1.0,
            translate_y: 2.0,
            rotation: 45.0,
            scale_x: 2.0,
            scale_y: 0.5,
        };
        assert_eq!(
            transform_attribute(&t),
            "translate(1.00,2.00) rotate(45.00) scale(2.00,0.50)"
        );
    }

    #[test]
    fn scale_only_has_no_trailing_space() {
        let t = Transform {
            scale_x: 3.0,
            scale_y: 3.0,
            ..Transform::default()
        };
        assert_eq!(transform_attribute(&t), "scale(3.00,3.00)");
    }

    #[test]
    fn half_translate_is_enough_to_emit_translate_term() {
        let t = Transform {
            translate_x: 0.0,
            translate_y: -4.0,
            ..Transform::default()
        };
        assert_eq!(transform_attribute(&t), "translate(0.00,-4.00) ");
    }
}
