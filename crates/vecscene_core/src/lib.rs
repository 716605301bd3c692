//! Core scene model for the vecscene vector editor.
//! This crate is the single source of truth for scene state and markup
//! serialization; UI layers drive it through the FFI crate.

pub mod logging;
pub mod model;
pub mod render;
pub mod scene;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::shape::{Geometry, Point, Shape, ShapeId, Transform};
pub use render::svg::{format_number, transform_attribute};
pub use scene::manager::{SceneError, SceneManager, SceneResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
