//! FFI use-case API for the embedding front-end.
//!
//! # Responsibility
//! - Expose the scene manager's operations as stable sync functions.
//! - Keep error semantics simple and non-throwing for the host UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Unknown shape ids are reported in the response envelope, never thrown,
//!   and never mutate scene state.
//! - One process-global scene instance backs all calls; the host drives it
//!   from a single event loop.

use std::sync::{Mutex, MutexGuard, OnceLock};

use vecscene_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SceneManager,
};

static SCENE: OnceLock<Mutex<SceneManager>> = OnceLock::new();

/// Minimal health-check API for FFI smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for an identical `level + log_dir` pair.
/// - Never panics; returns empty string on success and an error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for shape mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ShapeActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Creates a rectangle in the global scene.
///
/// # FFI contract
/// - Sync call, in-memory execution, never throws.
/// - Geometry values are accepted unvalidated.
/// - Returns the newly assigned stable shape id.
#[flutter_rust_bridge::frb(sync)]
pub fn create_rectangle(x: f64, y: f64, width: f64, height: f64) -> String {
    with_scene(|scene| scene.create_rectangle(x, y, width, height))
}

/// Creates a circle in the global scene.
///
/// # FFI contract
/// - Sync call, in-memory execution, never throws.
/// - Shares the sequential id counter with `create_rectangle`.
/// - Returns the newly assigned stable shape id.
#[flutter_rust_bridge::frb(sync)]
pub fn create_circle(cx: f64, cy: f64, radius: f64) -> String {
    with_scene(|scene| scene.create_circle(cx, cy, radius))
}

/// Replaces the whole transform of the shape with the given id.
///
/// # FFI contract
/// - Sync call, never throws.
/// - Unknown id: `ok=false` with a message; scene state is untouched,
///   matching the historical no-op host behavior.
#[flutter_rust_bridge::frb(sync)]
pub fn transform_shape(
    id: String,
    tx: f64,
    ty: f64,
    rotation: f64,
    sx: f64,
    sy: f64,
) -> ShapeActionResponse {
    match with_scene(|scene| scene.transform_shape(&id, tx, ty, rotation, sx, sy)) {
        Ok(()) => ShapeActionResponse::success("Shape transformed."),
        Err(err) => ShapeActionResponse::failure(format!("transform_shape failed: {err}")),
    }
}

/// Replaces fill, stroke, and stroke width of the shape with the given id.
///
/// # FFI contract
/// - Sync call, never throws.
/// - Paint strings are stored verbatim; the host owns input sanity.
#[flutter_rust_bridge::frb(sync)]
pub fn set_shape_style(
    id: String,
    fill: String,
    stroke: String,
    stroke_width: f64,
) -> ShapeActionResponse {
    match with_scene(|scene| scene.set_shape_style(&id, fill, stroke, stroke_width)) {
        Ok(()) => ShapeActionResponse::success("Shape style updated."),
        Err(err) => ShapeActionResponse::failure(format!("set_shape_style failed: {err}")),
    }
}

/// Sets or clears the selection flag of the shape with the given id.
///
/// # FFI contract
/// - Sync call, never throws.
/// - Selection is rendered as `class="selected"` in the SVG output.
#[flutter_rust_bridge::frb(sync)]
pub fn select_shape(id: String, selected: bool) -> ShapeActionResponse {
    match with_scene(|scene| scene.select_shape(&id, selected)) {
        Ok(()) => ShapeActionResponse::success("Shape selection updated."),
        Err(err) => ShapeActionResponse::failure(format!("select_shape failed: {err}")),
    }
}

/// Renders every shape in insertion order, one SVG element per line.
///
/// # FFI contract
/// - Sync call, never throws.
/// - Returns the empty string for an empty scene.
/// - The text is meant to be embedded inside the host's `<svg>` container.
#[flutter_rust_bridge::frb(sync)]
pub fn get_all_shapes_svg() -> String {
    with_scene(|scene| scene.all_shapes_svg())
}

/// Returns the number of shapes in the global scene.
///
/// # FFI contract
/// - Sync call, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn shape_count() -> u32 {
    with_scene(|scene| scene.shape_count() as u32)
}

/// Replaces the global scene with a fresh, empty one.
///
/// Used by the host for "new document": the id counter restarts because a
/// new manager lifetime begins.
///
/// # FFI contract
/// - Sync call, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_scene() {
    let mut scene = lock_scene();
    *scene = SceneManager::new();
    log::info!("event=scene_reset module=ffi status=ok");
}

fn with_scene<T>(f: impl FnOnce(&mut SceneManager) -> T) -> T {
    let mut scene = lock_scene();
    f(&mut scene)
}

fn lock_scene() -> MutexGuard<'static, SceneManager> {
    let mutex = SCENE.get_or_init(|| Mutex::new(SceneManager::new()));
    // A poisoned lock only means a previous caller panicked mid-call; the
    // scene data itself stays usable, so recover instead of propagating.
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
