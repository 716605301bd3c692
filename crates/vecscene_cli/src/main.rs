//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `vecscene_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use vecscene_core::SceneManager;

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the Flutter/FFI runtime setup.
    println!("vecscene_core ping={}", vecscene_core::ping());
    println!("vecscene_core version={}", vecscene_core::core_version());

    let mut scene = SceneManager::new();
    let rect = scene.create_rectangle(10.0, 20.0, 30.0, 40.0);
    scene.create_circle(60.0, 60.0, 15.0);
    if scene.transform_shape(&rect, 5.0, 5.0, 0.0, 1.0, 1.0).is_err() {
        eprintln!("demo transform failed for {rect}");
    }
    print!("{}", scene.all_shapes_svg());
}
