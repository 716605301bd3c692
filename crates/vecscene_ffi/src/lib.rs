//! FFI crate exposing the vecscene scene manager to an embedding front-end
//! via flutter_rust_bridge. All exported functions live in [`api`].

pub mod api;
