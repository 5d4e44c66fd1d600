//! DOM wiring for the `html_drop` upload widget.
//!
//! Compiled against the real browser only with `--features web` on
//! `wasm32`. Any other build exposes just [`placeholder`], which lets
//! `cargo test --workspace` run the core tests natively.

/// Present only when the DOM binding is compiled out.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{mount, start, stop, MountedWidget, CONFIG_ELEMENT_ID};
