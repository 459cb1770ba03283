//! # Orrery
//!
//! An animated diorama: a hundred small spheroids drift on oscillating
//! orbits inside a gradient shell, lit by a slowly circling sun and watched
//! through a depth-of-field lens. It is decoration, not simulation, and the
//! code is organized accordingly.
//!
//! ## The Crates
//!
//! -   **`orrery`:** The crate you are currently viewing. It parses the
//!     command line, picks windowed or headless mode and hands off to the
//!     layers below. The [`app`] module holds both entry points.
//! -   **[`motion`]:** The pure simulation layer. It scatters the bodies,
//!     advances their orbits from a scene clock and knows nothing about the
//!     GPU. Everything in it is deterministic for a given seed.
//! -   **`render`:** The `wgpu` renderer. It owns the window, the scene
//!     pipelines for the background shell and the toon and glass bodies, and
//!     the bokeh pass that blurs everything away from the focal plane.
//!     Optional, behind the `render` feature.
//!
//! ## Getting Started
//!
//! `cargo run` opens the window. Drag to orbit the camera, scroll to move in
//! and out, and press `R` to rescatter the bodies. `cargo run -- --headless`
//! steps the motion layer on the CPU alone, and `--seed` pins the scatter for
//! reproducible runs in either mode.

pub mod app;

pub use motion;
#[cfg(feature = "render")]
pub use render;
