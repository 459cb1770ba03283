//! # Orrery Application Logic
//!
//! The two ways to run the scene: windowed, handing control to the renderer's
//! event loop, and headless, stepping the body field at a fixed cadence and
//! logging progress.
//!
//! When the crate is compiled without the `render` feature only the headless
//! mode is available; asking for a window then fails with a clear error
//! instead of dragging the whole GPU stack into the build.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use motion::{BodyField, Updatable, BODY_COUNT};

/// Milliseconds of scene time per headless frame, a 60 Hz step.
const FRAME_MS: f32 = 16.666;

/// Open a window and run the renderer until it is closed.
///
/// # Errors
///
/// Returns any error produced while creating the window or the GPU state.
#[cfg(feature = "render")]
pub fn run_windowed(seed: Option<u64>) -> Result<()> {
    render::run(seed)
}

#[cfg(not(feature = "render"))]
pub fn run_windowed(_seed: Option<u64>) -> Result<()> {
    anyhow::bail!("built without the render feature; run with --headless")
}

/// Drive the body field for `frames` steps without a window.
///
/// Scene time advances by a fixed 60 Hz step per frame, so the trajectory
/// matches what the windowed run shows at that frame rate. The final field is
/// returned for inspection.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for the motion layer to
/// grow failure modes without breaking callers.
pub fn run_headless(frames: u32, seed: Option<u64>) -> Result<BodyField> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut field = BodyField::generate(BODY_COUNT, &mut rng);
    tracing::info!(
        "Simulating {} bodies for {} frames (seed: {:?})...",
        field.bodies.len(),
        frames,
        seed
    );

    for i in 0..frames {
        let t = i as f32 * FRAME_MS;
        field.update(t);
        if (i + 1) % 60 == 0 {
            if let Some(first) = field.bodies.first() {
                tracing::info!(
                    "Frame {} complete. Body 0 at ({:.3}, {:.3}, {:.3})",
                    i + 1,
                    first.position.x,
                    first.position.y,
                    first.position.z
                );
            }
        }
    }

    if let Some(first) = field.bodies.first() {
        tracing::info!("Final body 0 position: {:?}", first.position);
    }

    Ok(field)
}
