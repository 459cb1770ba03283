//! The toon gradient texture.
//!
//! Toon bodies quantize their diffuse term through a small horizontal ramp
//! image sampled with nearest filtering. The image on disk is optional:
//! when `assets/tone_ramp.png` is missing or unreadable the renderer logs a
//! warning and falls back to a built-in three-tone ramp, it never refuses
//! to start over a cosmetic asset.

use anyhow::{ensure, Context, Result};

/// Where the ramp image is looked up, relative to the working directory.
pub const TONE_RAMP_PATH: &str = "assets/tone_ramp.png";

/// Gray levels of the built-in fallback ramp, dark to light.
pub const FALLBACK_LEVELS: [u8; 3] = [64, 128, 255];

/// Load the tone ramp from disk, or build the fallback, and upload it.
pub fn load_tone_ramp(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    let (pixels, width, height) = match ramp_pixels_from_disk(TONE_RAMP_PATH) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::warn!("falling back to built-in tone ramp: {e:#}");
            fallback_pixels()
        }
    };

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Tone Ramp"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels,
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Nearest-neighbor sampler so the ramp steps stay hard.
pub fn create_ramp_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Tone Ramp Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

fn ramp_pixels_from_disk(path: &str) -> Result<(Vec<u8>, u32, u32)> {
    let image = image::open(path)
        .with_context(|| format!("failed to open {path}"))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    ensure!(width > 0 && height > 0, "ramp image {path} is empty");
    Ok((image.into_raw(), width, height))
}

/// RGBA pixels of the built-in ramp, one texel per gray level.
pub fn fallback_pixels() -> (Vec<u8>, u32, u32) {
    let mut pixels = Vec::with_capacity(FALLBACK_LEVELS.len() * 4);
    for level in FALLBACK_LEVELS {
        pixels.extend_from_slice(&[level, level, level, 255]);
    }
    (pixels, FALLBACK_LEVELS.len() as u32, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_ramp_is_opaque_and_brightens_left_to_right() {
        let (pixels, width, height) = fallback_pixels();
        assert_eq!(width, 3);
        assert_eq!(height, 1);
        assert_eq!(pixels.len(), 12);
        for texel in pixels.chunks(4) {
            assert_eq!(texel[0], texel[1]);
            assert_eq!(texel[1], texel[2]);
            assert_eq!(texel[3], 255);
        }
        assert!(pixels[0] < pixels[4] && pixels[4] < pixels[8]);
    }
}
