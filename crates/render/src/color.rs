//! Color conversions shared by mesh building and light setup.

/// Convert HSL to floating-point sRGB.
///
/// Hue wraps, saturation and lightness clamp to `[0, 1]`. Matches the
/// hue-sector formulation used for the background gradient.
pub fn hsl_to_srgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, h: f32) -> f32 {
    let h = h.rem_euclid(1.0);
    if h < 1.0 / 6.0 {
        p + (q - p) * 6.0 * h
    } else if h < 1.0 / 2.0 {
        q
    } else if h < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - h)
    } else {
        p
    }
}

/// One sRGB component to linear, exact piecewise transfer function.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// An sRGB triple to linear, for vertex colors and light uploads.
pub fn to_linear(rgb: [f32; 3]) -> [f32; 3] {
    [
        srgb_to_linear(rgb[0]),
        srgb_to_linear(rgb[1]),
        srgb_to_linear(rgb[2]),
    ]
}

/// Decode a `0xRRGGBB` constant to floating-point sRGB.
pub fn srgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_saturation_is_gray() {
        let [r, g, b] = hsl_to_srgb(0.3, 0.0, 0.42);
        assert_eq!(r, 0.42);
        assert_eq!(g, 0.42);
        assert_eq!(b, 0.42);
    }

    #[test]
    fn lightness_extremes_clamp_to_black_and_white() {
        assert_eq!(hsl_to_srgb(0.565, 0.5, -0.3), [0.0, 0.0, 0.0]);
        assert_eq!(hsl_to_srgb(0.565, 0.5, 1.7), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn primary_hues_come_out_saturated() {
        let [r, g, b] = hsl_to_srgb(0.0, 1.0, 0.5);
        assert!((r - 1.0).abs() < 1e-6 && g.abs() < 1e-6 && b.abs() < 1e-6);

        let [r, g, b] = hsl_to_srgb(1.0 / 3.0, 1.0, 0.5);
        assert!(r.abs() < 1e-6 && (g - 1.0).abs() < 1e-6 && b.abs() < 1e-6);
    }

    #[test]
    fn background_hue_leans_blue() {
        // Hue 0.565 at half lightness: a cyan-blue with b > g > r.
        let [r, g, b] = hsl_to_srgb(0.565, 0.5, 0.5);
        assert!(b > g && g > r, "got ({r}, {g}, {b})");
    }

    #[test]
    fn hex_decode_matches_components() {
        let [r, g, b] = srgb_from_hex(0x7799ee);
        assert!((r - 119.0 / 255.0).abs() < 1e-6);
        assert!((g - 153.0 / 255.0).abs() < 1e-6);
        assert!((b - 238.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn linear_transfer_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        // Below the toe the curve is linear.
        assert!((srgb_to_linear(0.02) - 0.02 / 12.92).abs() < 1e-7);
    }
}
