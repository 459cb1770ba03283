//! The fixed tint palette for toon bodies.

/// The ten body tints as 0-255 sRGB triples, warm to cool.
pub const PALETTE: [[u8; 3]; 10] = [
    [0xc7, 0x52, 0x2a],
    [0xd6, 0x8a, 0x58],
    [0xe5, 0xc1, 0x85],
    [0xf0, 0xda, 0xa5],
    [0xfb, 0xf2, 0xc4],
    [0xb8, 0xcd, 0xab],
    [0x74, 0xa8, 0x92],
    [0x3a, 0x97, 0x8c],
    [0x00, 0x85, 0x85],
    [0x80, 0xc2, 0xc2],
];

/// Convert a palette entry to floating-point sRGB in `[0, 1]`.
#[must_use]
pub fn srgb(entry: [u8; 3]) -> [f32; 3] {
    [
        f32::from(entry[0]) / 255.0,
        f32::from(entry[1]) / 255.0,
        f32::from(entry[2]) / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_decodes_to_terracotta() {
        let [r, g, b] = srgb(PALETTE[0]);
        assert!((r - 199.0 / 255.0).abs() < 1e-6);
        assert!((g - 82.0 / 255.0).abs() < 1e-6);
        assert!((b - 42.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn every_component_lands_in_unit_range() {
        for entry in PALETTE {
            for c in srgb(entry) {
                assert!((0.0..=1.0).contains(&c), "component out of range: {c}");
            }
        }
    }
}
