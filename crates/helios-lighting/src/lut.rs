//! Precomputed lighting lookup tables.
//!
//! The LUT shading mode replaces the per-fragment lighting math with two
//! texture fetches indexed by the scalar dot products `N·L` and `N·H`:
//!
//! - a `width x height` RGBA8 table whose RGB encodes the diffuse color
//!   response over `N·L` and whose alpha encodes `(N·H)^shininess`, and
//! - a `width x 1` RGBA8 table encoding the full specular color response
//!   over `N·H`.
//!
//! Both tables are pure functions of [`LutParams`]; building twice with the
//! same parameters yields byte-identical contents. They are uploaded once,
//! non-mipmapped, clamp-to-edge, linearly filtered, so the sampler's bilinear
//! interpolation stands in for analytic continuity between samples.

use glam::Vec4;

/// Parameters the tables are baked from.
#[derive(Debug, Clone, PartialEq)]
pub struct LutParams {
    /// Diffuse table width; also the specular table length. Samples `N·L`.
    pub width: u32,
    /// Diffuse table height. Samples `N·H`.
    pub height: u32,
    /// Specular exponent.
    pub shininess: f32,
    /// Light color, linear RGBA.
    pub light_color: Vec4,
    /// Material diffuse reflectance, linear RGBA.
    pub material_diffuse: Vec4,
    /// Material specular reflectance, linear RGBA. May exceed 1.
    pub material_specular: Vec4,
}

/// Baked lookup tables, tightly packed RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightingLut {
    /// `width * height * 4` bytes, row-major from `(0, 0)`.
    pub diffuse_table: Vec<u8>,
    /// `width * 4` bytes.
    pub specular_table: Vec<u8>,
    /// Table width in texels.
    pub width: u32,
    /// Diffuse table height in texels.
    pub height: u32,
}

impl LightingLut {
    /// Bake both tables. `params.width` and `params.height` must be non-zero.
    pub fn build(params: &LutParams) -> Self {
        debug_assert!(
            params.width > 0 && params.height > 0,
            "LUT dimensions must be non-zero"
        );

        let width = params.width;
        let height = params.height;

        let mut diffuse_table = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            // Stand-in for clamped N·H.
            let nh = y as f32 / height as f32;
            let alpha = nh.powf(params.shininess);
            for x in 0..width {
                // Stand-in for clamped N·L.
                let nl = x as f32 / width as f32;
                let diffuse = params.light_color * params.material_diffuse * nl;
                diffuse_table.push(quantize(diffuse.x));
                diffuse_table.push(quantize(diffuse.y));
                diffuse_table.push(quantize(diffuse.z));
                diffuse_table.push(quantize(alpha));
            }
        }

        let mut specular_table = Vec::with_capacity((width * 4) as usize);
        for x in 0..width {
            let nh = x as f32 / width as f32;
            let specular =
                params.light_color * params.material_specular * nh.powf(params.shininess);
            specular_table.push(quantize(specular.x));
            specular_table.push(quantize(specular.y));
            specular_table.push(quantize(specular.z));
            specular_table.push(quantize(specular.w));
        }

        Self {
            diffuse_table,
            specular_table,
            width,
            height,
        }
    }

    /// RGBA bytes of the diffuse table texel at `(x, y)`.
    pub fn diffuse_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * self.width + x) * 4) as usize;
        self.diffuse_table[offset..offset + 4].try_into().unwrap()
    }

    /// RGBA bytes of the specular table texel at `x`.
    pub fn specular_pixel(&self, x: u32) -> [u8; 4] {
        let offset = (x * 4) as usize;
        self.specular_table[offset..offset + 4].try_into().unwrap()
    }
}

/// Map a non-negative linear value to a byte: `round(min(255, value * 255))`.
///
/// Inputs are products of non-negative factors, so no low-end clamp is
/// needed; the high clamp absorbs overdriven specular colors.
fn quantize(value: f32) -> u8 {
    (value * 255.0).min(255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    fn earth_params(width: u32, height: u32) -> LutParams {
        let material = Material::earth();
        LutParams {
            width,
            height,
            shininess: material.shininess,
            light_color: Vec4::ONE,
            material_diffuse: material.diffuse,
            material_specular: material.specular,
        }
    }

    #[test]
    fn test_table_sizes() {
        let lut = LightingLut::build(&earth_params(64, 32));
        assert_eq!(lut.diffuse_table.len(), 64 * 32 * 4);
        assert_eq!(lut.specular_table.len(), 64 * 4);
    }

    #[test]
    fn test_reference_scenario_pixel_3_3() {
        // nl = nh = 0.75: RGB = round(0.75 * 255) = 191, and
        // 0.75^50 is ~5.7e-7, which rounds to 0 in the alpha channel.
        let lut = LightingLut::build(&earth_params(4, 4));
        assert_eq!(lut.diffuse_pixel(3, 3), [191, 191, 191, 0]);
    }

    #[test]
    fn test_diffuse_red_channel_monotone_in_nl() {
        let lut = LightingLut::build(&earth_params(256, 16));
        for y in 0..16 {
            let mut previous = 0u8;
            for x in 0..256 {
                let r = lut.diffuse_pixel(x, y)[0];
                assert!(
                    r >= previous,
                    "R channel decreased at ({x}, {y}): {r} < {previous}"
                );
                previous = r;
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let params = earth_params(32, 32);
        let a = LightingLut::build(&params);
        let b = LightingLut::build(&params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overdriven_specular_clamps_to_255() {
        // Shininess 1 keeps nh^shininess large; specular 2.0 then overflows
        // the byte range near the top of the table.
        let params = LutParams {
            shininess: 1.0,
            ..earth_params(8, 8)
        };
        let lut = LightingLut::build(&params);
        // nh = 7/8 = 0.875; 0.875 * 2.0 * 255 = 446.25 -> clamped.
        assert_eq!(lut.specular_pixel(7), [255, 255, 255, 223]);
    }

    #[test]
    fn test_first_column_and_row_are_black() {
        let lut = LightingLut::build(&earth_params(16, 16));
        for y in 0..16 {
            let [r, g, b, _] = lut.diffuse_pixel(0, y);
            assert_eq!([r, g, b], [0, 0, 0], "nl = 0 must produce black diffuse");
        }
        assert_eq!(lut.specular_pixel(0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_diffuse_matches_analytic_lambert_scaling() {
        // The R channel must equal the quantized analytic diffuse response
        // light.r * material.r * nl at every sample point.
        let params = LutParams {
            light_color: Vec4::new(1.0, 0.5, 0.25, 1.0),
            material_diffuse: Vec4::new(0.8, 1.0, 0.5, 1.0),
            ..earth_params(32, 4)
        };
        let lut = LightingLut::build(&params);
        for x in 0..32 {
            let nl = x as f32 / 32.0;
            let expected = [
                (nl * 1.0 * 0.8 * 255.0).round() as u8,
                (nl * 0.5 * 1.0 * 255.0).round() as u8,
                (nl * 0.25 * 0.5 * 255.0).round() as u8,
            ];
            let [r, g, b, _] = lut.diffuse_pixel(x, 0);
            assert_eq!([r, g, b], expected, "mismatch at x = {x}");
        }
    }

    #[test]
    fn test_specular_alpha_tracks_light_alpha() {
        // The specular table's alpha channel scales with light and material
        // alpha, unlike the diffuse table's alpha which is the pure exponent.
        let params = LutParams {
            shininess: 2.0,
            light_color: Vec4::new(1.0, 1.0, 1.0, 0.5),
            material_specular: Vec4::ONE,
            ..earth_params(16, 16)
        };
        let lut = LightingLut::build(&params);
        let nh = 8.0 / 16.0;
        let expected = (nh * nh * 0.5 * 255.0_f32).min(255.0).round() as u8;
        assert_eq!(lut.specular_pixel(8)[3], expected);
    }
}
