//! Surface map loading with procedural fallbacks.
//!
//! The viewer looks for `earth.png`, `earth_normal.png`, and `earth_height.png`
//! next to the executable (or in a directory given on the command line). Any
//! map that fails to load is replaced by a procedural stand-in so the viewer
//! always starts: a checkerboard base color, a flat tangent-space normal map,
//! and a sine-ridged height field that gives the bump toggle something to
//! show.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use helios_render::{GpuTexture, TextureError, upload_rgba_texture};
use tracing::{info, warn};

/// Decoded RGBA8 image.
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Errors raised while decoding a PNG from disk.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to open image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode PNG: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("unsupported PNG color type {0:?}")]
    UnsupportedColorType(png::ColorType),
}

/// Decode a PNG file into tightly packed RGBA8.
pub fn load_png(path: &Path) -> Result<ImageData, ImageError> {
    let decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    let mut reader = decoder.read_info()?;
    let mut buffer = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buffer)?;
    buffer.truncate(frame.buffer_size());

    let pixels = match frame.color_type {
        png::ColorType::Rgba => buffer,
        png::ColorType::Rgb => buffer
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        png::ColorType::Grayscale => buffer
            .iter()
            .flat_map(|&v| [v, v, v, 255])
            .collect(),
        other => return Err(ImageError::UnsupportedColorType(other)),
    };

    Ok(ImageData {
        width: frame.width,
        height: frame.height,
        pixels,
    })
}

/// Checkerboard base color: alternating light and dark blue cells.
pub fn checkerboard(size: u32, cell: u32) -> ImageData {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let even = ((x / cell) + (y / cell)) % 2 == 0;
            if even {
                pixels.extend_from_slice(&[70, 130, 200, 255]);
            } else {
                pixels.extend_from_slice(&[25, 50, 90, 255]);
            }
        }
    }
    ImageData {
        width: size,
        height: size,
        pixels,
    }
}

/// Flat tangent-space normal map: every texel encodes (0, 0, 1).
pub fn flat_normal_map(size: u32) -> ImageData {
    let pixels = [128, 128, 255, 255].repeat((size * size) as usize);
    ImageData {
        width: size,
        height: size,
        pixels,
    }
}

/// Sine-ridged height field in the red channel.
pub fn ridged_height_map(size: u32) -> ImageData {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let u = x as f32 / size as f32;
            let v = y as f32 / size as f32;
            let ridges = ((u * 24.0).sin() * (v * 24.0).sin()).abs();
            let height = (ridges * 255.0).round() as u8;
            pixels.extend_from_slice(&[height, height, height, 255]);
        }
    }
    ImageData {
        width: size,
        height: size,
        pixels,
    }
}

fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    image: &ImageData,
    srgb: bool,
) -> Result<GpuTexture, TextureError> {
    upload_rgba_texture(
        device,
        queue,
        label,
        image.width,
        image.height,
        &image.pixels,
        srgb,
    )
}

/// The three surface maps bound by the sphere pipeline.
pub struct SurfaceMaps {
    pub base: GpuTexture,
    pub normal: GpuTexture,
    pub height: GpuTexture,
}

/// Load the surface maps from `dir`, falling back to procedural stand-ins.
///
/// The base color is sRGB; normal and height maps carry geometry data and
/// stay linear.
pub fn load_surface_maps(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    dir: &Path,
) -> Result<SurfaceMaps, TextureError> {
    let base = match load_png(&dir.join("earth.png")) {
        Ok(image) => {
            info!("Loaded base color map ({}x{})", image.width, image.height);
            upload(device, queue, "base-map", &image, true)?
        }
        Err(e) => {
            warn!("Base color map unavailable ({e}), using checkerboard");
            upload(device, queue, "base-map", &checkerboard(256, 32), true)?
        }
    };

    let normal = match load_png(&dir.join("earth_normal.png")) {
        Ok(image) => {
            info!("Loaded normal map ({}x{})", image.width, image.height);
            upload(device, queue, "normal-map", &image, false)?
        }
        Err(e) => {
            warn!("Normal map unavailable ({e}), using flat normals");
            upload(device, queue, "normal-map", &flat_normal_map(64), false)?
        }
    };

    let height = match load_png(&dir.join("earth_height.png")) {
        Ok(image) => {
            info!("Loaded height map ({}x{})", image.width, image.height);
            upload(device, queue, "height-map", &image, false)?
        }
        Err(e) => {
            warn!("Height map unavailable ({e}), using procedural ridges");
            upload(device, queue, "height-map", &ridged_height_map(256), false)?
        }
    };

    Ok(SurfaceMaps {
        base,
        normal,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_alternates_cells() {
        let image = checkerboard(64, 16);
        assert_eq!(image.pixels.len(), 64 * 64 * 4);
        let texel = |x: u32, y: u32| {
            let offset = ((y * 64 + x) * 4) as usize;
            &image.pixels[offset..offset + 3]
        };
        assert_eq!(texel(0, 0), texel(32, 0));
        assert_ne!(texel(0, 0), texel(16, 0));
        assert_ne!(texel(0, 0), texel(0, 16));
    }

    #[test]
    fn test_flat_normal_map_encodes_up() {
        let image = flat_normal_map(8);
        for texel in image.pixels.chunks_exact(4) {
            assert_eq!(texel, [128, 128, 255, 255]);
        }
    }

    #[test]
    fn test_ridged_height_map_has_relief() {
        let image = ridged_height_map(64);
        let reds: Vec<u8> = image.pixels.chunks_exact(4).map(|t| t[0]).collect();
        let min = reds.iter().min().unwrap();
        let max = reds.iter().max().unwrap();
        assert!(max > min, "height map must not be flat");
    }

    #[test]
    fn test_load_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        let source = checkerboard(16, 4);
        let file = File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(file, source.width, source.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&source.pixels).unwrap();
        writer.finish().unwrap();

        let loaded = load_png(&path).unwrap();
        assert_eq!(loaded.width, 16);
        assert_eq!(loaded.height, 16);
        assert_eq!(loaded.pixels, source.pixels);
    }

    #[test]
    fn test_load_png_missing_file() {
        let result = load_png(Path::new("/nonexistent/never.png"));
        assert!(matches!(result, Err(ImageError::Io(_))));
    }
}
