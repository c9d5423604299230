//! Texture upload: color/detail maps and lighting lookup tables.

use helios_lighting::LightingLut;

/// Errors raised while preparing texture data for upload.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Pixel data length does not match width * height * 4.
    #[error("texture data is {actual} bytes, expected {expected} for {width}x{height} RGBA8")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Texture with a zero dimension.
    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// A GPU texture with its view.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

/// The two lookup-table textures plus their shared sampler.
///
/// Both tables are RGBA8 in a non-sRGB format: the stored bytes are raw
/// quantized intensities, not color-encoded values, and must not pass through
/// sRGB decoding on sample. The sampler clamps to edge so out-of-range
/// cosines saturate instead of wrapping, and filters linearly to interpolate
/// between table cells.
pub struct LutTextures {
    pub diffuse: GpuTexture,
    pub specular: GpuTexture,
    pub sampler: wgpu::Sampler,
}

/// Upload an RGBA8 image as a 2D texture.
///
/// `srgb` selects `Rgba8UnormSrgb` for color maps; normal and height maps
/// store geometry data and use the linear format.
pub fn upload_rgba_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    data: &[u8],
    srgb: bool,
) -> Result<GpuTexture, TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::ZeroDimension { width, height });
    }
    let expected = width as usize * height as usize * 4;
    if data.len() != expected {
        return Err(TextureError::SizeMismatch {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    let format = if srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    };
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        data,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    Ok(GpuTexture { texture, view })
}

/// Upload both lookup tables of a [`LightingLut`].
///
/// The 1D specular table becomes a width x 1 texture so both tables bind as
/// `texture_2d` and share one sampler.
pub fn upload_lighting_lut(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    lut: &LightingLut,
) -> Result<LutTextures, TextureError> {
    let diffuse = upload_rgba_texture(
        device,
        queue,
        "lut-diffuse",
        lut.width,
        lut.height,
        &lut.diffuse_table,
        false,
    )?;
    let specular = upload_rgba_texture(
        device,
        queue,
        "lut-specular",
        lut.width,
        1,
        &lut.specular_table,
        false,
    )?;
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("lut-sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Nearest,
        ..Default::default()
    });
    Ok(LutTextures {
        diffuse,
        specular,
        sampler,
    })
}

/// Repeat-addressed linear sampler for surface maps.
pub fn surface_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("surface-sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Nearest,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_device() -> Option<(wgpu::Device, wgpu::Queue)> {
        let instance = wgpu::Instance::default();
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .ok()?;
        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default())).ok()
    }

    #[test]
    fn test_upload_rejects_mismatched_size() {
        let Some((device, queue)) = test_device() else {
            return;
        };
        let result = upload_rgba_texture(&device, &queue, "bad", 4, 4, &[0u8; 12], false);
        assert!(matches!(
            result,
            Err(TextureError::SizeMismatch { expected: 64, actual: 12, .. })
        ));
    }

    #[test]
    fn test_upload_rejects_zero_dimension() {
        let Some((device, queue)) = test_device() else {
            return;
        };
        let result = upload_rgba_texture(&device, &queue, "bad", 0, 4, &[], true);
        assert!(matches!(result, Err(TextureError::ZeroDimension { .. })));
    }

    #[test]
    fn test_lut_upload_creates_expected_dimensions() {
        let Some((device, queue)) = test_device() else {
            return;
        };
        let material = helios_lighting::Material::earth();
        let lut = LightingLut::build(&helios_lighting::LutParams {
            width: 8,
            height: 8,
            shininess: material.shininess,
            light_color: glam::Vec4::ONE,
            material_diffuse: material.diffuse,
            material_specular: material.specular,
        });
        let textures = upload_lighting_lut(&device, &queue, &lut).unwrap();
        assert_eq!(textures.diffuse.texture.width(), 8);
        assert_eq!(textures.diffuse.texture.height(), 8);
        assert_eq!(textures.specular.texture.width(), 8);
        assert_eq!(textures.specular.texture.height(), 1);
        assert_eq!(
            textures.diffuse.texture.format(),
            wgpu::TextureFormat::Rgba8Unorm
        );
    }
}
