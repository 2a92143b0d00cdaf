use std::marker::PhantomData;
use std::os::raw::c_void;
use std::path::Path;

use cgmath::Vector2;
use gl;
use gl::types::*;
use image;

use super::backend::{check, types};
use super::errors::*;
use super::shader::ShaderProgram;

type Result<T> = ::std::result::Result<T, TextureError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureTarget {
    Texture2D,
}

/// 8-bit per channel pixel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB8,
    RGBA8,
}

impl PixelFormat {
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::RGB8 => 3,
            PixelFormat::RGBA8 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    Mirror,
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    pub target: TextureTarget,
    /// Index of the texture unit, `0` is `GL_TEXTURE0`.
    pub unit: u32,
    pub format: PixelFormat,
    pub wrap: TextureWrap,
    pub filter: TextureFilter,
    pub mipmap: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        TextureParams {
            target: TextureTarget::Texture2D,
            unit: 0,
            format: PixelFormat::RGBA8,
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Nearest,
            mipmap: true,
        }
    }
}

/// Decoded pixels in client memory, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub dimensions: Vector2<u32>,
    pub format: PixelFormat,
    pub bytes: Vec<u8>,
}

impl TextureData {
    pub fn new(dimensions: Vector2<u32>, format: PixelFormat, bytes: Vec<u8>) -> Result<Self> {
        let expected = dimensions.x as usize * dimensions.y as usize * format.channels();
        if bytes.len() != expected {
            return Err(TextureError::Size {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(TextureData {
            dimensions,
            format,
            bytes,
        })
    }

    /// Decodes an image file and flips it vertically, so the first row in memory is the bottom
    /// of the picture like GL texture coordinates expect.
    pub fn from_path<P: AsRef<Path>>(path: P, format: PixelFormat) -> Result<Self> {
        let path = path.as_ref();
        let dynamic = image::open(path)
            .map_err(|err| TextureError::Decode {
                path: path.to_owned(),
                reason: err.to_string(),
            })?
            .flipv();

        let (dimensions, bytes) = match format {
            PixelFormat::RGB8 => {
                let buf = dynamic.to_rgb();
                (buf.dimensions(), buf.into_raw())
            }
            PixelFormat::RGBA8 => {
                let buf = dynamic.to_rgba();
                (buf.dimensions(), buf.into_raw())
            }
        };

        Self::new(Vector2::new(dimensions.0, dimensions.1), format, bytes)
    }

    /// Returns the pixel at `(x, y)`, with `y = 0` being the bottom row.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.dimensions.x || y >= self.dimensions.y {
            return None;
        }

        let channels = self.format.channels();
        let start = (y as usize * self.dimensions.x as usize + x as usize) * channels;
        Some(&self.bytes[start..start + channels])
    }
}

/// A 2D texture bound to a fixed texture unit.
#[derive(Debug)]
pub struct Texture {
    id: GLuint,
    params: TextureParams,
    dimensions: Vector2<u32>,
    _marker: PhantomData<*const ()>,
}

impl Texture {
    /// Decodes the image at `path` and uploads it. The decoded pixels are dropped once the
    /// upload returns.
    pub fn from_path<P: AsRef<Path>>(path: P, params: TextureParams) -> Result<Self> {
        let data = TextureData::from_path(&path, params.format)?;
        info!(
            "Loaded texture {:?} ({}x{}).",
            path.as_ref(),
            data.dimensions.x,
            data.dimensions.y
        );

        Self::new(&data, params)
    }

    /// Uploads `data` into a new texture on `params.unit`, generating mipmaps if requested.
    pub fn new(data: &TextureData, params: TextureParams) -> Result<Self> {
        if data.format != params.format {
            return Err(TextureError::FormatMismatch {
                data: data.format,
                params: params.format,
            });
        }

        let mut id = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
        }

        if id == 0 {
            return Err(Error::Allocation("texture").into());
        }

        let texture = Texture {
            id,
            params,
            dimensions: data.dimensions,
            _marker: PhantomData,
        };

        let target: GLenum = params.target.into();
        let wrap: GLenum = params.wrap.into();
        let (min_filter, mag_filter) = types::texture_filter(params.filter, params.mipmap);
        let (internal_format, format, pixel_type) = types::pixel_format(params.format);

        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + params.unit);
            gl::BindTexture(target, id);

            gl::TexParameteri(target, gl::TEXTURE_WRAP_S, wrap as GLint);
            gl::TexParameteri(target, gl::TEXTURE_WRAP_T, wrap as GLint);
            gl::TexParameteri(target, gl::TEXTURE_MIN_FILTER, min_filter as GLint);
            gl::TexParameteri(target, gl::TEXTURE_MAG_FILTER, mag_filter as GLint);

            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                target,
                0,
                internal_format as GLint,
                data.dimensions.x as GLsizei,
                data.dimensions.y as GLsizei,
                0,
                format,
                pixel_type,
                data.bytes.as_ptr() as *const c_void,
            );

            if params.mipmap {
                gl::GenerateMipmap(target);
            }

            gl::BindTexture(target, 0);
        }

        check()?;
        debug!("Created texture {} on unit {}.", id, params.unit);
        Ok(texture)
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn params(&self) -> TextureParams {
        self.params
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    /// Points the sampler uniform `name` of `program` at texture unit `unit`. Activates
    /// `program` as a side effect.
    pub fn assign_uniform(
        &self,
        program: &ShaderProgram,
        name: &str,
        unit: u32,
    ) -> ::std::result::Result<(), ShaderError> {
        program.activate();
        program.set_uniform_i32(name, unit as i32)
    }

    #[inline]
    pub fn bind(&self) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + self.params.unit);
            gl::BindTexture(self.params.target.into(), self.id);
        }
    }

    #[inline]
    pub fn unbind(&self) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + self.params.unit);
            gl::BindTexture(self.params.target.into(), 0);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        debug!("Deleting texture {}.", self.id);
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}
