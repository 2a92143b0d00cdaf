use gl;
use gl::types::*;

use super::super::buffer::BufferTarget;
use super::super::mesh::VertexFormat;
use super::super::shader::ShaderStage;
use super::super::texture::{PixelFormat, TextureFilter, TextureTarget, TextureWrap};

impl From<BufferTarget> for GLenum {
    fn from(target: BufferTarget) -> Self {
        match target {
            BufferTarget::Vertex => gl::ARRAY_BUFFER,
            BufferTarget::Index => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

impl From<VertexFormat> for GLenum {
    fn from(format: VertexFormat) -> Self {
        match format {
            VertexFormat::Byte => gl::BYTE,
            VertexFormat::UByte => gl::UNSIGNED_BYTE,
            VertexFormat::Short => gl::SHORT,
            VertexFormat::UShort => gl::UNSIGNED_SHORT,
            VertexFormat::Float => gl::FLOAT,
        }
    }
}

impl From<ShaderStage> for GLenum {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl From<TextureTarget> for GLenum {
    fn from(target: TextureTarget) -> Self {
        match target {
            TextureTarget::Texture2D => gl::TEXTURE_2D,
        }
    }
}

impl From<TextureWrap> for GLenum {
    fn from(wrap: TextureWrap) -> Self {
        match wrap {
            TextureWrap::Repeat => gl::REPEAT,
            TextureWrap::Mirror => gl::MIRRORED_REPEAT,
            TextureWrap::Clamp => gl::CLAMP_TO_EDGE,
        }
    }
}

/// Returns the `(internal format, format, pixel type)` triple of a pixel format.
pub fn pixel_format(format: PixelFormat) -> (GLenum, GLenum, GLenum) {
    match format {
        PixelFormat::RGB8 => (gl::RGB8, gl::RGB, gl::UNSIGNED_BYTE),
        PixelFormat::RGBA8 => (gl::RGBA8, gl::RGBA, gl::UNSIGNED_BYTE),
    }
}

/// Returns the `(min, mag)` filters, picking a mipmapped minification filter when the
/// texture has more than one level.
pub fn texture_filter(filter: TextureFilter, mipmap: bool) -> (GLenum, GLenum) {
    match filter {
        TextureFilter::Nearest => {
            let min = if mipmap {
                gl::NEAREST_MIPMAP_NEAREST
            } else {
                gl::NEAREST
            };

            (min, gl::NEAREST)
        }
        TextureFilter::Linear => {
            let min = if mipmap {
                gl::LINEAR_MIPMAP_LINEAR
            } else {
                gl::LINEAR
            };

            (min, gl::LINEAR)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn buffer_targets_are_distinct() {
        let vertex: GLenum = BufferTarget::Vertex.into();
        let index: GLenum = BufferTarget::Index.into();
        assert_eq!(vertex, gl::ARRAY_BUFFER);
        assert_eq!(index, gl::ELEMENT_ARRAY_BUFFER);
        assert_ne!(vertex, index);
    }

    #[test]
    fn stages() {
        assert_eq!(GLenum::from(ShaderStage::Vertex), gl::VERTEX_SHADER);
        assert_eq!(GLenum::from(ShaderStage::Fragment), gl::FRAGMENT_SHADER);
    }

    #[test]
    fn filters() {
        assert_eq!(
            texture_filter(TextureFilter::Linear, true),
            (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR)
        );

        assert_eq!(
            texture_filter(TextureFilter::Nearest, false),
            (gl::NEAREST, gl::NEAREST)
        );
    }

    #[test]
    fn pixels() {
        assert_eq!(pixel_format(PixelFormat::RGBA8).1, gl::RGBA);
        assert_eq!(pixel_format(PixelFormat::RGB8).0, gl::RGB8);
    }
}
