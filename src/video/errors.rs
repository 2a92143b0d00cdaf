use std::fmt;
use std::path::PathBuf;

use super::shader::ShaderStage;
use super::texture::PixelFormat;

/// Errors raised by the GL driver or by the context it runs in.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "[GL] {}", _0)]
    Gl(GlError),
    #[fail(display = "OpenGL implementation doesn't support {}.", _0)]
    Requirement(String),
    #[fail(display = "[GL] String is malformed.")]
    MalformedString,
    #[fail(display = "[GL] Failed to generate {} object.", _0)]
    Allocation(&'static str),
}

pub type Result<T> = ::std::result::Result<T, Error>;

/// Error codes reported by `glGetError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    Unknown(u32),
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GlError::InvalidEnum => {
                write!(f, "An unacceptable value is specified for an enumerated argument.")
            }
            GlError::InvalidValue => write!(f, "A numeric argument is out of range."),
            GlError::InvalidOperation => {
                write!(f, "The specified operation is not allowed in the current state.")
            }
            GlError::InvalidFramebufferOperation => write!(
                f,
                "The command is trying to render to or read from the framebuffer while the \
                 currently bound framebuffer is not framebuffer complete."
            ),
            GlError::OutOfMemory => {
                write!(f, "There is not enough memory left to execute the command.")
            }
            GlError::Unknown(code) => write!(f, "Unknown OpenGL error 0x{:04X}.", code),
        }
    }
}

#[derive(Debug, Fail)]
pub enum ShaderError {
    #[fail(display = "Failed to read shader source {:?}: {}", path, reason)]
    Io { path: PathBuf, reason: String },
    #[fail(display = "{} shader source contains an interior nul byte.", _0)]
    InvalidSource(ShaderStage),
    #[fail(display = "Shader COMPILATION ERROR for {}:\n{}", stage, log)]
    Compile { stage: ShaderStage, log: String },
    #[fail(display = "Shader LINKING ERROR:\n{}", log)]
    Link { log: String },
    #[fail(display = "Uniform name {:?} contains an interior nul byte.", _0)]
    InvalidName(String),
    #[fail(display = "{}", _0)]
    Backend(#[cause] Error),
}

impl From<Error> for ShaderError {
    fn from(err: Error) -> Self {
        ShaderError::Backend(err)
    }
}

#[derive(Debug, Fail)]
pub enum TextureError {
    #[fail(display = "Failed to decode image {:?}: {}", path, reason)]
    Decode { path: PathBuf, reason: String },
    #[fail(
        display = "Pixel buffer holds {} bytes, but {} are required.",
        actual, expected
    )]
    Size { expected: usize, actual: usize },
    #[fail(display = "Pixels are {:?}, but the texture expects {:?}.", data, params)]
    FormatMismatch {
        data: PixelFormat,
        params: PixelFormat,
    },
    #[fail(display = "{}", _0)]
    Backend(#[cause] Error),
}

impl From<Error> for TextureError {
    fn from(err: Error) -> Self {
        TextureError::Backend(err)
    }
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum MeshError {
    #[fail(display = "Mesh has no vertices or no indices.")]
    Empty,
    #[fail(display = "Vertex stride {} is not a whole number of floats.", _0)]
    InvalidStride(usize),
    #[fail(
        display = "{} floats can not be split into vertices of {} floats.",
        len, floats_per_vertex
    )]
    MisalignedVertices { len: usize, floats_per_vertex: usize },
    #[fail(display = "Index {} is out of bounds, mesh has {} vertices.", index, vertices)]
    IndexOutOfBounds { index: u32, vertices: usize },
}
