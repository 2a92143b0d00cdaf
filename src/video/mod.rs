//! Thin owners over OpenGL objects.
//!
//! Each wrapper generates its GL object when constructed and deletes it when dropped, so a
//! handle can never be released twice or used after release from safe code. None of them
//! are `Send`: GL objects belong to the context that is current on the creating thread.

pub mod backend;
pub mod buffer;
pub mod errors;
pub mod mesh;
pub mod shader;
pub mod texture;
pub mod vertex_array;

pub mod prelude {
    pub use super::buffer::{Buffer, BufferTarget};
    pub use super::errors::{Error, GlError, MeshError, ShaderError, TextureError};
    pub use super::mesh::{Attribute, Mesh, VertexFormat, VertexLayout};
    pub use super::shader::{ShaderProgram, ShaderStage};
    pub use super::texture::{
        PixelFormat, Texture, TextureData, TextureFilter, TextureParams, TextureTarget,
        TextureWrap,
    };
    pub use super::vertex_array::VertexArray;
}
