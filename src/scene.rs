//! The GPU resources of one demo variant.

use crate::application::settings::{SceneKind, Settings};
use crate::errors::*;
use crate::video::backend;
use crate::video::prelude::*;

/// Name of the sampler uniform in the textured shader.
pub const SAMPLER_UNIFORM: &str = "tex0";
/// Name of the float uniform both shaders scale their positions with.
pub const SCALE_UNIFORM: &str = "scale";

/// Everything one draw call needs.
///
/// Fields drop in declaration order, so teardown releases the vertex array, the vertex
/// buffer, the index buffer, the texture and finally the program.
pub struct RenderScene {
    vertex_array: VertexArray,
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    texture: Option<Texture>,
    program: ShaderProgram,
    index_count: usize,
}

impl RenderScene {
    pub fn new(settings: &Settings) -> Result<Self> {
        let assets = &settings.assets;
        match settings.scene {
            SceneKind::Quad => {
                let program = ShaderProgram::from_files(&assets.quad_vs, &assets.quad_fs)?;
                let params = TextureParams::default();
                let texture = Texture::from_path(&assets.quad_texture, params)?;
                texture.assign_uniform(&program, SAMPLER_UNIFORM, params.unit)?;

                Self::from_parts(&Mesh::quad(), program, Some(texture))
            }
            SceneKind::Triangle => {
                let program =
                    ShaderProgram::from_files(&assets.triangle_vs, &assets.triangle_fs)?;

                Self::from_parts(&Mesh::triangle(), program, None)
            }
        }
    }

    /// Uploads `mesh` and wires its layout into a new vertex array.
    pub fn from_parts(
        mesh: &Mesh,
        program: ShaderProgram,
        texture: Option<Texture>,
    ) -> Result<Self> {
        let vertex_array = VertexArray::new()?;
        vertex_array.bind();

        let vertex_buffer = Buffer::vertices(mesh)?;
        let index_buffer = Buffer::indices(mesh)?;
        vertex_array.link_layout(&vertex_buffer, mesh.layout())?;

        // The element buffer binding is recorded by the vertex array, unbind it last.
        vertex_array.unbind();
        vertex_buffer.unbind();
        index_buffer.unbind();

        info!(
            "Uploaded mesh with {} vertices and {} indices.",
            mesh.vertex_count(),
            mesh.index_count()
        );

        Ok(RenderScene {
            vertex_array,
            vertex_buffer,
            index_buffer,
            texture,
            program,
            index_count: mesh.index_count(),
        })
    }

    /// Issues the draw call of one frame.
    pub fn draw(&self, scale: f32) -> Result<()> {
        self.program.activate();
        self.program.set_uniform_f32(SCALE_UNIFORM, scale)?;

        if let Some(ref texture) = self.texture {
            texture.bind();
        }

        self.vertex_array.bind();
        backend::draw_elements(self.index_count)?;
        Ok(())
    }

    #[inline]
    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    #[inline]
    pub fn vertex_buffer(&self) -> &Buffer {
        &self.vertex_buffer
    }

    #[inline]
    pub fn index_buffer(&self) -> &Buffer {
        &self.index_buffer
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.index_count
    }
}
