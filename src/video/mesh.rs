//! Immutable mesh values and the layout that tells the GPU how to read them.

use std::mem;

use smallvec::SmallVec;

use super::errors::MeshError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VertexFormat {
    Byte,
    UByte,
    Short,
    UShort,
    Float,
}

impl VertexFormat {
    /// Size in bytes of one component.
    pub fn size(self) -> usize {
        match self {
            VertexFormat::Byte | VertexFormat::UByte => 1,
            VertexFormat::Short | VertexFormat::UShort => 2,
            VertexFormat::Float => 4,
        }
    }
}

/// Binds a range of every vertex to a numbered shader input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Attribute {
    /// The `layout (location = N)` slot of the shader input.
    pub slot: u32,
    /// The data type of each component of this attribute.
    pub format: VertexFormat,
    /// The number of components, between 1 and 4.
    pub components: u8,
    /// Byte offset of the attribute relative to the start of a vertex.
    pub offset: usize,
}

/// Defines the layout of interleaved vertex data.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct VertexLayout {
    stride: usize,
    attributes: SmallVec<[Attribute; 4]>,
}

impl VertexLayout {
    /// Creates a new an empty `VertexLayoutBuilder`.
    #[inline]
    pub fn build() -> VertexLayoutBuilder {
        VertexLayoutBuilder::new()
    }

    /// Stride of single vertex structure in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the attribute bound to `slot`.
    pub fn attribute(&self, slot: u32) -> Option<&Attribute> {
        self.attributes.iter().find(|v| v.slot == slot)
    }
}

pub struct VertexLayoutBuilder {
    attributes: SmallVec<[(u32, VertexFormat, u8); 4]>,
}

impl VertexLayoutBuilder {
    #[inline]
    pub fn new() -> Self {
        VertexLayoutBuilder {
            attributes: SmallVec::new(),
        }
    }

    /// Appends an attribute. Setting a slot twice rewrites it in place.
    pub fn with(&mut self, slot: u32, format: VertexFormat, components: u8) -> &mut Self {
        match self.attributes.iter_mut().find(|v| v.0 == slot) {
            Some(v) => *v = (slot, format, components),
            None => self.attributes.push((slot, format, components)),
        }

        self
    }

    /// Packs the attributes tightly in declaration order.
    pub fn finish(&mut self) -> VertexLayout {
        let mut layout = VertexLayout::default();
        for &(slot, format, components) in &self.attributes {
            layout.attributes.push(Attribute {
                slot,
                format,
                components,
                offset: layout.stride,
            });

            layout.stride += format.size() * components as usize;
        }

        layout
    }
}

/// Interleaved `f32` vertices plus `u32` triangle indices.
///
/// A `Mesh` is validated on construction and never mutated afterwards; uploading a different
/// shape means building a new `Mesh` and new buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<f32>,
    indices: Vec<u32>,
    layout: VertexLayout,
}

impl Mesh {
    pub fn new(
        vertices: Vec<f32>,
        indices: Vec<u32>,
        layout: VertexLayout,
    ) -> Result<Self, MeshError> {
        if vertices.is_empty() || indices.is_empty() {
            return Err(MeshError::Empty);
        }

        let float = mem::size_of::<f32>();
        if layout.stride() == 0 || layout.stride() % float != 0 {
            return Err(MeshError::InvalidStride(layout.stride()));
        }

        let floats_per_vertex = layout.stride() / float;
        if vertices.len() % floats_per_vertex != 0 {
            return Err(MeshError::MisalignedVertices {
                len: vertices.len(),
                floats_per_vertex,
            });
        }

        let len = vertices.len() / floats_per_vertex;
        if let Some(&index) = indices.iter().find(|&&v| v as usize >= len) {
            return Err(MeshError::IndexOutOfBounds {
                index,
                vertices: len,
            });
        }

        Ok(Mesh {
            vertices,
            indices,
            layout,
        })
    }

    /// A unit quad with position, color and texture coordinates.
    pub fn quad() -> Self {
        #[rustfmt::skip]
        let vertices = vec![
        //  COORDINATES         COLORS             TEXCOORDS
            -0.5, -0.5, 0.0,    1.0, 0.0, 0.0,    0.0, 0.0, // lower left
            -0.5,  0.5, 0.0,    0.0, 1.0, 0.0,    0.0, 1.0, // upper left
             0.5,  0.5, 0.0,    0.0, 0.0, 1.0,    1.0, 1.0, // upper right
             0.5, -0.5, 0.0,    1.0, 1.0, 1.0,    1.0, 0.0, // lower right
        ];

        let indices = vec![0, 2, 1, 0, 3, 2];

        let layout = VertexLayout::build()
            .with(0, VertexFormat::Float, 3)
            .with(1, VertexFormat::Float, 3)
            .with(2, VertexFormat::Float, 2)
            .finish();

        Mesh {
            vertices,
            indices,
            layout,
        }
    }

    /// An equilateral triangle split into three colored triangles around an inner hole.
    pub fn triangle() -> Self {
        let h = 3f32.sqrt();

        #[rustfmt::skip]
        let vertices = vec![
            -0.5,        -0.5 * h / 3.0,       0.0,    0.1, 0.0, 0.5, // lower left
             0.5,        -0.5 * h / 3.0,       0.0,    0.0, 0.1, 0.5, // lower right
             0.0,         0.5 * h * 2.0 / 3.0, 0.0,    0.2, 0.3, 0.3, // upper
            -0.5 / 2.0,   0.5 * h / 6.0,       0.0,    0.4, 0.4, 0.5, // inner left
             0.5 / 2.0,   0.5 * h / 6.0,       0.0,    0.5, 0.6, 0.9, // inner right
             0.0,        -0.5 * h / 3.0,       0.0,    1.0, 0.0, 0.2, // inner down
        ];

        let indices = vec![0, 3, 5, 3, 2, 4, 5, 4, 1];

        let layout = VertexLayout::build()
            .with(0, VertexFormat::Float, 3)
            .with(1, VertexFormat::Float, 3)
            .finish();

        Mesh {
            vertices,
            indices,
            layout,
        }
    }

    #[inline]
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() * mem::size_of::<f32>() / self.layout.stride()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
