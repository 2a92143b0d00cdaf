use std::marker::PhantomData;
use std::os::raw::c_void;
use std::ptr;

use gl;
use gl::types::*;

use super::backend::check;
use super::errors::*;
use super::mesh::Mesh;

/// The binding point of a buffer. Vertex data and element indices live behind distinct
/// targets even though they share the `Buffer` wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// `GL_ARRAY_BUFFER`.
    Vertex,
    /// `GL_ELEMENT_ARRAY_BUFFER`.
    Index,
}

/// An immutable GPU buffer, uploaded once with `GL_STATIC_DRAW`.
#[derive(Debug)]
pub struct Buffer {
    id: GLuint,
    target: BufferTarget,
    len: usize,
    _marker: PhantomData<*const ()>,
}

impl Buffer {
    /// Generates a buffer object and uploads `bytes` into it. The buffer is left bound to
    /// its target.
    pub fn new(target: BufferTarget, bytes: &[u8]) -> Result<Self> {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }

        if id == 0 {
            return Err(Error::Allocation("buffer"));
        }

        let buffer = Buffer {
            id,
            target,
            len: bytes.len(),
            _marker: PhantomData,
        };

        let data = if bytes.is_empty() {
            ptr::null()
        } else {
            bytes.as_ptr() as *const c_void
        };

        unsafe {
            gl::BindBuffer(target.into(), id);
            gl::BufferData(
                target.into(),
                bytes.len() as GLsizeiptr,
                data,
                gl::STATIC_DRAW,
            );
        }

        check()?;
        debug!("Created {:?} buffer {} with {} bytes.", target, id, bytes.len());
        Ok(buffer)
    }

    /// Uploads the interleaved vertices of `mesh`.
    #[inline]
    pub fn vertices(mesh: &Mesh) -> Result<Self> {
        Buffer::new(BufferTarget::Vertex, mesh.vertex_bytes())
    }

    /// Uploads the indices of `mesh`. A vertex array should be bound, since it records the
    /// element buffer binding.
    #[inline]
    pub fn indices(mesh: &Mesh) -> Result<Self> {
        Buffer::new(BufferTarget::Index, mesh.index_bytes())
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn target(&self) -> BufferTarget {
        self.target
    }

    /// Size of the data store in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(self.target.into(), self.id);
        }
    }

    #[inline]
    pub fn unbind(&self) {
        unsafe {
            gl::BindBuffer(self.target.into(), 0);
        }
    }

    /// Copies the whole data store back into client memory. Leaves the buffer bound.
    pub fn read_back(&self) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; self.len];
        if self.len > 0 {
            unsafe {
                gl::BindBuffer(self.target.into(), self.id);
                gl::GetBufferSubData(
                    self.target.into(),
                    0,
                    self.len as GLsizeiptr,
                    bytes.as_mut_ptr() as *mut c_void,
                );
            }
        }

        check()?;
        Ok(bytes)
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        debug!("Deleting {:?} buffer {}.", self.target, self.id);
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
