use std::marker::PhantomData;
use std::os::raw::c_void;

use gl;
use gl::types::*;

use super::backend::check;
use super::buffer::Buffer;
use super::errors::*;
use super::mesh::{Attribute, VertexLayout};

/// Records how buffer bytes feed the numbered inputs of a vertex shader, plus the element
/// buffer used for indexed draws.
#[derive(Debug)]
pub struct VertexArray {
    id: GLuint,
    _marker: PhantomData<*const ()>,
}

impl VertexArray {
    pub fn new() -> Result<Self> {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }

        if id == 0 {
            return Err(Error::Allocation("vertex array"));
        }

        check()?;
        debug!("Created vertex array {}.", id);
        Ok(VertexArray {
            id,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    #[inline]
    pub fn unbind(&self) {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Binds `buffer` and declares `attribute` over it with the given vertex stride, then
    /// enables the attribute slot. The buffer stays bound afterwards.
    ///
    /// This vertex array must be bound. Slots are not checked for uniqueness.
    pub fn link_attribute(
        &self,
        buffer: &Buffer,
        attribute: &Attribute,
        stride: usize,
    ) -> Result<()> {
        buffer.bind();
        unsafe {
            gl::VertexAttribPointer(
                attribute.slot,
                GLint::from(attribute.components),
                attribute.format.into(),
                gl::FALSE,
                stride as GLsizei,
                attribute.offset as *const c_void,
            );

            gl::EnableVertexAttribArray(attribute.slot);
        }

        check()
    }

    /// Links every attribute of `layout` against `buffer`.
    pub fn link_layout(&self, buffer: &Buffer, layout: &VertexLayout) -> Result<()> {
        for attribute in layout.attributes() {
            self.link_attribute(buffer, attribute, layout.stride())?;
        }

        Ok(())
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        debug!("Deleting vertex array {}.", self.id);
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
