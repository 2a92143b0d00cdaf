//! The few free-standing GL calls that do not belong to any owned object: function loading,
//! error checks, clearing, viewport and the indexed draw call.

pub mod capabilities;
pub mod types;

use std::os::raw::c_void;

use cgmath::Vector2;
use gl;
use gl::types::*;

use super::errors::*;

/// Loads the GL function pointers with the given symbol resolver.
///
/// # Unsafe
///
/// The resolver must return pointers belonging to the context that is current on this
/// thread, otherwise every later GL call is undefined behavior.
pub unsafe fn load_with<F>(loader: F)
where
    F: FnMut(&str) -> *const c_void,
{
    gl::load_with(loader);
}

/// Maps a `glGetError` code into `GlError`, `None` means no error.
pub fn gl_error(code: GLenum) -> Option<GlError> {
    match code {
        gl::NO_ERROR => None,
        gl::INVALID_ENUM => Some(GlError::InvalidEnum),
        gl::INVALID_VALUE => Some(GlError::InvalidValue),
        gl::INVALID_OPERATION => Some(GlError::InvalidOperation),
        gl::INVALID_FRAMEBUFFER_OPERATION => Some(GlError::InvalidFramebufferOperation),
        gl::OUT_OF_MEMORY => Some(GlError::OutOfMemory),
        v => Some(GlError::Unknown(v)),
    }
}

/// Pops the oldest error flag of the current context.
pub fn check() -> Result<()> {
    match gl_error(unsafe { gl::GetError() }) {
        None => Ok(()),
        Some(err) => Err(Error::Gl(err)),
    }
}

/// Clears the color buffer of the default framebuffer.
pub fn clear(color: [f32; 4]) -> Result<()> {
    unsafe {
        gl::ClearColor(color[0], color[1], color[2], color[3]);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }

    check()
}

pub fn viewport(dimensions: Vector2<u32>) -> Result<()> {
    unsafe {
        gl::Viewport(0, 0, dimensions.x as GLsizei, dimensions.y as GLsizei);
    }

    check()
}

/// Draws `len` `u32` indices from the bound index buffer as triangles, using the
/// currently bound program and vertex array.
pub fn draw_elements(len: usize) -> Result<()> {
    unsafe {
        gl::DrawElements(
            gl::TRIANGLES,
            len as GLsizei,
            gl::UNSIGNED_INT,
            ::std::ptr::null(),
        );
    }

    check()
}

/// Reads one RGBA8 pixel from the bound read framebuffer. The origin is the lower-left corner.
pub fn read_pixel(position: Vector2<u32>) -> Result<[u8; 4]> {
    let mut pixel = [0u8; 4];
    unsafe {
        gl::PixelStorei(gl::PACK_ALIGNMENT, 1);
        gl::ReadPixels(
            position.x as GLint,
            position.y as GLint,
            1,
            1,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixel.as_mut_ptr() as *mut c_void,
        );
    }

    check()?;
    Ok(pixel)
}
