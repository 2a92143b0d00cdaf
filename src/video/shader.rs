use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;
use std::ptr;

use gl;
use gl::types::*;

use super::backend::check;
use super::errors::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderStage::Vertex => write!(f, "VERTEX"),
            ShaderStage::Fragment => write!(f, "FRAGMENT"),
        }
    }
}

/// Reads a whole shader source file as text.
pub fn read_source<P: AsRef<Path>>(path: P) -> ::std::result::Result<String, ShaderError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| ShaderError::Io {
        path: path.to_owned(),
        reason: err.to_string(),
    })
}

/// A compiled stage object, deleted once the program has been linked.
struct Stage(GLuint);

impl Drop for Stage {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.0);
        }
    }
}

/// A linked vertex + fragment program.
#[derive(Debug)]
pub struct ShaderProgram {
    id: GLuint,
    uniforms: RefCell<HashMap<String, Option<GLint>>>,
    _marker: PhantomData<*const ()>,
}

impl ShaderProgram {
    /// Reads both sources before touching the GL, so an unreadable path never produces a
    /// half-built program.
    pub fn from_files<P1, P2>(vs: P1, fs: P2) -> ::std::result::Result<Self, ShaderError>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
    {
        let vs_src = read_source(&vs)?;
        let fs_src = read_source(&fs)?;

        info!(
            "Building shader program from {:?} and {:?}.",
            vs.as_ref(),
            fs.as_ref()
        );

        Self::from_sources(&vs_src, &fs_src)
    }

    pub fn from_sources(vs: &str, fs: &str) -> ::std::result::Result<Self, ShaderError> {
        let vs = compile(ShaderStage::Vertex, vs)?;
        let fs = compile(ShaderStage::Fragment, fs)?;
        let id = link(&[&vs, &fs])?;

        debug!("Linked shader program {}.", id);
        Ok(ShaderProgram {
            id,
            uniforms: RefCell::new(HashMap::new()),
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Makes this program the one used by subsequent draw calls.
    #[inline]
    pub fn activate(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Returns the location of an active uniform, `None` if the program has no such uniform.
    /// Locations are cached per name, so a missing uniform is reported once.
    pub fn uniform_location(
        &self,
        name: &str,
    ) -> ::std::result::Result<Option<GLint>, ShaderError> {
        if let Some(&location) = self.uniforms.borrow().get(name) {
            return Ok(location);
        }

        let c_name =
            CString::new(name.as_bytes()).map_err(|_| ShaderError::InvalidName(name.to_owned()))?;

        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        check()?;

        let location = if location == -1 {
            warn!("Uniform {:?} is not active in program {}.", name, self.id);
            None
        } else {
            Some(location)
        };

        self.uniforms.borrow_mut().insert(name.to_owned(), location);

        Ok(location)
    }

    /// Sets a float uniform. The program must be active.
    pub fn set_uniform_f32(
        &self,
        name: &str,
        value: f32,
    ) -> ::std::result::Result<(), ShaderError> {
        if let Some(location) = self.uniform_location(name)? {
            unsafe { gl::Uniform1f(location, value) };
        }

        Ok(check()?)
    }

    /// Sets an integer uniform, e.g. a sampler unit. The program must be active.
    pub fn set_uniform_i32(
        &self,
        name: &str,
        value: i32,
    ) -> ::std::result::Result<(), ShaderError> {
        if let Some(location) = self.uniform_location(name)? {
            unsafe { gl::Uniform1i(location, value) };
        }

        Ok(check()?)
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        debug!("Deleting shader program {}.", self.id);
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn compile(stage: ShaderStage, src: &str) -> ::std::result::Result<Stage, ShaderError> {
    let c_str = CString::new(src.as_bytes()).map_err(|_| ShaderError::InvalidSource(stage))?;

    unsafe {
        let shader = Stage(gl::CreateShader(stage.into()));
        gl::ShaderSource(shader.0, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(shader.0);

        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut status);

        if status != GLint::from(gl::TRUE) {
            let mut len = 0;
            gl::GetShaderiv(shader.0, gl::INFO_LOG_LENGTH, &mut len);

            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written = 0;
            gl::GetShaderInfoLog(
                shader.0,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            );

            buf.truncate(written.max(0) as usize);
            return Err(ShaderError::Compile {
                stage,
                log: String::from_utf8_lossy(&buf).into_owned(),
            });
        }

        check()?;
        Ok(shader)
    }
}

/// Links the stages into a new program. The stages are detached afterwards whether or not
/// linking succeeded; their objects are deleted when the caller drops them.
fn link(stages: &[&Stage]) -> ::std::result::Result<GLuint, ShaderError> {
    unsafe {
        let program = gl::CreateProgram();
        for stage in stages {
            gl::AttachShader(program, stage.0);
        }

        gl::LinkProgram(program);

        for stage in stages {
            gl::DetachShader(program, stage.0);
        }

        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        if status != GLint::from(gl::TRUE) {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);

            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written = 0;
            gl::GetProgramInfoLog(
                program,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            );

            gl::DeleteProgram(program);

            buf.truncate(written.max(0) as usize);
            return Err(ShaderError::Link {
                log: String::from_utf8_lossy(&buf).into_owned(),
            });
        }

        if let Err(err) = check() {
            gl::DeleteProgram(program);
            return Err(err.into());
        }

        Ok(program)
    }
}
