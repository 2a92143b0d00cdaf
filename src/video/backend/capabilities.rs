use std::cmp;
use std::ffi::CStr;

use gl;
use gl::types::*;

use super::super::errors::*;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses a `GL_VERSION` string, e.g. `"3.3.0 NVIDIA 390.77"` or `"OpenGL ES 3.0 Mesa"`.
    pub fn parse(desc: &str) -> Result<Version> {
        let (es, desc) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            (true, desc.get(13..).unwrap_or(""))
        } else {
            (false, desc)
        };

        let desc = desc.split(' ').next().ok_or(Error::MalformedString)?;
        let mut iter = desc.split('.');

        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or(Error::MalformedString)?;

        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or(Error::MalformedString)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

/// What the current context reports about itself.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub version: Version,
    pub vendor: String,
    pub renderer: String,
}

impl Capabilities {
    /// Queries the context that is current on this thread.
    pub fn query() -> Result<Capabilities> {
        let version = Version::parse(&string(gl::VERSION)?)?;
        let vendor = string(gl::VENDOR)?;
        let renderer = string(gl::RENDERER)?;

        Ok(Capabilities {
            version,
            vendor,
            renderer,
        })
    }

    /// Vertex array objects and `#version 330 core` shaders need a desktop 3.3 context. ES
    /// contexts reject `330 core` sources, so they never pass.
    pub fn check(&self) -> Result<()> {
        if self.version >= Version::GL(3, 3) {
            Ok(())
        } else {
            Err(Error::Requirement(format!(
                "{:?}, at least OpenGL 3.3 is required",
                self.version
            )))
        }
    }
}

fn string(name: GLenum) -> Result<String> {
    unsafe {
        let desc = gl::GetString(name);
        if desc.is_null() {
            return Err(Error::MalformedString);
        }

        CStr::from_ptr(desc as *const _)
            .to_str()
            .map(|v| v.to_owned())
            .map_err(|_| Error::MalformedString)
    }
}
