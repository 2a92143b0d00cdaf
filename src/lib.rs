//! # What is This?
//!
//! glpop is a tiny OpenGL demo. It opens a window, compiles a vertex/fragment shader pair,
//! uploads a hard-coded mesh into GPU buffers and issues one indexed draw call every frame.
//!
//! The GPU objects are wrapped by owners that acquire their handle on construction and
//! release it on drop:
//!
//! * [`Buffer`](video/buffer/struct.Buffer.html) for vertex and index data.
//! * [`VertexArray`](video/vertex_array/struct.VertexArray.html) for attribute layouts.
//! * [`ShaderProgram`](video/shader/struct.ShaderProgram.html) for linked programs.
//! * [`Texture`](video/texture/struct.Texture.html) for decoded images.
//!
//! Every wrapper expects a current OpenGL context on the calling thread, which is what
//! [`Application`](application/struct.Application.html) sets up.
//!
//! ```rust,ignore
//! use glpop::prelude::*;
//!
//! let mut app = Application::new(Settings::default())?;
//! app.run()?;
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub extern crate cgmath;
pub extern crate gl;

pub mod errors;

pub mod application;
pub mod scene;
pub mod video;

pub mod prelude {
    pub use crate::application::lifecycle::Lifecycle;
    pub use crate::application::settings::{AssetPaths, SceneKind, Settings, WindowParams};
    pub use crate::application::Application;
    pub use crate::scene::RenderScene;
    pub use crate::video::prelude::*;
}
