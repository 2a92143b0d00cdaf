//! Functions for loading demo settings.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use cgmath::Vector2;
use serde::{Deserialize, Serialize};

use crate::errors::*;

/// A structure containing configuration data for the demo, which are used to specify the
/// window, the mesh variant to draw and the files it reads.
///
/// Every field falls back to its default, so a settings file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowParams,
    pub scene: SceneKind,
    pub assets: AssetPaths,
    /// RGBA color the back buffer is cleared to every frame.
    pub clear_color: [f32; 4],
    /// Value of the `scale` uniform handed to both shaders.
    pub scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowParams::default(),
            scene: SceneKind::default(),
            assets: AssetPaths::default(),
            clear_color: [0.07, 0.13, 0.17, 1.0],
            scale: 0.5,
        }
    }
}

impl Settings {
    /// Loads settings from an utf-8 encoded json file.
    pub fn load<T: AsRef<Path>>(path: T) -> Result<Settings> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|err| format_err!("Failed to open settings {:?}: {}", path, err))?;

        let settings = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| format_err!("Failed to parse settings {:?}: {}", path, err))?;

        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
    /// Creates the window hidden, mostly useful for tests that only need a context.
    pub visible: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "OpenGL Tutorial".to_owned(),
            size: Vector2::new(800, 800),
            multisample: 0,
            vsync: true,
            visible: true,
        }
    }
}

/// Which of the built-in meshes gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// A textured quad.
    Quad,
    /// A vertex-colored triangle.
    Triangle,
}

impl Default for SceneKind {
    fn default() -> Self {
        SceneKind::Quad
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub quad_vs: PathBuf,
    pub quad_fs: PathBuf,
    pub quad_texture: PathBuf,
    pub triangle_vs: PathBuf,
    pub triangle_fs: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            quad_vs: "assets/default.vert".into(),
            quad_fs: "assets/default.frag".into(),
            quad_texture: "assets/pop_cat.png".into(),
            triangle_vs: "assets/color.vert".into(),
            triangle_fs: "assets/color.frag".into(),
        }
    }
}
