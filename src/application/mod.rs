//! The application owns the window, builds the GPU resources once and drives the frame loop.
//!
//! ```text
//! Uninitialized -> WindowCreated -> ResourcesBound -> Running -> Terminated
//! ```

pub mod lifecycle;
pub mod settings;
pub mod window;

use self::lifecycle::Lifecycle;
use self::settings::Settings;
use self::window::{Event, Window};

use crate::errors::*;
use crate::scene::RenderScene;
use crate::video::backend;
use crate::video::backend::capabilities::Capabilities;

#[derive(Debug, Fail)]
pub enum ApplicationError {
    #[fail(display = "Failed to create window: {}", _0)]
    WindowCreation(String),
    #[fail(display = "OpenGL context error: {}", _0)]
    Context(String),
}

pub struct Application {
    settings: Settings,
    lifecycle: Lifecycle,
    window: Window,
}

impl Application {
    /// Creates the window and its context, then validates the context against the minimum
    /// requirements.
    pub fn new(settings: Settings) -> Result<Self> {
        let window = Window::new(&settings.window)?;
        let lifecycle = Lifecycle::default().advance(Lifecycle::WindowCreated)?;

        let capabilities = Capabilities::query()?;
        info!("OpenGL {:#?}", capabilities);
        capabilities.check()?;

        backend::viewport(window.dimensions())?;

        Ok(Application {
            settings,
            lifecycle,
            window,
        })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Builds the scene and runs frames until the window is closed. The GPU resources are
    /// released before this returns, and the lifecycle ends in `Terminated` whether the scene
    /// failed to build, the loop failed, or the window was closed.
    pub fn run(&mut self) -> Result<()> {
        let scene = match RenderScene::new(&self.settings) {
            Ok(scene) => scene,
            Err(err) => {
                self.terminate()?;
                return Err(err);
            }
        };

        self.advance(Lifecycle::ResourcesBound)?;
        self.advance(Lifecycle::Running)?;

        let result = self.run_loop(&scene);

        drop(scene);
        self.terminate()?;
        result
    }

    fn run_loop(&mut self, scene: &RenderScene) -> Result<()> {
        let mut events = Vec::new();
        let mut frames = 0u64;

        loop {
            backend::clear(self.settings.clear_color)?;
            scene.draw(self.settings.scale)?;
            self.window.swap_buffers()?;
            frames += 1;

            self.window.poll_events(&mut events);
            for v in events.drain(..) {
                match v {
                    Event::CloseRequested => {
                        info!("Close requested after {} frames.", frames);
                        return Ok(());
                    }
                    Event::Resized(dimensions) => backend::viewport(dimensions)?,
                }
            }
        }
    }

    fn advance(&mut self, to: Lifecycle) -> Result<()> {
        self.lifecycle = self.lifecycle.advance(to)?;
        Ok(())
    }

    fn terminate(&mut self) -> Result<()> {
        self.lifecycle = self.lifecycle.terminate()?;
        Ok(())
    }
}
