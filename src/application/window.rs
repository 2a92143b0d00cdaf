//! Represents an OpenGL context and the window around it.

use cgmath::Vector2;
use glutin;
use glutin::GlContext;

use super::settings::WindowParams;
use super::ApplicationError;
use crate::video::backend;

/// The window events the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The window was asked to close, or Escape was pressed.
    CloseRequested,
    /// The framebuffer has a new size in physical pixels.
    Resized(Vector2<u32>),
}

pub struct Window {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl Window {
    /// Creates the window with an OpenGL 3.3 core context, makes the context current on this
    /// thread and loads the GL functions from it.
    pub fn new(params: &WindowParams) -> Result<Self, ApplicationError> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ))
            .with_visibility(params.visible);

        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)
            .map_err(|err| ApplicationError::WindowCreation(err.to_string()))?;

        unsafe {
            window
                .make_current()
                .map_err(|err| ApplicationError::Context(err.to_string()))?;

            backend::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        }

        info!(
            "Created window {:?} ({}x{}).",
            params.title, params.size.x, params.size.y
        );

        Ok(Window {
            window,
            events_loop,
        })
    }

    /// Returns the size of the framebuffer in physical pixels.
    pub fn dimensions(&self) -> Vector2<u32> {
        let dpr = self.window.get_hidpi_factor();
        match self.window.get_inner_size() {
            Some(size) => {
                let size = size.to_physical(dpr);
                Vector2::new(size.width as u32, size.height as u32)
            }
            None => Vector2::new(0, 0),
        }
    }

    /// Collects the pending events without blocking.
    pub fn poll_events(&mut self, events: &mut Vec<Event>) {
        let dpr = self.window.get_hidpi_factor();
        self.events_loop.poll_events(|v| {
            if let glutin::Event::WindowEvent { event, .. } = v {
                if let Some(e) = from_window_event(&event, dpr) {
                    events.push(e);
                }
            }
        });
    }

    /// Presents the back buffer, blocking on vsync if it was requested.
    pub fn swap_buffers(&self) -> Result<(), ApplicationError> {
        self.window
            .swap_buffers()
            .map_err(|err| ApplicationError::Context(err.to_string()))
    }
}

pub fn from_window_event(source: &glutin::WindowEvent, dpr: f64) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(Event::CloseRequested),

        glutin::WindowEvent::Resized(size) => {
            let size = size.to_physical(dpr);
            Some(Event::Resized(Vector2::new(
                size.width as u32,
                size.height as u32,
            )))
        }

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Pressed,
                    virtual_keycode: Some(glutin::VirtualKeyCode::Escape),
                    ..
                },
            ..
        } => Some(Event::CloseRequested),

        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn close() {
        assert_eq!(
            from_window_event(&glutin::WindowEvent::CloseRequested, 1.0),
            Some(Event::CloseRequested)
        );
    }

    #[test]
    fn resize() {
        let size = glutin::dpi::LogicalSize::new(400.0, 300.0);
        assert_eq!(
            from_window_event(&glutin::WindowEvent::Resized(size), 2.0),
            Some(Event::Resized(Vector2::new(800, 600)))
        );
    }

    #[test]
    fn ignored() {
        assert_eq!(
            from_window_event(&glutin::WindowEvent::Focused(true), 1.0),
            None
        );
    }
}
