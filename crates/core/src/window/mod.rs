use minifb::{Window, WindowOptions};

use crate::{
    config::Viewport,
    render::{Canvas, Presenter},
    DemoError, Result,
};

/// Fixed-size desktop window backed by `minifb`.
pub struct DesktopWindow {
    window: Window,
}

impl DesktopWindow {
    pub fn open(title: &str, viewport: Viewport) -> Result<Self> {
        let window = Window::new(title, viewport.width, viewport.height, WindowOptions::default())
            .map_err(|err| DemoError::init("window", err))?;
        tracing::info!(width = viewport.width, height = viewport.height, title, "opened window");
        Ok(Self { window })
    }
}

impl Presenter for DesktopWindow {
    fn poll_quit(&mut self) -> bool {
        !self.window.is_open()
    }

    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.window
            .update_with_buffer(canvas.buffer(), canvas.width(), canvas.height())
            .map_err(|err| DemoError::Present(err.to_string()))
    }
}
