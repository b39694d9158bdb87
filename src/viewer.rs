use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::core::{OrbitController, SurfaceRenderer, ViewerAction};
use crate::export::{save_png, screenshot_path};
use crate::plot::{render, Axes3D, View};

const WINDOW_TITLE: &str = "Bone poses";

/// Interactive window around one figure
struct Viewer {
    figure: Axes3D,
    initial_view: View,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
    controller: OrbitController,
    /// Set when setup fails so `show` can report it after the loop ends
    setup_error: Option<anyhow::Error>,
}

impl Viewer {
    fn new(figure: Axes3D, size: (u32, u32)) -> Self {
        Self {
            initial_view: *figure.view(),
            figure,
            size,
            window: None,
            renderer: None,
            controller: OrbitController::new(),
            setup_error: None,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn apply(&mut self, action: ViewerAction, event_loop: &ActiveEventLoop) {
        match action {
            ViewerAction::Exit => event_loop.exit(),
            ViewerAction::ResetView => {
                self.figure.view_mut().reset(self.initial_view);
                self.request_redraw();
            }
            ViewerAction::Rotate { d_azim, d_elev } => {
                self.figure.view_mut().rotate(d_azim, d_elev);
                self.request_redraw();
            }
            ViewerAction::Zoom(factor) => {
                self.figure.view_mut().zoom_by(factor);
                self.request_redraw();
            }
            ViewerAction::SaveScreenshot => {
                let path = screenshot_path(chrono::Local::now());
                let canvas = render(&self.figure, self.size.0, self.size.1);
                if let Err(e) = save_png(&canvas, &path) {
                    error!("Screenshot failed: {e:#}");
                }
            }
        }
    }

    fn redraw(&mut self) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let (width, height) = renderer.dimensions();
        let canvas = render(&self.figure, width, height);
        if let Err(e) = renderer.render(&canvas) {
            error!("Render error: {e:#}");
        }
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(self.size.0, self.size.1));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.setup_error = Some(anyhow!("Failed to create window: {e}"));
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SurfaceRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                self.setup_error = Some(e.context("Failed to initialize plot renderer"));
                event_loop.exit();
                return;
            }
        };

        self.size = renderer.dimensions();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                    self.size = renderer.dimensions();
                }
                self.request_redraw();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(action) = self.controller.process_event(&other) {
                    self.apply(action, event_loop);
                }
            }
        }
    }
}

/// Opens a window showing the figure and blocks until it is closed
pub fn show(figure: Axes3D, width: u32, height: u32) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|e| anyhow!("Failed to create event loop: {e}"))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    info!("Drag to rotate, scroll to zoom, R resets the view, S saves a screenshot, Escape quits");

    let mut viewer = Viewer::new(figure, (width, height));
    event_loop
        .run_app(&mut viewer)
        .map_err(|e| anyhow!("Event loop failed: {e}"))?;

    match viewer.setup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
