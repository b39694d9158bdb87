use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// View rotation per pixel of mouse drag, in degrees
pub const DEGREES_PER_PIXEL: f64 = 0.5;
/// Zoom factor per wheel line
pub const ZOOM_STEP: f64 = 1.1;
/// Touchpad pixels counted as one wheel line
const PIXELS_PER_LINE: f64 = 50.0;

/// What the viewer should do in response to input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerAction {
    Exit,
    ResetView,
    SaveScreenshot,
    Rotate { d_azim: f64, d_elev: f64 },
    Zoom(f64),
}

/// Turns winit events into view changes: left-drag orbits, wheel zooms
#[derive(Debug, Clone, Default)]
pub struct OrbitController {
    dragging: bool,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and report the resulting action, if any
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<ViewerAction> {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(keycode),
                        repeat: false,
                        ..
                    },
                ..
            } => Self::key_action(*keycode),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.set_dragging(state.is_pressed());
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_to((position.x as f32, position.y as f32))
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
                };
                Self::zoom_action(lines)
            }
            _ => None,
        }
    }

    /// Record a cursor position; while dragging this yields a rotation
    pub fn move_to(&mut self, position: (f32, f32)) -> Option<ViewerAction> {
        let previous = self.mouse_position.replace(position);
        if !self.dragging {
            return None;
        }

        let (px, py) = previous?;
        let (dx, dy) = ((position.0 - px) as f64, (position.1 - py) as f64);
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(ViewerAction::Rotate {
            d_azim: -dx * DEGREES_PER_PIXEL,
            d_elev: dy * DEGREES_PER_PIXEL,
        })
    }

    /// Left button state
    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn zoom_action(lines: f64) -> Option<ViewerAction> {
        if lines == 0.0 || !lines.is_finite() {
            return None;
        }
        Some(ViewerAction::Zoom(ZOOM_STEP.powf(lines)))
    }

    /// Map winit KeyCode to an action
    pub fn key_action(keycode: KeyCode) -> Option<ViewerAction> {
        match keycode {
            KeyCode::Escape | KeyCode::KeyQ => Some(ViewerAction::Exit),
            KeyCode::KeyR => Some(ViewerAction::ResetView),
            KeyCode::KeyS => Some(ViewerAction::SaveScreenshot),
            KeyCode::Equal | KeyCode::NumpadAdd => Self::zoom_action(1.0),
            KeyCode::Minus | KeyCode::NumpadSubtract => Self::zoom_action(-1.0),
            _ => None,
        }
    }
}
