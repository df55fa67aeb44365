//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Zoomt auf einen Screen-Fokuspunkt hin.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Vec2) {
    use_cases::camera::zoom_towards(state, factor, focus_screen);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize(state, size);
}
