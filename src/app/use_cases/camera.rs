//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::Camera2D;
use glam::Vec2;

/// Setzt Zoom auf den Standardwert und Pan auf (0, 0).
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D {
        pan: Vec2::ZERO,
        zoom: state.options.camera_zoom_default,
    };
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step_reverse,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt auf die Mausposition hin.
///
/// Der Welt-Punkt unter `focus_screen` bleibt nach dem Zoom an derselben
/// Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Vec2) {
    state.view.camera.zoom_towards(
        factor,
        focus_screen,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta_screen: Vec2) {
    state.view.camera.pan_by(delta_screen);
}

/// Aktualisiert die Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
