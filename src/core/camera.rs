//! 2D-Kamera für Pan und Zoom (Canvas-Semantik).
//!
//! `screen = world * zoom + pan`, also `world = (screen - pan) / zoom`.

use glam::Vec2;

/// 2D-Kamera mit Pan (Screen-Pixel) und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Verschiebung des Welt-Ursprungs in Screen-Pixeln
    pub pan: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.01;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 50.0;
    /// Standard-Zoom.
    pub const ZOOM_DEFAULT: f32 = 1.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: Self::ZOOM_DEFAULT,
        }
    }

    /// Verschiebt die Ansicht um ein Screen-Delta
    pub fn pan_by(&mut self, delta_screen: Vec2) {
        self.pan += delta_screen;
    }

    /// Ändert den Zoom-Level (Standardgrenzen)
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen.
    ///
    /// Nicht-endliche oder nicht-positive Faktoren werden ignoriert.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        if !factor.is_finite() || factor <= 0.0 || min > max {
            return;
        }
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Zoomt um `factor` und hält den Welt-Punkt unter `focus_screen` fest.
    pub fn zoom_towards(&mut self, factor: f32, focus_screen: Vec2, min: f32, max: f32) {
        let focus_world = self.screen_to_world(focus_screen);
        self.zoom_by_clamped(factor, min, max);
        self.pan = focus_screen - focus_world * self.zoom;
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.pan) / self.zoom
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos * self.zoom + self.pan
    }

    /// Welt-Einheiten pro Screen-Pixel.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
