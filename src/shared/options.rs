//! Zentrale Konfiguration für den Pattern Sewing Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{HitThreshold, SeamHysteresis};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.01;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 50.0;
/// Zoom beim Zurücksetzen der Ansicht.
pub const CAMERA_ZOOM_DEFAULT: f32 = 1.0;
/// Zoom-Schritt beim Hineinzoomen (Mausrad / `+`).
pub const CAMERA_ZOOM_STEP: f32 = 1.1;
/// Zoom-Schritt beim Herauszoomen (Mausrad / `-`).
pub const CAMERA_ZOOM_STEP_REVERSE: f32 = 0.9;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Basis-Trefferradius in Screen-Pixeln.
pub const HIT_THRESHOLD_BASE: f32 = 5.0;
/// Untere Grenze des Trefferradius in Welteinheiten.
pub const HIT_THRESHOLD_MIN: f32 = 0.5;
/// Obere Grenze des Trefferradius in Welteinheiten.
pub const HIT_THRESHOLD_MAX: f32 = 5.0;

// ── Geometrie ───────────────────────────────────────────────────────

/// Untere Naht-Schwelle (Anteil von L) für die Cursor-Projektion.
pub const SEAM_HYSTERESIS_LOW: f32 = 0.25;
/// Obere Naht-Schwelle (Anteil von L) für die Cursor-Projektion.
pub const SEAM_HYSTERESIS_HIGH: f32 = 0.75;

// ── Darstellung ─────────────────────────────────────────────────────

/// Position des Richtungspfeils als Anteil der Sewing-Länge.
pub const ARROW_RATIO: f32 = 0.25;

// ── Generierung ─────────────────────────────────────────────────────

/// Abstand zwischen generierten Blöcken in Welteinheiten.
pub const GENERATION_GAP: f32 = crate::core::DEFAULT_GAP;
/// Blöcke pro Zeile bei der Generierung.
pub const GENERATION_BLOCKS_PER_ROW: usize = crate::core::BLOCKS_PER_ROW;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pattern_sewing_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom nach Reset
    pub camera_zoom_default: f32,
    /// Zoom-Schritt hinein
    pub camera_zoom_step: f32,
    /// Zoom-Schritt heraus
    pub camera_zoom_step_reverse: f32,

    // ── Hit-Test ────────────────────────────────────────────────
    /// Basis-Trefferradius (Screen-Pixel)
    pub hit_threshold_base: f32,
    /// Minimaler Trefferradius (Welt)
    pub hit_threshold_min: f32,
    /// Maximaler Trefferradius (Welt)
    pub hit_threshold_max: f32,

    // ── Geometrie ───────────────────────────────────────────────
    /// Untere Naht-Schwelle
    pub seam_hysteresis_low: f32,
    /// Obere Naht-Schwelle
    pub seam_hysteresis_high: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Pfeil-Position auf dem Sewing
    pub arrow_ratio: f32,

    // ── Generierung ─────────────────────────────────────────────
    /// Abstand zwischen generierten Blöcken
    pub generation_gap: f32,
    /// Blöcke pro Zeile
    #[serde(default = "default_blocks_per_row")]
    pub generation_blocks_per_row: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_default: CAMERA_ZOOM_DEFAULT,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_zoom_step_reverse: CAMERA_ZOOM_STEP_REVERSE,

            hit_threshold_base: HIT_THRESHOLD_BASE,
            hit_threshold_min: HIT_THRESHOLD_MIN,
            hit_threshold_max: HIT_THRESHOLD_MAX,

            seam_hysteresis_low: SEAM_HYSTERESIS_LOW,
            seam_hysteresis_high: SEAM_HYSTERESIS_HIGH,

            arrow_ratio: ARROW_RATIO,

            generation_gap: GENERATION_GAP,
            generation_blocks_per_row: GENERATION_BLOCKS_PER_ROW,
        }
    }
}

/// Serde-Default für `generation_blocks_per_row` (0 wäre ungültig).
fn default_blocks_per_row() -> usize {
    GENERATION_BLOCKS_PER_ROW
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pattern_sewing_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pattern_sewing_editor.toml")
    }

    /// Trefferradius-Parameter für den Hit-Test.
    pub fn hit_threshold(&self) -> HitThreshold {
        HitThreshold {
            base: self.hit_threshold_base,
            min: self.hit_threshold_min,
            max: self.hit_threshold_max,
        }
    }

    /// Naht-Schwellen für die Cursor-Projektion auf geschlossenen Kurven.
    pub fn seam_hysteresis(&self) -> SeamHysteresis {
        SeamHysteresis {
            low: self.seam_hysteresis_low,
            high: self.seam_hysteresis_high,
        }
    }
}
