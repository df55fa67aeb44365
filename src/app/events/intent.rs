use glam::Vec2;
use std::path::PathBuf;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Zeiger-Positionen sind immer Screen-Koordinaten.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Dokument von der Platte laden
    OpenFileRequested { path: PathBuf },
    /// Dokument aus bereits gelesenem Text laden
    DocumentReceived { json: String },
    /// Speichern (ohne Pfad: unter aktuellem Pfad)
    SaveRequested { path: Option<PathBuf> },
    /// Testblöcke aus den geladenen Vorlagen erzeugen
    GenerateRequested { count: usize, seed: Option<u64> },
    /// Zurück zum zuletzt geladenen Dokument
    ResetRequested,
    /// Alle Sewings aus ihren Ratios neu aufbauen
    RebuildSewingsRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Taste gedrückt (`+`/`=`, `-`/`_`, `0`)
    KeyPressed { key: char },
    /// Mausrad (`delta_y > 0` zoomt heraus)
    Wheel { screen_pos: Vec2, delta_y: f32 },
    /// Maustaste gedrückt
    PointerPressed {
        screen_pos: Vec2,
        button: PointerButton,
    },
    /// Zeiger bewegt
    PointerMoved { screen_pos: Vec2 },
    /// Maustaste losgelassen
    PointerReleased,
    /// Klick (nach Pointer-Up an gleicher Stelle)
    Clicked { screen_pos: Vec2, shift: bool },
}
