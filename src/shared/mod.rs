//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{ARROW_RATIO, CAMERA_ZOOM_STEP, CAMERA_ZOOM_STEP_REVERSE};
pub use render_scene::{
    CursorHint, RenderScene, SceneArrow, SceneBlockFill, SceneLabel, ScenePolyline,
};
