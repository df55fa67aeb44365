//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod camera;
pub mod document;
pub mod file_io;
pub mod hover;
pub mod pointer;
pub mod selection;
