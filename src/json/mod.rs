//! JSON Import/Export für Block-Dokumente.
//!
//! Eingabe-Schema: `{ blocks: [{ id, name, entities: [...] }] }`, Sewings
//! entweder mit alten Offsets oder mit Ratios.

pub mod document;
pub mod parser;
pub mod writer;

pub use document::{RawBlock, RawDocument, RawEntity, RawLayer, RawPoint};
pub use parser::{detect_schema, load_document, normalize, parse_document, LoadReport, SchemaVersion};
pub use writer::{to_raw_document, write_document};
