//! Quote documents and export
//!
//! Issues dated, fingerprinted quote documents and renders them as a
//! printable text page or JSON.

pub mod document;
pub mod export;

pub use document::QuoteDocument;
pub use export::{
    render, render_text, to_json, write_export, ExportFormat, ExportOptions, Orientation,
    PageFormat,
};
