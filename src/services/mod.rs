//! Service layer for business logic.
//!
//! This module contains the stateful parts of the engine: the palette binding
//! store and the document that ties key colors, gradient and palette together.

pub mod document;
pub mod palette_store;

// Re-export commonly used types
pub use document::{Document, DocumentSettings};
pub use palette_store::PaletteStore;
