//! Cards: image identifiers, tile lifecycle, and deck construction.
//!
//! ## Key Types
//!
//! - `ImageId`: Opaque face/back image identifier
//! - `Card`: One tile with its front, back and `CardState`
//! - `DeckBuilder`: Pool resizing, pairing and shuffling

pub mod card;
pub mod deck;
pub mod image;

pub use card::{Card, CardState};
pub use deck::DeckBuilder;
pub use image::ImageId;
