//! Text normalization for review cells.

pub mod normalize;

pub use normalize::{normalize, normalize_text, NormalizeOptions, PUNCTUATION};
