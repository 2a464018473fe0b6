//! Bounded-time signature detectors used by the classification cascade.

mod assembly;
mod encoded;
mod language;

pub use assembly::looks_like_assembly;
pub use encoded::encoded_extension;
pub use language::{is_stylesheet, Language};
