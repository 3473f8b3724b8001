//! Frame descriptors and the transforms that reorient them

/// Frame type, sides and recorded matches
pub mod frame;
/// The eight tile orientations
pub mod orientation;
/// Mirror and rotation transforms for frames
pub mod transform;

pub use frame::{EdgeMatch, Frame, Side};
pub use orientation::Orientation;
