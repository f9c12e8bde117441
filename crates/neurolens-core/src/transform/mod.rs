//! Geometric transforms: resize, crop, horizontal flip and rotation.
//!
//! # Ownership
//!
//! Transforms that change dimensions (`resize`, `crop`) borrow the source and
//! return a freshly allocated image; the caller replaces its handle with the
//! result, which drops the old buffer. `flip_horizontal` and `rotate` keep the
//! dimensions and work on `&mut Image`.
//!
//! # Failure
//!
//! Every operation validates its geometry before touching any pixel. On error
//! the source image is exactly as it was.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, `x` grows right, `y` grows down
//! - Rotation angles are in degrees, positive = clockwise
//! - Crop rectangles are in pixels: `[x, x + width) x [y, y + height)`

mod crop;
mod flip;
mod resize;
mod rotation;

pub use crop::crop;
pub use flip::flip_horizontal;
pub use resize::{resize, FIXED_POINT_SHIFT};
pub use rotation::{rotate, rotate_with, RotationMapping};
