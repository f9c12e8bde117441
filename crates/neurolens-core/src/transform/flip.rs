//! Horizontal mirroring.

use crate::buffer::Image;

/// Mirror an image horizontally, in place.
///
/// In each row the pixel at column `x` is swapped with the one at
/// `width - 1 - x`. No allocation takes place. The empty image and
/// single-column images are left as they are.
pub fn flip_horizontal(image: &mut Image) {
    if image.is_empty() {
        log::warn!("flip_horizontal called on an empty image, nothing to do");
        return;
    }

    let width = image.width() as usize;
    for row in image.pixels_mut().chunks_exact_mut(width) {
        row.reverse();
    }

    log::debug!("flip_horizontal {}x{}", image.width(), image.height());
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::Pixel;
    use proptest::prelude::*;

    proptest! {
        /// Property: flipping twice restores the original, pixel for pixel.
        #[test]
        fn prop_flip_twice_is_identity(
            width in 1i32..=48,
            height in 1i32..=48,
            seed in any::<u8>(),
        ) {
            let pixels = (0..width * height)
                .map(|i| Pixel::new((i as u8).wrapping_mul(seed), seed, (i % 7) as u8, 255))
                .collect();
            let original = Image::from_pixels(width, height, pixels).unwrap();

            let mut img = original.clone();
            flip_horizontal(&mut img);
            flip_horizontal(&mut img);
            prop_assert_eq!(img, original);
        }
    }
}
