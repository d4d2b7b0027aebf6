use ndarray::{Array3, ArrayView3, s};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{CropPolicy, Size};

/// A cropped image together with the offset of its window in the source.
///
/// The offsets allow mapping coordinates (e.g. bounding boxes) found in the
/// crop back onto the resized image.
#[derive(Debug, Clone, PartialEq)]
pub struct Cropped<A> {
    pub image: Array3<A>,
    pub top: usize,
    pub left: usize,
}

fn window_origin(
    policy: CropPolicy,
    height: usize,
    width: usize,
    target_height: usize,
    target_width: usize,
) -> (usize, usize) {
    let max_top = height - target_height;
    let max_left = width - target_width;
    match policy {
        CropPolicy::Center => (max_top / 2, max_left / 2),
        CropPolicy::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            (rng.gen_range(0..=max_top), rng.gen_range(0..=max_left))
        }
        CropPolicy::Precise { top, left } => (top, left),
    }
}

/// Crop a channel-last image to `size` (`ShortEdge(s)` is the square `s`x`s`).
pub fn crop<A: Clone>(image: ArrayView3<'_, A>, size: Size, policy: CropPolicy) -> Result<Cropped<A>> {
    let (height, width, _) = image.dim();
    let (target_height, target_width) = size.crop_dims();

    let crop_error = || Error::CropSize {
        target_height,
        target_width,
        height,
        width,
    };
    if target_height > height || target_width > width {
        return Err(crop_error());
    }

    let (top, left) = window_origin(policy, height, width, target_height, target_width);
    let fits = |origin: usize, extent: usize, limit: usize| {
        origin.checked_add(extent).is_some_and(|end| end <= limit)
    };
    if !fits(top, target_height, height) || !fits(left, target_width, width) {
        return Err(crop_error());
    }

    debug!(
        "Cropping {}x{} window at top={}, left={} from {}x{} ({})",
        target_height, target_width, top, left, height, width, policy
    );

    let window = image.slice(s![top..top + target_height, left..left + target_width, ..]);
    Ok(Cropped {
        image: window.to_owned(),
        top,
        left,
    })
}

pub fn crop_center<A: Clone>(image: ArrayView3<'_, A>, size: Size) -> Result<Cropped<A>> {
    crop(image, size, CropPolicy::Center)
}
