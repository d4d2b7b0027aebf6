use ndarray::{Array3, ArrayView3};

use crate::error::{Error, Result};

const NDIM: usize = 3;

/// Resolve a possibly negative axis index against a 3-D array.
pub fn normalize_axis(axis: isize, ndim: usize) -> Result<usize> {
    let n = ndim as isize;
    if axis < -n || axis >= n {
        return Err(Error::InvalidAxis { axis, ndim });
    }
    Ok(if axis < 0 { (axis + n) as usize } else { axis as usize })
}

/// Move one axis of a 3-D array to a new position, keeping the relative order of
/// the remaining axes. Sample values are untouched; the result is in standard
/// (row-major) layout.
pub fn move_channel_axis<A: Clone>(
    image: ArrayView3<'_, A>,
    source: isize,
    destination: isize,
) -> Result<Array3<A>> {
    let src = normalize_axis(source, NDIM)?;
    let dst = normalize_axis(destination, NDIM)?;

    let mut order: Vec<usize> = (0..NDIM).filter(|&a| a != src).collect();
    order.insert(dst, src);

    Ok(image
        .permuted_axes([order[0], order[1], order[2]])
        .as_standard_layout()
        .into_owned())
}

/// Canonical internal layout: `(height, width, channel)`.
pub fn to_channel_last<A: Clone>(image: ArrayView3<'_, A>, channel_axis: isize) -> Result<Array3<A>> {
    move_channel_axis(image, channel_axis, -1)
}
