use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ResampleFilter, Size};

const RGB_CHANNELS: usize = 3;

/// Output `(rows, cols)` for resizing a `rows`x`cols` image to `size`.
///
/// `ShortEdge(s)` scales both sides by `s / min(rows, cols)` and rounds to the
/// nearest pixel, halfway values to the even one; `Fixed` is returned as-is.
pub fn calculate_resize_dimensions(original_rows: usize, original_cols: usize, size: Size) -> (usize, usize) {
    match size {
        Size::Fixed { height, width } => (height as usize, width as usize),
        Size::ShortEdge(target) => {
            let short_side = original_rows.min(original_cols);
            let scale_factor = target as f64 / short_side as f64;
            let new_rows = (original_rows as f64 * scale_factor).round_ties_even() as usize;
            let new_cols = (original_cols as f64 * scale_factor).round_ties_even() as usize;
            (new_rows, new_cols)
        }
    }
}

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Box => ResizeAlg::Convolution(FilterType::Box),
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resize an interleaved RGB8 buffer.
pub fn resize_rgb_u8(
    data: Vec<u8>,
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data,
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

/// Resize a channel-last RGB image to `size`.
///
/// Nothing guarantees the result covers a later crop; an undersized result is
/// reported by the cropper.
pub fn resize_short_edge(image: ArrayView3<'_, u8>, size: Size, filter: ResampleFilter) -> Result<Array3<u8>> {
    let (rows, cols, channels) = image.dim();
    if channels != RGB_CHANNELS {
        return Err(Error::ChannelCount {
            expected: RGB_CHANNELS,
            actual: channels,
        });
    }
    if rows == 0 || cols == 0 {
        return Err(Error::ZeroSize {
            height: rows,
            width: cols,
        });
    }

    let (new_rows, new_cols) = calculate_resize_dimensions(rows, cols, size);
    if new_rows == 0 || new_cols == 0 {
        return Err(Error::ZeroSize {
            height: new_rows,
            width: new_cols,
        });
    }

    // If already at the requested size, skip resizing
    if (new_rows, new_cols) == (rows, cols) {
        debug!("Image already {}x{}, skipping resize", rows, cols);
        return Ok(image.to_owned());
    }

    debug!(
        "Resizing {}x{} -> {}x{} ({})",
        rows, cols, new_rows, new_cols, filter
    );

    let data = image.as_standard_layout().into_owned().into_raw_vec();
    let resized = resize_rgb_u8(data, cols, rows, new_cols, new_rows, filter)?;
    Ok(Array3::from_shape_vec((new_rows, new_cols, RGB_CHANNELS), resized)?)
}
