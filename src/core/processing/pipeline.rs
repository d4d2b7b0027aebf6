use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::core::params::TransformConfig;
use crate::core::processing::axis::{move_channel_axis, normalize_axis, to_channel_last};
use crate::core::processing::crop::crop;
use crate::core::processing::normalize::rescale_and_normalize;
use crate::core::processing::resize::resize_short_edge;
use crate::core::processing::sample::{Sample, to_u8_image};
use crate::error::Result;
use crate::types::Size;

/// canonicalize axis -> resize short edge -> crop -> rescale/normalize -> output axis
pub fn normalize_image_pipeline<T: Sample>(image: ArrayView3<'_, T>, config: &TransformConfig) -> Result<Array3<f32>> {
    // Both axes are checked up front so a bad output axis fails before any pixel work
    normalize_axis(config.channel_axis, image.ndim())?;
    normalize_axis(config.target_channel_axis, image.ndim())?;

    let samples = to_u8_image(image);
    let hwc = to_channel_last(samples.view(), config.channel_axis)?;
    debug!("Input {:?} -> channel-last {:?}", image.dim(), hwc.dim());

    let resized = resize_short_edge(
        hwc.view(),
        Size::ShortEdge(config.resize_dim),
        config.resample_filter,
    )?;
    let cropped = crop(resized.view(), config.target_size, config.crop_policy)?;
    let normalized = rescale_and_normalize(cropped.image.view(), config.img_mean, config.img_std)?;

    let output = move_channel_axis(normalized.view(), -1, config.target_channel_axis)?;
    debug!("Output tensor {:?}", output.dim());
    Ok(output)
}
