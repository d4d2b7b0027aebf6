//! High-level entry point: build an `ImageNormalizer` once from a
//! `TransformConfig`, then call `transform` for each decoded image.
use ndarray::{Array3, ArrayView3};
use tracing::{info, warn};

use crate::core::params::TransformConfig;
use crate::core::processing::pipeline::normalize_image_pipeline;
use crate::core::processing::sample::Sample;
use crate::error::Result;

/// Result of a single transform call
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    /// Position of this tensor within the source document; always 0 here
    pub offset: usize,
    pub image: Array3<f32>,
}

/// Resizes, crops and channel-normalizes one image per call.
///
/// Holds no mutable state, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct ImageNormalizer {
    config: TransformConfig,
}

impl ImageNormalizer {
    pub fn new(config: TransformConfig) -> Result<Self> {
        config.validate()?;

        let (crop_height, crop_width) = config.target_size.crop_dims();
        if crop_height.max(crop_width) > config.resize_dim as usize {
            warn!(
                "Crop size {} is larger than resize_dim {}; images may fail to crop",
                config.target_size, config.resize_dim
            );
        }

        info!(
            "Image normalizer: resize_dim={}, target_size={}, crop={}, filter={}, axes {} -> {}",
            config.resize_dim,
            config.target_size,
            config.crop_policy,
            config.resample_filter,
            config.channel_axis,
            config.target_channel_axis
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Normalize a decoded image whose channel axis is `config.channel_axis`.
    pub fn transform<T: Sample>(&self, image: ArrayView3<'_, T>) -> Result<NormalizedImage> {
        let image = normalize_image_pipeline(image, &self.config)?;
        Ok(NormalizedImage { offset: 0, image })
    }
}
