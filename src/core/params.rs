use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{CropPolicy, ResampleFilter, Size};

/// Transform parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Final crop size; an integer means a square crop
    pub target_size: Size,
    /// Per-channel mean subtracted after scaling to [0, 1]
    pub img_mean: [f32; 3],
    /// Per-channel std divided out after the mean
    pub img_std: [f32; 3],
    /// Shorter-edge length the image is resized to before cropping
    pub resize_dim: u32,
    /// Channel axis of the input array; negative counts from the end
    pub channel_axis: isize,
    /// Channel axis of the output tensor; negative counts from the end
    pub target_channel_axis: isize,
    pub crop_policy: CropPolicy,
    pub resample_filter: ResampleFilter,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            target_size: Size::ShortEdge(224),
            img_mean: [0.0, 0.0, 0.0],
            img_std: [1.0, 1.0, 1.0],
            resize_dim: 256,
            channel_axis: -1,
            target_channel_axis: -1,
            crop_policy: CropPolicy::Center,
            resample_filter: ResampleFilter::Bilinear,
        }
    }
}

impl TransformConfig {
    /// Statistics used by torchvision backbones trained on ImageNet.
    pub fn imagenet() -> Self {
        Self {
            img_mean: [0.485, 0.456, 0.406],
            img_std: [0.229, 0.224, 0.225],
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }

    pub fn from_file(p: &Path) -> Result<Self> {
        let json = fs::read_to_string(p)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Static checks that do not depend on the image.
    ///
    /// Axis indices are checked per call against the array, and numeric caller
    /// contracts (`std != 0`, `resize_dim >= target_size`) are left unguarded.
    pub fn validate(&self) -> Result<()> {
        if self.target_size.is_zero() {
            return Err(Error::config(format!(
                "target_size must be greater than 0, got: {}",
                self.target_size
            )));
        }
        if self.resize_dim == 0 {
            return Err(Error::config("resize_dim must be greater than 0, got: 0"));
        }
        Ok(())
    }
}
