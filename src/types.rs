//! Shared types used across the transform.
//! Includes `Size`, `CropPolicy` and `ResampleFilter`.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Target dimensions for a resize or crop.
///
/// `ShortEdge(s)` scales the shorter edge to `s` and keeps the aspect ratio when
/// resizing; when cropping it means the square `s`x`s`. `Fixed` is an exact
/// `height`x`width`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "SizeRepr", into = "SizeRepr")]
pub enum Size {
    ShortEdge(u32),
    Fixed { height: u32, width: u32 },
}

impl Size {
    /// Square crop dimensions `(height, width)` implied by this size.
    pub fn crop_dims(&self) -> (usize, usize) {
        match *self {
            Size::ShortEdge(s) => (s as usize, s as usize),
            Size::Fixed { height, width } => (height as usize, width as usize),
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Size::ShortEdge(s) => s == 0,
            Size::Fixed { height, width } => height == 0 || width == 0,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::ShortEdge(224)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::ShortEdge(s) => write!(f, "{}", s),
            Size::Fixed { height, width } => write!(f, "{}x{}", height, width),
        }
    }
}

impl FromStr for Size {
    type Err = Error;

    /// Accepts `"224"`, `"224x200"` or `"224,200"` (height first).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Error::config(format!(
                "target_size {:?} should be an integer or a pair of integers",
                s
            ))
        };

        let trimmed = s.trim();
        let size = match trimmed.split_once(|c: char| c == 'x' || c == ',') {
            None => Size::ShortEdge(trimmed.parse().map_err(|_| invalid())?),
            Some((h, w)) => Size::Fixed {
                height: h.trim().parse().map_err(|_| invalid())?,
                width: w.trim().parse().map_err(|_| invalid())?,
            },
        };

        if size.is_zero() {
            return Err(Error::config(format!("size must be greater than 0, got: {}", s)));
        }
        Ok(size)
    }
}

// Wire shape of `Size` in config documents: `224`, `[224, 200]` or `"224x200"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Edge(u32),
    Pair([u32; 2]),
    Text(String),
}

impl TryFrom<SizeRepr> for Size {
    type Error = Error;

    fn try_from(repr: SizeRepr) -> Result<Self, Self::Error> {
        let size = match repr {
            SizeRepr::Edge(s) => Size::ShortEdge(s),
            SizeRepr::Pair([height, width]) => Size::Fixed { height, width },
            SizeRepr::Text(text) => return text.parse(),
        };
        if size.is_zero() {
            return Err(Error::config(format!("size must be greater than 0, got: {}", size)));
        }
        Ok(size)
    }
}

impl From<Size> for SizeRepr {
    fn from(size: Size) -> Self {
        match size {
            Size::ShortEdge(s) => SizeRepr::Edge(s),
            Size::Fixed { height, width } => SizeRepr::Pair([height, width]),
        }
    }
}

/// Placement of the crop window inside the resized image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "how", rename_all = "snake_case")]
pub enum CropPolicy {
    /// Window centered on the image, offsets rounded down.
    #[default]
    Center,
    /// Uniformly drawn window; a seed makes every call draw the same offsets.
    Random { seed: Option<u64> },
    /// Caller-supplied top-left corner.
    Precise { top: usize, left: usize },
}

impl std::fmt::Display for CropPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropPolicy::Center => write!(f, "center"),
            CropPolicy::Random { seed: Some(seed) } => write!(f, "random(seed={})", seed),
            CropPolicy::Random { seed: None } => write!(f, "random"),
            CropPolicy::Precise { top, left } => write!(f, "precise(top={}, left={})", top, left),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    /// Area averaging.
    Box,
    #[default]
    Bilinear,
    Hamming,
    CatmullRom,
    Mitchell,
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Box => "box",
            ResampleFilter::Bilinear => "bilinear",
            ResampleFilter::Hamming => "hamming",
            ResampleFilter::CatmullRom => "catmull_rom",
            ResampleFilter::Mitchell => "mitchell",
            ResampleFilter::Lanczos3 => "lanczos3",
        };
        write!(f, "{}", s)
    }
}
