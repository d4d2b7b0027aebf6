#![doc = r##"
imgnorm — resize, crop and channel-normalize a single image into a model-ready tensor.

The crate takes one already-decoded pixel array and turns it into a fixed-size
`f32` tensor: the shorter edge is resized to `resize_dim`, the result is cropped
to `target_size`, samples are scaled to `[0, 1]`, a per-channel mean is
subtracted and a per-channel std divided out, and finally the channel axis is
moved to wherever the consuming model expects it.

Decoding files, batching and inference are left to the caller.

Quick start
-----------
```rust
use ndarray::Array3;
use imgnorm::{ImageNormalizer, TransformConfig};

fn main() -> imgnorm::Result<()> {
    let normalizer = ImageNormalizer::new(TransformConfig {
        target_channel_axis: 0, // CHW for the model
        ..TransformConfig::imagenet()
    })?;

    // 400 rows x 300 cols, RGB, channel last
    let image = Array3::<u8>::from_elem((400, 300, 3), 128);
    let out = normalizer.transform(image.view())?;

    assert_eq!(out.offset, 0);
    assert_eq!(out.image.dim(), (3, 224, 224));
    Ok(())
}
```

Configuration from JSON
-----------------------
```rust
use imgnorm::{CropPolicy, Size, TransformConfig};

fn main() -> imgnorm::Result<()> {
    let config = TransformConfig::from_json_str(r#"{
        "target_size": [224, 192],
        "resize_dim": 256,
        "channel_axis": 0,
        "crop_policy": {"how": "random", "seed": 17}
    }"#)?;

    assert_eq!(config.target_size, Size::Fixed { height: 224, width: 192 });
    assert_eq!(config.crop_policy, CropPolicy::Random { seed: Some(17) });
    Ok(())
}
```

Error handling
--------------
All public functions return `imgnorm::Result<T>`. Configuration problems are
reported by `ImageNormalizer::new`; axis, crop and channel problems by each
`transform` call.

```rust
use ndarray::Array3;
use imgnorm::{Error, ImageNormalizer, Size, TransformConfig};

let normalizer = ImageNormalizer::new(TransformConfig {
    target_size: Size::ShortEdge(224),
    resize_dim: 10,
    ..TransformConfig::default()
}).unwrap();

let image = Array3::<u8>::zeros((32, 32, 3));
match normalizer.transform(image.view()) {
    Err(Error::CropSize { height, width, .. }) => assert_eq!((height, width), (10, 10)),
    other => panic!("unexpected: {:?}", other),
}
```

Caller contracts
----------------
- `resize_dim` should be at least the crop size, otherwise cropping fails.
- `img_std` entries must be non-zero; zeros produce inf/NaN samples.
- Samples are expected in `0..=255`; other values are cast to 8 bits.

Useful modules
--------------
- [`api`] — `ImageNormalizer` and its `NormalizedImage` result.
- [`core`] — the individual stages (axis, resize, crop, normalize) and config.
- [`types`] — `Size`, `CropPolicy`, `ResampleFilter`.
- [`error`] — crate-level `Error` and `Result`.
- [`logging`] — optional `tracing` subscriber setup.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod logging;
pub mod types;

// Curated public API surface
pub use api::{ImageNormalizer, NormalizedImage};
pub use crate::core::params::TransformConfig;
pub use error::{Error, Result};
pub use types::{CropPolicy, ResampleFilter, Size};

// Individual stages
pub use crate::core::processing::axis::{move_channel_axis, to_channel_last};
pub use crate::core::processing::crop::{Cropped, crop, crop_center};
pub use crate::core::processing::normalize::rescale_and_normalize;
pub use crate::core::processing::resize::{calculate_resize_dimensions, resize_short_edge};
pub use crate::core::processing::sample::Sample;
