use ndarray::{Array1, Array3, ArrayView3};

use crate::error::{Error, Result};

/// Scale 8-bit samples to `[0, 1]`, then apply `(x - mean) / std` per channel.
///
/// Input is channel-last with exactly 3 channels. Results are not clamped, and
/// a zero in `std` yields inf/NaN samples.
pub fn rescale_and_normalize(image: ArrayView3<'_, u8>, mean: [f32; 3], std: [f32; 3]) -> Result<Array3<f32>> {
    let channels = image.dim().2;
    if channels != mean.len() {
        return Err(Error::ChannelCount {
            expected: mean.len(),
            actual: channels,
        });
    }

    let mean = Array1::from(mean.to_vec());
    let std = Array1::from(std.to_vec());

    let mut scaled = image.mapv(|v| v as f32 / 255.0);
    scaled -= &mean;
    scaled /= &std;
    Ok(scaled)
}
