use ndarray::{Array3, ArrayView3};

/// Pixel sample types accepted by the transform.
///
/// Samples are brought into the 8-bit range the resizer works in. Wider
/// integers keep their low 8 bits (1000 becomes 232). Floats are truncated
/// toward zero and saturate at the ends of `0..=255`; NaN maps to 0.
pub trait Sample: Copy + Send + Sync {
    fn to_u8(self) -> u8;
}

impl Sample for u8 {
    #[inline]
    fn to_u8(self) -> u8 {
        self
    }
}

impl Sample for u16 {
    #[inline]
    fn to_u8(self) -> u8 {
        self as u8
    }
}

impl Sample for f32 {
    #[inline]
    fn to_u8(self) -> u8 {
        self as u8
    }
}

impl Sample for f64 {
    #[inline]
    fn to_u8(self) -> u8 {
        self as u8
    }
}

pub fn to_u8_image<T: Sample>(image: ArrayView3<'_, T>) -> Array3<u8> {
    image.mapv(|v| v.to_u8())
}
