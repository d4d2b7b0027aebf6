pub mod axis;
pub mod crop;
pub mod normalize;
pub mod pipeline;
pub mod resize;
pub mod sample;
