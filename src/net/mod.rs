pub mod params;
pub mod two_layer;

pub use params::{Gradients, Params};
pub use two_layer::TwoLayerNet;
