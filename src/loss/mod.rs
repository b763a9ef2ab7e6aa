pub mod softmax;

pub use softmax::{mean_cross_entropy, one_hot, softmax_rows};
