use crate::math::matrix::Matrix;

/// The four trainable tensors of a two-layer network.
///
/// Shapes (D = input size, H = hidden size, C = output size):
/// - `w1` - (D, H) first-layer weights
/// - `b1` - (1, H) first-layer bias
/// - `w2` - (H, C) second-layer weights
/// - `b2` - (1, C) second-layer bias
///
/// Shapes are fixed at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
}

/// Gradients of the loss with respect to each tensor in [`Params`].
///
/// Allocated fresh by every loss computation; never aliases the
/// parameter storage it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
}
