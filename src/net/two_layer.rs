use rand::Rng;

use crate::activation::relu::relu_with_mask;
use crate::error::{Error, Result};
use crate::loss::softmax::{mean_cross_entropy, one_hot, softmax_rows};
use crate::math::matrix::Matrix;
use crate::net::params::{Gradients, Params};

/// A two-layer fully connected classifier:
///
///   input - linear - ReLU - linear - softmax
///
/// The second linear layer's outputs are the class scores; softmax and
/// cross-entropy are folded into [`TwoLayerNet::loss`], which also
/// produces the analytic gradients for every parameter tensor.
#[derive(Debug, Clone)]
pub struct TwoLayerNet {
    pub params: Params,
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
}

impl TwoLayerNet {
    /// Weight scale used by [`TwoLayerNet::with_default_std`].
    pub const DEFAULT_STD: f64 = 1e-4;

    /// Builds a network with weights drawn from N(0, std_dev²) and
    /// zero biases.
    ///
    /// # Arguments
    /// - `input_size`  - dimension D of the input data
    /// - `hidden_size` - number of hidden units H
    /// - `output_size` - number of classes C
    /// - `std_dev`     - scale of the random weight initialization
    /// - `rng`         - generator for the weight draws; seed it for
    ///                   reproducible models
    ///
    /// # Errors
    /// `InvalidConfig` if any of the three sizes is zero.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        std_dev: f64,
        rng: &mut impl Rng,
    ) -> Result<TwoLayerNet> {
        if input_size == 0 {
            return Err(Error::InvalidConfig("input_size must be positive"));
        }
        if hidden_size == 0 {
            return Err(Error::InvalidConfig("hidden_size must be positive"));
        }
        if output_size == 0 {
            return Err(Error::InvalidConfig("output_size must be positive"));
        }

        let params = Params {
            w1: Matrix::randn(input_size, hidden_size, std_dev, rng),
            b1: Matrix::zeros(1, hidden_size),
            w2: Matrix::randn(hidden_size, output_size, std_dev, rng),
            b2: Matrix::zeros(1, output_size),
        };

        Ok(TwoLayerNet {
            params,
            input_size,
            hidden_size,
            output_size,
        })
    }

    /// [`TwoLayerNet::new`] with the stock `1e-4` weight scale.
    pub fn with_default_std(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut impl Rng,
    ) -> Result<TwoLayerNet> {
        TwoLayerNet::new(input_size, hidden_size, output_size, Self::DEFAULT_STD, rng)
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Forward pass keeping the hidden activations and the ReLU mask
    /// for the backward pass. Nothing is stored on `self`.
    fn forward_cached(&self, x: &Matrix) -> Result<(Matrix, Matrix, Matrix)> {
        if x.cols != self.input_size {
            return Err(Error::ShapeMismatch {
                what: "input columns",
                got: x.cols,
                expected: self.input_size,
            });
        }

        let pre = (x * &self.params.w1).add_row(&self.params.b1);
        let (hidden, mask) = relu_with_mask(&pre);
        let scores = (&hidden * &self.params.w2).add_row(&self.params.b2);

        Ok((scores, hidden, mask))
    }

    /// Class scores for a batch, shape (N, C). Pure function of the
    /// current parameters and `x`.
    ///
    /// # Errors
    /// `ShapeMismatch` if `x` does not have `input_size` columns.
    pub fn scores(&self, x: &Matrix) -> Result<Matrix> {
        let (scores, _, _) = self.forward_cached(x)?;
        Ok(scores)
    }

    /// Loss and gradients for a labeled batch.
    ///
    /// The loss is the mean softmax cross-entropy over the batch plus an
    /// L2 term `reg * (sum(w1²) + sum(w2²))`; biases are not
    /// regularized. The returned gradients are freshly allocated and
    /// share no storage with `self.params`.
    ///
    /// # Arguments
    /// - `x`   - batch inputs, shape (N, D)
    /// - `y`   - N class labels, each in [0, C)
    /// - `reg` - L2 regularization strength
    ///
    /// # Errors
    /// `ShapeMismatch` if `x` has the wrong width, `y.len() != N`, or
    /// any label is >= C.
    pub fn loss(&self, x: &Matrix, y: &[usize], reg: f64) -> Result<(f64, Gradients)> {
        if y.len() != x.rows {
            return Err(Error::ShapeMismatch {
                what: "label count",
                got: y.len(),
                expected: x.rows,
            });
        }

        let (scores, hidden, mask) = self.forward_cached(x)?;

        let prob = softmax_rows(&scores);
        let targets = one_hot(y, self.output_size)?;

        let data_loss = mean_cross_entropy(&prob, &targets);
        let l2 = reg * (self.params.w1.sum_squares() + self.params.w2.sum_squares());
        let loss = data_loss + l2;

        // Backward pass, in reverse order of the forward computation.
        let n = x.rows as f64;

        // Gradient of the mean cross-entropy w.r.t. the pre-softmax scores.
        let d_scores = (&prob - &targets).map(|v| v / n);

        let w2_grad = &(&hidden.transpose() * &d_scores) + &self.params.w2.map(|w| 2.0 * reg * w);
        let b2_grad = d_scores.col_sums();

        // Mask gates on the pre-activation sign: entries that were
        // strictly negative before ReLU contribute no gradient.
        let d_hidden = (&d_scores * &self.params.w2.transpose()).hadamard(&mask);

        let w1_grad = &(&x.transpose() * &d_hidden) + &self.params.w1.map(|w| 2.0 * reg * w);
        let b1_grad = d_hidden.col_sums();

        Ok((
            loss,
            Gradients {
                w1: w1_grad,
                b1: b1_grad,
                w2: w2_grad,
                b2: b2_grad,
            },
        ))
    }

    /// Predicted class label for every row of `x`.
    ///
    /// Each prediction is the argmax of that row's scores; when several
    /// classes tie for the maximum, the first (lowest) index wins.
    ///
    /// # Errors
    /// `ShapeMismatch` if `x` does not have `input_size` columns.
    pub fn predict(&self, x: &Matrix) -> Result<Vec<usize>> {
        let scores = self.scores(x)?;
        Ok(scores.data.iter().map(|row| argmax(row)).collect())
    }
}

/// Index of the maximum element; the first index wins on ties.
fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in row.iter().enumerate().skip(1) {
        if v > row[best] {
            best = i;
        }
    }
    best
}
