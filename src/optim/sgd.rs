use crate::net::params::{Gradients, Params};

/// Vanilla stochastic gradient descent, no momentum.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update in place: `param -= learning_rate * grad` for
    /// every tensor.
    pub fn step(&self, params: &mut Params, grads: &Gradients) {
        let lr = self.learning_rate;
        params.w1 = &params.w1 - &grads.w1.map(|g| g * lr);
        params.b1 = &params.b1 - &grads.b1.map(|g| g * lr);
        params.w2 = &params.w2 - &grads.w2.map(|g| g * lr);
        params.b2 = &params.b2 - &grads.b2.map(|g| g * lr);
    }

    /// Scales the learning rate by `factor`. Called once per epoch, so
    /// after k epochs the effective rate is `initial * factor^k`.
    pub fn decay(&mut self, factor: f64) {
        self.learning_rate *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn step_moves_against_the_gradient() {
        let mut params = Params {
            w1: Matrix::from_data(vec![vec![1.0]]),
            b1: Matrix::from_data(vec![vec![2.0]]),
            w2: Matrix::from_data(vec![vec![3.0]]),
            b2: Matrix::from_data(vec![vec![4.0]]),
        };
        let grads = Gradients {
            w1: Matrix::from_data(vec![vec![10.0]]),
            b1: Matrix::from_data(vec![vec![10.0]]),
            w2: Matrix::from_data(vec![vec![-10.0]]),
            b2: Matrix::from_data(vec![vec![0.0]]),
        };

        Sgd::new(0.1).step(&mut params, &grads);

        assert!((params.w1.data[0][0] - 0.0).abs() < 1e-12);
        assert!((params.b1.data[0][0] - 1.0).abs() < 1e-12);
        assert!((params.w2.data[0][0] - 4.0).abs() < 1e-12);
        assert!((params.b2.data[0][0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_decay_is_exponential() {
        let initial = 0.5;
        let factor = 0.95;
        let mut sgd = Sgd::new(initial);
        for _ in 0..7 {
            sgd.decay(factor);
        }
        let expected = initial * factor.powi(7);
        assert!((sgd.learning_rate - expected).abs() < 1e-12);
    }
}
