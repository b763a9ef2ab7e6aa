//! Centered finite-difference check of the analytic gradients.

use rand::rngs::StdRng;
use rand::SeedableRng;

use slate_nn::{Gradients, Matrix, TwoLayerNet};

const STEP: f64 = 1e-5;
const TOLERANCE: f64 = 1e-5;

#[derive(Clone, Copy)]
enum Tensor {
    W1,
    B1,
    W2,
    B2,
}

impl Tensor {
    const ALL: [Tensor; 4] = [Tensor::W1, Tensor::B1, Tensor::W2, Tensor::B2];

    fn name(self) -> &'static str {
        match self {
            Tensor::W1 => "w1",
            Tensor::B1 => "b1",
            Tensor::W2 => "w2",
            Tensor::B2 => "b2",
        }
    }

    fn of_net(self, net: &mut TwoLayerNet) -> &mut Matrix {
        match self {
            Tensor::W1 => &mut net.params.w1,
            Tensor::B1 => &mut net.params.b1,
            Tensor::W2 => &mut net.params.w2,
            Tensor::B2 => &mut net.params.b2,
        }
    }

    fn of_grads(self, grads: &Gradients) -> &Matrix {
        match self {
            Tensor::W1 => &grads.w1,
            Tensor::B1 => &grads.b1,
            Tensor::W2 => &grads.w2,
            Tensor::B2 => &grads.b2,
        }
    }
}

/// Numerically estimates the gradient of the loss w.r.t. one parameter
/// tensor by perturbing each entry in both directions.
fn numerical_grad(
    net: &TwoLayerNet,
    tensor: Tensor,
    x: &Matrix,
    y: &[usize],
    reg: f64,
) -> Matrix {
    let shape = {
        let mut probe = net.clone();
        let m = tensor.of_net(&mut probe);
        (m.rows, m.cols)
    };
    let mut grad = Matrix::zeros(shape.0, shape.1);

    for i in 0..shape.0 {
        for j in 0..shape.1 {
            let mut plus = net.clone();
            tensor.of_net(&mut plus).data[i][j] += STEP;
            let (loss_plus, _) = plus.loss(x, y, reg).unwrap();

            let mut minus = net.clone();
            tensor.of_net(&mut minus).data[i][j] -= STEP;
            let (loss_minus, _) = minus.loss(x, y, reg).unwrap();

            grad.data[i][j] = (loss_plus - loss_minus) / (2.0 * STEP);
        }
    }

    grad
}

/// Worst relative error between two same-shape gradient estimates:
///   |a - b| / max(1e-8, |a| + |b|)
fn max_rel_error(analytic: &Matrix, numeric: &Matrix) -> f64 {
    let mut worst: f64 = 0.0;
    for i in 0..analytic.rows {
        for j in 0..analytic.cols {
            let a = analytic.data[i][j];
            let b = numeric.data[i][j];
            let rel = (a - b).abs() / (a.abs() + b.abs()).max(1e-8);
            worst = worst.max(rel);
        }
    }
    worst
}

fn check_all_tensors(reg: f64) {
    let mut rng = StdRng::seed_from_u64(231);
    let net = TwoLayerNet::new(4, 5, 3, 0.5, &mut rng).unwrap();
    let x = Matrix::randn(5, 4, 1.0, &mut rng);
    let y = vec![0, 1, 2, 1, 0];

    let (_, grads) = net.loss(&x, &y, reg).unwrap();

    for tensor in Tensor::ALL {
        let numeric = numerical_grad(&net, tensor, &x, &y, reg);
        let err = max_rel_error(tensor.of_grads(&grads), &numeric);
        assert!(
            err < TOLERANCE,
            "{} gradient off by relative error {err:e} (reg {reg})",
            tensor.name()
        );
    }
}

#[test]
fn analytic_gradients_match_finite_differences_without_reg() {
    check_all_tensors(0.0);
}

#[test]
fn analytic_gradients_match_finite_differences_with_reg() {
    check_all_tensors(0.05);
}
