use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

/// Row-wise softmax:
///   prob[i][c] = exp(scores[i][c]) / sum_c' exp(scores[i][c'])
///
/// The row maximum is subtracted before exponentiating. This leaves the
/// result mathematically unchanged (the factor cancels in the ratio) and
/// keeps exp() from overflowing on large scores.
pub fn softmax_rows(scores: &Matrix) -> Matrix {
    let data = scores
        .data
        .iter()
        .map(|row| {
            let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let exps: Vec<f64> = row.iter().map(|&x| (x - max).exp()).collect();
            let sum: f64 = exps.iter().sum();
            exps.into_iter().map(|e| e / sum).collect()
        })
        .collect();
    Matrix::from_data(data)
}

/// One-hot encodes `labels` into an (N, width) matrix.
///
/// Any label outside [0, width) is rejected. Labels that cover fewer
/// than `width` classes simply leave the remaining columns all-zero.
pub fn one_hot(labels: &[usize], width: usize) -> Result<Matrix> {
    let mut targets = Matrix::zeros(labels.len(), width);
    for (i, &label) in labels.iter().enumerate() {
        if label >= width {
            return Err(Error::ShapeMismatch {
                what: "label",
                got: label,
                expected: width,
            });
        }
        targets.data[i][label] = 1.0;
    }
    Ok(targets)
}

/// Mean cross-entropy over rows:
///   L = (1/N) * sum_i sum_c -targets[i][c] * log(prob[i][c] + eps)
///
/// `prob`    - softmax probabilities, shape (N, n_classes)
/// `targets` - one-hot (or soft) target distributions, same shape
pub fn mean_cross_entropy(prob: &Matrix, targets: &Matrix) -> f64 {
    let total: f64 = prob
        .data
        .iter()
        .zip(targets.data.iter())
        .map(|(p_row, t_row)| {
            p_row
                .iter()
                .zip(t_row.iter())
                .map(|(p, t)| -t * (p + EPS).ln())
                .sum::<f64>()
        })
        .sum();
    total / prob.rows as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_rows_sum_to_one() {
        let scores = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![-1.0, 0.0, 1.0]]);
        let prob = softmax_rows(&scores);
        for row in &prob.data {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
            assert!(row.iter().all(|&p| p > 0.0));
        }
    }

    #[test]
    fn softmax_survives_large_scores() {
        let scores = Matrix::from_data(vec![vec![1000.0, 1001.0]]);
        let prob = softmax_rows(&scores);
        assert!(prob.data[0].iter().all(|p| p.is_finite()));
        assert!((prob.data[0][0] + prob.data[0][1] - 1.0).abs() < 1e-12);
        assert!(prob.data[0][1] > prob.data[0][0]);
    }

    #[test]
    fn one_hot_encodes_each_label() {
        let targets = one_hot(&[0, 2, 1], 3).unwrap();
        assert_eq!(
            targets.data,
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0],
            ]
        );
    }

    #[test]
    fn one_hot_rejects_out_of_range_label() {
        let err = one_hot(&[0, 3], 3).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                what: "label",
                got: 3,
                expected: 3,
            }
        );
    }

    #[test]
    fn cross_entropy_of_perfect_prediction_is_near_zero() {
        let prob = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let targets = one_hot(&[0, 1], 2).unwrap();
        assert!(mean_cross_entropy(&prob, &targets).abs() < 1e-9);
    }

    #[test]
    fn cross_entropy_of_uniform_prediction_is_log_classes() {
        let prob = Matrix::from_data(vec![vec![0.25; 4]]);
        let targets = one_hot(&[2], 4).unwrap();
        let loss = mean_cross_entropy(&prob, &targets);
        assert!((loss - 4.0_f64.ln()).abs() < 1e-9);
    }
}
