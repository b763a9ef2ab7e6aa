use log::info;
use rand::Rng;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::net::two_layer::TwoLayerNet;
use crate::optim::sgd::Sgd;
use crate::train::history::TrainingHistory;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `net` in place for `config.num_iters` mini-batch SGD
/// iterations and returns the accumulated [`TrainingHistory`].
///
/// # Arguments
/// - `net`          - network to optimize; parameters are updated in place
/// - `train_inputs` - training samples, shape (num_train, input_size)
/// - `train_labels` - one class label per training row
/// - `val_inputs`   - validation samples, same width as the training set
/// - `val_labels`   - one class label per validation row
/// - `config`       - hyperparameters, see [`TrainConfig`]
/// - `rng`          - generator for batch sampling; seed it for
///                    reproducible runs
///
/// Each iteration samples `batch_size` indices uniformly **with
/// replacement** (a batch may contain the same row more than once),
/// computes loss and gradients on that batch, and takes one SGD step.
/// Once per epoch (`max(num_train / batch_size, 1)` iterations) the
/// loop records the accuracy on the current batch and on the full
/// validation set, then decays the learning rate.
///
/// The batch-only training accuracy is intentional: scoring the full
/// training set every epoch would roughly double the cost of the loop.
///
/// # Errors
/// - `InvalidConfig` if `num_iters` or `batch_size` is zero, or the
///   training set is empty.
/// - `ShapeMismatch` if the label slices do not match their input rows,
///   or propagated from the first failing loss computation. A failed
///   iteration performs no parameter update.
pub fn train_loop(
    net: &mut TwoLayerNet,
    train_inputs: &Matrix,
    train_labels: &[usize],
    val_inputs: &Matrix,
    val_labels: &[usize],
    config: &TrainConfig,
    rng: &mut impl Rng,
) -> Result<TrainingHistory> {
    if config.num_iters == 0 {
        return Err(Error::InvalidConfig("num_iters must be at least 1"));
    }
    if config.batch_size == 0 {
        return Err(Error::InvalidConfig("batch_size must be at least 1"));
    }
    if train_inputs.rows == 0 {
        return Err(Error::InvalidConfig("training set must not be empty"));
    }
    if train_labels.len() != train_inputs.rows {
        return Err(Error::ShapeMismatch {
            what: "train label count",
            got: train_labels.len(),
            expected: train_inputs.rows,
        });
    }
    if val_labels.len() != val_inputs.rows {
        return Err(Error::ShapeMismatch {
            what: "val label count",
            got: val_labels.len(),
            expected: val_inputs.rows,
        });
    }

    let num_train = train_inputs.rows;
    let iterations_per_epoch = (num_train / config.batch_size).max(1);

    let mut optimizer = Sgd::new(config.learning_rate);
    let mut history = TrainingHistory::default();

    for it in 0..config.num_iters {
        // ── Sample a mini-batch, uniformly with replacement ────────────────
        let indices: Vec<usize> = (0..config.batch_size)
            .map(|_| rng.gen_range(0..num_train))
            .collect();
        let batch_inputs = train_inputs.gather_rows(&indices);
        let batch_labels: Vec<usize> = indices.iter().map(|&i| train_labels[i]).collect();

        // ── Loss, gradients, parameter update ──────────────────────────────
        // An error here aborts the run before any update for this iteration.
        let (loss, grads) = net.loss(&batch_inputs, &batch_labels, config.reg)?;
        history.loss_history.push(loss);

        optimizer.step(&mut net.params, &grads);

        if config.verbose && it % 100 == 0 {
            info!("iteration {it} / {}: loss {loss:.6}", config.num_iters);
        }

        // ── Every epoch: record accuracies, decay the learning rate ───────
        if it % iterations_per_epoch == 0 {
            let train_acc = accuracy(&net.predict(&batch_inputs)?, &batch_labels);
            let val_acc = accuracy(&net.predict(val_inputs)?, val_labels);
            history.train_acc_history.push(train_acc);
            history.val_acc_history.push(val_acc);

            optimizer.decay(config.learning_rate_decay);
        }
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fraction of predictions that match their labels.
pub fn accuracy(predicted: &[usize], labels: &[usize]) -> f64 {
    if predicted.is_empty() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(labels.iter())
        .filter(|(p, l)| p == l)
        .count();
    correct as f64 / predicted.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_counts_matches() {
        assert_eq!(accuracy(&[0, 1, 2, 1], &[0, 1, 1, 1]), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
        assert_eq!(accuracy(&[2, 2], &[2, 2]), 1.0);
    }
}
