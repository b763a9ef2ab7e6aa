use serde::{Deserialize, Serialize};

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `learning_rate`       - initial SGD step size
/// - `learning_rate_decay` - multiplicative factor applied to the rate
///                           after each epoch
/// - `reg`                 - L2 regularization strength
/// - `num_iters`           - total number of SGD iterations
/// - `batch_size`          - samples per mini-batch
/// - `verbose`             - log a progress line every 100 iterations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub learning_rate_decay: f64,
    pub reg: f64,
    pub num_iters: usize,
    pub batch_size: usize,
    pub verbose: bool,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the stock hyperparameters: learning
    /// rate 1e-3, decay 0.95, regularization 5e-6, quiet.
    pub fn new(num_iters: usize, batch_size: usize) -> Self {
        TrainConfig {
            learning_rate: 1e-3,
            learning_rate_decay: 0.95,
            reg: 5e-6,
            num_iters,
            batch_size,
            verbose: false,
        }
    }
}
