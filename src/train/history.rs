use serde::{Deserialize, Serialize};

/// Metrics accumulated over one `train_loop` run.
///
/// All three series are append-only while training runs and are handed
/// back to the caller at the end. Receivers (plotting scripts, notebook
/// tooling) typically serialize this to JSON to drive loss and accuracy
/// curves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// Training loss, one entry per iteration.
    pub loss_history: Vec<f64>,
    /// Accuracy on the sampled batch, one entry per epoch.
    pub train_acc_history: Vec<f64>,
    /// Accuracy on the full validation set, one entry per epoch.
    pub val_acc_history: Vec<f64>,
}
