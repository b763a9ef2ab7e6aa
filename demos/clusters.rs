/// Synthetic-clusters demo for slate-nn.
///
/// Architecture: 2 -> 16 (ReLU) -> 3 (softmax)
/// Loss:         softmax cross-entropy, L2-regularized
/// Optimizer:    SGD, lr = 0.5, decayed 0.95x per epoch
/// Batch size:   32
/// Iterations:   1000
///
/// Run with:
///   RUST_LOG=info cargo run --example clusters
///
/// Writes the loss/accuracy history to history.json so external tooling
/// can plot the curves.

use std::fs::File;
use std::io::BufWriter;

use rand::rngs::StdRng;
use rand::SeedableRng;

use slate_nn::{accuracy, train_loop, Matrix, TrainConfig, TwoLayerNet};

// ---------------------------------------------------------------------------
// Data generation
// ---------------------------------------------------------------------------

/// Draws `per_class` points around each of three well-separated 2-D
/// cluster centers. Returns the stacked inputs and their class labels.
fn make_clusters(per_class: usize, spread: f64, rng: &mut StdRng) -> (Matrix, Vec<usize>) {
    const CENTERS: [[f64; 2]; 3] = [[2.0, 0.0], [-2.0, 1.5], [0.0, -2.5]];

    let mut rows = Vec::with_capacity(CENTERS.len() * per_class);
    let mut labels = Vec::with_capacity(CENTERS.len() * per_class);

    for (class, center) in CENTERS.iter().enumerate() {
        let noise = Matrix::randn(per_class, 2, spread, rng);
        for point in &noise.data {
            rows.push(vec![center[0] + point[0], center[1] + point[1]]);
            labels.push(class);
        }
    }

    (Matrix::from_data(rows), labels)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(0);

    let (train_inputs, train_labels) = make_clusters(100, 0.6, &mut rng);
    let (val_inputs, val_labels) = make_clusters(20, 0.6, &mut rng);

    let mut net = TwoLayerNet::new(2, 16, 3, 1e-1, &mut rng).expect("valid network sizes");

    let mut config = TrainConfig::new(1000, 32);
    config.learning_rate = 0.5;
    config.verbose = true;

    let history = train_loop(
        &mut net,
        &train_inputs,
        &train_labels,
        &val_inputs,
        &val_labels,
        &config,
        &mut rng,
    )
    .expect("training failed");

    let train_pred = net.predict(&train_inputs).expect("predict train set");
    let val_pred = net.predict(&val_inputs).expect("predict val set");
    println!("final train accuracy: {:.3}", accuracy(&train_pred, &train_labels));
    println!("final val accuracy:   {:.3}", accuracy(&val_pred, &val_labels));

    let file = File::create("history.json").expect("create history.json");
    serde_json::to_writer_pretty(BufWriter::new(file), &history).expect("write history.json");
    println!("wrote history.json ({} loss entries)", history.loss_history.len());
}
