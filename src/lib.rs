pub mod activation;
pub mod error;
pub mod loss;
pub mod math;
pub mod net;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use net::params::{Gradients, Params};
pub use net::two_layer::TwoLayerNet;
pub use optim::sgd::Sgd;
pub use train::history::TrainingHistory;
pub use train::loop_fn::{accuracy, train_loop};
pub use train::train_config::TrainConfig;
