// This binary crate is intentionally minimal.
// All classifier logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example clusters
fn main() {
    println!("slate-nn: a minimal two-layer softmax classifier in Rust.");
    println!("Run `cargo run --example clusters` to train on synthetic data.");
}
