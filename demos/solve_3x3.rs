//! Walkthrough of the two direct solvers on small 3x3 systems.
//!
//! Run with:
//!   cargo run --example solve_3x3
//!   RUST_LOG=trace cargo run --example solve_3x3   (shows pivoting decisions)

use dense_solvers::{gauss_solve, lu_factorize};
use ndarray::{Array1, Array2, array};

fn report(label: &str, a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) {
    let r = &a.dot(x) - b;
    let residual = r.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    println!("  {}: x = {:?}", label, x.as_slice().unwrap());
    println!("  {}: max |A*x - b| = {:.3e}", label, residual);
}

fn main() {
    env_logger::init();

    println!();
    println!("=== Dense direct solvers demo ===");
    println!();

    let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
    let b = array![8.0, -11.0, -3.0];

    println!("System 1: well-conditioned, solvable by both paths");
    let factors = lu_factorize(&a).expect("factorization should succeed");
    println!("  LU: det(A) = {:.3}", factors.det());
    let x = factors.solve(&b).expect("solve should succeed");
    report("LU", &a, &x, &b);

    let x = gauss_solve(&a, &b).expect("Gauss solve should succeed");
    report("Gauss", &a, &x, &b);
    println!();

    let a = array![[10.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 11.0]];
    let b = array![8.0, -11.0, -3.0];

    println!("System 2: dominant first column, exercises pivot selection");
    let x = gauss_solve(&a, &b).expect("Gauss solve should succeed");
    report("Gauss", &a, &x, &b);
    println!();

    let a = array![[1.0, 2.0], [2.0, 4.0]];
    let b = array![1.0, 2.0];

    println!("System 3: rank-deficient, both paths must refuse");
    match lu_factorize(&a) {
        Ok(_) => println!("  LU: unexpectedly succeeded"),
        Err(e) => println!("  LU: {}", e),
    }
    match gauss_solve(&a, &b) {
        Ok(_) => println!("  Gauss: unexpectedly succeeded"),
        Err(e) => println!("  Gauss: {}", e),
    }
    println!();
}
