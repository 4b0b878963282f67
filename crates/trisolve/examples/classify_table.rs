//! Print a small table of solved triangles and their labels.
//!
//! Usage:
//!   cargo run -p trisolve --example classify_table
//!   cargo run -p trisolve --example classify_table -- 2025 12

use trisolve::triangle::rand::{draw_batch, SampleCfg};
use trisolve::triangle::solve;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025u64);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(8usize);

    println!("method  inputs                         by sides     by angles");
    for s in draw_batch(SampleCfg::default(), seed, count) {
        let [i1, i2, i3] = s.inputs;
        match solve(s.method, i1, i2, i3) {
            Ok(t) => println!(
                "{:<7} {:>9.4} {:>9.4} {:>9.4}   {:<12} {}",
                s.method.to_string(),
                i1,
                i2,
                i3,
                t.type_by_sides().to_string(),
                t.type_by_angles()
            ),
            Err(e) => println!("{:<7} {i1:.4} {i2:.4} {i3:.4}   error: {e}", s.method.to_string()),
        }
    }
}
