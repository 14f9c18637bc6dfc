//! Fixed battery of evaluations printed for manual verification.
//!
//! Mirrors the classic test-driver format: illegal cases first, then the
//! closed forms, then general values printed with 17 significant digits.
//!
//! Run with: `cargo run --example battery`

use expint::prelude::*;

fn main() -> Result<(), ExpIntError> {
    println!("test expint(n, x):");

    println!("* illegal cases (should all be NaN)");
    for (n, x) in [(-1, 1.0), (1, -1.0), (0, 0.0), (1, 0.0), (0, -1.0)] {
        println!("  + expint({n}, {x:.1}) = {}", expint(n, x));
    }

    println!("* special cases:");
    println!("  + expint(0, 1.0) = {} (should be 1/e)", expint(0, 1.0));
    println!("  + expint(2, 0.0) = {} (should be 1/(n-1))", expint(2, 0.0));
    println!("  + expint(3, 0.0) = {} (should be 1/(n-1))", expint(3, 0.0));

    println!("* general cases:");
    let model = ExpInt::new().build()?;
    let cases = [
        (1, 1.0, 0.21938393439552027),
        (1, 2.0, 0.04890051070806112),
        (1, 0.5, 0.55977359477616084),
        (10, 1.0, 0.0363939940314164),
        (10, 2.0, 0.0120920851364003),
    ];
    for (n, x, expected) in cases {
        let eval = model.eval(n, x)?;
        println!(
            "  + expint({n}, {x:.1}) = {:.17} (should be {expected}) [{}, {} iterations]",
            eval.value,
            eval.region.name(),
            eval.iterations.unwrap_or(0),
        );
    }

    Ok(())
}
