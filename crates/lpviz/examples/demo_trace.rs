//! Print the simplex steps and feasible polygon for the default problem.
//!
//! Usage:
//!   cargo run -p lpviz --example demo_trace
//!   cargo run -p lpviz --example demo_trace -- min

use lpviz::prelude::*;

fn main() {
    let mut set = ConstraintSet::demo();
    if std::env::args().nth(1).as_deref() == Some("min") {
        set.maximize = false;
    }
    let poly = order_polygon(&enumerate_vertices(&set.constraints, LpCfg::default()));
    println!("feasible polygon ({} vertices):", poly.len());
    for p in &poly {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }
    if let Some(obj) = set.objective {
        let trace = solve(&set.constraints, obj, set.maximize);
        print!("{trace}");
        match trace.optimum() {
            Some((p, v)) => println!("optimum {v:.3} at ({:.3}, {:.3})", p.x, p.y),
            None => println!("no finite optimum ({:?})", trace.terminal),
        }
    }
}
