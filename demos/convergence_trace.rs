//! Convergence Trace Export
//!
//! This example runs a long gradient-descent session over a fixed point set
//! and writes one CSV row per iteration: the current slope, intercept, and
//! sum of squared residuals. The trace is meant for plotting the descent
//! path against the closed-form optimum.

#[cfg(feature = "std")]
use linefit::prelude::*;
#[cfg(feature = "std")]
use std::fs::File;
#[cfg(feature = "std")]
use std::io::Write;

#[cfg(feature = "std")]
const ITERATIONS: usize = 2_000;

#[cfg(feature = "std")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pairs = [(0.2f64, 0.3), (0.8, 0.7), (0.5, 0.4)];

    let mut points = PointSet::new();
    for &(x, y) in &pairs {
        points.insert(Point::new(x, y)?);
    }

    let mut session = Session::with_fitter(
        Linefit::new()
            .learning_rate(0.02) // Library default, restated for the trace header
            .strategy(GradientDescent)
            .build()?,
    );
    for point in points.iter() {
        session.handle_event(SessionEvent::PrimaryClick(point));
    }

    let target = Linefit::new().strategy(LeastSquares).build()?.fit(&points)?;

    println!(
        "Tracing {} gradient-descent iterations at learning rate 0.02",
        ITERATIONS
    );
    println!(
        "Closed-form target: m = {:.5} b = {:.5}",
        target.slope, target.intercept
    );

    let path = "convergence_trace.csv";
    let mut file = File::create(path)?;
    writeln!(file, "iteration,m,b,sse")?;
    writeln!(file, "0,{:.6},{:.6},{:.6}", 0.0, 0.0, sse(&points, session.line()))?;

    let mut first = LineModel::zero();
    for i in 1..=ITERATIONS {
        let report = session.advance_frame();
        if i == 1 {
            first = report.line;
        }
        writeln!(
            file,
            "{},{:.6},{:.6},{:.6}",
            i,
            report.line.slope,
            report.line.intercept,
            sse(&points, report.line)
        )?;
    }

    println!(
        "First iteration:    m = {:.5} b = {:.5}",
        first.slope, first.intercept
    );
    println!("Wrote {} samples to {}", ITERATIONS + 1, path);

    let settled = session.line();
    let close = (settled.slope - target.slope).abs() < 0.05
        && (settled.intercept - target.intercept).abs() < 0.05;
    println!("Final model within 0.05 of target: {}", close);

    /* Expected Output:
    Tracing 2000 gradient-descent iterations at learning rate 0.02
    Closed-form target: m = 0.66667 b = 0.13333
    First iteration:    m = 0.01603 b = 0.02734
    Wrote 2001 samples to convergence_trace.csv
    Final model within 0.05 of target: true
    */

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Sum of squared vertical residuals of the model over the point set.
fn sse(points: &PointSet<f64>, line: LineModel<f64>) -> f64 {
    points
        .iter()
        .map(|p| {
            let r = p.y - line.predict(p.x);
            r * r
        })
        .sum()
}
