//! Interactive Session Replay Examples
//!
//! This example replays a scripted sequence of canvas clicks through a
//! fitting session, the way an interactive frontend would drive the crate:
//! - Gradient descent refining the line one frame at a time
//! - The closed-form solve on the same clicks for comparison
//! - A degenerate vertical stack of clicks and recovery from it
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use linefit::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), FitError> {
    println!("{}", "=".repeat(80));
    println!("Interactive Line Fitting - Session Replay Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_scripted_replay()?;
    example_2_closed_form_comparison()?;
    example_3_degenerate_column()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn outcome_label(outcome: EventOutcome) -> &'static str {
    match outcome {
        EventOutcome::Inserted => "inserted",
        EventOutcome::Duplicate => "duplicate",
        EventOutcome::Ignored => "ignored",
    }
}

#[cfg(feature = "std")]
/// Example 1: Scripted Click Replay
/// Clicks land on the canvas, every frame runs one descent sweep
fn example_1_scripted_replay() -> Result<(), FitError> {
    println!("Example 1: Scripted Click Replay (gradient descent)");
    println!("{}", "-".repeat(80));

    let fitter = Linefit::new()
        .learning_rate(0.1) // Interactive rate: visible motion per frame
        .strategy(GradientDescent)
        .build()?;
    let mut session = Session::with_fitter(fitter);
    let viewport = Viewport::default();

    // Pixel clicks, including one accidental double-click
    let clicks = [
        (160.0f64, 420.0),
        (160.0, 420.0),
        (640.0, 180.0),
        (400.0, 360.0),
    ];

    for &(px, py) in &clicks {
        let point = viewport.to_domain(px, py)?;
        let outcome = session.handle_event(SessionEvent::PrimaryClick(point));
        println!(
            "click ({:.0}, {:.0}) -> point ({:.3}, {:.3}) [{}]",
            px,
            py,
            point.x,
            point.y,
            outcome_label(outcome)
        );
        println!("{}", session.advance_frame());
    }

    // One idle frame: no new input, the fit still refines
    println!("idle frame");
    println!("{}", session.advance_frame());

    /* Expected Output:
    click (160, 420) -> point (0.200, 0.300) [inserted]
    m = 0.00000 b = 0.00000 (awaiting points)
    iteration 0
    click (160, 420) -> point (0.200, 0.300) [duplicate]
    m = 0.00000 b = 0.00000 (awaiting points)
    iteration 0
    click (640, 180) -> point (0.800, 0.700) [inserted]
    m = 0.05922 b = 0.09652
    iteration 1
    click (400, 360) -> point (0.500, 0.400) [inserted]
    m = 0.11466 b = 0.18688
    iteration 2
    idle frame
    m = 0.15376 b = 0.24582
    iteration 3
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Closed-Form Comparison
/// The same clicks solved in a single frame by least squares
fn example_2_closed_form_comparison() -> Result<(), FitError> {
    println!("Example 2: Closed-Form Comparison (least squares)");
    println!("{}", "-".repeat(80));

    let mut session = Session::with_strategy(StrategyKind::LeastSquares);
    let viewport = Viewport::default();

    for &(px, py) in &[(160.0f64, 420.0), (640.0, 180.0), (400.0, 360.0)] {
        let point = viewport.to_domain(px, py)?;
        session.handle_event(SessionEvent::PrimaryClick(point));
    }

    let report = session.advance_frame();
    println!("{}", report);

    // Where the fitted line crosses the left and right canvas edges
    let line = session.line();
    println!(
        "edges: y(0) = {:.5}  y(1) = {:.5}",
        line.predict(0.0),
        line.predict(1.0)
    );

    /* Expected Output:
    m = 0.66667 b = 0.13333
    edges: y(0) = 0.13333  y(1) = 0.80000
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Degenerate Column of Clicks
/// A vertical stack has no defined slope until a third click breaks it
fn example_3_degenerate_column() -> Result<(), FitError> {
    println!("Example 3: Degenerate Column of Clicks (least squares)");
    println!("{}", "-".repeat(80));

    let mut session = Session::with_strategy(StrategyKind::LeastSquares);
    let viewport = Viewport::default();

    // Two clicks in the same pixel column
    for &(px, py) in &[(400.0f64, 100.0), (400.0, 500.0)] {
        let point = viewport.to_domain(px, py)?;
        session.handle_event(SessionEvent::PrimaryClick(point));
    }
    println!("{}", session.advance_frame());

    // A third click off the column makes the slope well-defined
    let point = viewport.to_domain(700.0f64, 80.0)?;
    session.handle_event(SessionEvent::PrimaryClick(point));
    println!("{}", session.advance_frame());

    /* Expected Output:
    m = 0.00000 b = 0.00000 (degenerate fit)
    m = 0.97778 b = 0.01111
    */

    println!();
    Ok(())
}
