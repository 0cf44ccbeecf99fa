/// Fixed-step explicit IVP solvers: forward Euler, two-step and three-step
/// Adams-Bashforth, all driven by one parameterized stepper.
///
/// Example#1
/// ```rust, ignore
///    // the shortest way: call one of the three free functions
///    use RustedAdams::numerical::FixedStep_api::ode_AB2;
///    use nalgebra::DVector;
///    let f = |t: f64, y: &DVector<f64>| DVector::from_vec(vec![4.0 * t - 3.0 * y[0]]);
///    let y0 = DVector::from_vec(vec![1.0]);
///    let (y, times) = ode_AB2(f, 0.0, 0.5, 10, &y0).unwrap();
///    println!("y(0.5) = {}", y[(10, 0)]);
/// ```
/// Example#2
/// ```rust, ignore
///    // or the more verbose struct API with logging, plots and csv saving
///    use RustedAdams::numerical::FixedStep_api::{FixedStepODE, FixedStepMethod};
///    use nalgebra::DVector;
///    let mut solver = FixedStepODE::new(
///        Box::new(|t, y: &DVector<f64>| DVector::from_vec(vec![4.0 * t - 3.0 * y[0]])),
///        vec!["y".to_string()],
///        "t".to_string(),
///        FixedStepMethod::AB3,
///        0.0,
///        DVector::from_vec(vec![1.0]),
///        0.5,
///        10,
///    );
///    solver.solve().unwrap();
///    let (t_result, y_result) = solver.get_result();
///    solver.plot_result();
///    solver.save_result().unwrap();
/// ```
pub mod FixedStep_api;

/// a collection of IVP examples with exact solutions for testing purposes
pub mod Examples_and_utils;
