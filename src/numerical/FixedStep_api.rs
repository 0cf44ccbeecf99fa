//! # Fixed-step explicit ODE solvers
//!
//! Solves the initial value problem y' = f(t, y), y(t0) = y0 on a uniform
//! time grid with one of three explicit schemes: forward Euler (order 1),
//! two-step Adams-Bashforth (order 2) and three-step Adams-Bashforth
//! (order 3). All three are driven by the same loop: each scheme is just a
//! tuple of finite-difference coefficients applied to the most recent
//! derivative evaluations, and while fewer history points exist than the
//! scheme order the loop automatically falls back to the widest formula
//! that fits (Euler for the first step, AB2 for the second step of AB3).
//!
//! ## Quick start
//! ```rust, ignore
//! use RustedAdams::numerical::FixedStep_api::ode_AB3;
//! use nalgebra::DVector;
//!
//! // y' = 4*t - 3*y, y(0) = 1
//! let f = |t: f64, y: &DVector<f64>| DVector::from_vec(vec![4.0 * t - 3.0 * y[0]]);
//! let y0 = DVector::from_vec(vec![1.0]);
//! let (y, times) = ode_AB3(f, 0.0, 0.5, 10, &y0).unwrap();
//! println!("y(0.5) = {}", y[(10, 0)]);
//! ```
//! or the struct based API with logging, plotting and saving on board:
//! ```rust, ignore
//! use RustedAdams::numerical::FixedStep_api::{FixedStepODE, FixedStepMethod};
//! let mut solver = FixedStepODE::new(
//!     Box::new(|t, y| DVector::from_vec(vec![4.0 * t - 3.0 * y[0]])),
//!     vec!["y".to_string()], "t".to_string(), FixedStepMethod::AB2,
//!     0.0, DVector::from_vec(vec![1.0]), 0.5, 10,
//! );
//! solver.solve().unwrap();
//! let (t_result, y_result) = solver.get_result();
//! solver.plot_result();
//! solver.save_result().unwrap();
//! ```
use crate::Utils::logger::save_matrix_to_csv;
use crate::Utils::plots::plots;
use log::{error, info};
use nalgebra::{DMatrix, DVector};
use simplelog::LevelFilter;
use simplelog::*;
use std::env;
use std::fmt;
use std::path::Path;
use std::time::Instant;
use strum_macros::EnumIter;
use tabled::{builder::Builder, settings::Style};

/// Explicit fixed-step scheme. The number of history points equals the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FixedStepMethod {
    Euler,
    AB2,
    AB3,
}

impl FixedStepMethod {
    pub fn new(name: &str) -> FixedStepMethod {
        match name {
            "Euler" => FixedStepMethod::Euler,
            "AB2" => FixedStepMethod::AB2,
            "AB3" => FixedStepMethod::AB3,
            _ => panic!("Unknown method name"),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            FixedStepMethod::Euler => "Euler",
            FixedStepMethod::AB2 => "AB2",
            FixedStepMethod::AB3 => "AB3",
        }
    }
    /// order of accuracy = width of the derivative history stencil
    pub fn order(&self) -> usize {
        match self {
            FixedStepMethod::Euler => 1,
            FixedStepMethod::AB2 => 2,
            FixedStepMethod::AB3 => 3,
        }
    }
}

/// Adams-Bashforth coefficients for a given stencil width, newest point first.
/// Width 1 is the forward Euler formula, so the same table serves both the
/// steady-state formulas and the bootstrap ladder of the multistep methods.
fn stencil_coefficients(width: usize) -> &'static [f64] {
    match width {
        1 => &[1.0],
        2 => &[1.5, -0.5],
        3 => &[23.0 / 12.0, -16.0 / 12.0, 5.0 / 12.0],
        _ => panic!("no Adams-Bashforth stencil of width {}", width),
    }
}

/// Error types for the fixed-step solvers
#[derive(Debug, Clone)]
pub enum FixedStepError {
    InvalidArgument(String),
    NumericFailure { step: usize, t: f64 },
}

impl fmt::Display for FixedStepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FixedStepError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            FixedStepError::NumericFailure { step, t } => write!(
                f,
                "RHS returned a non-finite value at step {} (t = {})",
                step, t
            ),
        }
    }
}

impl std::error::Error for FixedStepError {}

/// One parameterized stepper for Euler, AB2 and AB3.
///
/// Returns the solution matrix (one row per time point, one column per
/// state component, row 0 is exactly y0) and the vector of time points of
/// length n_steps + 1. On any failure no partial trajectory is returned.
pub fn fixed_step_solver<F>(
    method: FixedStepMethod,
    f: F,
    initial_time: f64,
    final_time: f64,
    n_steps: usize,
    y0: &DVector<f64>,
) -> Result<(DMatrix<f64>, DVector<f64>), FixedStepError>
where
    F: Fn(f64, &DVector<f64>) -> DVector<f64>,
{
    if n_steps == 0 {
        return Err(FixedStepError::InvalidArgument(
            "n_steps must be positive".to_string(),
        ));
    }
    if !initial_time.is_finite() || !final_time.is_finite() {
        return Err(FixedStepError::InvalidArgument(
            "initial_time and final_time must be finite".to_string(),
        ));
    }
    if initial_time == final_time {
        return Err(FixedStepError::InvalidArgument(
            "integration interval has zero length".to_string(),
        ));
    }
    let n = y0.len();
    if n == 0 {
        return Err(FixedStepError::InvalidArgument(
            "y0 must have at least one component".to_string(),
        ));
    }
    let h = (final_time - initial_time) / (n_steps as f64);
    let times = DVector::from_fn(n_steps + 1, |k, _| initial_time + (k as f64) * h);

    let mut y = DMatrix::zeros(n_steps + 1, n);
    for j in 0..n {
        y[(0, j)] = y0[j];
    }

    // history of derivative evaluations, oldest first, at most `order` entries
    let mut f_history: Vec<DVector<f64>> = Vec::with_capacity(method.order());

    for k in 0..n_steps {
        let y_k: DVector<f64> = y.row(k).transpose();
        let f_k = f(times[k], &y_k);
        if f_k.len() != n {
            return Err(FixedStepError::InvalidArgument(format!(
                "RHS returned {} components but y0 has {}",
                f_k.len(),
                n
            )));
        }
        if !f_k.iter().all(|v| v.is_finite()) {
            return Err(FixedStepError::NumericFailure { step: k, t: times[k] });
        }
        f_history.push(f_k);
        if f_history.len() > method.order() {
            f_history.remove(0);
        }

        // bootstrap: until `order` history points exist, the widest
        // available stencil is used (Euler, then AB2, then AB3)
        let coeffs = stencil_coefficients(f_history.len());
        let mut increment = DVector::zeros(n);
        for (i, c) in coeffs.iter().enumerate() {
            increment += *c * &f_history[f_history.len() - 1 - i];
        }
        let y_next = y_k + h * increment;
        for j in 0..n {
            y[(k + 1, j)] = y_next[j];
        }
    }

    Ok((y, times))
}

/// Forward Euler: y[k+1] = y[k] + h*f(t[k], y[k]). First order.
pub fn ode_Euler<F>(
    f: F,
    initial_time: f64,
    final_time: f64,
    n_steps: usize,
    y0: &DVector<f64>,
) -> Result<(DMatrix<f64>, DVector<f64>), FixedStepError>
where
    F: Fn(f64, &DVector<f64>) -> DVector<f64>,
{
    fixed_step_solver(FixedStepMethod::Euler, f, initial_time, final_time, n_steps, y0)
}

/// Two-step Adams-Bashforth: y[k+1] = y[k] + h*(1.5*f[k] - 0.5*f[k-1]).
/// The first step bootstraps with Euler. Second order.
pub fn ode_AB2<F>(
    f: F,
    initial_time: f64,
    final_time: f64,
    n_steps: usize,
    y0: &DVector<f64>,
) -> Result<(DMatrix<f64>, DVector<f64>), FixedStepError>
where
    F: Fn(f64, &DVector<f64>) -> DVector<f64>,
{
    fixed_step_solver(FixedStepMethod::AB2, f, initial_time, final_time, n_steps, y0)
}

/// Three-step Adams-Bashforth:
/// y[k+1] = y[k] + h*((23/12)*f[k] - (16/12)*f[k-1] + (5/12)*f[k-2]).
/// The first two steps bootstrap with Euler and AB2. Third order.
pub fn ode_AB3<F>(
    f: F,
    initial_time: f64,
    final_time: f64,
    n_steps: usize,
    y0: &DVector<f64>,
) -> Result<(DMatrix<f64>, DVector<f64>), FixedStepError>
where
    F: Fn(f64, &DVector<f64>) -> DVector<f64>,
{
    fixed_step_solver(FixedStepMethod::AB3, f, initial_time, final_time, n_steps, y0)
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////
pub struct FixedStepODE {
    f: Box<dyn Fn(f64, &DVector<f64>) -> DVector<f64>>, // RHS of the ODE system
    values: Vec<String>,                                // names of unknown variables
    arg: String,                                        // name of the argument (usually time)
    method: FixedStepMethod,
    t0: f64,               // start point
    y0: DVector<f64>,      // initial condition
    t_bound: f64,          // end point
    n_steps: usize,        // number of uniform steps
    pub loglevel: Option<String>,
    status: String,
    message: Option<String>,
    t_result: DVector<f64>,
    y_result: DMatrix<f64>,
}

impl FixedStepODE {
    pub fn new(
        f: Box<dyn Fn(f64, &DVector<f64>) -> DVector<f64>>,
        values: Vec<String>,
        arg: String,
        method: FixedStepMethod,
        t0: f64,
        y0: DVector<f64>,
        t_bound: f64,
        n_steps: usize,
    ) -> Self {
        FixedStepODE {
            f,
            values,
            arg,
            method,
            t0,
            y0,
            t_bound,
            n_steps,
            loglevel: Some("info".to_string()),
            status: "uninitialized".to_string(),
            message: None,
            t_result: DVector::zeros(1),
            y_result: DMatrix::zeros(1, 1),
        }
    }

    pub fn solve(&mut self) -> Result<(), FixedStepError> {
        if let Some(level) = &self.loglevel {
            let log_option = match level.as_str() {
                "debug" => LevelFilter::Info,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => panic!("loglevel must be debug, info, warn or error"),
            };
            let _ = CombinedLogger::init(vec![TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]);
        }
        info!(
            "solving IVP with {} method, {} steps",
            self.method.name(),
            self.n_steps
        );
        let start = Instant::now();
        self.status = "running".to_string();
        let res = fixed_step_solver(
            self.method,
            |t, y| (self.f)(t, y),
            self.t0,
            self.t_bound,
            self.n_steps,
            &self.y0,
        );
        let duration = start.elapsed();
        match res {
            Ok((y_res, t_res)) => {
                self.t_result = t_res;
                self.y_result = y_res;
                self.status = "finished".to_string();
                self.message = None;
                self.calc_statistics(duration.as_millis());
                Ok(())
            }
            Err(e) => {
                // results of an earlier successful run must not survive a
                // failed one, a caller ignoring the status would read them
                // as the current trajectory
                self.t_result = DVector::zeros(1);
                self.y_result = DMatrix::zeros(1, 1);
                self.status = "failed".to_string();
                self.message = Some(e.to_string());
                error!("integration failed: {}", e);
                Err(e)
            }
        }
    }

    fn calc_statistics(&self, elapsed_ms: u128) {
        let h = (self.t_bound - self.t0) / (self.n_steps as f64);
        let mut builder = Builder::default();
        builder.push_record(["method".to_string(), self.method.name().to_string()]);
        builder.push_record(["order".to_string(), self.method.order().to_string()]);
        builder.push_record(["number of steps".to_string(), self.n_steps.to_string()]);
        builder.push_record(["step size h".to_string(), h.to_string()]);
        builder.push_record(["length of y vector".to_string(), self.y0.len().to_string()]);
        builder.push_record(["time elapsed, ms".to_string(), elapsed_ms.to_string()]);
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table.to_string());
    }

    pub fn get_result(&self) -> (DVector<f64>, DMatrix<f64>) {
        (self.t_result.clone(), self.y_result.clone())
    }

    pub fn get_status(&self) -> (&str, Option<&String>) {
        (&self.status, self.message.as_ref())
    }

    pub fn plot_result(&self) {
        plots(
            self.arg.clone(),
            self.values.clone(),
            self.t_result.clone(),
            self.y_result.clone(),
        );
        println!("result plotted");
    }

    pub fn save_result(&self) -> Result<(), Box<dyn std::error::Error>> {
        let current_dir = env::current_dir()?;
        let path = Path::new(&current_dir);
        let file_name = format!("{}+{}.csv", self.arg, self.values.join("+"));
        let full_path = path.join(file_name);
        save_matrix_to_csv(
            &self.y_result,
            &self.values,
            full_path.to_str().unwrap(),
            &self.t_result,
            &self.arg,
        )?;
        println!("result saved");
        Ok(())
    }
}
