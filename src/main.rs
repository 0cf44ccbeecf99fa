#![allow(non_snake_case)]
pub mod Utils;
pub mod numerical;

use crate::Utils::logger::{save_comparison_to_csv, save_matrix_to_file};
use crate::Utils::plots::plot_method_comparison;
use crate::numerical::Examples_and_utils::TestODE;
use crate::numerical::FixedStep_api::{
    FixedStepMethod, FixedStepODE, fixed_step_solver,
};
use nalgebra::DVector;
use strum::IntoEnumIterator;
use tabled::{builder::Builder, settings::Style};

fn main() {
    let example = 0;
    match example {
        0 => {
            // COURSEWORK PROBLEM: y' = 4t - 3y, y(0) = 1 on [0, 0.5]
            // solve with all three methods on the same grid and put the
            // trajectories side by side with the exact solution
            let problem = TestODE::CourseworkLinear;
            let y0 = problem.initial_condition();
            let n_steps = 10;
            let mut series: Vec<(String, DVector<f64>)> = Vec::new();
            let mut t_mesh = DVector::zeros(n_steps + 1);
            for method in FixedStepMethod::iter() {
                let (y, times) =
                    fixed_step_solver(method, problem.rhs(), 0.0, 0.5, n_steps, &y0).unwrap();
                t_mesh = times;
                series.push((method.name().to_string(), y.column(0).into_owned()));
            }
            let exact: DVector<f64> =
                DVector::from_fn(n_steps + 1, |k, _| problem.exact_solution(t_mesh[k]));
            series.push(("exact".to_string(), exact));

            let mut builder = Builder::default();
            let mut header = vec!["t".to_string()];
            header.extend(series.iter().map(|(label, _)| label.clone()));
            builder.push_record(header);
            for k in 0..=n_steps {
                let mut row = vec![format!("{:.3}", t_mesh[k])];
                row.extend(series.iter().map(|(_, y)| format!("{:.6}", y[k])));
                builder.push_record(row);
            }
            let mut table = builder.build();
            table.with(Style::modern_rounded());
            println!("solving {} with {} steps", problem.name(), n_steps);
            println!("{}", table);

            plot_method_comparison(
                "t".to_string(),
                "Using numerical methods to solve y'=4t-3y with y(0)=1".to_string(),
                &t_mesh,
                &series,
                "methods_comparison.png",
            );
            save_comparison_to_csv(&series, "methods_comparison.csv", &t_mesh, &"t".to_string())
                .unwrap();
            println!("comparison plotted and saved");
        }
        1 => {
            // MINIMUM OF THE SOLUTION: the exact solution attains its
            // minimum at tmin = ln(13/4)/3; integrate up to tmin and compare
            // the numerical endpoint values against ymin = (4/3)*tmin
            let problem = TestODE::CourseworkLinear;
            let y0 = problem.initial_condition();
            let (tmin, ymin) = problem.minimum();
            let n_steps = 10;
            let mut builder = Builder::default();
            builder.push_record([
                "method".to_string(),
                format!("y({:.3})", tmin),
                "error vs ymin".to_string(),
            ]);
            for method in FixedStepMethod::iter() {
                let (y, _) =
                    fixed_step_solver(method, problem.rhs(), 0.0, tmin, n_steps, &y0).unwrap();
                let y_end = y[(n_steps, 0)];
                builder.push_record([
                    method.name().to_string(),
                    format!("{:.6}", y_end),
                    format!("{:.2e}", (y_end - ymin).abs()),
                ]);
            }
            builder.push_record([
                "exact".to_string(),
                format!("{:.6}", ymin),
                "0".to_string(),
            ]);
            let mut table = builder.build();
            table.with(Style::modern_rounded());
            println!("minimum of the exact solution: tmin = {}, ymin = {}", tmin, ymin);
            println!("{}", table);
        }
        2 => {
            // struct API with logging, plotting and csv saving on board
            let mut solver = FixedStepODE::new(
                Box::new(|t: f64, y: &DVector<f64>| {
                    DVector::from_vec(vec![4.0 * t - 3.0 * y[0]])
                }),
                vec!["y".to_string()],
                "t".to_string(),
                FixedStepMethod::AB3,
                0.0,
                DVector::from_vec(vec![1.0]),
                0.5,
                10,
            );
            solver.solve().unwrap();
            let (t_result, y_result) = solver.get_result();
            println!("y({}) = {}", t_result[t_result.len() - 1], y_result[(10, 0)]);
            solver.plot_result();
            solver.save_result().unwrap();
            // also a tab-separated dump for quick inspection
            save_matrix_to_file(
                &y_result,
                &["y".to_string()],
                "t+y.txt",
                &t_result,
                &"t".to_string(),
            )
            .unwrap();
        }
        _ => println!("there is no example with number {}", example),
    }
}
