use nalgebra::{DMatrix, DVector};
use plotters::prelude::*;

/// Plot every component of a trajectory into one png per variable.
pub fn plots(arg: String, values: Vec<String>, t_result: DVector<f64>, y_result: DMatrix<f64>) {
    let x = t_result;
    let x_min = x[0];
    let x_max = x[x.len() - 1];
    for col in 0..y_result.ncols() {
        let y_col = y_result.column(col);
        let y_min = y_col.iter().cloned().fold(f64::INFINITY, f64::min);
        let y_max = y_col.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let varname = values[col].clone();
        let filename = format!("{}.png", varname);
        let root_area = BitMapBackend::new(&filename, (800, 600)).into_drawing_area();
        root_area.fill(&WHITE).unwrap();

        let mut chart = ChartBuilder::on(&root_area)
            .caption(format!("{}", varname), ("sans-serif", 50))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .unwrap();

        chart
            .configure_mesh()
            .x_desc(&arg)
            .y_desc(&varname)
            .draw()
            .unwrap();

        let series: Vec<(f64, f64)> = x.iter().zip(y_col.iter()).map(|(&x, &y)| (x, y)).collect();
        chart
            .draw_series(LineSeries::new(series, &Palette99::pick(col)))
            .unwrap()
            .label(format!(" {}", varname))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(col))
            });

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .unwrap();
    }
}

/// Plot several scalar trajectories over the same time grid into one figure
/// with a legend, one line per method. Used to compare Euler/AB2/AB3 runs.
pub fn plot_method_comparison(
    arg: String,
    title: String,
    t: &DVector<f64>,
    series: &[(String, DVector<f64>)],
    filename: &str,
) {
    let x_min = t[0];
    let x_max = t[t.len() - 1];
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, y) in series {
        y_min = y.iter().cloned().fold(y_min, f64::min);
        y_max = y.iter().cloned().fold(y_max, f64::max);
    }
    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .unwrap();

    chart
        .configure_mesh()
        .x_desc(&arg)
        .y_desc("y")
        .draw()
        .unwrap();

    for (i, (label, y)) in series.iter().enumerate() {
        let points: Vec<(f64, f64)> = t.iter().zip(y.iter()).map(|(&x, &y)| (x, y)).collect();
        chart
            .draw_series(LineSeries::new(points, &Palette99::pick(i)))
            .unwrap()
            .label(format!(" {}", label))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(i))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .unwrap();
}
