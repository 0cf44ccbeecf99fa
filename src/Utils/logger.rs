use csv::Writer;
use nalgebra::{DMatrix, DVector};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Save a trajectory matrix with its time mesh into a tab-separated text
/// file, one row per time point, the mesh in the first column. Meant for
/// quick inspection with gnuplot or a pager; for further processing use
/// the csv variants below.
pub fn save_matrix_to_file(
    matrix: &DMatrix<f64>,
    headers: &[String],
    filename: &str,
    t_mesh: &DVector<f64>,
    arg: &String,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write!(file, "{}", arg)?;
    for name in headers {
        write!(file, "\t{}", name)?;
    }
    writeln!(file)?;
    for (i, row) in matrix.row_iter().enumerate() {
        write!(file, "{}", t_mesh[i])?;
        for val in row.iter() {
            write!(file, "\t{}", val)?;
        }
        writeln!(file)?;
    }
    file.flush()?;
    Ok(())
}

/// Same as save_matrix_to_file but csv.
pub fn save_matrix_to_csv(
    matrix: &DMatrix<f64>,
    headers: &Vec<String>,
    filename: &str,
    t_mesh: &DVector<f64>,
    arg: &String,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    let mut headers_with_t = Vec::new();
    headers_with_t.push(arg.clone());
    headers_with_t.extend(headers.iter().cloned());
    writer.write_record(&headers_with_t)?;

    for (i, row) in matrix.row_iter().enumerate() {
        let mut row_data = Vec::new();
        row_data.push(t_mesh[i].to_string());
        row_data.extend(row.iter().map(|&val| val.to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save several scalar trajectories computed on the same time mesh side by
/// side, one column per method. Used for the Euler/AB2/AB3 comparison.
pub fn save_comparison_to_csv(
    series: &[(String, DVector<f64>)],
    filename: &str,
    t_mesh: &DVector<f64>,
    arg: &String,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    let mut headers = vec![arg.clone()];
    headers.extend(series.iter().map(|(label, _)| label.clone()));
    writer.write_record(&headers)?;

    for i in 0..t_mesh.len() {
        let mut row_data = vec![t_mesh[i].to_string()];
        row_data.extend(series.iter().map(|(_, y)| y[i].to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests_logger {
    use super::*;
    use std::fs;

    #[test]
    fn test_save_matrix_to_csv_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.csv");
        let matrix = DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
        let t_mesh = DVector::from_vec(vec![0.0, 0.5, 1.0]);
        save_matrix_to_csv(
            &matrix,
            &vec!["y".to_string()],
            path.to_str().unwrap(),
            &t_mesh,
            &"t".to_string(),
        )
        .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "t,y");
        assert_eq!(lines[2], "0.5,2");
    }

    #[test]
    fn test_save_matrix_to_file_tab_separated_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.txt");
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 0.5, 2.0, 1.5]);
        let t_mesh = DVector::from_vec(vec![0.0, 1.0]);
        save_matrix_to_file(
            &matrix,
            &vec!["y1".to_string(), "y2".to_string()],
            path.to_str().unwrap(),
            &t_mesh,
            &"t".to_string(),
        )
        .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "t\ty1\ty2");
        assert_eq!(lines[1], "0\t1\t0.5");
        assert_eq!(lines[2], "1\t2\t1.5");
    }

    #[test]
    fn test_save_comparison_to_csv_one_column_per_method() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.csv");
        let t_mesh = DVector::from_vec(vec![0.0, 1.0]);
        let series = vec![
            ("Euler".to_string(), DVector::from_vec(vec![1.0, 1.5])),
            ("AB2".to_string(), DVector::from_vec(vec![1.0, 1.6])),
        ];
        save_comparison_to_csv(&series, path.to_str().unwrap(), &t_mesh, &"t".to_string())
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "t,Euler,AB2");
        assert_eq!(lines[1], "0,1,1");
        assert_eq!(lines[2], "1,1.5,1.6");
    }
}
