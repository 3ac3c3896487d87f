use crate::sweep::SweepResult;
use crate::trajectory::Trajectory;
use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a trajectory as CSV with header `time,state_0,state_1,...`, one
/// row per sample. This is the interchange schema the plotting tooling
/// reads.
pub fn write_trajectory_csv<W: Write>(trajectory: &Trajectory, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let dim = trajectory.dimension();

    let mut header = Vec::with_capacity(dim + 1);
    header.push("time".to_string());
    for i in 0..dim {
        header.push(format!("state_{i}"));
    }
    csv_writer.write_record(&header)?;

    let mut record = Vec::with_capacity(dim + 1);
    for (t, state) in trajectory.iter() {
        record.clear();
        record.push(t.to_string());
        for value in state {
            record.push(value.to_string());
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the trajectory CSV to a file path, buffered.
pub fn trajectory_to_csv(trajectory: &Trajectory, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_trajectory_csv(trajectory, BufWriter::new(file))
}

/// Writes sweep output as CSV with header `<parameter>,result_0,...`, one
/// row per swept value.
pub fn write_sweep_csv<W: Write>(sweep: &SweepResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let result_dim = sweep.results.first().map_or(0, Vec::len);

    let mut header = Vec::with_capacity(result_dim + 1);
    header.push(sweep.parameter.clone());
    for i in 0..result_dim {
        header.push(format!("result_{i}"));
    }
    csv_writer.write_record(&header)?;

    let mut record = Vec::with_capacity(result_dim + 1);
    for (value, results) in sweep.values.iter().zip(&sweep.results) {
        record.clear();
        record.push(value.to_string());
        for result in results {
            record.push(result.to_string());
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the sweep CSV to a file path, buffered.
pub fn sweep_to_csv(sweep: &SweepResult, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_sweep_csv(sweep, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::{write_sweep_csv, write_trajectory_csv};
    use crate::sweep::SweepResult;
    use crate::trajectory::Trajectory;

    #[test]
    fn trajectory_csv_has_time_and_state_columns() {
        let trajectory = Trajectory {
            times: vec![0.0, 0.5],
            states: vec![vec![1.0, -2.0], vec![0.25, 3.5]],
        };
        let mut buffer = Vec::new();
        write_trajectory_csv(&trajectory, &mut buffer).expect("write should succeed");
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "time,state_0,state_1\n0,1,-2\n0.5,0.25,3.5\n");
    }

    #[test]
    fn empty_trajectory_writes_bare_time_header() {
        let trajectory = Trajectory {
            times: vec![],
            states: vec![],
        };
        let mut buffer = Vec::new();
        write_trajectory_csv(&trajectory, &mut buffer).expect("write should succeed");
        assert_eq!(String::from_utf8(buffer).unwrap(), "time\n");
    }

    #[test]
    fn sweep_csv_is_keyed_by_parameter_name() {
        let sweep = SweepResult {
            parameter: "gamma".to_string(),
            values: vec![0.5, 1.5],
            results: vec![vec![2.0], vec![4.0]],
        };
        let mut buffer = Vec::new();
        write_sweep_csv(&sweep, &mut buffer).expect("write should succeed");
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "gamma,result_0\n0.5,2\n1.5,4\n"
        );
    }
}
