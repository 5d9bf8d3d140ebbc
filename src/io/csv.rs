use std::io::{self, Write};
use std::path::Path;

use crate::sim::Sample;

/// Write trajectory data to CSV format.
///
/// Columns: time, mean_anomaly_deg, pos_x, pos_y, pos_z, radius
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[Sample]) -> io::Result<()> {
    writeln!(writer, "time,mean_anomaly_deg,pos_x,pos_y,pos_z,radius")?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.5},{:.4},{:.5},{:.5},{:.5},{:.5}",
            s.time,
            s.mean_anomaly.to_degrees(),
            s.pos.x, s.pos.y, s.pos.z,
            s.pos.norm(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &Path, trajectory: &[Sample]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            Sample {
                time: 0.0,
                mean_anomaly: 0.0,
                pos: Vector3::new(8.4, 0.0, 0.0),
            },
            Sample {
                time: 0.0167,
                mean_anomaly: 0.25,
                pos: Vector3::new(8.0, 2.1, 1.2),
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[1], "0.00000,0.0000,8.40000,0.00000,0.00000,8.40000");
        assert_eq!(lines[2].split(',').count(), 6);
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traj.csv");
        let traj = vec![Sample { time: 0.0, mean_anomaly: 0.0, pos: Vector3::new(1.0, 2.0, 2.0) }];
        write_trajectory_file(&path, &traj).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("3.00000\n"));
    }
}
