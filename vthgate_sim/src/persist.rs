//! Plain-text sample files, one `<time>, <voltage>` line per sample.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use vthgate_rs::{Sample, Waveform};

use crate::VthGateSimResult;

pub const FILE_SUFFIX: &str = "_gate_data.txt";

/// `DIFFERENT-LOGIC:1` becomes `different-logic_1_gate_data.txt`.
pub fn file_name(gate_name: &str) -> String {
    let stem = gate_name
        .to_lowercase()
        .replace(|c: char| c == ' ' || c == ':', "_");
    format!("{stem}{FILE_SUFFIX}")
}

pub fn round_millis(time: f64) -> f64 {
    (time * 1000.0).round() / 1000.0
}

pub fn format_line(sample: &Sample) -> String {
    format!("{:?}, {:?}\n", round_millis(sample.time), sample.voltage)
}

pub fn write_samples<W: Write>(writer: &mut W, waveform: &Waveform) -> io::Result<()> {
    for sample in waveform {
        writer.write_all(format_line(sample).as_bytes())?;
    }
    writer.flush()
}

pub fn save(waveform: &Waveform, dir: &Path) -> VthGateSimResult<PathBuf> {
    let path = dir.join(file_name(waveform.gate_name));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_samples(&mut writer, waveform)?;
    info!(path = %path.display(), samples = waveform.len(), "saved waveform");
    Ok(path)
}

#[cfg(test)]
mod test {
    use std::fs;

    use vthgate_rs::{gate, InputSpace, Sample, WaveformBuilder};

    use super::{file_name, format_line, save, write_samples};

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("AND"), "and_gate_data.txt");
        assert_eq!(file_name("MAJORITY2"), "majority2_gate_data.txt");
        assert_eq!(
            file_name("DIFFERENT-LOGIC:1"),
            "different-logic_1_gate_data.txt"
        );
        assert_eq!(file_name("Odd Gate:2"), "odd_gate_2_gate_data.txt");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(&Sample::new(0.0, 0.0)), "0.0, 0.0\n");
        assert_eq!(format_line(&Sample::new(0.07 - 0.001, 0.0)), "0.069, 0.0\n");
        assert_eq!(format_line(&Sample::new(3.0 * 0.01, 1.8)), "0.03, 1.8\n");
    }

    #[test]
    fn test_write_three_input_and() {
        let space = InputSpace::new(3).unwrap();
        let waveform = WaveformBuilder::new(&gate::AND_3, 1.8)
            .build(&space)
            .unwrap();
        let mut out = vec![];
        write_samples(&mut out, &waveform).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0.0, 0.0");
        assert_eq!(lines[1], "0.01, 0.0");
        assert_eq!(lines[7], "0.069, 0.0");
        assert_eq!(lines[8], "0.07, 1.8");
    }

    #[test]
    fn test_save_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let space = InputSpace::new(5).unwrap();
        let waveform = WaveformBuilder::new(&gate::DIFF_LOGIC_1_5, 1.8)
            .build(&space)
            .unwrap();
        let path = save(&waveform, dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "different-logic_1_gate_data.txt"
        );
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), waveform.len());
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_save_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let space = InputSpace::new(3).unwrap();
        let waveform = WaveformBuilder::new(&gate::OR_3, 1.8)
            .build(&space)
            .unwrap();
        let err = save(&waveform, &missing).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
