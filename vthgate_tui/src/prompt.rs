use std::io::{self, BufRead, Write};

/// Asks for a threshold voltage and returns the raw answer.
pub fn read_threshold<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    vdd: f64,
) -> io::Result<String> {
    write!(output, "Enter threshold voltage (0-{vdd}V): ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
