use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Result, bail};

pub mod moveout;
pub mod rent;
pub mod repair;

fn ensure_money(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        bail!("{label} must be a non-negative amount, got {value}");
    }
    Ok(())
}

fn print_result(value: &impl Display) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    write!(output, "{value}")?;
    output.flush()?;
    Ok(())
}
