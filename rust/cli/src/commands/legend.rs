//! Legend command handler.
//!
//! Prints the static counting rule legend: which ranks count -1, 0, and +1
//! under the Hi-Lo scheme.

use crate::error::CliError;
use hilo_engine::counting::LEGEND;
use std::io::Write;

pub fn handle_legend_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}", LEGEND)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_prints_all_three_groups() {
        let mut out = Vec::new();

        let result = handle_legend_command(&mut out);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("High cards"));
        assert!(output.contains("Neutral cards"));
        assert!(output.contains("Low cards"));
    }
}
