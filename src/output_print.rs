use std::io::{self, Write};
use crate::checker::CheckResult;
use crate::output::{Outputs, format_probe};

pub struct PrintOutput<W: Write> {
    out: W
}

impl PrintOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PrintOutput<W> {
    pub fn new(out: W) -> Self {
        return Self{out: out}
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Outputs for PrintOutput<W> {
    fn start_cycle(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n")?;
        self.out.flush()
    }

    fn process_probe(&mut self, timestamp: &str, probe: &CheckResult) -> io::Result<()> {
        if probe.alert_status {
            writeln!(self.out, "ALERT!")?;
        }
        writeln!(self.out, "{}", format_probe(timestamp, probe))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temp_check::check_temp;

    #[test]
    fn alert_line_precedes_message() {
        let mut output = PrintOutput::new(Vec::new());
        output.process_probe("2024-01-01 00:00:00.000000", &check_temp(71.0, 70)).unwrap();
        let printed = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(printed, "ALERT!\n2024-01-01 00:00:00.000000: The temp is: 71.0\n");
    }

    #[test]
    fn quiet_probe_prints_message_only() {
        let mut output = PrintOutput::new(Vec::new());
        output.start_cycle().unwrap();
        output.process_probe("ts", &check_temp(65.0, 70)).unwrap();
        let printed = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(printed, "\n\nts: The temp is: 65.0\n");
    }
}
