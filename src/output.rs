use std::io;
use crate::checker::CheckResult;

pub trait Outputs {
    fn start_cycle(&mut self) -> io::Result<()>;
    fn process_probe(&mut self, timestamp: &str, probe: &CheckResult) -> io::Result<()>;
}

pub fn format_probe(timestamp: &str, probe: &CheckResult) -> String {
    format!("{}: {}", timestamp, probe.message)
}
