use std::time::Duration;
use log::debug;
use crate::checker::{CheckResult, CpuUsage, HealthCheck, Measurement};
use crate::error::SensorError;
use crate::sensors::SensorReader;

pub const DEFAULT_CPU_THRESHOLD: f64 = 90.0;
pub const DEFAULT_CPU_DURATION: u64 = 4;

pub struct CpuChecker {
    duration: u64,
    per_core: bool,
    threshold: f64
}

impl CpuChecker {
    pub fn new(duration: u64, per_core: bool, threshold: f64) -> Self {
        Self {
            duration: duration,
            per_core: per_core,
            threshold: threshold
        }
    }
}

pub fn check_cpu(usage: CpuUsage, duration: u64, threshold: f64) -> CheckResult {
    let average = usage.average();
    debug!("cpu average {} over {} samples", average, usage.samples().len());
    CheckResult {
        name: String::from("cpu"),
        alert_status: average > threshold,
        message: format!("cpu usage over {} seconds is {}", duration, usage),
        result: Measurement::Cpu(usage)
    }
}

impl HealthCheck for CpuChecker {
    fn name(&self) -> &str {
        "cpu"
    }

    fn check(&self, sensors: &mut dyn SensorReader) -> Result<CheckResult, SensorError> {
        let usage = sensors.read_cpu_utilization(Duration::from_secs(self.duration), self.per_core)?;
        Ok(check_cpu(usage, self.duration, self.threshold))
    }
}
