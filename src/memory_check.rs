use crate::checker::{CheckResult, HealthCheck, Measurement};
use crate::error::SensorError;
use crate::sensors::{MemoryStats, SensorReader};

pub const DEFAULT_MEMORY_THRESHOLD: f64 = 95.0;
const BYTES_PER_GB: f64 = 1073741824.0;

pub struct MemoryChecker {
    threshold: f64
}

impl MemoryChecker {
    pub fn new(threshold: f64) -> Self {
        Self{threshold: threshold}
    }
}

// free_bytes counts memory not used at all, not what is available to allocate.
pub fn check_memory(stats: &MemoryStats, threshold: f64) -> CheckResult {
    let free_gb = stats.free_bytes as f64 / BYTES_PER_GB;
    CheckResult {
        name: String::from("memory"),
        result: Measurement::Memory(format!("{:?}%", stats.percent_used)),
        alert_status: stats.percent_used > threshold,
        message: format!("% of memory used: {:?}\nGB free is: {:.2}", stats.percent_used, free_gb)
    }
}

impl HealthCheck for MemoryChecker {
    fn name(&self) -> &str {
        "memory"
    }

    fn check(&self, sensors: &mut dyn SensorReader) -> Result<CheckResult, SensorError> {
        let stats = sensors.read_memory()?;
        Ok(check_memory(&stats, self.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::fake::FakeSensors;

    fn stats(percent_used: f64) -> MemoryStats {
        MemoryStats { percent_used: percent_used, free_bytes: 3 * 1073741824 / 2 }
    }

    #[test]
    fn threshold_itself_does_not_alert() {
        assert!(!check_memory(&stats(95.0), DEFAULT_MEMORY_THRESHOLD).alert_status);
        assert!(check_memory(&stats(95.01), DEFAULT_MEMORY_THRESHOLD).alert_status);
    }

    #[test]
    fn message_and_result_format() {
        let result = check_memory(&stats(42.3), DEFAULT_MEMORY_THRESHOLD);
        assert_eq!(result.message, "% of memory used: 42.3\nGB free is: 1.50");
        assert_eq!(result.result, Measurement::Memory(String::from("42.3%")));
        let result = check_memory(&stats(60.0), DEFAULT_MEMORY_THRESHOLD);
        assert_eq!(result.result.to_string(), "60.0%");
    }

    #[test]
    fn reads_from_sensor() {
        let mut sensors = FakeSensors::with_temperature(40.0);
        sensors.memory = MemoryStats { percent_used: 97.5, free_bytes: 0 };
        let result = MemoryChecker::new(DEFAULT_MEMORY_THRESHOLD).check(&mut sensors).unwrap();
        assert!(result.alert_status);
        assert!(result.message.ends_with("GB free is: 0.00"));
    }
}
