use crate::checker::{CheckResult, HealthCheck, Measurement};
use crate::error::SensorError;
use crate::sensors::SensorReader;

pub const DEFAULT_TEMP_THRESHOLD: i64 = 70;

pub struct TempChecker {
    threshold: i64
}

impl TempChecker {
    pub fn new(threshold: i64) -> Self {
        Self{threshold: threshold}
    }
}

// Whole degrees only: the reading is truncated before it is compared.
pub fn check_temp(temp: f64, threshold: i64) -> CheckResult {
    CheckResult {
        name: String::from("temp"),
        result: Measurement::Temperature(temp),
        alert_status: temp.trunc() as i64 >= threshold,
        message: format!("The temp is: {:?}", temp)
    }
}

impl HealthCheck for TempChecker {
    fn name(&self) -> &str {
        "temp"
    }

    fn check(&self, sensors: &mut dyn SensorReader) -> Result<CheckResult, SensorError> {
        let temp = sensors.read_temperature()?;
        Ok(check_temp(temp, self.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::fake::FakeSensors;

    #[test]
    fn threshold_itself_alerts() {
        assert!(check_temp(70.0, 70).alert_status);
        assert!(check_temp(70.9, 70).alert_status);
    }

    #[test]
    fn fraction_below_threshold_is_truncated_away() {
        assert!(!check_temp(70.9, 71).alert_status);
        assert!(!check_temp(69.99, 70).alert_status);
    }

    #[test]
    fn message_carries_raw_reading() {
        let result = check_temp(71.0, DEFAULT_TEMP_THRESHOLD);
        assert_eq!(result.message, "The temp is: 71.0");
        assert_eq!(result.result, Measurement::Temperature(71.0));
        let result = check_temp(48.312, DEFAULT_TEMP_THRESHOLD);
        assert_eq!(result.message, "The temp is: 48.312");
        assert!(!result.alert_status);
    }

    #[test]
    fn reads_from_sensor() {
        let mut sensors = FakeSensors::with_temperature(75.5);
        let result = TempChecker::new(DEFAULT_TEMP_THRESHOLD).check(&mut sensors).unwrap();
        assert!(result.alert_status);
        assert_eq!(result.name, "temp");
    }

    #[test]
    fn sensor_failure_propagates() {
        let mut sensors = FakeSensors::with_temperature(0.0);
        sensors.temperature = None;
        assert!(TempChecker::new(DEFAULT_TEMP_THRESHOLD).check(&mut sensors).is_err());
    }
}
