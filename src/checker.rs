use std::fmt;
use crate::error::SensorError;
use crate::sensors::SensorReader;

#[derive(Debug, Clone, PartialEq)]
pub enum CpuUsage {
    PerCore(Vec<f64>),
    Total(f64)
}

impl CpuUsage {
    // A total reading is a one element slice.
    pub fn samples(&self) -> &[f64] {
        match self {
            CpuUsage::PerCore(cores) => cores.as_slice(),
            CpuUsage::Total(total) => std::slice::from_ref(total)
        }
    }

    pub fn average(&self) -> f64 {
        let samples = self.samples();
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

impl fmt::Display for CpuUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuUsage::PerCore(cores) => write!(f, "{:?}", cores),
            CpuUsage::Total(total) => write!(f, "{:?}", total)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    Temperature(f64),
    Memory(String),
    Cpu(CpuUsage)
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Temperature(t) => write!(f, "{:?}", t),
            Measurement::Memory(m) => write!(f, "{}", m),
            Measurement::Cpu(c) => write!(f, "{}", c)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: String,
    pub result: Measurement,
    pub alert_status: bool,
    pub message: String
}

pub trait HealthCheck {
    fn name(&self) -> &str;
    fn check(&self, sensors: &mut dyn SensorReader) -> Result<CheckResult, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_usage_averages_like_a_single_core() {
        let total = CpuUsage::Total(42.5);
        let single = CpuUsage::PerCore(vec![42.5]);
        assert_eq!(total.samples(), single.samples());
        assert_eq!(total.average(), single.average());
    }

    #[test]
    fn per_core_average_is_the_mean() {
        let usage = CpuUsage::PerCore(vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(usage.average(), 25.0);
    }

    #[test]
    fn measurements_keep_a_fractional_part() {
        assert_eq!(Measurement::Temperature(71.0).to_string(), "71.0");
        assert_eq!(Measurement::Cpu(CpuUsage::PerCore(vec![12.5, 3.0])).to_string(), "[12.5, 3.0]");
        assert_eq!(Measurement::Cpu(CpuUsage::Total(7.0)).to_string(), "7.0");
        assert_eq!(Measurement::Memory(String::from("42.3%")).to_string(), "42.3%");
    }
}
