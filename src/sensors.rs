use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use log::debug;
use sysinfo::System;
use crate::checker::CpuUsage;
use crate::error::SensorError;

pub const DEFAULT_SENSOR_FILE: &str = "/sys/class/thermal/thermal_zone0/temp";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryStats {
    pub percent_used: f64,
    pub free_bytes: u64
}

pub trait SensorReader {
    fn read_temperature(&mut self) -> Result<f64, SensorError>;
    fn read_memory(&mut self) -> Result<MemoryStats, SensorError>;
    // Blocks the caller for the whole sampling window.
    fn read_cpu_utilization(&mut self, duration: Duration, per_core: bool) -> Result<CpuUsage, SensorError>;
}

pub struct SysSensors {
    sensor_file: PathBuf,
    system: System
}

impl SysSensors {
    pub fn new(sensor_file: PathBuf) -> Self {
        Self {
            sensor_file: sensor_file,
            system: System::new()
        }
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn parse_millidegrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().map(|m| m / 1000.0)
}

impl SensorReader for SysSensors {
    fn read_temperature(&mut self) -> Result<f64, SensorError> {
        let raw = fs::read_to_string(&self.sensor_file).map_err(|source| SensorError::Io {
            path: self.sensor_file.clone(),
            source: source
        })?;
        let temp = parse_millidegrees(&raw).ok_or_else(|| SensorError::Parse {
            path: self.sensor_file.clone(),
            value: raw.trim().to_string()
        })?;
        debug!("{:?} reads {}", self.sensor_file, temp);
        Ok(temp)
    }

    fn read_memory(&mut self) -> Result<MemoryStats, SensorError> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(SensorError::Unavailable("virtual memory statistics"));
        }
        let used = total.saturating_sub(self.system.available_memory());
        let stats = MemoryStats {
            percent_used: one_decimal(used as f64 / total as f64 * 100.0),
            free_bytes: self.system.free_memory()
        };
        debug!("memory total {} available {} free {}", total, total - used, stats.free_bytes);
        Ok(stats)
    }

    fn read_cpu_utilization(&mut self, duration: Duration, per_core: bool) -> Result<CpuUsage, SensorError> {
        let window = duration.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu();
        thread::sleep(window);
        self.system.refresh_cpu();
        let cpus = self.system.cpus();
        if cpus.is_empty() {
            return Err(SensorError::Unavailable("cpu utilization"));
        }
        if per_core {
            Ok(CpuUsage::PerCore(cpus.iter().map(|c| one_decimal(c.cpu_usage() as f64)).collect()))
        } else {
            Ok(CpuUsage::Total(one_decimal(self.system.global_cpu_info().cpu_usage() as f64)))
        }
    }
}
