use std::thread;
use std::time::Duration;
use chrono::Local;
use log::{debug, info};
use crate::checker::HealthCheck;
use crate::error::MonitorError;
use crate::output::Outputs;
use crate::sensors::SensorReader;

pub const DEFAULT_INTERVAL: u64 = 30;

pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

pub struct Driver<O: Outputs> {
    checks: Vec<Box<dyn HealthCheck>>,
    sensors: Box<dyn SensorReader>,
    output: O,
    interval: Duration,
    sleep: Box<dyn FnMut(Duration)>
}

impl<O: Outputs> Driver<O> {
    pub fn new(checks: Vec<Box<dyn HealthCheck>>, sensors: Box<dyn SensorReader>, output: O, interval: Duration) -> Self {
        Self {
            checks: checks,
            sensors: sensors,
            output: output,
            interval: interval,
            sleep: Box::new(thread::sleep)
        }
    }

    pub fn with_sleep(mut self, sleep: impl FnMut(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    pub fn into_output(self) -> O {
        self.output
    }

    // Returns the number of cycles completed. A sensor failure ends the run.
    pub fn run(&mut self, repeat: i64) -> Result<i64, MonitorError> {
        let mut count = 0;
        while count < repeat {
            self.output.start_cycle()?;
            for check in &self.checks {
                debug!("running {} check", check.name());
                let result = check.check(self.sensors.as_mut())?;
                debug!("{} read {}, alert {}", result.name, result.result, result.alert_status);
                self.output.process_probe(&timestamp(), &result)?;
            }
            count += 1;
            if count < repeat {
                info!("cycle {}/{} done, next in {:?}", count, repeat, self.interval);
                (self.sleep)(self.interval);
            }
        }
        Ok(count)
    }
}
