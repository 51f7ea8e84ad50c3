pub mod config;
pub mod checker;
pub mod error;
pub mod sensors;
pub mod temp_check;
pub mod memory_check;
pub mod cpu_check;
pub mod output;
pub mod output_print;
pub mod driver;

use log::{info, error};
use crate::config::load_config;
use crate::driver::Driver;
use crate::output_print::PrintOutput;
use crate::sensors::SysSensors;

use std::process;

fn main() {
    let cfg = load_config();
    info!("Starting {:?} for {} cycles", cfg.checks, cfg.repeat);
    let sensors = SysSensors::new(cfg.sensor_file.clone());
    let mut driver = Driver::new(
        cfg.health_checks(),
        Box::new(sensors),
        PrintOutput::stdout(),
        cfg.interval);
    match driver.run(cfg.repeat) {
        Ok(cycles) => info!("Finished after {} cycles", cycles),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
