use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Failed to read sensor {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Unexpected value {value:?} in sensor {}", path.display())]
    Parse { path: PathBuf, value: String },

    #[error("Sensor unavailable: {0}")]
    Unavailable(&'static str),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("please provide a number as an argument for the number of tests that you wish to run")]
    NotANumber(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error(transparent)]
    Sensor(#[from] SensorError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
