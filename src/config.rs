use std::path::PathBuf;
use std::time::Duration;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::debug;
use crate::checker::HealthCheck;
use crate::cpu_check::{CpuChecker, DEFAULT_CPU_DURATION, DEFAULT_CPU_THRESHOLD};
use crate::driver::DEFAULT_INTERVAL;
use crate::error::ArgError;
use crate::memory_check::{MemoryChecker, DEFAULT_MEMORY_THRESHOLD};
use crate::sensors::DEFAULT_SENSOR_FILE;
use crate::temp_check::{TempChecker, DEFAULT_TEMP_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Temp,
    Memory,
    Cpu
}

#[derive(Debug, Parser)]
#[command(name = "pi-health-check", about = "Samples cpu temperature, memory and cpu load and prints alerts")]
struct CmdOptions {
    /// Number of cycles to run
    #[arg(value_name = "REPEAT", allow_negative_numbers = true)]
    repeat: Vec<String>,

    /// Be verbose
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Checks to run each cycle, in order
    #[arg(long = "check", value_enum, value_delimiter = ',', default_values_t = vec![CheckKind::Temp])]
    checks: Vec<CheckKind>,

    /// Seconds to sleep between cycles
    #[arg(long, default_value_t = DEFAULT_INTERVAL)]
    interval: u64,

    #[arg(long, default_value_t = DEFAULT_TEMP_THRESHOLD, allow_negative_numbers = true)]
    temp_threshold: i64,

    #[arg(long, default_value_t = DEFAULT_MEMORY_THRESHOLD)]
    memory_threshold: f64,

    #[arg(long, default_value_t = DEFAULT_CPU_THRESHOLD)]
    cpu_threshold: f64,

    /// Seconds the cpu sampler blocks for
    #[arg(long, default_value_t = DEFAULT_CPU_DURATION, value_parser = clap::value_parser!(u64).range(1..))]
    cpu_duration: u64,

    /// Sample total cpu usage instead of per core
    #[arg(long)]
    cpu_total: bool,

    #[arg(long, default_value = DEFAULT_SENSOR_FILE)]
    sensor_file: PathBuf
}

pub struct MonitorConfig {
    pub repeat: i64,
    pub checks: Vec<CheckKind>,
    pub interval: Duration,
    pub temp_threshold: i64,
    pub memory_threshold: f64,
    pub cpu_threshold: f64,
    pub cpu_duration: u64,
    pub per_core: bool,
    pub sensor_file: PathBuf
}

pub fn parse_args(arg: &str) -> Result<i64, ArgError> {
    arg.trim().parse::<i64>().map_err(|_| ArgError::NotANumber(arg.to_string()))
}

// Only a single positional argument is honoured, anything else keeps one cycle.
fn repeat_count(args: &[String]) -> i64 {
    if args.len() != 1 {
        if !args.is_empty() {
            debug!("ignoring arguments {:?}", args);
        }
        return 1;
    }
    match parse_args(&args[0]) {
        Ok(repeat) => repeat,
        Err(err) => {
            println!("{}", err);
            1
        }
    }
}

impl MonitorConfig {
    pub fn health_checks(&self) -> Vec<Box<dyn HealthCheck>> {
        let mut checks = Vec::<Box<dyn HealthCheck>>::new();
        for kind in &self.checks {
            match kind {
                CheckKind::Temp => checks.push(Box::new(TempChecker::new(self.temp_threshold))),
                CheckKind::Memory => checks.push(Box::new(MemoryChecker::new(self.memory_threshold))),
                CheckKind::Cpu => checks.push(Box::new(CpuChecker::new(self.cpu_duration, self.per_core, self.cpu_threshold)))
            }
        }
        return checks;
    }
}

fn build_config(cmd_opts: CmdOptions) -> MonitorConfig {
    MonitorConfig {
        repeat: repeat_count(&cmd_opts.repeat),
        checks: cmd_opts.checks,
        interval: Duration::from_secs(cmd_opts.interval),
        temp_threshold: cmd_opts.temp_threshold,
        memory_threshold: cmd_opts.memory_threshold,
        cpu_threshold: cmd_opts.cpu_threshold,
        cpu_duration: cmd_opts.cpu_duration,
        per_core: !cmd_opts.cpu_total,
        sensor_file: cmd_opts.sensor_file
    }
}

// RUST_LOG still wins over -v.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

// An unknown dash token such as `-abc` is a bad repeat count, not a fatal usage error.
fn parse_options(argv: Vec<String>) -> Result<CmdOptions, clap::Error> {
    let err = match CmdOptions::try_parse_from(&argv) {
        Ok(cmd_opts) => return Ok(cmd_opts),
        Err(err) => err
    };
    if err.kind() != ErrorKind::UnknownArgument {
        return Err(err);
    }
    let unknown = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => return Err(err)
    };
    let position = match argv.iter().skip(1).position(|a| a.starts_with(&unknown)) {
        Some(position) => position + 1,
        None => return Err(err)
    };
    let mut rest = argv;
    let token = rest.remove(position);
    let mut cmd_opts = parse_options(rest)?;
    cmd_opts.repeat.push(token);
    Ok(cmd_opts)
}

pub fn load_config() -> MonitorConfig {
    let cmd_opts = match parse_options(std::env::args().collect()) {
        Ok(cmd_opts) => cmd_opts,
        Err(err) => err.exit()
    };
    init_logging(cmd_opts.verbose);
    build_config(cmd_opts)
}
