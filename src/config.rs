use crate::error::{Result, SoilOpsError};
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_CLASSIFIER_CMD: &str = "python";
const DEFAULT_CLASSIFIER_SCRIPT: &str = "soil_infer.py";
const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Directory where uploaded soil photos are stored before inference.
    pub upload_dir: PathBuf,
    /// Interpreter used to run the classifier (e.g. `python`).
    pub classifier_cmd: String,
    /// Path to the inference script handed to the interpreter.
    pub classifier_script: PathBuf,
    /// Hard deadline for a single classifier invocation.
    pub classifier_timeout_secs: u64,
    /// Upper bound on multipart request bodies.
    pub max_upload_bytes: usize,
}

impl Config {
    /// Build configuration from environment variables, falling back to
    /// defaults that match a local development setup.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: env_or("SOILOPS_BIND_ADDR", DEFAULT_BIND_ADDR),
            upload_dir: PathBuf::from(env_or("SOILOPS_UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
            classifier_cmd: env_or("SOILOPS_CLASSIFIER_CMD", DEFAULT_CLASSIFIER_CMD),
            classifier_script: PathBuf::from(env_or(
                "SOILOPS_CLASSIFIER_SCRIPT",
                DEFAULT_CLASSIFIER_SCRIPT,
            )),
            classifier_timeout_secs: env_parsed(
                "SOILOPS_CLASSIFIER_TIMEOUT_SECS",
                DEFAULT_CLASSIFIER_TIMEOUT_SECS,
            )?,
            max_upload_bytes: env_parsed("SOILOPS_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            classifier_cmd: DEFAULT_CLASSIFIER_CMD.into(),
            classifier_script: PathBuf::from(DEFAULT_CLASSIFIER_SCRIPT),
            classifier_timeout_secs: DEFAULT_CLASSIFIER_TIMEOUT_SECS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(var: &str, default: T) -> Result<T> {
    match std::env::var(var) {
        Ok(raw) => raw.parse().map_err(|_| {
            SoilOpsError::Config(format!("invalid value '{}' for {}", raw, var))
        }),
        Err(_) => Ok(default),
    }
}
