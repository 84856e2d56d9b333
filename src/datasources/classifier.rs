use crate::config::Config;
use crate::error::{Result, SoilOpsError};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Label fields the classifier may emit, in priority order; the first
/// present string wins.
const LABEL_FIELDS: [&str; 3] = ["soilType", "soil_type", "predicted_class"];

/// What the external model reported for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: Option<f64>,
}

/// Client for the external image classification process. The classifier is
/// invoked per request with the stored image path; by convention it may
/// print diagnostic lines before a final JSON line on stdout.
pub struct SoilClassifier {
    cmd: String,
    script: std::path::PathBuf,
    timeout: Duration,
}

impl SoilClassifier {
    pub fn new(config: &Config) -> Self {
        Self {
            cmd: config.classifier_cmd.clone(),
            script: config.classifier_script.clone(),
            timeout: Duration::from_secs(config.classifier_timeout_secs),
        }
    }

    /// Run the classifier against a stored image and parse its result.
    /// Spawn failures, non-zero exits and timeouts all surface as
    /// `ClassifierExecution`; unparsable output as `ClassifierOutput`.
    pub async fn classify(&self, image_path: &Path) -> Result<Classification> {
        tracing::info!("Classifying image {}", image_path.display());

        let invocation = Command::new(&self.cmd)
            .arg(&self.script)
            .arg(image_path)
            .output();

        let output = tokio::time::timeout(self.timeout, invocation)
            .await
            .map_err(|_| {
                SoilOpsError::ClassifierExecution(format!(
                    "timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                SoilOpsError::ClassifierExecution(format!(
                    "failed to spawn {} {}: {}",
                    self.cmd,
                    self.script.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!("Classifier stderr: {}", stderr.trim());
            return Err(SoilOpsError::ClassifierExecution(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::debug!("Classifier stdout: {}", stdout.trim());
        parse_output(&stdout)
    }
}

/// Parse the classifier's combined stdout: the last non-empty line must be
/// a JSON object carrying one of the candidate label fields; everything
/// before it is ignored diagnostics.
pub fn parse_output(stdout: &str) -> Result<Classification> {
    let last_line = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| SoilOpsError::ClassifierOutput("empty output".to_string()))?;

    let value: Value = serde_json::from_str(last_line)
        .map_err(|e| SoilOpsError::ClassifierOutput(format!("final line is not JSON: {}", e)))?;

    let label = LABEL_FIELDS
        .iter()
        .find_map(|field| value.get(field).and_then(Value::as_str))
        .ok_or_else(|| {
            SoilOpsError::ClassifierOutput(format!("no label field in output: {}", last_line))
        })?
        .to_string();

    let confidence = value.get("confidence").and_then(Value::as_f64);

    Ok(Classification { label, confidence })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_result() {
        let result = parse_output(r#"{"soilType": "Clay Soil", "confidence": 0.91}"#).unwrap();
        assert_eq!(result.label, "Clay Soil");
        assert_eq!(result.confidence, Some(0.91));
    }

    #[test]
    fn ignores_diagnostic_lines_before_final_json() {
        let stdout = "loading weights...\nwarming up\n{\"predicted_class\": \"laterite\"}\n";
        let result = parse_output(stdout).unwrap();
        assert_eq!(result.label, "laterite");
        assert_eq!(result.confidence, None);
    }

    #[test]
    fn label_field_priority_order() {
        let stdout = r#"{"predicted_class": "sandy", "soilType": "Sandy Loam"}"#;
        let result = parse_output(stdout).unwrap();
        assert_eq!(result.label, "Sandy Loam");

        let stdout = r#"{"soil_type": "alluvial", "predicted_class": "clay"}"#;
        let result = parse_output(stdout).unwrap();
        assert_eq!(result.label, "alluvial");
    }

    #[test]
    fn rejects_non_json_final_line() {
        let err = parse_output("some log\nnot json at all").unwrap_err();
        assert!(matches!(err, SoilOpsError::ClassifierOutput(_)));
    }

    #[test]
    fn rejects_json_without_label_field() {
        let err = parse_output(r#"{"confidence": 0.5}"#).unwrap_err();
        assert!(matches!(err, SoilOpsError::ClassifierOutput(_)));
    }

    #[test]
    fn rejects_empty_output() {
        let err = parse_output("\n  \n").unwrap_err();
        assert!(matches!(err, SoilOpsError::ClassifierOutput(_)));
    }
}
