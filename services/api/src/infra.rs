use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use visa_checklist::config::AppConfig;
use visa_checklist::error::AppError;
use visa_checklist::ChecklistService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Service over the configured requirement table; `requirements` overrides the environment.
pub(crate) fn checklist_service(
    config: &AppConfig,
    requirements: Option<PathBuf>,
) -> Result<ChecklistService, AppError> {
    let mut source = config.requirements.clone();
    if let Some(path) = requirements {
        source.path = Some(path);
    }
    let table = source.load_table()?;
    Ok(ChecklistService::new(Arc::new(table)))
}

/// Questionnaire JSON from a file, or stdin when the path is `-`.
pub(crate) fn read_form(path: &Path) -> Result<Value, AppError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use visa_checklist::config::{
        AppEnvironment, RequirementsConfig, ServerConfig, TelemetryConfig,
    };

    fn config(path: Option<PathBuf>) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            requirements: RequirementsConfig { path },
        }
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2024-05-01 "),
            Ok(NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"))
        );
        assert!(parse_date("05/01/2024").is_err());
    }

    #[test]
    fn service_uses_standard_table_without_path() {
        let service = checklist_service(&config(None), None).expect("service builds");
        assert_eq!(
            service.engine().table(),
            &visa_checklist::RequirementTable::standard()
        );
    }

    #[test]
    fn cli_path_overrides_configured_path() {
        let missing = PathBuf::from("/nonexistent/requirements.json");
        let err = checklist_service(&config(None), Some(missing)).expect_err("missing file");
        assert!(matches!(err, AppError::Requirements(_)));
    }

    #[test]
    fn read_form_reports_malformed_json() {
        let path = std::env::temp_dir().join(format!("visa-form-{}.json", std::process::id()));
        std::fs::write(&path, "{ \"residenceConsulate\": ").expect("write form");

        let err = read_form(&path).expect_err("malformed");
        assert!(matches!(err, AppError::Serialize(_)));
        std::fs::remove_file(&path).ok();
    }
}
