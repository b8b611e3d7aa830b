use custform_core::config::{AppConfig, LoadOptions};
use custform_core::errors::LoadError;
use custform_core::storage::RecordStore;
use custform_db::open_record_store;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

impl DoctorCheck {
    fn pass(name: &'static str, details: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Pass, details: details.into() }
    }

    fn fail(name: &'static str, details: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Fail, details: details.into() }
    }

    fn skipped(name: &'static str, reason: &str) -> Self {
        Self { name, status: CheckStatus::Skipped, details: format!("skipped because {reason}") }
    }
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck::pass(
                "config_validation",
                "configuration loaded and validated",
            ));
            match open_record_store(&config.storage) {
                Ok(store) => {
                    checks.push(DoctorCheck::pass(
                        "storage_connectivity",
                        format!(
                            "opened {} storage at `{}`",
                            store.backend().backend_name(),
                            config.storage.url
                        ),
                    ));
                    checks.push(check_stored_record(&store, store.key()));
                }
                Err(error) => {
                    checks.push(DoctorCheck::fail(
                        "storage_connectivity",
                        format!("failed to open local storage: {error}"),
                    ));
                    checks.push(DoctorCheck::skipped("stored_record", "storage did not open"));
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck::fail("config_validation", error.to_string()));
            let reason = "configuration did not load";
            checks.push(DoctorCheck::skipped("storage_connectivity", reason));
            checks.push(DoctorCheck::skipped("stored_record", reason));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_stored_record<S: RecordStore>(store: &S, key: &str) -> DoctorCheck {
    match store.load() {
        Ok(record) if record.is_blank() => {
            DoctorCheck::pass("stored_record", format!("`{key}` holds a blank record"))
        }
        Ok(_) => DoctorCheck::pass("stored_record", format!("`{key}` parses cleanly")),
        Err(LoadError::NotFound { key }) => {
            DoctorCheck::pass("stored_record", format!("no record stored under `{key}` yet"))
        }
        Err(error @ LoadError::Parse { .. }) => DoctorCheck::fail(
            "stored_record",
            format!("{error}; the editor will start from a blank record"),
        ),
        Err(error) => DoctorCheck::fail("stored_record", error.to_string()),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
