//! `/export` spreadsheet downloads.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use sms_core::error::AppError;
use sms_core::result::AppResult;
use sms_http::{Download, RequestPipeline};

/// The exportable data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Basic student information.
    Students,
    /// Enrollment status records.
    Status,
    /// Awards, optionally of one student.
    Awards,
    /// Punishments, optionally of one student.
    Punishments,
}

impl ExportKind {
    /// Path segment under `/export`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Status => "status",
            Self::Awards => "awards",
            Self::Punishments => "punishments",
        }
    }

    /// Whether the export accepts a `stuId` filter.
    pub fn accepts_student_filter(&self) -> bool {
        matches!(self, Self::Awards | Self::Punishments)
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "students" => Ok(Self::Students),
            "status" => Ok(Self::Status),
            "awards" => Ok(Self::Awards),
            "punishments" => Ok(Self::Punishments),
            _ => Err(AppError::validation(format!(
                "Invalid export: '{s}'. Expected one of: students, status, awards, punishments"
            ))),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    stu_id: Option<&'a str>,
}

/// Export endpoints. Files are fetched with header authentication like
/// every other call.
#[derive(Debug, Clone)]
pub struct ExportApi {
    pipeline: Arc<RequestPipeline>,
}

impl ExportApi {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Downloads an export.
    ///
    /// `stu_id` narrows award and punishment exports to one student; it is
    /// rejected for the other kinds.
    pub async fn export(&self, kind: ExportKind, stu_id: Option<&str>) -> AppResult<Download> {
        if stu_id.is_some() && !kind.accepts_student_filter() {
            return Err(AppError::validation(format!(
                "The {kind} export cannot be filtered by student"
            )));
        }

        let download = self
            .pipeline
            .download(&format!("/export/{kind}"), &ExportParams { stu_id })
            .await?;
        info!(export = %kind, size = download.bytes.len(), "Export downloaded");
        Ok(download)
    }

    /// Basic student information.
    pub async fn students(&self) -> AppResult<Download> {
        self.export(ExportKind::Students, None).await
    }

    /// Enrollment status records.
    pub async fn status(&self) -> AppResult<Download> {
        self.export(ExportKind::Status, None).await
    }

    /// Awards, optionally of one student.
    pub async fn awards(&self, stu_id: Option<&str>) -> AppResult<Download> {
        self.export(ExportKind::Awards, stu_id).await
    }

    /// Punishments, optionally of one student.
    pub async fn punishments(&self, stu_id: Option<&str>) -> AppResult<Download> {
        self.export(ExportKind::Punishments, stu_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_kind_parse() {
        assert_eq!("Awards".parse::<ExportKind>().unwrap(), ExportKind::Awards);
        assert!("grades".parse::<ExportKind>().is_err());
    }

    #[test]
    fn test_student_filter_support() {
        assert!(ExportKind::Punishments.accepts_student_filter());
        assert!(!ExportKind::Status.accepts_student_filter());
    }

    #[test]
    fn test_params_omit_absent_student() {
        let json = serde_json::to_string(&ExportParams { stu_id: None }).unwrap();
        assert_eq!(json, "{}");
    }
}
