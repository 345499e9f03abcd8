//! Generic record commands over every REST collection.

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use sms_api::{ApiRecord, PagedRecord, Resource, StudentRecord, WritableRecord};
use sms_core::error::AppError;
use sms_core::types::{DEFAULT_PAGE_SIZE, PageResult};

use crate::confirm::{ConfirmDialog, ConfirmKind};
use crate::context::ClientContext;
use crate::output::{self, OutputFormat};

/// Arguments for record commands
#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Collection to operate on
    #[arg(value_enum)]
    pub kind: RecordKind,

    /// Record subcommand
    #[command(subcommand)]
    pub action: RecordAction,
}

/// Collections reachable through `record`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    UserStudent,
    UserAdvisor,
    UserAdmin,
    BasicInfo,
    StatusInfo,
    Award,
    Punishment,
    Appeal,
    StatusChange,
    Leave,
    Notice,
    Log,
}

/// Record subcommands
#[derive(Debug, Subcommand)]
pub enum RecordAction {
    /// List all records
    List,
    /// Show one record
    Get {
        /// Record ID
        id: String,
    },
    /// Fetch one page, with optional filters
    Page {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u64,
        /// Filter as camelCase key=value, e.g. --filter awardStatus=审批中
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Records of one student
    Student {
        /// Student ID
        stu_id: String,
    },
    /// Status records of an advisor's students (status-info only)
    Advisor {
        /// Advisor ID
        advisor_id: String,
    },
    /// Operation log of one user (log only)
    User {
        /// User ID
        user_id: String,
    },
    /// Create a record from JSON (inline or @file)
    Create {
        /// JSON body or @path
        data: String,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Update a record from JSON (inline or @file)
    Update {
        /// JSON body or @path
        data: String,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: String,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl RecordAction {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get { .. } => "get",
            Self::Page { .. } => "page",
            Self::Student { .. } => "student",
            Self::Advisor { .. } => "advisor",
            Self::User { .. } => "user",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Columns shown in table mode, per collection
fn columns(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::UserStudent | RecordKind::UserAdvisor => {
            &["userId", "userName", "phone", "email", "status"]
        }
        RecordKind::UserAdmin => &["userId", "userName", "role", "phone", "status"],
        RecordKind::BasicInfo => &["stuId", "name", "gender", "nation", "phone"],
        RecordKind::StatusInfo => &[
            "stuId",
            "department",
            "major",
            "className",
            "academicStatus",
            "advisorId",
        ],
        RecordKind::Award => &["awardId", "stuId", "awardName", "awardLevel", "awardStatus"],
        RecordKind::Punishment => &[
            "punishmentId",
            "stuId",
            "punishmentType",
            "punishmentDate",
            "punishmentStatus",
        ],
        RecordKind::Appeal => &["appealId", "punishmentId", "stuId", "appealDate", "appealStatus"],
        RecordKind::StatusChange => &["changeId", "stuId", "changeType", "applyDate", "applyStatus"],
        RecordKind::Leave => &["leaveId", "stuId", "leaveType", "applyDate", "overallStatus"],
        RecordKind::Notice => &["noticeId", "title", "noticeType", "publishTime", "isRead"],
        RecordKind::Log => &["logId", "userId", "operation", "operationTime", "result"],
    }
}

/// Execute record commands
pub async fn execute(
    args: &RecordArgs,
    ctx: &ClientContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let api = &ctx.api;
    let cols = columns(args.kind);
    let action = &args.action;

    let handled = match args.kind {
        RecordKind::UserStudent => writable(&api.user_students(), action, cols, format).await?,
        RecordKind::UserAdvisor => writable(&api.user_advisors(), action, cols, format).await?,
        RecordKind::UserAdmin => writable(&api.user_admins(), action, cols, format).await?,
        RecordKind::BasicInfo => paged(&api.basic_info(), action, cols, format).await?,
        RecordKind::StatusInfo => {
            let resource = api.status_info();
            if let RecordAction::Advisor { advisor_id } = action {
                let records = resource.by_advisor(advisor_id).await?;
                output::print_records(&records, cols, format);
                true
            } else {
                paged(&resource, action, cols, format).await?
            }
        }
        RecordKind::Award => student_owned(&api.awards(), action, cols, format).await?,
        RecordKind::Punishment => student_owned(&api.punishments(), action, cols, format).await?,
        RecordKind::Appeal => student_owned(&api.appeals(), action, cols, format).await?,
        RecordKind::StatusChange => {
            student_owned(&api.status_changes(), action, cols, format).await?
        }
        RecordKind::Leave => student_owned(&api.leave_school(), action, cols, format).await?,
        RecordKind::Notice => paged(&api.notices(), action, cols, format).await?,
        RecordKind::Log => {
            let resource = api.logs();
            match action {
                RecordAction::User { user_id } => {
                    let records = resource.by_user(user_id).await?;
                    output::print_records(&records, cols, format);
                    true
                }
                RecordAction::Page {
                    page,
                    size,
                    filters,
                } => {
                    print_page(&resource, *page, *size, filters, cols, format).await?;
                    true
                }
                other => readable(&resource, other, cols, format).await?,
            }
        }
    };

    if handled {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "'{}' is not available for {:?} records",
            action.name(),
            args.kind
        )))
    }
}

async fn readable<T: ApiRecord>(
    resource: &Resource<T>,
    action: &RecordAction,
    cols: &[&str],
    format: OutputFormat,
) -> Result<bool, AppError> {
    match action {
        RecordAction::List => {
            let records = resource.list().await?;
            output::print_records(&records, cols, format);
        }
        RecordAction::Get { id } => {
            let record = resource.get(id).await?;
            output::print_item(&record, format);
        }
        RecordAction::Delete { id, yes } => {
            if !ConfirmDialog::delete(Some(id)).confirmed(*yes)? {
                return Ok(true);
            }
            resource.delete(id).await?;
            output::print_success(&format!("Deleted {id}"));
        }
        _ => return Ok(false),
    }
    Ok(true)
}

async fn writable<T: WritableRecord>(
    resource: &Resource<T>,
    action: &RecordAction,
    cols: &[&str],
    format: OutputFormat,
) -> Result<bool, AppError> {
    match action {
        RecordAction::Create { data, yes } => {
            let record: T = parse_body(data)?;
            if !ConfirmDialog::preset(ConfirmKind::Submit, None).confirmed(*yes)? {
                return Ok(true);
            }
            resource.create(&record).await?;
            output::print_success("Created");
            Ok(true)
        }
        RecordAction::Update { data, yes } => {
            let record: T = parse_body(data)?;
            if !ConfirmDialog::preset(ConfirmKind::Submit, None).confirmed(*yes)? {
                return Ok(true);
            }
            resource.update(&record).await?;
            output::print_success("Updated");
            Ok(true)
        }
        other => readable(resource, other, cols, format).await,
    }
}

async fn paged<T: WritableRecord + PagedRecord>(
    resource: &Resource<T>,
    action: &RecordAction,
    cols: &[&str],
    format: OutputFormat,
) -> Result<bool, AppError> {
    match action {
        RecordAction::Page {
            page,
            size,
            filters,
        } => {
            print_page(resource, *page, *size, filters, cols, format).await?;
            Ok(true)
        }
        other => writable(resource, other, cols, format).await,
    }
}

async fn student_owned<T: WritableRecord + PagedRecord + StudentRecord>(
    resource: &Resource<T>,
    action: &RecordAction,
    cols: &[&str],
    format: OutputFormat,
) -> Result<bool, AppError> {
    match action {
        RecordAction::Student { stu_id } => {
            let records = resource.by_student(stu_id).await?;
            output::print_records(&records, cols, format);
            Ok(true)
        }
        other => paged(resource, other, cols, format).await,
    }
}

async fn print_page<T: PagedRecord>(
    resource: &Resource<T>,
    page: u64,
    size: u64,
    filters: &[(String, String)],
    cols: &[&str],
    format: OutputFormat,
) -> Result<(), AppError> {
    let query: T::Query = build_query(page, size, filters)?;
    let result: PageResult<T> = resource.page(&query).await?;

    match format {
        OutputFormat::Json => output::print_item(&result, format),
        OutputFormat::Table => {
            output::print_records(&result.records, cols, format);
            println!(
                "Page {}/{} ({} total)",
                result.current, result.pages, result.total
            );
        }
    }
    Ok(())
}

/// Build a typed page query from page, size, and key=value filters
fn build_query<Q: DeserializeOwned>(
    page: u64,
    size: u64,
    filters: &[(String, String)],
) -> Result<Q, AppError> {
    let mut fields = Map::new();
    fields.insert("pageNum".into(), Value::from(page.max(1)));
    fields.insert("pageSize".into(), Value::from(size.max(1)));
    for (key, value) in filters {
        fields.insert(key.clone(), Value::from(value.clone()));
    }
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::validation(format!("Invalid filter: {e}")))
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

/// Parse a JSON body given inline or as `@path`
fn parse_body<T: DeserializeOwned + Serialize>(data: &str) -> Result<T, AppError> {
    let json = match data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => data.to_string(),
    };
    serde_json::from_str(&json).map_err(|e| AppError::validation(format!("Invalid record JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sms_entity::award::{Award, AwardQuery};

    #[test]
    fn test_build_query_maps_filters() {
        let query: AwardQuery = build_query(
            2,
            20,
            &[
                ("stuId".into(), "S001".into()),
                ("awardStatus".into(), "审批中".into()),
            ],
        )
        .unwrap();
        assert_eq!(query.page_num, Some(2));
        assert_eq!(query.page_size, Some(20));
        assert_eq!(query.stu_id.as_deref(), Some("S001"));
        assert_eq!(query.award_status.as_deref(), Some("审批中"));
    }

    #[test]
    fn test_build_query_clamps_page() {
        let query: AwardQuery = build_query(0, 0, &[]).unwrap();
        assert_eq!(query.page_num, Some(1));
        assert_eq!(query.page_size, Some(1));
    }

    fn default_page_of<T: PagedRecord>(filters: &[(String, String)]) -> T::Query {
        build_query::<T::Query>(1, DEFAULT_PAGE_SIZE, filters).unwrap()
    }

    #[test]
    fn test_build_query_through_paged_record() {
        let query = default_page_of::<Award>(&[("stuId".into(), "S003".into())]);
        assert_eq!(query.page_num, Some(1));
        assert_eq!(query.page_size, Some(DEFAULT_PAGE_SIZE));
        assert_eq!(query.stu_id.as_deref(), Some("S003"));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("keyword=张").unwrap(),
            ("keyword".to_string(), "张".to_string())
        );
        assert!(parse_filter("novalue").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn test_parse_inline_body() {
        let award: Award =
            parse_body(r#"{"awardId":"AW9","stuId":"S001","awardName":"三好学生"}"#).unwrap();
        assert_eq!(award.award_id, "AW9");
        assert!(parse_body::<Award>("{").is_err());
    }

    #[test]
    fn test_parse_body_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"awardId":"AW10","stuId":"S002"}"#).unwrap();
        let award: Award = parse_body(&format!("@{}", file.path().display())).unwrap();
        assert_eq!(award.stu_id, "S002");
    }

    #[test]
    fn test_every_kind_has_columns() {
        for kind in RecordKind::value_variants() {
            assert!(!columns(*kind).is_empty());
        }
    }
}
