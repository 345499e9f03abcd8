//! Spreadsheet exports.

use std::path::PathBuf;

use clap::Args;

use sms_api::ExportKind;
use sms_core::error::AppError;

use crate::context::ClientContext;

/// Arguments for `export`
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// students, status, awards, or punishments
    pub kind: ExportKind,
    /// Only this student's records (awards and punishments)
    #[arg(long)]
    pub stu_id: Option<String>,
    /// Output path (defaults to the server's file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Download an export to disk
pub async fn execute(args: &ExportArgs, ctx: &ClientContext) -> Result<(), AppError> {
    let download = ctx
        .api
        .exports()
        .export(args.kind, args.stu_id.as_deref())
        .await?;

    let target = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(
            download
                .file_name
                .clone()
                .unwrap_or_else(|| format!("{}.xlsx", args.kind)),
        ),
    };
    super::attachment::write_file(&target, &download.bytes).await
}
