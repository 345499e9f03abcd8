//! Notices of the signed-in user.

use clap::{Args, Subcommand};

use sms_core::error::AppError;

use crate::context::ClientContext;
use crate::output::{self, OutputFormat};

/// Arguments for notice commands
#[derive(Debug, Args)]
pub struct NoticeArgs {
    /// Notice subcommand
    #[command(subcommand)]
    pub command: NoticeCommand,
}

/// Notice subcommands
#[derive(Debug, Subcommand)]
pub enum NoticeCommand {
    /// List notices addressed to me
    List,
    /// Number of unread notices
    Unread,
    /// Mark one notice as read
    Read {
        /// Notice ID
        id: String,
    },
    /// Mark all my notices as read
    ReadAll,
}

/// Execute notice commands
pub async fn execute(
    args: &NoticeArgs,
    ctx: &ClientContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (_, user_id) = super::current_user(ctx)?;
    let notices = ctx.api.notices();

    match &args.command {
        NoticeCommand::List => {
            let list = notices.by_user(&user_id).await?;
            output::print_records(
                &list,
                &["noticeId", "title", "noticeType", "publishTime", "isRead"],
                format,
            );
        }
        NoticeCommand::Unread => {
            let count = notices.unread_count(&user_id).await?;
            match format {
                OutputFormat::Json => output::print_item(&count, format),
                OutputFormat::Table => output::print_kv("Unread", &count.to_string()),
            }
        }
        NoticeCommand::Read { id } => {
            notices.mark_read(id).await?;
            output::print_success(&format!("Notice {id} marked as read"));
        }
        NoticeCommand::ReadAll => {
            notices.mark_all_read(&user_id).await?;
            output::print_success("All notices marked as read");
        }
    }
    Ok(())
}
