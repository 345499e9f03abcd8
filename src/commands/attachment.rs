//! Attachment upload, listing, and download.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use sms_api::AttachmentUpload;
use sms_core::error::AppError;
use sms_entity::attachment::RelatedType;

use crate::confirm::ConfirmDialog;
use crate::context::ClientContext;
use crate::output::{self, OutputFormat};

/// Arguments for attachment commands
#[derive(Debug, Args)]
pub struct AttachmentArgs {
    /// Attachment subcommand
    #[command(subcommand)]
    pub command: AttachmentCommand,
}

/// Attachment subcommands
#[derive(Debug, Subcommand)]
pub enum AttachmentCommand {
    /// List the attachments of a record
    List {
        /// Related record ID
        related_id: String,
        /// award, punishment, statusChange, or leaveSchool
        related_type: RelatedType,
    },
    /// Upload a file and attach it to a record
    Upload {
        /// Local file
        file: PathBuf,
        /// Related record ID
        related_id: String,
        /// award, punishment, statusChange, or leaveSchool
        related_type: RelatedType,
    },
    /// Download an attachment
    Download {
        /// Attachment ID
        id: String,
        /// Output path (defaults to the server's file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete an attachment
    Delete {
        /// Attachment ID
        id: String,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute attachment commands
pub async fn execute(
    args: &AttachmentArgs,
    ctx: &ClientContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let attachments = ctx.api.attachments();

    match &args.command {
        AttachmentCommand::List {
            related_id,
            related_type,
        } => {
            let list = attachments.list(related_id, *related_type).await?;
            output::print_records(
                &list,
                &["attachmentId", "fileName", "fileSize", "uploadUserId", "uploadTime"],
                format,
            );
        }
        AttachmentCommand::Upload {
            file,
            related_id,
            related_type,
        } => {
            let (_, user_id) = super::current_user(ctx)?;
            let bytes = tokio::fs::read(file).await?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| AppError::validation(format!("Not a file: {}", file.display())))?;

            let attachment = attachments
                .upload(AttachmentUpload {
                    file_name,
                    content_type: None,
                    bytes: bytes.into(),
                    related_id: related_id.clone(),
                    related_type: *related_type,
                    upload_user_id: user_id,
                })
                .await?;
            output::print_success(&format!("Uploaded as {}", attachment.attachment_id));
        }
        AttachmentCommand::Download { id, output: path } => {
            let download = attachments.download(id).await?;
            let target = match path {
                Some(path) => path.clone(),
                None => PathBuf::from(download.file_name.as_deref().unwrap_or(id.as_str())),
            };
            write_file(&target, &download.bytes).await?;
        }
        AttachmentCommand::Delete { id, yes } => {
            if !ConfirmDialog::delete(Some(id)).confirmed(*yes)? {
                return Ok(());
            }
            attachments.delete(id).await?;
            output::print_success(&format!("Deleted attachment {id}"));
        }
    }
    Ok(())
}

/// Write downloaded bytes and report where they went
pub async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    tokio::fs::write(path, bytes).await?;
    output::print_success(&format!("Saved {} ({} bytes)", path.display(), bytes.len()));
    Ok(())
}
