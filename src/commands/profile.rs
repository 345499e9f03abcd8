//! Own profile, contact details, and password.

use clap::{Args, Subcommand};

use sms_core::error::AppError;
use sms_entity::user::{PasswordUpdateRequest, ProfileUpdateRequest};

use crate::context::ClientContext;
use crate::output::{self, OutputFormat};

/// Arguments for profile commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile subcommand
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Fetch my profile from the server and refresh the stored identity
    Show,
    /// Update phone and/or email
    Update {
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Change my password (prompted)
    Password,
}

/// Execute profile commands
pub async fn execute(
    args: &ProfileArgs,
    ctx: &ClientContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let auth = ctx.api.auth();

    match &args.command {
        ProfileCommand::Show => {
            let profile = auth.refresh_identity().await?;
            output::print_item(&profile, format);
        }
        ProfileCommand::Update { phone, email } => {
            if phone.is_none() && email.is_none() {
                return Err(AppError::validation("Nothing to update: pass --phone or --email"));
            }
            let identity = auth
                .update_contact(&ProfileUpdateRequest {
                    phone: phone.clone(),
                    email: email.clone(),
                })
                .await?;
            output::print_success("联系方式已更新");
            output::print_item(&identity, format);
        }
        ProfileCommand::Password => {
            let old_password = dialoguer::Password::new()
                .with_prompt("旧密码")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
            let new_password = dialoguer::Password::new()
                .with_prompt("新密码")
                .with_confirmation("确认新密码", "两次输入的密码不一致")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

            auth.change_password(&PasswordUpdateRequest {
                old_password,
                new_password,
            })
            .await?;
            output::print_success("密码已修改");
        }
    }
    Ok(())
}
