//! Login, logout, and session inspection.

use clap::Args;

use sms_core::error::AppError;
use sms_entity::UserType;
use sms_entity::user::LoginRequest;

use crate::confirm::{ConfirmDialog, ConfirmKind};
use crate::context::ClientContext;
use crate::output::{self, OutputFormat};

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account ID (prompted if not provided)
    #[arg(short, long)]
    pub user_id: Option<String>,
    /// Account type: student, advisor, or admin
    #[arg(short = 't', long = "type", default_value = "student")]
    pub user_type: UserType,
    /// Password (prompted if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for `logout`
#[derive(Debug, Args)]
pub struct LogoutArgs {
    /// Skip the confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Sign in, then open the dashboard of the account type
pub async fn login(args: &LoginArgs, ctx: &ClientContext) -> Result<(), AppError> {
    let user_id = match &args.user_id {
        Some(id) => id.clone(),
        None => dialoguer::Input::new()
            .with_prompt("账号")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };
    let passwd = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("密码")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let identity = ctx
        .api
        .auth()
        .login(&LoginRequest {
            user_id,
            passwd,
            user_type: args.user_type,
        })
        .await?;

    output::print_success(&format!(
        "登录成功：{} ({})",
        identity.user_name,
        args.user_type.label()
    ));
    ctx.open(args.user_type.dashboard_path())?;
    Ok(())
}

/// Sign out after confirmation
pub fn logout(args: &LogoutArgs, ctx: &ClientContext) -> Result<(), AppError> {
    if !ctx.api.session().is_authenticated() {
        output::print_warning("当前未登录");
        return Ok(());
    }
    if !ConfirmDialog::preset(ConfirmKind::Logout, None).confirmed(args.yes)? {
        return Ok(());
    }

    ctx.api.auth().logout()?;
    output::print_success("已退出登录");
    ctx.open(&ctx.config.routing.login_path)?;
    Ok(())
}

/// Print the current session
pub fn whoami(ctx: &ClientContext, format: OutputFormat) -> Result<(), AppError> {
    let session = ctx.api.session().snapshot();
    if !session.is_authenticated() {
        output::print_warning("当前未登录");
        return Ok(());
    }

    match format {
        OutputFormat::Json => output::print_item(&session.user_info, format),
        OutputFormat::Table => {
            output::print_kv("User ID", session.identity_id());
            output::print_kv("Name", session.display_name());
            if let Some(user_type) = session.user_type {
                output::print_kv("Type", user_type.label());
            }
            if let Some(role) = session.admin_role {
                output::print_kv("Role", role.as_str());
            }
            if let Some(info) = &session.user_info {
                output::print_kv("Phone", info.phone.as_deref().unwrap_or("-"));
                output::print_kv("Email", info.email.as_deref().unwrap_or("-"));
            }
        }
    }
    Ok(())
}
