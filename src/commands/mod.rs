//! CLI command definitions and dispatch.

pub mod attachment;
pub mod dashboard;
pub mod export;
pub mod navigate;
pub mod notice;
pub mod profile;
pub mod record;
pub mod session;

use clap::{Parser, Subcommand};

use sms_core::error::AppError;

use crate::context::ClientContext;
use crate::output::OutputFormat;

/// Student-status management client
#[derive(Debug, Parser)]
#[command(name = "sms-client", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay (`config/{env}.toml`)
    #[arg(short, long, env = "SMS_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in
    Login(session::LoginArgs),
    /// Sign out (local only)
    Logout(session::LogoutArgs),
    /// Show the current session
    Whoami,
    /// Navigate to a route and show where the guard lands
    Open(navigate::OpenArgs),
    /// List the route table
    Routes,
    /// Dashboard statistics for the signed-in user
    Dashboard,
    /// Records: users, student info, awards, punishments, appeals, ...
    Record(record::RecordArgs),
    /// Notices addressed to the signed-in user
    Notice(notice::NoticeArgs),
    /// Attachments of a record
    Attachment(attachment::AttachmentArgs),
    /// Download a spreadsheet export
    Export(export::ExportArgs),
    /// Own profile and contact details
    Profile(profile::ProfileArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, ctx: &ClientContext) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => session::login(args, ctx).await,
            Commands::Logout(args) => session::logout(args, ctx),
            Commands::Whoami => session::whoami(ctx, self.format),
            Commands::Open(args) => navigate::open(args, ctx),
            Commands::Routes => navigate::routes(ctx, self.format),
            Commands::Dashboard => dashboard::execute(ctx, self.format).await,
            Commands::Record(args) => record::execute(args, ctx, self.format).await,
            Commands::Notice(args) => notice::execute(args, ctx, self.format).await,
            Commands::Attachment(args) => attachment::execute(args, ctx, self.format).await,
            Commands::Export(args) => export::execute(args, ctx).await,
            Commands::Profile(args) => profile::execute(args, ctx, self.format).await,
        }
    }
}

/// Helper: the signed-in user's type and ID, or an authentication error
pub fn current_user(ctx: &ClientContext) -> Result<(sms_entity::UserType, String), AppError> {
    let session = ctx.api.session().snapshot();
    match (session.user_type, session.token.is_some()) {
        (Some(user_type), true) => Ok((user_type, session.identity_id().to_string())),
        _ => Err(AppError::authentication("未登录，请先执行 login")),
    }
}
