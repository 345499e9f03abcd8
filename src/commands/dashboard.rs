//! Dashboard statistics.

use sms_core::error::AppError;

use crate::context::ClientContext;
use crate::output::{self, OutputFormat};

/// Print the dashboard of the signed-in user
pub async fn execute(ctx: &ClientContext, format: OutputFormat) -> Result<(), AppError> {
    let (user_type, user_id) = super::current_user(ctx)?;
    let stats = ctx.api.dashboard().for_user(user_type, &user_id).await?;

    if format == OutputFormat::Json {
        output::print_item(&stats, format);
        return Ok(());
    }

    let mut counts: Vec<_> = stats.counts.iter().collect();
    counts.sort();
    for (name, count) in counts {
        output::print_kv(name, &count.to_string());
    }
    if !stats.todo_list.is_empty() {
        println!();
        println!("待办事项:");
        output::print_records(&stats.todo_list, &["type", "title", "time"], format);
    }
    Ok(())
}
