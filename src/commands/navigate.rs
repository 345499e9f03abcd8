//! Route navigation commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use sms_core::error::AppError;
use sms_router::RouteRecord;

use crate::context::ClientContext;
use crate::output::{self, OutputFormat};

/// Arguments for `open`
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Path to navigate to, e.g. /admin/log
    pub path: String,
}

/// Route display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RouteRow {
    /// Path
    path: String,
    /// Route name
    name: String,
    /// Page title
    title: String,
    /// Required user type
    role: String,
    /// Redirect target
    redirect: String,
}

/// Navigate and print the final route
pub fn open(args: &OpenArgs, ctx: &ClientContext) -> Result<(), AppError> {
    ctx.open(&args.path)?;
    Ok(())
}

/// Print the route table
pub fn routes(ctx: &ClientContext, format: OutputFormat) -> Result<(), AppError> {
    let mut rows = Vec::new();
    for record in ctx.navigation.table().routes() {
        collect(record, "", None, &mut rows);
    }
    output::print_list(&rows, format);
    Ok(())
}

fn collect(
    record: &RouteRecord,
    parent: &str,
    inherited_role: Option<&str>,
    rows: &mut Vec<RouteRow>,
) {
    let path = if record.path.starts_with('/') || record.is_catch_all() {
        record.path.clone()
    } else {
        format!("{parent}/{}", record.path)
    };
    let role = record.meta.role.map(|r| r.as_str()).or(inherited_role);

    rows.push(RouteRow {
        path: path.clone(),
        name: record.name.clone().unwrap_or_default(),
        title: record.meta.title.clone().unwrap_or_default(),
        role: match record.meta.requires_auth {
            Some(false) => "public".to_string(),
            _ => role.unwrap_or("any").to_string(),
        },
        redirect: record.redirect.clone().unwrap_or_default(),
    });

    for child in &record.children {
        collect(child, &path, role, rows);
    }
}
