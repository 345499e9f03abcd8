//! Confirmation dialogs for destructive or final actions.

use std::fmt;

use dialoguer::Confirm;

use sms_core::error::AppError;
use sms_core::result::AppResult;

/// How alarming a confirmation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    fn marker(&self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

/// Preset confirmation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Delete,
    BatchDelete,
    Revoke,
    Approve,
    Reject,
    Logout,
    Reset,
    Submit,
}

/// Text and severity of one confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub severity: Severity,
}

impl ConfirmDialog {
    /// The preset for `kind`; `message` replaces the preset message.
    pub fn preset(kind: ConfirmKind, message: Option<&str>) -> Self {
        let (title, default_message, confirm_text, severity) = match kind {
            ConfirmKind::Delete => (
                "删除确认",
                "此操作将永久删除该数据，是否继续？",
                "确认删除",
                Severity::Error,
            ),
            ConfirmKind::BatchDelete => (
                "批量删除确认",
                "此操作将永久删除选中的所有数据，是否继续？",
                "确认删除",
                Severity::Error,
            ),
            ConfirmKind::Revoke => (
                "撤回确认",
                "确定要撤回该申请吗？撤回后需要重新提交。",
                "确认撤回",
                Severity::Warning,
            ),
            ConfirmKind::Approve => (
                "审批确认",
                "确定通过该申请吗？",
                "确认通过",
                Severity::Info,
            ),
            ConfirmKind::Reject => (
                "拒绝确认",
                "确定拒绝该申请吗？",
                "确认拒绝",
                Severity::Warning,
            ),
            ConfirmKind::Logout => (
                "退出确认",
                "确定要退出登录吗？",
                "确认退出",
                Severity::Warning,
            ),
            ConfirmKind::Reset => (
                "重置确认",
                "确定要重置吗？所有未保存的更改将丢失。",
                "确认重置",
                Severity::Warning,
            ),
            ConfirmKind::Submit => (
                "提交确认",
                "确定要提交吗？提交后将无法修改。",
                "确认提交",
                Severity::Info,
            ),
        };

        Self {
            title: title.to_string(),
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or(default_message)
                .to_string(),
            confirm_text: confirm_text.to_string(),
            cancel_text: "取消".to_string(),
            severity,
        }
    }

    /// Delete confirmation naming the item.
    pub fn delete(item: Option<&str>) -> Self {
        let message = match item {
            Some(name) => format!("确定要删除「{name}」吗？此操作不可恢复。"),
            None => "确定要删除该数据吗？此操作不可恢复。".to_string(),
        };
        Self::preset(ConfirmKind::Delete, Some(&message))
    }

    /// Batch delete confirmation with the item count.
    pub fn batch_delete(count: usize) -> Self {
        Self::preset(
            ConfirmKind::BatchDelete,
            Some(&format!("确定要删除选中的 {count} 条数据吗？此操作不可恢复。")),
        )
    }

    /// Ask on the terminal. Declining, or a terminal that cannot prompt,
    /// yields `false`.
    pub fn ask(&self) -> AppResult<bool> {
        println!("{} {}", self.severity.marker(), self.title);
        let prompt = format!("{} [{} / {}]", self.message, self.confirm_text, self.cancel_text);
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))
    }

    /// Skip the dialog when `assume_yes` is set, otherwise [`ask`](Self::ask).
    pub fn confirmed(&self, assume_yes: bool) -> AppResult<bool> {
        if assume_yes {
            return Ok(true);
        }
        self.ask()
    }
}

impl fmt::Display for ConfirmDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_text() {
        let dialog = ConfirmDialog::preset(ConfirmKind::Logout, None);
        assert_eq!(dialog.title, "退出确认");
        assert_eq!(dialog.message, "确定要退出登录吗？");
        assert_eq!(dialog.confirm_text, "确认退出");
        assert_eq!(dialog.cancel_text, "取消");
        assert_eq!(dialog.severity, Severity::Warning);
    }

    #[test]
    fn test_custom_message_overrides_preset() {
        let dialog = ConfirmDialog::preset(ConfirmKind::Approve, Some("确定通过「国家奖学金」的申请吗？"));
        assert_eq!(dialog.title, "审批确认");
        assert_eq!(dialog.message, "确定通过「国家奖学金」的申请吗？");

        let empty = ConfirmDialog::preset(ConfirmKind::Approve, Some(""));
        assert_eq!(empty.message, "确定通过该申请吗？");
    }

    #[test]
    fn test_delete_helpers() {
        assert_eq!(
            ConfirmDialog::delete(Some("AW001")).message,
            "确定要删除「AW001」吗？此操作不可恢复。"
        );
        assert_eq!(ConfirmDialog::batch_delete(3).severity, Severity::Error);
        assert!(ConfirmDialog::batch_delete(3).message.contains("3 条"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let dialog = ConfirmDialog::preset(ConfirmKind::Submit, None);
        assert!(dialog.confirmed(true).unwrap());
    }
}
