//! User-facing messages raised by the page, identified by translation key

use serde::Serialize;

/// Non-blocking toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notice {
    DataUpdated,
    DataDeleted,
    UpdateFailed,
    DeleteFailed,
}

impl Notice {
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::DataUpdated => "text.data_updated_successfully",
            Notice::DataDeleted => "text.data_deleted_successfully",
            Notice::UpdateFailed => "text.data_update_failed",
            Notice::DeleteFailed => "text.data_delete_failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::UpdateFailed | Notice::DeleteFailed)
    }
}

/// Informational alert for a skipped operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alert {
    NothingToSave,
    NothingSelected,
}

impl Alert {
    pub fn title_key(&self) -> &'static str {
        match self {
            Alert::NothingToSave => "text.nothing_changed",
            Alert::NothingSelected => "text.nothing_selected",
        }
    }

    pub fn text_key(&self) -> &'static str {
        match self {
            Alert::NothingToSave => "text.there_is_nothing_to_save",
            Alert::NothingSelected => "text.there_is_nothing_to_delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Warning,
}

/// Blocking yes/no question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPrompt {
    #[serde(rename = "type")]
    pub kind: PromptKind,
    pub title_key: &'static str,
    pub text_key: &'static str,
    pub confirm_key: &'static str,
    pub cancel_key: &'static str,
}

impl ConfirmPrompt {
    pub fn delete() -> Self {
        Self {
            kind: PromptKind::Warning,
            title_key: "button.delete",
            text_key: "text.are_you_sure",
            confirm_key: "button.delete",
            cancel_key: "button.cancel",
        }
    }
}
