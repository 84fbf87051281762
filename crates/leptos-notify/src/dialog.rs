//! Dialog Model
//!
//! Confirm and prompt requests, their options and the per-dialog state machine:
//! `Created` -> `Shown` -> `Resolved`, then removed from the stack once the
//! exit animation has run.

use crate::kind::{ConfirmStyle, DialogKind};

pub type DialogId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogPhase {
    Created,
    Shown,
    /// Answer delivered; further actions are ignored
    Resolved,
}

/// User interaction with an open dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
    Backdrop,
    /// Enter pressed in the prompt input
    Enter,
}

/// Value sent back to the awaiting caller
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Resolution {
    Accepted(Option<String>),
    Dismissed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmOptions {
    pub title: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub confirm_style: ConfirmStyle,
    pub kind: DialogKind,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            title: "Confirm Action".to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            confirm_style: ConfirmStyle::Confirm,
            kind: DialogKind::Confirm,
        }
    }
}

impl ConfirmOptions {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    pub fn danger(mut self) -> Self {
        self.confirm_style = ConfirmStyle::Danger;
        self
    }

    pub fn kind(mut self, kind: DialogKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PromptOptions {
    pub title: String,
    pub default_value: String,
    pub placeholder: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub input_type: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            title: "Input Required".to_string(),
            default_value: String::new(),
            placeholder: String::new(),
            confirm_label: "Submit".to_string(),
            cancel_label: "Cancel".to_string(),
            input_type: "text".to_string(),
        }
    }
}

impl PromptOptions {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }
}

/// Text input of a prompt dialog
#[derive(Clone, Debug, PartialEq)]
pub struct PromptField {
    pub value: String,
    pub placeholder: String,
    pub input_type: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dialog {
    pub id: DialogId,
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub confirm_style: ConfirmStyle,
    pub prompt: Option<PromptField>,
    pub phase: DialogPhase,
}

impl Dialog {
    pub(crate) fn confirm(id: DialogId, message: String, options: ConfirmOptions) -> Self {
        Self {
            id,
            kind: options.kind,
            title: options.title,
            message,
            confirm_label: options.confirm_label,
            cancel_label: options.cancel_label,
            confirm_style: options.confirm_style,
            prompt: None,
            phase: DialogPhase::Created,
        }
    }

    pub(crate) fn prompt(id: DialogId, message: String, options: PromptOptions) -> Self {
        Self {
            id,
            kind: DialogKind::Info,
            title: options.title,
            message,
            confirm_label: options.confirm_label,
            cancel_label: options.cancel_label,
            confirm_style: ConfirmStyle::Confirm,
            prompt: Some(PromptField {
                value: options.default_value,
                placeholder: options.placeholder,
                input_type: options.input_type,
            }),
            phase: DialogPhase::Created,
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.prompt.is_some() {
            "✏"
        } else {
            self.kind.icon()
        }
    }

    pub fn class(&self) -> &'static str {
        if self.phase == DialogPhase::Shown {
            "varon-modal show"
        } else {
            "varon-modal"
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Resolved
    }

    /// What `action` resolves this dialog to, if it resolves it at all
    pub(crate) fn resolution_for(&self, action: DialogAction) -> Option<Resolution> {
        if !self.is_open() {
            return None;
        }
        match action {
            DialogAction::Cancel | DialogAction::Backdrop => Some(Resolution::Dismissed),
            DialogAction::Confirm => Some(Resolution::Accepted(self.prompt.as_ref().map(|p| p.value.clone()))),
            DialogAction::Enter => self
                .prompt
                .as_ref()
                .map(|p| Resolution::Accepted(Some(p.value.clone()))),
        }
    }
}
