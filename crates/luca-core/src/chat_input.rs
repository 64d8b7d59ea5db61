//! Chat message buffer.

/// A key press as seen by the textarea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key`, e.g. `"Enter"`.
    pub key: String,
    /// Whether Shift was held.
    pub shift: bool,
}

impl KeyPress {
    /// Build a key press.
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }
}

/// What the input should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Prevent the default and submit.
    Submit,
    /// Let the textarea insert a newline.
    InsertNewline,
    /// Not ours to handle.
    Ignore,
}

/// Message buffer with caller-controlled disabled state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatInput {
    text: String,
    disabled: bool,
}

impl ChatInput {
    /// Empty, enabled input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the caller disabled the input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether a submit would dispatch.
    pub fn can_submit(&self) -> bool {
        !self.disabled && !self.text.trim().is_empty()
    }

    /// Map a key press to an action.
    pub fn key_action(key: &KeyPress) -> KeyAction {
        match (key.key.as_str(), key.shift) {
            ("Enter", false) => KeyAction::Submit,
            ("Enter", true) => KeyAction::InsertNewline,
            _ => KeyAction::Ignore,
        }
    }

    /// Dispatch the trimmed message and clear the buffer.
    ///
    /// Returns `false` without calling `dispatch` when the buffer is blank or
    /// the input is disabled. The buffer is cleared as soon as `dispatch`
    /// returns; the send outcome is not awaited.
    pub fn submit<F: FnOnce(String)>(&mut self, dispatch: F) -> bool {
        if !self.can_submit() {
            return false;
        }
        let message = self.text.trim().to_string();
        dispatch(message);
        self.text.clear();
        true
    }
}
