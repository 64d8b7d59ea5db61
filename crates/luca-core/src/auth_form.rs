//! Sign-in / sign-up form.
//!
//! The form only buffers fields and hands a snapshot to the caller. It never
//! talks to the network and never resets itself: switching modes keeps every
//! field, and a submission leaves the buffers as they were.

use serde::Serialize;

/// Which flow the form is collecting credentials for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    Login,
    /// Account creation.
    Register,
}

impl AuthMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Card title.
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Create Account",
        }
    }

    /// Submit button label.
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }

    /// Whether `field` is rendered (and required) in this mode.
    pub fn shows(self, field: AuthField) -> bool {
        match field {
            AuthField::Name => self == AuthMode::Register,
            AuthField::Email | AuthField::Password => true,
        }
    }
}

/// Form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    /// Display name, register only.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
}

/// Field buffers of the auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    email: String,
    password: String,
    name: String,
}

/// What the form passes to the caller's submit handler.
///
/// In login mode `name` may still carry a value typed earlier in register
/// mode; it has no meaning there. Use [`AuthSubmission::into_request`] to get
/// a request body with that rule applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSubmission {
    /// Mode at submission time.
    pub mode: AuthMode,
    /// Email value.
    pub email: String,
    /// Password value.
    pub password: String,
    /// Name value.
    pub name: String,
}

/// Request body sent to the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthRequest {
    /// `POST /api/auth/login`.
    Login {
        /// Email.
        email: String,
        /// Password.
        password: String,
    },
    /// `POST /api/auth/register`.
    Register {
        /// Email.
        email: String,
        /// Password.
        password: String,
        /// Display name.
        name: String,
    },
}

impl AuthRequest {
    /// Endpoint the request is posted to.
    pub fn path(&self) -> &'static str {
        match self {
            AuthRequest::Login { .. } => crate::api::LOGIN_PATH,
            AuthRequest::Register { .. } => crate::api::REGISTER_PATH,
        }
    }
}

impl AuthSubmission {
    /// Build the request body for the submission's mode.
    pub fn into_request(self) -> AuthRequest {
        match self.mode {
            AuthMode::Login => AuthRequest::Login {
                email: self.email,
                password: self.password,
            },
            AuthMode::Register => AuthRequest::Register {
                email: self.email,
                password: self.password,
                name: self.name,
            },
        }
    }
}

impl AuthForm {
    /// Empty form in the given mode.
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Current mode.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch between login and register without touching the fields.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Set the mode explicitly.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    /// Email buffer.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password buffer.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Name buffer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the email buffer.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Replace the password buffer.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Replace the name buffer.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Whether a field is rendered in the current mode.
    pub fn field_visible(&self, field: AuthField) -> bool {
        self.mode.shows(field)
    }

    /// Whether a field must be non-empty in the current mode.
    pub fn field_required(&self, field: AuthField) -> bool {
        self.field_visible(field)
    }

    /// Required fields that are still empty.
    pub fn missing_required(&self) -> Vec<AuthField> {
        [AuthField::Name, AuthField::Email, AuthField::Password]
            .into_iter()
            .filter(|&field| self.field_required(field) && self.value(field).is_empty())
            .collect()
    }

    /// Snapshot of the fields for the caller's handler.
    pub fn submit(&self) -> AuthSubmission {
        self.submit_as(self.mode)
    }

    /// Snapshot of the fields tagged with `mode` instead of the buffered one.
    ///
    /// Used when the caller owns the mode and the buffer may not have caught
    /// up with it yet.
    pub fn submit_as(&self, mode: AuthMode) -> AuthSubmission {
        AuthSubmission {
            mode,
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        }
    }

    fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }
}
