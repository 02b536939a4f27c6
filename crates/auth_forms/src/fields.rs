//! Identifiers for the forms, fields, and controls the controller touches.
//! DOM ids are the page contract; the web app renders them and the browser
//! binding looks them up.

/// The two optional forms a page may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    SignIn,
    Register,
}

impl FormKind {
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::SignIn => "loginForm",
            Self::Register => "registerForm",
        }
    }
}

/// Text inputs and selects that carry a value and live inside a form group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
    FirstName,
    LastName,
    UserType,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Email,
        Self::Password,
        Self::FirstName,
        Self::LastName,
        Self::UserType,
        Self::ConfirmPassword,
    ];

    /// Fields cleared before a registration pass, in display order.
    pub const REGISTRATION: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::UserType,
        Self::Password,
        Self::ConfirmPassword,
    ];

    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::FirstName => "firstname",
            Self::LastName => "lastname",
            Self::UserType => "userType",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Whether the control masks its value and carries a visibility toggle.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Checkbox {
    Remember,
    Terms,
}

impl Checkbox {
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Remember => "rememberMe",
            Self::Terms => "terms",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::Facebook];

    /// Display name used in the confirmation alert.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Facebook => "Facebook",
        }
    }

    /// Modifier class on the `.social-btn` element.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

/// Any element the controller styles or relabels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Field(Field),
    /// The `.form-group` wrapper enclosing a field.
    Group(Field),
    Submit(FormKind),
    PasswordToggle(Field),
    Social(SocialProvider),
    /// The n-th `.auth-card` on the page.
    Card(usize),
}
