//! Form configuration: feature toggles and every user-visible string.

use serde::{Deserialize, Serialize};

use crate::auth::password::PasswordPolicy;
use crate::store::TableConfig;

/// Label, placeholder, and help text for one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldText {
    label: String,
    placeholder: Option<String>,
    help: Option<String>,
}

impl FieldText {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: None,
            help: None,
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// Strings for the create-account pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountText {
    tab_title: String,
    username: FieldText,
    password: FieldText,
    retype_password: FieldText,
    submit_label: String,
    policy_fail_message: String,
    mismatch_message: String,
    username_taken_message: String,
    invalid_username_message: String,
}

impl CreateAccountText {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab_title: "Create new account".to_string(),
            username: FieldText::new("Create a unique username"),
            password: FieldText::new("Create a password")
                .with_help("Password cannot be recovered if lost"),
            retype_password: FieldText::new("Retype password"),
            submit_label: "Create account".to_string(),
            policy_fail_message: "Password must contain at least 8 characters, including one \
                                  uppercase letter, one lowercase letter, one number, and one \
                                  special character (@$!%*?&_^#- )."
                .to_string(),
            mismatch_message: "Passwords do not match".to_string(),
            username_taken_message: "Username already taken".to_string(),
            invalid_username_message: "Username cannot be empty".to_string(),
        }
    }

    #[must_use]
    pub fn with_tab_title(mut self, tab_title: impl Into<String>) -> Self {
        self.tab_title = tab_title.into();
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: FieldText) -> Self {
        self.username = username;
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: FieldText) -> Self {
        self.password = password;
        self
    }

    #[must_use]
    pub fn with_retype_password(mut self, retype_password: FieldText) -> Self {
        self.retype_password = retype_password;
        self
    }

    #[must_use]
    pub fn with_submit_label(mut self, submit_label: impl Into<String>) -> Self {
        self.submit_label = submit_label.into();
        self
    }

    #[must_use]
    pub fn with_policy_fail_message(mut self, message: impl Into<String>) -> Self {
        self.policy_fail_message = message.into();
        self
    }

    #[must_use]
    pub fn with_mismatch_message(mut self, message: impl Into<String>) -> Self {
        self.mismatch_message = message.into();
        self
    }

    #[must_use]
    pub fn with_username_taken_message(mut self, message: impl Into<String>) -> Self {
        self.username_taken_message = message.into();
        self
    }

    #[must_use]
    pub fn with_invalid_username_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_username_message = message.into();
        self
    }

    #[must_use]
    pub fn tab_title(&self) -> &str {
        &self.tab_title
    }

    #[must_use]
    pub fn username(&self) -> &FieldText {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &FieldText {
        &self.password
    }

    #[must_use]
    pub fn retype_password(&self) -> &FieldText {
        &self.retype_password
    }

    #[must_use]
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    #[must_use]
    pub fn policy_fail_message(&self) -> &str {
        &self.policy_fail_message
    }

    #[must_use]
    pub fn mismatch_message(&self) -> &str {
        &self.mismatch_message
    }

    #[must_use]
    pub fn username_taken_message(&self) -> &str {
        &self.username_taken_message
    }

    #[must_use]
    pub fn invalid_username_message(&self) -> &str {
        &self.invalid_username_message
    }
}

impl Default for CreateAccountText {
    fn default() -> Self {
        Self::new()
    }
}

/// Strings for the login pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginText {
    tab_title: String,
    username: FieldText,
    password: FieldText,
    submit_label: String,
    error_message: String,
}

impl LoginText {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab_title: "Login to existing account".to_string(),
            username: FieldText::new("Enter your unique username"),
            password: FieldText::new("Enter your password"),
            submit_label: "Login".to_string(),
            error_message: "Wrong username/password".to_string(),
        }
    }

    #[must_use]
    pub fn with_tab_title(mut self, tab_title: impl Into<String>) -> Self {
        self.tab_title = tab_title.into();
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: FieldText) -> Self {
        self.username = username;
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: FieldText) -> Self {
        self.password = password;
        self
    }

    #[must_use]
    pub fn with_submit_label(mut self, submit_label: impl Into<String>) -> Self {
        self.submit_label = submit_label.into();
        self
    }

    #[must_use]
    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = error_message.into();
        self
    }

    #[must_use]
    pub fn tab_title(&self) -> &str {
        &self.tab_title
    }

    #[must_use]
    pub fn username(&self) -> &FieldText {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &FieldText {
        &self.password
    }

    #[must_use]
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl Default for LoginText {
    fn default() -> Self {
        Self::new()
    }
}

/// Strings for the guest pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestText {
    tab_title: String,
    submit_label: String,
}

impl GuestText {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab_title: "Guest login".to_string(),
            submit_label: "Login as guest".to_string(),
        }
    }

    #[must_use]
    pub fn with_tab_title(mut self, tab_title: impl Into<String>) -> Self {
        self.tab_title = tab_title.into();
        self
    }

    #[must_use]
    pub fn with_submit_label(mut self, submit_label: impl Into<String>) -> Self {
        self.submit_label = submit_label.into();
        self
    }

    #[must_use]
    pub fn tab_title(&self) -> &str {
        &self.tab_title
    }

    #[must_use]
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }
}

impl Default for GuestText {
    fn default() -> Self {
        Self::new()
    }
}

/// Full form configuration: table/column names, feature toggles, the password
/// policy, and every rendered string, with the historical defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFormConfig {
    title: String,
    table: TableConfig,
    allow_create: bool,
    allow_guest: bool,
    constrain_password: bool,
    password_policy: PasswordPolicy,
    create: CreateAccountText,
    login: LoginText,
    guest: GuestText,
    store_error_message: String,
    path_disabled_message: String,
}

impl LoginFormConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Authentication".to_string(),
            table: TableConfig::new(),
            allow_create: true,
            allow_guest: true,
            constrain_password: true,
            password_policy: PasswordPolicy::new(),
            create: CreateAccountText::new(),
            login: LoginText::new(),
            guest: GuestText::new(),
            store_error_message: "Something went wrong, please try again".to_string(),
            path_disabled_message: "This sign-in option is disabled".to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.table = table;
        self
    }

    #[must_use]
    pub fn with_allow_create(mut self, allow_create: bool) -> Self {
        self.allow_create = allow_create;
        self
    }

    #[must_use]
    pub fn with_allow_guest(mut self, allow_guest: bool) -> Self {
        self.allow_guest = allow_guest;
        self
    }

    /// Toggle the password-strength check on account creation.
    #[must_use]
    pub fn with_constrain_password(mut self, constrain_password: bool) -> Self {
        self.constrain_password = constrain_password;
        self
    }

    #[must_use]
    pub fn with_password_policy(mut self, password_policy: PasswordPolicy) -> Self {
        self.password_policy = password_policy;
        self
    }

    #[must_use]
    pub fn with_create(mut self, create: CreateAccountText) -> Self {
        self.create = create;
        self
    }

    #[must_use]
    pub fn with_login(mut self, login: LoginText) -> Self {
        self.login = login;
        self
    }

    #[must_use]
    pub fn with_guest(mut self, guest: GuestText) -> Self {
        self.guest = guest;
        self
    }

    #[must_use]
    pub fn with_store_error_message(mut self, message: impl Into<String>) -> Self {
        self.store_error_message = message.into();
        self
    }

    #[must_use]
    pub fn with_path_disabled_message(mut self, message: impl Into<String>) -> Self {
        self.path_disabled_message = message.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    #[must_use]
    pub fn allow_create(&self) -> bool {
        self.allow_create
    }

    #[must_use]
    pub fn allow_guest(&self) -> bool {
        self.allow_guest
    }

    #[must_use]
    pub fn constrain_password(&self) -> bool {
        self.constrain_password
    }

    #[must_use]
    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password_policy
    }

    #[must_use]
    pub fn create(&self) -> &CreateAccountText {
        &self.create
    }

    #[must_use]
    pub fn login(&self) -> &LoginText {
        &self.login
    }

    #[must_use]
    pub fn guest(&self) -> &GuestText {
        &self.guest
    }

    #[must_use]
    pub fn store_error_message(&self) -> &str {
        &self.store_error_message
    }

    #[must_use]
    pub fn path_disabled_message(&self) -> &str {
        &self.path_disabled_message
    }
}

impl Default for LoginFormConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_strings() {
        let config = LoginFormConfig::new();
        assert_eq!(config.title(), "Authentication");
        assert!(config.allow_create());
        assert!(config.allow_guest());
        assert!(config.constrain_password());
        assert_eq!(config.create().tab_title(), "Create new account");
        assert_eq!(config.create().username().label(), "Create a unique username");
        assert_eq!(
            config.create().password().help(),
            Some("Password cannot be recovered if lost")
        );
        assert_eq!(config.login().error_message(), "Wrong username/password");
        assert_eq!(config.guest().submit_label(), "Login as guest");
    }

    #[test]
    fn builder_overrides_apply() {
        let config = LoginFormConfig::new()
            .with_title("Sign in")
            .with_allow_guest(false)
            .with_login(LoginText::new().with_error_message("Nope"))
            .with_table(TableConfig::new().with_table("accounts"));
        assert_eq!(config.title(), "Sign in");
        assert!(!config.allow_guest());
        assert_eq!(config.login().error_message(), "Nope");
        assert_eq!(config.table().table(), "accounts");
    }

    #[test]
    fn field_text_carries_optional_parts() {
        let field = FieldText::new("Username")
            .with_placeholder("e.g. carol")
            .with_help("Pick something unique");
        assert_eq!(field.label(), "Username");
        assert_eq!(field.placeholder(), Some("e.g. carol"));
        assert_eq!(field.help(), Some("Pick something unique"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = LoginFormConfig::new().with_title("Sign in");
        let value = serde_json::to_value(&config).expect("serialize");
        let decoded: LoginFormConfig = serde_json::from_value(value).expect("deserialize");
        assert_eq!(decoded, config);
    }
}
