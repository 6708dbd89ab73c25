//! Form controller: create, login, guest, and logout transitions.
//!
//! The controller owns no UI. The host renders the panes described by
//! [`LoginFormConfig`], turns a submission into a [`FormEvent`], and applies
//! it to a caller-owned [`Session`]. Every rejection comes back with the
//! user-visible message string configured for it; errors never propagate as
//! panics past this boundary.

pub mod config;
pub mod session;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use tracing::{debug, error};

use crate::auth::password::hash_password;
use crate::auth::verifier::{verify_and_upgrade, VerifyOutcome};
use crate::error::FormError;
use crate::store::{CredentialStore, InsertOutcome, PgCredentialStore};

pub use config::LoginFormConfig;
pub use session::Session;

/// One form submission.
#[derive(Debug, Clone)]
pub enum FormEvent {
    CreateAccount {
        username: String,
        password: SecretString,
        retype_password: SecretString,
    },
    Login {
        username: String,
        password: SecretString,
    },
    Guest,
    Logout,
}

/// What a submission did to the session.
#[derive(Debug)]
pub enum FormOutcome {
    AccountCreated { username: String },
    LoggedIn { username: String },
    GuestSession,
    LoggedOut,
    /// The submission was refused; `message` is the configured string to show.
    Rejected { error: FormError, message: String },
}

/// The login/signup form core bound to one store and one configuration.
#[derive(Debug)]
pub struct LoginForm<S> {
    store: S,
    config: LoginFormConfig,
}

impl LoginForm<PgCredentialStore> {
    /// Bind the form to a Postgres pool using the table and column names
    /// from the configuration.
    #[must_use]
    pub fn postgres(pool: PgPool, config: LoginFormConfig) -> Self {
        let store = PgCredentialStore::new(pool, config.table().clone());
        Self::new(store, config)
    }
}

impl<S: CredentialStore> LoginForm<S> {
    #[must_use]
    pub fn new(store: S, config: LoginFormConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn config(&self) -> &LoginFormConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The store handle, or `None` while the session is unauthenticated.
    ///
    /// This is the "connection or null" contract: downstream data access is
    /// only handed out once the form has authenticated the session.
    #[must_use]
    pub fn connection(&self, session: &Session) -> Option<&S> {
        session.is_authenticated().then_some(&self.store)
    }

    /// Apply one submission to the session.
    ///
    /// All errors from the taxonomy are absorbed here and reported as
    /// [`FormOutcome::Rejected`] with the configured message; a failed
    /// submission leaves the session unauthenticated.
    pub async fn submit(&self, session: &mut Session, event: FormEvent) -> FormOutcome {
        match event {
            FormEvent::CreateAccount {
                username,
                password,
                retype_password,
            } => match self
                .create_account(&username, &password, &retype_password)
                .await
            {
                Ok(username) => {
                    session.set_authenticated(Some(username.clone()));
                    debug!("account created: {username}");
                    FormOutcome::AccountCreated { username }
                }
                Err(err) => self.reject(session, err),
            },
            FormEvent::Login { username, password } => {
                match self.login(&username, &password).await {
                    Ok(username) => {
                        session.set_authenticated(Some(username.clone()));
                        debug!("login successful: {username}");
                        FormOutcome::LoggedIn { username }
                    }
                    Err(err) => self.reject(session, err),
                }
            }
            FormEvent::Guest => {
                if !self.config.allow_guest() {
                    return self.reject(session, FormError::PathDisabled);
                }
                // Guest entry touches the store not at all.
                session.set_authenticated(None);
                debug!("guest session started");
                FormOutcome::GuestSession
            }
            FormEvent::Logout => {
                session.reset();
                debug!("logged out");
                FormOutcome::LoggedOut
            }
        }
    }

    async fn create_account(
        &self,
        username: &str,
        password: &SecretString,
        retype_password: &SecretString,
    ) -> Result<String, FormError> {
        if !self.config.allow_create() {
            return Err(FormError::PathDisabled);
        }
        let username = username.trim();
        if username.is_empty() {
            return Err(FormError::InvalidUsername);
        }
        if password.expose_secret() != retype_password.expose_secret() {
            return Err(FormError::PasswordMismatch);
        }
        if self.config.constrain_password()
            && !self
                .config
                .password_policy()
                .validate(password.expose_secret())
        {
            return Err(FormError::PasswordPolicy);
        }

        // Hash before touching the store; uniqueness is left to the store's
        // primary-key constraint rather than a racy existence pre-check.
        let credential = hash_password(password.expose_secret())?;
        match self.store.insert(username, &credential).await? {
            InsertOutcome::Inserted => Ok(username.to_string()),
            InsertOutcome::Conflict => Err(FormError::UsernameTaken),
        }
    }

    async fn login(&self, username: &str, password: &SecretString) -> Result<String, FormError> {
        match verify_and_upgrade(&self.store, username.trim(), password.expose_secret()).await? {
            VerifyOutcome::Verified { username } => Ok(username),
            VerifyOutcome::Invalid => Err(FormError::InvalidCredentials),
        }
    }

    fn reject(&self, session: &mut Session, err: FormError) -> FormOutcome {
        session.reset();
        match &err {
            FormError::Store(store_err) => error!("store failure during submission: {store_err}"),
            FormError::Hash(hash_err) => error!("hashing failure during submission: {hash_err}"),
            other => debug!("submission rejected: {other}"),
        }
        let message = self.message_for(&err);
        FormOutcome::Rejected { error: err, message }
    }

    fn message_for(&self, err: &FormError) -> String {
        let config = &self.config;
        match err {
            FormError::InvalidCredentials => config.login().error_message().to_string(),
            FormError::UsernameTaken => config.create().username_taken_message().to_string(),
            FormError::PasswordPolicy => config.create().policy_fail_message().to_string(),
            FormError::PasswordMismatch => config.create().mismatch_message().to_string(),
            FormError::InvalidUsername => config.create().invalid_username_message().to_string(),
            FormError::PathDisabled => config.path_disabled_message().to_string(),
            FormError::Hash(_) | FormError::Store(_) => config.store_error_message().to_string(),
        }
    }
}

/// Drive the form with an optional submission and hand back the store when
/// the session ends up authenticated.
///
/// Mirrors the widget entry point: hosts that render rejection messages
/// should call [`LoginForm::submit`] directly and inspect the outcome.
pub async fn login_form<'a, S: CredentialStore>(
    form: &'a LoginForm<S>,
    session: &mut Session,
    event: Option<FormEvent>,
) -> Option<&'a S> {
    if let Some(event) = event {
        let outcome = form.submit(session, event).await;
        if let FormOutcome::Rejected { message, .. } = &outcome {
            debug!("submission rejected: {message}");
        }
    }
    form.connection(session)
}

/// Reset the session flags to their initial values.
pub fn logout(session: &mut Session) {
    session.reset();
}
