//! Login form state machine and failure classification.
//!
//! # Design
//! - The form phase is one enum so "loading and failed" cannot coexist.
//! - The in-flight gate lives in [`AuthSession::begin_submit`]; a second
//!   submit while `Submitting` is ignored, never queued or cancelled.
//! - The session never retains the [`User`]; it is handed to the caller.
//! - Leave transport to [`LoginService`] implementations to keep core DOM-free.

use crate::i18n::TranslationBundle;
use async_trait::async_trait;
use inventario_api_models::{ErrorBody, LoginRequest, User};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Username/password pair captured from the form.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// Login name.
    pub username: String,
    /// Password; never logged.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<Credentials> for LoginRequest {
    fn from(value: Credentials) -> Self {
        Self {
            username: value.username,
            password: value.password,
        }
    }
}

/// Failures reported by a [`LoginService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The backend could not be reached at all.
    #[error("login endpoint unreachable: {detail}")]
    Unreachable {
        /// Transport-level detail for logs.
        detail: String,
    },
    /// The backend answered and denied access.
    #[error("login rejected")]
    Rejected {
        /// Server-provided reason, when present.
        reason: Option<String>,
    },
    /// Anything else (bad payload, unexpected status, request setup).
    #[error("login failed: {detail}")]
    Unexpected {
        /// Diagnostic detail for logs.
        detail: String,
    },
}

/// User-facing failure category shown inline on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    /// Service unreachable.
    Unreachable,
    /// Credentials denied, with the server's reason when it gave one.
    Rejected {
        /// Server-provided reason.
        reason: Option<String>,
    },
    /// Unclassified failure.
    Unexpected,
}

impl LoginFailure {
    /// Localized message for the inline alert.
    #[must_use]
    pub fn message(&self, bundle: &TranslationBundle) -> String {
        match self {
            Self::Unreachable => bundle.text(
                "login.error_unreachable",
                "Não foi possível conectar ao servidor. Verifique se a API está em execução.",
            ),
            Self::Rejected {
                reason: Some(reason),
            } => reason.clone(),
            Self::Rejected { reason: None } => {
                bundle.text("login.error_invalid", "Usuário ou senha inválidos.")
            }
            Self::Unexpected => bundle.text(
                "login.error_generic",
                "Não foi possível entrar. Tente novamente.",
            ),
        }
    }
}

/// Map a service error onto the displayed category.
///
/// Connectivity is checked first, then credential rejection; everything else
/// is unclassified.
#[must_use]
pub fn classify(error: &LoginError) -> LoginFailure {
    match error {
        LoginError::Unreachable { .. } => LoginFailure::Unreachable,
        LoginError::Rejected { reason } => LoginFailure::Rejected {
            reason: reason
                .as_deref()
                .map(str::trim)
                .filter(|reason| !reason.is_empty())
                .map(ToString::to_string),
        },
        LoginError::Unexpected { .. } => LoginFailure::Unexpected,
    }
}

/// HTTP statuses the backend answers with when it denies a login.
pub const REJECTION_STATUSES: [u16; 3] = [400, 401, 403];

/// Map a non-success login response onto a [`LoginError`].
///
/// Rejection statuses carry the body's non-blank `message` as the reason;
/// every other status is unexpected, whatever the body says.
#[must_use]
pub fn status_failure(status: u16, body: Option<&ErrorBody>) -> LoginError {
    let reason = body.and_then(ErrorBody::reason);
    if REJECTION_STATUSES.contains(&status) {
        return LoginError::Rejected { reason };
    }
    LoginError::Unexpected {
        detail: reason.map_or_else(
            || format!("unexpected status {status}"),
            |reason| format!("status {status}: {reason}"),
        ),
    }
}

/// Map a JS error raised by `fetch` onto a [`LoginError`].
///
/// Fetch rejects with a `TypeError` only when the request never reached a
/// server.
#[must_use]
pub fn fetch_failure(name: &str, message: String) -> LoginError {
    if name == "TypeError" {
        LoginError::Unreachable { detail: message }
    } else {
        LoginError::Unexpected {
            detail: format!("{name}: {message}"),
        }
    }
}

/// Lifecycle of the login form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Waiting for input.
    #[default]
    Idle,
    /// One login call in flight; the submit control is disabled.
    Submitting,
    /// Login resolved; the host takes over.
    Succeeded,
    /// Last attempt failed; the form is usable again.
    Failed(LoginFailure),
}

/// Transient login form state.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    /// Username input value.
    pub username: String,
    /// Password input value.
    pub password: String,
    /// Current lifecycle phase.
    pub phase: LoginPhase,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("phase", &self.phase)
            .finish()
    }
}

impl LoginForm {
    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, LoginPhase::Submitting)
    }

    /// Failure from the last attempt, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&LoginFailure> {
        match &self.phase {
            LoginPhase::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Enter `Submitting` and capture the credentials, unless already
    /// submitting.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_loading() {
            return None;
        }
        self.phase = LoginPhase::Submitting;
        Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Record the terminal outcome of the in-flight submission.
    pub fn settle(&mut self, outcome: Result<(), LoginFailure>) {
        self.phase = match outcome {
            Ok(()) => LoginPhase::Succeeded,
            Err(failure) => LoginPhase::Failed(failure),
        };
    }
}

/// External login operation.
#[async_trait(?Send)]
pub trait LoginService {
    /// Authenticate and return the user record.
    ///
    /// # Errors
    ///
    /// Implementations must report unreachable backends, rejected
    /// credentials and other failures as distinct [`LoginError`] variants.
    async fn login(&self, credentials: &Credentials) -> Result<User, LoginError>;
}

/// Result of [`AuthSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Ignored,
    /// Login succeeded.
    Succeeded(User),
    /// Login failed; the form is usable again.
    Failed(LoginFailure),
}

/// Login controller: form state plus the login collaborator.
pub struct AuthSession {
    service: Rc<dyn LoginService>,
    form: RefCell<LoginForm>,
}

impl AuthSession {
    /// Fresh controller in `Idle` with empty inputs.
    #[must_use]
    pub fn new(service: Rc<dyn LoginService>) -> Self {
        Self {
            service,
            form: RefCell::new(LoginForm::default()),
        }
    }

    /// Snapshot of the form for rendering.
    #[must_use]
    pub fn form(&self) -> LoginForm {
        self.form.borrow().clone()
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.form.borrow().is_loading()
    }

    /// Failure from the last attempt, if any.
    #[must_use]
    pub fn failure(&self) -> Option<LoginFailure> {
        self.form.borrow().failure().cloned()
    }

    /// Update the username input.
    pub fn set_username(&self, value: impl Into<String>) {
        self.form.borrow_mut().username = value.into();
    }

    /// Update the password input.
    pub fn set_password(&self, value: impl Into<String>) {
        self.form.borrow_mut().password = value.into();
    }

    /// Gate a new submission. Returns `None` while one is in flight.
    #[must_use]
    pub fn begin_submit(&self) -> Option<Credentials> {
        self.form.borrow_mut().begin_submit()
    }

    /// Run the login call for credentials obtained from
    /// [`Self::begin_submit`] and settle the phase.
    ///
    /// The phase leaves `Submitting` on every path once the future has been
    /// polled, including when it is dropped before the service answers.
    /// [`Self::submit`] arms that guard at gate time instead.
    ///
    /// # Errors
    ///
    /// Returns the classified [`LoginFailure`] when the service rejects.
    #[allow(clippy::future_not_send)]
    pub async fn complete(&self, credentials: Credentials) -> Result<User, LoginFailure> {
        self.run(credentials, InFlight::new(&self.form)).await
    }

    #[allow(clippy::future_not_send)]
    async fn run(
        &self,
        credentials: Credentials,
        mut in_flight: InFlight<'_>,
    ) -> Result<User, LoginFailure> {
        let result = self.service.login(&credentials).await;
        let outcome = result.map_err(|err| classify(&err));
        in_flight.settle(outcome.as_ref().map(|_| ()).map_err(LoginFailure::clone));
        outcome
    }

    /// Gate a submission with the current inputs and return the pending
    /// login.
    ///
    /// The gate runs when this is called, not when the future is first
    /// polled, so the caller can render the `Submitting` phase before
    /// awaiting.
    #[allow(clippy::future_not_send)]
    pub fn submit(&self) -> impl Future<Output = SubmitOutcome> + '_ {
        let pending = self
            .begin_submit()
            .map(|credentials| (credentials, InFlight::new(&self.form)));
        async move {
            let Some((credentials, in_flight)) = pending else {
                return SubmitOutcome::Ignored;
            };
            match self.run(credentials, in_flight).await {
                Ok(user) => SubmitOutcome::Succeeded(user),
                Err(failure) => SubmitOutcome::Failed(failure),
            }
        }
    }
}

struct InFlight<'a> {
    form: &'a RefCell<LoginForm>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    const fn new(form: &'a RefCell<LoginForm>) -> Self {
        Self {
            form,
            settled: false,
        }
    }

    fn settle(&mut self, outcome: Result<(), LoginFailure>) {
        self.form.borrow_mut().settle(outcome);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled
            && let Ok(mut form) = self.form.try_borrow_mut()
        {
            form.settle(Err(LoginFailure::Unexpected));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};
    use inventario_api_models::UserRole;
    use std::cell::Cell;
    use std::future;
    use std::time::Duration;

    struct FakeLogin {
        result: Result<User, LoginError>,
        calls: Cell<u32>,
    }

    impl FakeLogin {
        fn returning(result: Result<User, LoginError>) -> Rc<Self> {
            Rc::new(Self {
                result,
                calls: Cell::new(0),
            })
        }
    }

    #[async_trait(?Send)]
    impl LoginService for FakeLogin {
        async fn login(&self, _credentials: &Credentials) -> Result<User, LoginError> {
            self.calls.set(self.calls.get() + 1);
            tokio::task::yield_now().await;
            self.result.clone()
        }
    }

    struct ImmediateError;

    #[async_trait(?Send)]
    impl LoginService for ImmediateError {
        async fn login(&self, _credentials: &Credentials) -> Result<User, LoginError> {
            Err(LoginError::Unexpected {
                detail: "request builder failed".to_string(),
            })
        }
    }

    struct NeverAnswers;

    #[async_trait(?Send)]
    impl LoginService for NeverAnswers {
        async fn login(&self, _credentials: &Credentials) -> Result<User, LoginError> {
            future::pending().await
        }
    }

    fn admin() -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            display_name: None,
            role: UserRole::Admin,
        }
    }

    fn portuguese() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::Pt)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn successful_login_hands_user_to_caller() {
        let service = FakeLogin::returning(Ok(admin()));
        let session = AuthSession::new(service.clone());
        session.set_username("admin");
        session.set_password("secret");

        assert_eq!(session.submit().await, SubmitOutcome::Succeeded(admin()));
        assert_eq!(session.form().phase, LoginPhase::Succeeded);
        assert!(!session.is_loading());
        assert_eq!(service.calls.get(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unreachable_backend_shows_connectivity_message() {
        let service = FakeLogin::returning(Err(LoginError::Unreachable {
            detail: "TypeError: Failed to fetch".to_string(),
        }));
        let session = AuthSession::new(service);

        let outcome = session.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed(LoginFailure::Unreachable));
        assert!(!session.is_loading());
        let bundle = portuguese();
        let message = session.failure().expect("failure").message(&bundle);
        assert_eq!(
            message,
            "Não foi possível conectar ao servidor. Verifique se a API está em execução."
        );
        assert_ne!(message, LoginFailure::Rejected { reason: None }.message(&bundle));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejection_without_reason_shows_generic_credentials_message() {
        let session = AuthSession::new(FakeLogin::returning(Err(LoginError::Rejected {
            reason: None,
        })));

        session.submit().await;

        let failure = session.failure().expect("failure");
        assert_eq!(failure.message(&portuguese()), "Usuário ou senha inválidos.");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejection_reason_from_server_is_shown() {
        let session = AuthSession::new(FakeLogin::returning(Err(LoginError::Rejected {
            reason: Some("Usuário bloqueado".to_string()),
        })));

        session.submit().await;

        assert_eq!(
            session.failure().expect("failure").message(&portuguese()),
            "Usuário bloqueado"
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn immediate_error_still_clears_loading() {
        let session = AuthSession::new(Rc::new(ImmediateError));

        assert_eq!(
            session.submit().await,
            SubmitOutcome::Failed(LoginFailure::Unexpected)
        );
        assert!(!session.is_loading());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submit_enters_submitting_before_first_poll() {
        let service = FakeLogin::returning(Ok(admin()));
        let session = AuthSession::new(service.clone());

        let pending = session.submit();
        assert!(session.is_loading());
        assert_eq!(session.submit().await, SubmitOutcome::Ignored);

        assert_eq!(pending.await, SubmitOutcome::Succeeded(admin()));
        assert!(!session.is_loading());
        assert_eq!(service.calls.get(), 1);
    }

    #[test]
    fn dropping_an_unpolled_submission_clears_loading() {
        let session = AuthSession::new(Rc::new(NeverAnswers));

        let pending = session.submit();
        assert!(session.is_loading());
        drop(pending);

        assert!(!session.is_loading());
        assert_eq!(session.failure(), Some(LoginFailure::Unexpected));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn second_submit_while_in_flight_is_ignored() {
        let service = FakeLogin::returning(Ok(admin()));
        let session = AuthSession::new(service.clone());

        let (first, second) = tokio::join!(session.submit(), session.submit());

        assert_eq!(first, SubmitOutcome::Succeeded(admin()));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(service.calls.get(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_form_accepts_resubmission() {
        let session = AuthSession::new(Rc::new(ImmediateError));
        session.submit().await;
        assert!(session.failure().is_some());

        let credentials = session.begin_submit().expect("resubmit allowed");
        assert!(session.is_loading());
        assert!(session.failure().is_none());
        assert!(session.complete(credentials).await.is_err());
        assert!(!session.is_loading());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn dropped_submission_does_not_leave_form_loading() {
        let session = AuthSession::new(Rc::new(NeverAnswers));

        let timed_out = tokio::time::timeout(Duration::from_millis(10), session.submit()).await;

        assert!(timed_out.is_err());
        assert!(!session.is_loading());
        assert_eq!(session.failure(), Some(LoginFailure::Unexpected));
    }

    #[test]
    fn begin_submit_captures_inputs_and_gates() {
        let mut form = LoginForm {
            username: "admin".to_string(),
            password: "secret".to_string(),
            phase: LoginPhase::Idle,
        };
        let credentials = form.begin_submit().expect("idle form submits");
        assert_eq!(credentials.username, "admin");
        assert_eq!(credentials.password, "secret");
        assert!(form.begin_submit().is_none());
        form.settle(Err(LoginFailure::Unreachable));
        assert!(!form.is_loading());
        assert_eq!(form.failure(), Some(&LoginFailure::Unreachable));
    }

    #[test]
    fn classification_blanks_out_empty_reasons() {
        assert_eq!(
            classify(&LoginError::Rejected {
                reason: Some("  ".to_string())
            }),
            LoginFailure::Rejected { reason: None }
        );
        assert_eq!(
            classify(&LoginError::Unexpected {
                detail: "500".to_string()
            }),
            LoginFailure::Unexpected
        );
    }

    #[test]
    fn rejection_statuses_keep_server_reason() {
        let body = ErrorBody {
            message: Some("Senha expirada".to_string()),
        };
        assert_eq!(
            status_failure(401, Some(&body)),
            LoginError::Rejected {
                reason: Some("Senha expirada".to_string())
            }
        );
        assert_eq!(
            status_failure(400, None),
            LoginError::Rejected { reason: None }
        );
    }

    #[test]
    fn forbidden_with_blank_message_shows_invalid_credentials() {
        let body = ErrorBody {
            message: Some("   ".to_string()),
        };
        let error = status_failure(403, Some(&body));
        assert_eq!(error, LoginError::Rejected { reason: None });
        assert_eq!(
            classify(&error).message(&portuguese()),
            "Usuário ou senha inválidos."
        );
    }

    #[test]
    fn server_errors_stay_unexpected_even_with_a_message() {
        let body = ErrorBody {
            message: Some("database down".to_string()),
        };
        let error = status_failure(500, Some(&body));
        assert!(matches!(
            &error,
            LoginError::Unexpected { detail } if detail.contains("500")
        ));
        assert_eq!(classify(&error), LoginFailure::Unexpected);
        assert!(matches!(
            status_failure(404, None),
            LoginError::Unexpected { .. }
        ));
    }

    #[test]
    fn only_type_errors_mean_unreachable() {
        assert_eq!(
            fetch_failure("TypeError", "Failed to fetch".to_string()),
            LoginError::Unreachable {
                detail: "Failed to fetch".to_string()
            }
        );
        let aborted = fetch_failure("AbortError", "The user aborted a request.".to_string());
        assert_eq!(classify(&aborted), LoginFailure::Unexpected);
        assert_ne!(
            classify(&aborted).message(&portuguese()),
            LoginFailure::Unreachable.message(&portuguese())
        );
    }

    #[test]
    fn messages_are_distinct_per_category() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let unreachable = LoginFailure::Unreachable.message(&bundle);
        let invalid = LoginFailure::Rejected { reason: None }.message(&bundle);
        let generic = LoginFailure::Unexpected.message(&bundle);
        assert_ne!(unreachable, invalid);
        assert_ne!(invalid, generic);
        assert_ne!(unreachable, generic);
    }

    #[test]
    fn credential_debug_redacts_password() {
        let credentials = Credentials {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{credentials:?}").contains("hunter2"));
        let request = LoginRequest::from(credentials);
        assert_eq!(request.password, "hunter2");
    }
}
