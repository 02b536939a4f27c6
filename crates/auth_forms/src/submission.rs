//! Submission lifecycle shared by the sign-in, registration, and social flows.
//!
//! Each flow moves `Idle → Submitting → Succeeded | Failed`. Starting a flow
//! issues a [`Ticket`]; only the newest ticket may complete it, and nothing
//! completes once the owning view's [`ViewLifetime`] has ended.

use crate::{config::FormsConfig, error::Error, fields::SocialProvider};
use secrecy::SecretString;
use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flow {
    SignIn,
    Register,
    Social(SocialProvider),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    flow: Flow,
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub const fn flow(&self) -> Flow {
        self.flow
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting(Ticket),
    Succeeded,
    Failed(Error),
}

/// One flow's state plus the button markup to put back after it settles.
#[derive(Debug, Default)]
pub(crate) struct Submission {
    state: SubmissionState,
    generation: u64,
    restore: Option<String>,
}

impl Submission {
    pub(crate) const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// `None` while a previous attempt is still in flight.
    pub(crate) fn begin(&mut self, flow: Flow, restore: Option<String>) -> Option<Ticket> {
        if matches!(self.state, SubmissionState::Submitting(_)) {
            return None;
        }
        self.generation += 1;
        let ticket = Ticket {
            flow,
            generation: self.generation,
        };
        self.state = SubmissionState::Submitting(ticket);
        self.restore = restore;
        Some(ticket)
    }

    /// Settles the flow if `ticket` is the one in flight.
    pub(crate) fn finish(&mut self, ticket: Ticket, outcome: &Result<(), Error>) -> bool {
        if self.state != SubmissionState::Submitting(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(err) => SubmissionState::Failed(err.clone()),
        };
        true
    }

    pub(crate) fn cancel(&mut self) {
        if matches!(self.state, SubmissionState::Submitting(_)) {
            self.state = SubmissionState::Failed(Error::Cancelled);
            self.restore = None;
        }
    }

    pub(crate) fn take_restore(&mut self) -> Option<String> {
        self.restore.take()
    }
}

/// Liveness of the view a controller is bound to. Clones share the flag, so the
/// page can hand one to its cleanup hook.
#[derive(Clone, Debug)]
pub struct ViewLifetime(Arc<AtomicBool>);

impl ViewLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: String,
    pub password: SecretString,
}

/// Where validated submissions go. The only implementation today is
/// [`SimulatedBackend`].
pub trait Backend {
    fn sign_in(&self, request: &SignInRequest) -> impl Future<Output = Result<(), Error>>;
    fn register(&self, request: &RegistrationRequest) -> impl Future<Output = Result<(), Error>>;
    fn social_sign_in(&self, provider: SocialProvider) -> impl Future<Output = Result<(), Error>>;
}

pub trait Timer {
    fn sleep(&self, millis: u32) -> impl Future<Output = ()>;
}

/// Waits the configured delay and then accepts, or rejects when
/// `fail_submissions` is set. Requests are not inspected.
#[derive(Clone, Debug)]
pub struct SimulatedBackend<T> {
    timer: T,
    config: FormsConfig,
}

impl<T: Timer> SimulatedBackend<T> {
    #[must_use]
    pub const fn new(timer: T, config: FormsConfig) -> Self {
        Self { timer, config }
    }

    async fn settle(&self, delay_ms: u32) -> Result<(), Error> {
        self.timer.sleep(delay_ms).await;
        if self.config.fail_submissions {
            Err(Error::Backend("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl<T: Timer> Backend for SimulatedBackend<T> {
    async fn sign_in(&self, _request: &SignInRequest) -> Result<(), Error> {
        self.settle(self.config.sign_in_delay_ms).await
    }

    async fn register(&self, _request: &RegistrationRequest) -> Result<(), Error> {
        self.settle(self.config.register_delay_ms).await
    }

    async fn social_sign_in(&self, _provider: SocialProvider) -> Result<(), Error> {
        self.settle(self.config.social_delay_ms).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTimer(RefCell<Vec<u32>>);

    impl Timer for RecordingTimer {
        async fn sleep(&self, millis: u32) {
            self.0.borrow_mut().push(millis);
        }
    }

    fn request() -> SignInRequest {
        SignInRequest {
            email: "user@test.com".to_string(),
            password: SecretString::from("abcdef".to_string()),
        }
    }

    #[test]
    fn begin_refuses_while_in_flight() {
        let mut submission = Submission::default();

        assert!(submission.begin(Flow::SignIn, None).is_some());
        assert!(submission.begin(Flow::SignIn, None).is_none());
    }

    #[test]
    fn finish_settles_matching_ticket() {
        let mut submission = Submission::default();
        let ticket = submission.begin(Flow::SignIn, Some("Masuk".to_string())).unwrap();

        assert!(submission.finish(ticket, &Ok(())));

        assert_eq!(submission.state(), &SubmissionState::Succeeded);
        assert_eq!(submission.take_restore().as_deref(), Some("Masuk"));
        assert_eq!(submission.take_restore(), None);
    }

    #[test]
    fn finish_rejects_stale_ticket() {
        let mut submission = Submission::default();
        let stale = submission.begin(Flow::Register, None).unwrap();
        submission.finish(stale, &Err(Error::Backend("down".to_string())));
        let current = submission.begin(Flow::Register, None).unwrap();

        assert!(!submission.finish(stale, &Ok(())));
        assert_eq!(submission.state(), &SubmissionState::Submitting(current));
    }

    #[test]
    fn cancel_marks_in_flight_submission_failed() {
        let mut submission = Submission::default();
        let ticket = submission.begin(Flow::SignIn, Some("Masuk".to_string())).unwrap();

        submission.cancel();

        assert_eq!(submission.state(), &SubmissionState::Failed(Error::Cancelled));
        assert!(!submission.finish(ticket, &Ok(())));
        assert_eq!(submission.take_restore(), None);
    }

    #[test]
    fn cancel_leaves_settled_state_alone() {
        let mut submission = Submission::default();
        let ticket = submission.begin(Flow::SignIn, None).unwrap();
        submission.finish(ticket, &Ok(()));

        submission.cancel();

        assert_eq!(submission.state(), &SubmissionState::Succeeded);
    }

    #[test]
    fn view_lifetime_clones_share_flag() {
        let lifetime = ViewLifetime::new();
        let hook = lifetime.clone();

        hook.end();

        assert!(!lifetime.is_alive());
    }

    #[tokio::test]
    async fn simulated_backend_waits_configured_delays() {
        let backend = SimulatedBackend::new(RecordingTimer::default(), FormsConfig::default());
        let registration = RegistrationRequest {
            first_name: "Budi".to_string(),
            last_name: "Santoso".to_string(),
            email: "budi@test.com".to_string(),
            user_type: "student".to_string(),
            password: SecretString::from("Abcdefg1".to_string()),
        };

        assert_eq!(backend.sign_in(&request()).await, Ok(()));
        assert_eq!(backend.register(&registration).await, Ok(()));
        assert_eq!(backend.social_sign_in(SocialProvider::Google).await, Ok(()));

        assert_eq!(*backend.timer.0.borrow(), vec![1_500, 2_000, 1_500]);
    }

    #[tokio::test]
    async fn simulated_backend_can_fail() {
        let config = FormsConfig {
            fail_submissions: true,
            ..FormsConfig::default()
        };
        let backend = SimulatedBackend::new(RecordingTimer::default(), config);

        assert!(matches!(
            backend.sign_in(&request()).await,
            Err(Error::Backend(_))
        ));
    }

    #[test]
    fn request_debug_hides_password() {
        let rendered = format!("{:?}", request());
        assert!(!rendered.contains("abcdef"));
    }
}
