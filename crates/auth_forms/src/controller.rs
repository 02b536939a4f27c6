//! Form interaction controller. The binding layer forwards page events to
//! [`FormController::handle`]; submit events that pass validation come back as
//! a [`Dispatch`] for the backend, whose outcome is applied with
//! [`FormController::complete`].

use crate::{
    annotations::{remove_error, render_strength, show_error},
    config::FormsConfig,
    error::Error,
    fields::{Checkbox, Field, FormKind, SocialProvider, Target},
    messages,
    remember::{self, KeyValueStore},
    rules::{sign_in_password, strong_password, valid_email, valid_name},
    strength::StrengthMeter,
    submission::{
        Backend, Flow, RegistrationRequest, SignInRequest, Submission, SubmissionState, Ticket,
        ViewLifetime,
    },
    surface::{FormSurface, Host},
};
use secrecy::SecretString;
use std::cell::RefCell;
use tracing::{debug, info, warn};

const FILLED: &str = "filled";
const FOCUSED: &str = "focused";
const EYE: &str = "fa-eye";
const EYE_SLASH: &str = "fa-eye-slash";

/// Page events the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit(FormKind),
    Input(Field),
    Focus(Field),
    Blur(Field),
    TogglePassword(Field),
    RememberChanged,
    Social(SocialProvider),
    CardHover { card: usize, entered: bool },
}

/// Backend work requested by an event.
#[derive(Debug)]
#[must_use]
pub enum Dispatch {
    None,
    SignIn(Ticket, SignInRequest),
    Register(Ticket, RegistrationRequest),
    Social(Ticket, SocialProvider),
}

impl Dispatch {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Default)]
struct Submissions {
    sign_in: Submission,
    register: Submission,
    google: Submission,
    facebook: Submission,
}

impl Submissions {
    const fn get(&self, flow: Flow) -> &Submission {
        match flow {
            Flow::SignIn => &self.sign_in,
            Flow::Register => &self.register,
            Flow::Social(SocialProvider::Google) => &self.google,
            Flow::Social(SocialProvider::Facebook) => &self.facebook,
        }
    }

    fn get_mut(&mut self, flow: Flow) -> &mut Submission {
        match flow {
            Flow::SignIn => &mut self.sign_in,
            Flow::Register => &mut self.register,
            Flow::Social(SocialProvider::Google) => &mut self.google,
            Flow::Social(SocialProvider::Facebook) => &mut self.facebook,
        }
    }

    fn cancel_all(&mut self) {
        for submission in [
            &mut self.sign_in,
            &mut self.register,
            &mut self.google,
            &mut self.facebook,
        ] {
            submission.cancel();
        }
    }
}

const fn flow_target(flow: Flow) -> Target {
    match flow {
        Flow::SignIn => Target::Submit(FormKind::SignIn),
        Flow::Register => Target::Submit(FormKind::Register),
        Flow::Social(provider) => Target::Social(provider),
    }
}

pub struct FormController<S, K, H> {
    surface: S,
    store: K,
    host: H,
    config: FormsConfig,
    submissions: Submissions,
    lifetime: ViewLifetime,
}

impl<S, K, H> FormController<S, K, H>
where
    S: FormSurface,
    K: KeyValueStore,
    H: Host,
{
    pub fn new(surface: S, store: K, host: H, config: FormsConfig) -> Self {
        Self {
            surface,
            store,
            host,
            config,
            submissions: Submissions::default(),
            lifetime: ViewLifetime::new(),
        }
    }

    /// Page-load work: applies the remembered email, if any.
    pub fn init(&mut self) -> bool {
        remember::restore(&mut self.surface, &self.store)
    }

    pub fn handle(&mut self, event: FormEvent) -> Dispatch {
        match event {
            FormEvent::Submit(FormKind::SignIn) => return self.submit_sign_in(),
            FormEvent::Submit(FormKind::Register) => return self.submit_register(),
            FormEvent::Social(provider) => return self.start_social(provider),
            FormEvent::Input(field) => self.on_input(field),
            FormEvent::Focus(field) => self.surface.add_class(Target::Group(field), FOCUSED),
            FormEvent::Blur(field) => self.on_blur(field),
            FormEvent::TogglePassword(field) => self.toggle_password(field),
            FormEvent::RememberChanged => remember::sync(&self.surface, &mut self.store),
            FormEvent::CardHover { card, entered } => self.hover_card(card, entered),
        }
        Dispatch::None
    }

    /// Applies a backend outcome. Outcomes for a superseded ticket or a detached
    /// view are dropped.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<(), Error>) {
        let flow = ticket.flow();
        let submission = self.submissions.get_mut(flow);
        if !self.lifetime.is_alive() {
            submission.cancel();
            debug!(?flow, "view detached, dropping completion");
            return;
        }
        if !submission.finish(ticket, &outcome) {
            debug!(?flow, "stale completion ignored");
            return;
        }
        let restore = submission.take_restore();
        let target = flow_target(flow);

        match outcome {
            Ok(()) => {
                info!(?flow, "submission succeeded");
                match flow {
                    Flow::SignIn => {
                        self.host.alert(messages::SIGN_IN_SUCCESS);
                        self.host.navigate(&self.config.landing_path);
                    }
                    Flow::Register => {
                        self.host.alert(messages::REGISTER_SUCCESS);
                        self.host.navigate(&self.config.sign_in_path);
                    }
                    Flow::Social(provider) => {
                        self.host.alert(&messages::social_success(provider.name()));
                        self.restore_button(target, restore);
                    }
                }
            }
            Err(err) => {
                warn!(?flow, error = %err, "submission failed");
                self.restore_button(target, restore);
                self.host.alert(messages::SUBMIT_FAILED);
            }
        }
    }

    /// Ends the view lifetime and abandons anything in flight.
    pub fn detach(&mut self) {
        self.lifetime.end();
        self.submissions.cancel_all();
    }

    #[must_use]
    pub fn lifetime(&self) -> ViewLifetime {
        self.lifetime.clone()
    }

    #[must_use]
    pub const fn state(&self, flow: Flow) -> &SubmissionState {
        self.submissions.get(flow).state()
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn store(&self) -> &K {
        &self.store
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub const fn config(&self) -> &FormsConfig {
        &self.config
    }

    fn field_value(&self, field: Field) -> String {
        self.surface.value(field).unwrap_or_default()
    }

    fn submit_sign_in(&mut self) -> Dispatch {
        if !self.surface.has_form(FormKind::SignIn) {
            return Dispatch::None;
        }
        let Some(request) = self.validate_sign_in() else {
            return Dispatch::None;
        };
        if self.surface.is_checked(Checkbox::Remember) == Some(true) {
            remember::sync(&self.surface, &mut self.store);
        }
        match self.begin(Flow::SignIn, Some(messages::SIGN_IN_BUSY)) {
            Some(ticket) => Dispatch::SignIn(ticket, request),
            None => Dispatch::None,
        }
    }

    fn validate_sign_in(&mut self) -> Option<SignInRequest> {
        remove_error(&mut self.surface, Field::Email);
        remove_error(&mut self.surface, Field::Password);

        let email = self.field_value(Field::Email);
        let password = self.field_value(Field::Password);
        let mut valid = true;

        if !valid_email(&email) {
            show_error(&mut self.surface, Field::Email, messages::INVALID_EMAIL);
            valid = false;
        }
        if !sign_in_password(&password) {
            show_error(
                &mut self.surface,
                Field::Password,
                messages::SIGN_IN_PASSWORD_TOO_SHORT,
            );
            valid = false;
        }

        debug!(valid, "sign-in validated");
        valid.then(|| SignInRequest {
            email,
            password: SecretString::from(password),
        })
    }

    fn submit_register(&mut self) -> Dispatch {
        if !self.surface.has_form(FormKind::Register) {
            return Dispatch::None;
        }
        let Some(request) = self.validate_registration() else {
            return Dispatch::None;
        };
        match self.begin(Flow::Register, Some(messages::REGISTER_BUSY)) {
            Some(ticket) => Dispatch::Register(ticket, request),
            None => Dispatch::None,
        }
    }

    /// Runs every rule so all failures show at once.
    fn validate_registration(&mut self) -> Option<RegistrationRequest> {
        for field in Field::REGISTRATION {
            if self.surface.value(field).is_some() {
                remove_error(&mut self.surface, field);
            }
        }

        let first_name = self.field_value(Field::FirstName);
        let last_name = self.field_value(Field::LastName);
        let email = self.field_value(Field::Email);
        let user_type = self.field_value(Field::UserType);
        let password = self.field_value(Field::Password);
        let confirm = self.field_value(Field::ConfirmPassword);

        let mut failures = Vec::new();
        if !valid_name(&first_name) {
            failures.push((Field::FirstName, messages::FIRST_NAME_TOO_SHORT));
        }
        if !valid_name(&last_name) {
            failures.push((Field::LastName, messages::LAST_NAME_TOO_SHORT));
        }
        if !valid_email(&email) {
            failures.push((Field::Email, messages::INVALID_EMAIL));
        }
        if user_type.is_empty() {
            failures.push((Field::UserType, messages::USER_TYPE_REQUIRED));
        }
        if !strong_password(&password) {
            failures.push((Field::Password, messages::WEAK_PASSWORD));
        }
        if password != confirm {
            failures.push((Field::ConfirmPassword, messages::PASSWORD_MISMATCH));
        }
        for (field, message) in &failures {
            show_error(&mut self.surface, *field, message);
        }

        let terms_accepted = self.surface.is_checked(Checkbox::Terms).unwrap_or(false);
        if !terms_accepted {
            self.host.alert(messages::TERMS_REQUIRED);
        }

        debug!(
            failed_fields = failures.len(),
            terms_accepted, "registration validated"
        );
        (failures.is_empty() && terms_accepted).then(|| RegistrationRequest {
            first_name,
            last_name,
            email,
            user_type,
            password: SecretString::from(password),
        })
    }

    fn start_social(&mut self, provider: SocialProvider) -> Dispatch {
        match self.begin(Flow::Social(provider), None) {
            Some(ticket) => Dispatch::Social(ticket, provider),
            None => Dispatch::None,
        }
    }

    /// Moves `flow` to `Submitting` and puts its button into the busy state.
    fn begin(&mut self, flow: Flow, busy_label: Option<&str>) -> Option<Ticket> {
        let target = flow_target(flow);
        let restore = self.surface.content(target);
        let Some(ticket) = self.submissions.get_mut(flow).begin(flow, restore) else {
            debug!(?flow, "submission already in flight");
            return None;
        };
        self.surface.set_busy(target, busy_label);
        self.surface.set_disabled(target, true);
        info!(?flow, "submission started");
        Some(ticket)
    }

    fn restore_button(&mut self, target: Target, content: Option<String>) {
        if let Some(content) = content {
            self.surface.set_content(target, &content);
        }
        self.surface.set_disabled(target, false);
    }

    fn on_input(&mut self, field: Field) {
        remove_error(&mut self.surface, field);
        if field == Field::Password {
            let meter = StrengthMeter::for_password(&self.field_value(field));
            render_strength(&mut self.surface, field, &meter);
        }
    }

    fn on_blur(&mut self, field: Field) {
        let filled = self
            .surface
            .value(field)
            .is_some_and(|value| !value.trim().is_empty());
        self.surface
            .toggle_class(Target::Field(field), FILLED, filled);
        self.surface.remove_class(Target::Group(field), FOCUSED);
    }

    fn toggle_password(&mut self, field: Field) {
        let input = Target::Field(field);
        let masked = self.surface.attribute(input, "type").as_deref() == Some("password");
        self.surface
            .set_attribute(input, "type", if masked { "text" } else { "password" });

        let icon = Target::PasswordToggle(field);
        for class in [EYE, EYE_SLASH] {
            let present = self.surface.has_class(icon, class);
            self.surface.toggle_class(icon, class, !present);
        }
    }

    fn hover_card(&mut self, card: usize, entered: bool) {
        let target = Target::Card(card);
        if entered {
            self.surface.set_style(target, "transform", "scale(1.02)");
            self.surface
                .set_style(target, "transition", "var(--transition)");
        } else {
            self.surface.set_style(target, "transform", "scale(1)");
        }
    }
}

/// Runs one dispatch against `backend` and applies the outcome. The controller
/// is not borrowed while the backend is awaited, so page events keep flowing.
pub async fn drive<S, K, H, B>(
    controller: &RefCell<FormController<S, K, H>>,
    backend: &B,
    dispatch: Dispatch,
) where
    S: FormSurface,
    K: KeyValueStore,
    H: Host,
    B: Backend,
{
    let (ticket, outcome) = match dispatch {
        Dispatch::None => return,
        Dispatch::SignIn(ticket, request) => (ticket, backend.sign_in(&request).await),
        Dispatch::Register(ticket, request) => (ticket, backend.register(&request).await),
        Dispatch::Social(ticket, provider) => (ticket, backend.social_sign_in(provider).await),
    };
    controller.borrow_mut().complete(ticket, outcome);
}
