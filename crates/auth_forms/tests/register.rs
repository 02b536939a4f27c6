mod common;

use auth_forms::{
    AnnotationKind, Checkbox, Dispatch, Field, Flow, FormEvent, FormKind, FormSurface,
    SubmissionState, Target, memory::MemorySurface, messages,
};
use common::controller;
use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;

fn complete_form() -> MemorySurface {
    MemorySurface::register_page()
        .with_value(Field::FirstName, "Budi")
        .with_value(Field::LastName, "Santoso")
        .with_value(Field::Email, "budi@test.com")
        .with_value(Field::UserType, "student")
        .with_value(Field::Password, "Abcdefg1")
        .with_value(Field::ConfirmPassword, "Abcdefg1")
        .with_checked(Checkbox::Terms, true)
}

#[test]
fn valid_registration_submits_and_lands_on_sign_in() {
    let mut controller = controller(complete_form());

    let Dispatch::Register(ticket, request) =
        controller.handle(FormEvent::Submit(FormKind::Register))
    else {
        panic!("expected a registration dispatch");
    };
    assert_eq!(request.first_name, "Budi");
    assert_eq!(request.user_type, "student");
    assert_eq!(request.password.expose_secret(), "Abcdefg1");

    let button = Target::Submit(FormKind::Register);
    assert!(
        controller
            .surface()
            .content(button)
            .is_some_and(|content| content.ends_with(messages::REGISTER_BUSY))
    );

    controller.complete(ticket, Ok(()));

    assert_eq!(controller.state(Flow::Register), &SubmissionState::Succeeded);
    assert_eq!(controller.host().alerts(), vec![messages::REGISTER_SUCCESS]);
    assert_eq!(controller.host().navigations(), vec!["/login"]);
}

#[test]
fn every_failing_rule_is_reported_at_once() {
    let mut controller = controller(
        MemorySurface::register_page()
            .with_value(Field::FirstName, "B")
            .with_value(Field::LastName, "S")
            .with_value(Field::Email, "nope")
            .with_value(Field::Password, "short")
            .with_value(Field::ConfirmPassword, "other"),
    );

    let dispatch = controller.handle(FormEvent::Submit(FormKind::Register));

    assert!(!dispatch.is_pending());
    let surface = controller.surface();
    assert_eq!(
        surface.error_text(Field::FirstName),
        Some(messages::FIRST_NAME_TOO_SHORT)
    );
    assert_eq!(
        surface.error_text(Field::LastName),
        Some(messages::LAST_NAME_TOO_SHORT)
    );
    assert_eq!(surface.error_text(Field::Email), Some(messages::INVALID_EMAIL));
    assert_eq!(
        surface.error_text(Field::UserType),
        Some(messages::USER_TYPE_REQUIRED)
    );
    assert_eq!(surface.error_text(Field::Password), Some(messages::WEAK_PASSWORD));
    assert_eq!(
        surface.error_text(Field::ConfirmPassword),
        Some(messages::PASSWORD_MISMATCH)
    );
    assert_eq!(controller.host().alerts(), vec![messages::TERMS_REQUIRED]);
}

#[test]
fn mismatched_confirmation_errors_on_confirm_field_only() {
    let mut controller = controller(complete_form().with_value(Field::ConfirmPassword, "Abcdefg2"));

    let dispatch = controller.handle(FormEvent::Submit(FormKind::Register));

    assert!(!dispatch.is_pending());
    assert_eq!(
        controller.surface().fields_with_errors(),
        vec![Field::ConfirmPassword]
    );
}

#[test]
fn mismatch_is_reported_alongside_other_failures() {
    let mut controller = controller(
        complete_form()
            .with_value(Field::Email, "broken")
            .with_value(Field::ConfirmPassword, "x"),
    );

    let _ = controller.handle(FormEvent::Submit(FormKind::Register));

    assert_eq!(
        controller.surface().fields_with_errors(),
        vec![Field::Email, Field::ConfirmPassword]
    );
}

#[test]
fn symbol_in_password_fails_the_strong_rule() {
    let mut controller = controller(
        complete_form()
            .with_value(Field::Password, "Abc1!234")
            .with_value(Field::ConfirmPassword, "Abc1!234"),
    );

    let _ = controller.handle(FormEvent::Submit(FormKind::Register));

    assert_eq!(controller.surface().fields_with_errors(), vec![Field::Password]);
}

#[test]
fn unaccepted_terms_alert_without_inline_error() {
    let mut controller = controller(complete_form().with_checked(Checkbox::Terms, false));

    let dispatch = controller.handle(FormEvent::Submit(FormKind::Register));

    assert!(!dispatch.is_pending());
    assert!(controller.surface().fields_with_errors().is_empty());
    assert_eq!(controller.host().alerts(), vec![messages::TERMS_REQUIRED]);
    assert!(!controller.surface().is_disabled(Target::Submit(FormKind::Register)));
}

#[test]
fn repeated_failed_submits_keep_one_error_per_field() {
    let mut controller = controller(complete_form().with_value(Field::FirstName, ""));

    let _ = controller.handle(FormEvent::Submit(FormKind::Register));
    let _ = controller.handle(FormEvent::Submit(FormKind::Register));

    assert_eq!(
        controller
            .surface()
            .annotation_count(Field::FirstName, AnnotationKind::Error),
        1
    );
}

#[test]
fn missing_user_type_select_blocks_submission() {
    let mut controller = controller(complete_form().without_field(Field::UserType));

    let dispatch = controller.handle(FormEvent::Submit(FormKind::Register));

    assert!(!dispatch.is_pending());
}

#[test]
fn failed_registration_restores_button() {
    let mut controller = controller(complete_form());
    let Dispatch::Register(ticket, _) = controller.handle(FormEvent::Submit(FormKind::Register))
    else {
        panic!("expected a registration dispatch");
    };

    controller.complete(ticket, Err(auth_forms::Error::Backend("down".to_string())));

    let button = Target::Submit(FormKind::Register);
    assert_eq!(controller.surface().content(button).as_deref(), Some("Daftar"));
    assert!(!controller.surface().is_disabled(button));
    assert!(controller.host().navigations().is_empty());
}
