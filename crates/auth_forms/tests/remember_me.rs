mod common;

use auth_forms::{
    Checkbox, Field, FormEvent, FormSurface,
    memory::{MemoryStore, MemorySurface},
    remember::REMEMBERED_EMAIL_KEY,
};
use common::with_store;

#[test]
fn unchecking_forgets_email_for_the_next_load() {
    let store = MemoryStore::default();

    let mut first_visit = with_store(
        MemorySurface::sign_in_page().with_value(Field::Email, "user@test.com"),
        store.clone(),
    );
    first_visit.init();
    first_visit
        .surface_mut()
        .set_checked(Checkbox::Remember, true);
    let _ = first_visit.handle(FormEvent::RememberChanged);
    assert_eq!(
        store.peek(REMEMBERED_EMAIL_KEY).as_deref(),
        Some("user@test.com")
    );

    let mut second_visit = with_store(MemorySurface::sign_in_page(), store.clone());
    assert!(second_visit.init());
    assert_eq!(
        second_visit.surface().value(Field::Email).as_deref(),
        Some("user@test.com")
    );
    assert_eq!(
        second_visit.surface().is_checked(Checkbox::Remember),
        Some(true)
    );
    second_visit
        .surface_mut()
        .set_checked(Checkbox::Remember, false);
    let _ = second_visit.handle(FormEvent::RememberChanged);

    let mut third_visit = with_store(MemorySurface::sign_in_page(), store.clone());
    assert!(!third_visit.init());
    assert_eq!(third_visit.surface().value(Field::Email).as_deref(), Some(""));
    assert_eq!(
        third_visit.surface().is_checked(Checkbox::Remember),
        Some(false)
    );
    assert_eq!(store.peek(REMEMBERED_EMAIL_KEY), None);
}

#[test]
fn remember_change_without_checkbox_is_ignored() {
    let store = MemoryStore::default();
    let mut controller = with_store(
        MemorySurface::register_page().with_value(Field::Email, "user@test.com"),
        store.clone(),
    );

    let _ = controller.handle(FormEvent::RememberChanged);

    assert_eq!(store.peek(REMEMBERED_EMAIL_KEY), None);
}

#[test]
fn unavailable_storage_does_not_break_the_page() {
    let mut controller = with_store(
        MemorySurface::sign_in_page()
            .with_value(Field::Email, "user@test.com")
            .with_checked(Checkbox::Remember, true),
        MemoryStore::unavailable(),
    );

    assert!(!controller.init());
    let _ = controller.handle(FormEvent::RememberChanged);

    assert_eq!(
        controller.surface().value(Field::Email).as_deref(),
        Some("user@test.com")
    );
}
