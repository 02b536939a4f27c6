//! Inline annotations inside a field's group: the error message and the
//! password strength indicator. Each group holds at most one of each; writers
//! reuse the existing node.

use crate::{
    fields::{Field, Target},
    strength::StrengthMeter,
    surface::{AnnotationContent, AnnotationKind, FormSurface},
};

pub const DANGER_BORDER: &str = "var(--danger-color)";
pub const NEUTRAL_BORDER: &str = "#e1e1e1";

/// Shows `message` under the field and marks its border.
pub fn show_error<S: FormSurface>(surface: &mut S, field: Field, message: &str) {
    upsert(surface, field, AnnotationContent::Error(message));
    surface.set_style(Target::Field(field), "border-color", DANGER_BORDER);
}

/// Drops the field's error message, if any, and resets its border.
pub fn remove_error<S: FormSurface>(surface: &mut S, field: Field) {
    if let Some(node) = surface.find_annotation(field, AnnotationKind::Error) {
        surface.remove_annotation(node);
    }
    surface.set_style(Target::Field(field), "border-color", NEUTRAL_BORDER);
}

pub fn render_strength<S: FormSurface>(surface: &mut S, field: Field, meter: &StrengthMeter) {
    upsert(surface, field, AnnotationContent::Strength(meter));
}

fn upsert<S: FormSurface>(surface: &mut S, field: Field, content: AnnotationContent<'_>) {
    let kind = content.kind();
    let node = match surface.find_annotation(field, kind) {
        Some(node) => Some(node),
        None => surface.create_annotation(field, kind),
    };
    if let Some(node) = node {
        surface.write_annotation(&node, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySurface;

    #[test]
    fn show_error_twice_keeps_one_node_with_latest_message() {
        let mut surface = MemorySurface::sign_in_page();

        show_error(&mut surface, Field::Email, "first");
        show_error(&mut surface, Field::Email, "second");

        assert_eq!(surface.annotation_count(Field::Email, AnnotationKind::Error), 1);
        assert_eq!(surface.error_text(Field::Email), Some("second"));
        assert_eq!(
            surface.style(Target::Field(Field::Email), "border-color"),
            Some(DANGER_BORDER)
        );
    }

    #[test]
    fn remove_error_clears_node_and_border() {
        let mut surface = MemorySurface::sign_in_page();
        show_error(&mut surface, Field::Password, "bad");

        remove_error(&mut surface, Field::Password);

        assert_eq!(surface.annotation_count(Field::Password, AnnotationKind::Error), 0);
        assert_eq!(
            surface.style(Target::Field(Field::Password), "border-color"),
            Some(NEUTRAL_BORDER)
        );
    }

    #[test]
    fn remove_error_without_error_only_resets_border() {
        let mut surface = MemorySurface::sign_in_page();

        remove_error(&mut surface, Field::Email);

        assert_eq!(surface.error_text(Field::Email), None);
        assert_eq!(
            surface.style(Target::Field(Field::Email), "border-color"),
            Some(NEUTRAL_BORDER)
        );
    }

    #[test]
    fn errors_on_missing_fields_are_ignored() {
        let mut surface = MemorySurface::sign_in_page();

        show_error(&mut surface, Field::FirstName, "nope");

        assert_eq!(surface.error_text(Field::FirstName), None);
    }

    #[test]
    fn strength_indicator_is_reused() {
        let mut surface = MemorySurface::sign_in_page();

        render_strength(&mut surface, Field::Password, &StrengthMeter::for_password("a"));
        render_strength(&mut surface, Field::Password, &StrengthMeter::for_password("aA1"));

        assert_eq!(surface.annotation_count(Field::Password, AnnotationKind::Strength), 1);
        assert_eq!(surface.strength(Field::Password).map(|m| m.score), Some(3));
    }

    #[test]
    fn error_and_strength_coexist_in_one_group() {
        let mut surface = MemorySurface::sign_in_page();

        render_strength(&mut surface, Field::Password, &StrengthMeter::for_password("a"));
        show_error(&mut surface, Field::Password, "bad");
        remove_error(&mut surface, Field::Password);

        assert_eq!(surface.annotation_count(Field::Password, AnnotationKind::Strength), 1);
        assert_eq!(surface.annotation_count(Field::Password, AnnotationKind::Error), 0);
    }
}
