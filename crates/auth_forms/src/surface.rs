//! UI binding seams. The controller never touches a DOM directly; the web app
//! implements these traits over `web_sys` and [`crate::memory`] implements them
//! in memory.

use crate::{
    fields::{Checkbox, Field, FormKind, Target},
    strength::StrengthMeter,
};

/// Annotation elements appended to a field's group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Error,
    Strength,
}

impl AnnotationKind {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Error => "error-message",
            Self::Strength => "strength-indicator",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnnotationContent<'a> {
    Error(&'a str),
    Strength(&'a StrengthMeter),
}

impl AnnotationContent<'_> {
    #[must_use]
    pub const fn kind(&self) -> AnnotationKind {
        match self {
            Self::Error(_) => AnnotationKind::Error,
            Self::Strength(_) => AnnotationKind::Strength,
        }
    }
}

/// Element-level access to the page. Missing elements are tolerated: getters
/// return `None` or `false` and setters do nothing.
pub trait FormSurface {
    /// Handle to an annotation element.
    type Node: Clone;

    fn has_form(&self, form: FormKind) -> bool;

    /// `None` when the page has no such control.
    fn value(&self, field: Field) -> Option<String>;
    fn set_value(&mut self, field: Field, value: &str);

    /// `None` when the page has no such checkbox.
    fn is_checked(&self, checkbox: Checkbox) -> Option<bool>;
    fn set_checked(&mut self, checkbox: Checkbox, checked: bool);

    fn attribute(&self, target: Target, name: &str) -> Option<String>;
    fn set_attribute(&mut self, target: Target, name: &str, value: &str);

    fn add_class(&mut self, target: Target, class: &str);
    fn remove_class(&mut self, target: Target, class: &str);
    fn has_class(&self, target: Target, class: &str) -> bool;

    fn set_style(&mut self, target: Target, property: &str, value: &str);

    /// Opaque markup of a button, used to restore it after a busy state.
    fn content(&self, target: Target) -> Option<String>;
    fn set_content(&mut self, target: Target, content: &str);
    /// Replaces the content with a spinner, optionally followed by a label.
    fn set_busy(&mut self, target: Target, label: Option<&str>);
    fn set_disabled(&mut self, target: Target, disabled: bool);

    fn find_annotation(&self, field: Field, kind: AnnotationKind) -> Option<Self::Node>;
    /// Appends an empty annotation to the field's group. `None` when the field
    /// has no group.
    fn create_annotation(&mut self, field: Field, kind: AnnotationKind) -> Option<Self::Node>;
    fn write_annotation(&mut self, node: &Self::Node, content: AnnotationContent<'_>);
    fn remove_annotation(&mut self, node: Self::Node);

    fn toggle_class(&mut self, target: Target, class: &str, enabled: bool) {
        if enabled {
            self.add_class(target, class);
        } else {
            self.remove_class(target, class);
        }
    }
}

/// Page-level effects outside the form.
pub trait Host {
    /// Blocking notification.
    fn alert(&self, message: &str);
    fn navigate(&self, target: &str);
}
