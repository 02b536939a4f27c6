//! In-memory implementations of the UI, host, and storage seams. They back the
//! test suite and any headless use of the controller.

use crate::{
    error::Error,
    fields::{Checkbox, Field, FormKind, SocialProvider, Target},
    remember::KeyValueStore,
    strength::StrengthMeter,
    surface::{AnnotationContent, AnnotationKind, FormSurface, Host},
};
use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet, HashMap},
    rc::Rc,
};

/// Stand-in markup for the spinner icon.
pub const SPINNER: &str = "<spinner>";

#[derive(Clone, Debug, Default)]
struct Element {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    content: String,
    busy: bool,
    disabled: bool,
}

#[derive(Clone, Debug)]
struct Annotation {
    id: u64,
    kind: AnnotationKind,
    text: String,
    meter: Option<StrengthMeter>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryNode {
    field: Field,
    id: u64,
}

/// A page held in memory. Elements must be declared before the controller can
/// see them, mirroring a fixed DOM.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    forms: Vec<FormKind>,
    values: HashMap<Field, String>,
    checkboxes: HashMap<Checkbox, bool>,
    elements: HashMap<Target, Element>,
    groups: HashMap<Field, Vec<Annotation>>,
    next_node: u64,
}

impl MemorySurface {
    /// Sign-in page: email, password, remember-me, both social buttons, one card.
    #[must_use]
    pub fn sign_in_page() -> Self {
        Self::default()
            .with_form(FormKind::SignIn, "Masuk")
            .with_field(Field::Email)
            .with_field(Field::Password)
            .with_checkbox(Checkbox::Remember)
            .with_social(SocialProvider::Google)
            .with_social(SocialProvider::Facebook)
            .with_card()
    }

    /// Registration page: every field, the terms checkbox, one card.
    #[must_use]
    pub fn register_page() -> Self {
        Field::REGISTRATION
            .into_iter()
            .fold(
                Self::default().with_form(FormKind::Register, "Daftar"),
                Self::with_field,
            )
            .with_checkbox(Checkbox::Terms)
            .with_card()
    }

    #[must_use]
    pub fn with_form(mut self, form: FormKind, submit_label: &str) -> Self {
        self.forms.push(form);
        self.elements.insert(
            Target::Submit(form),
            Element {
                content: submit_label.to_string(),
                ..Element::default()
            },
        );
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        let mut element = Element::default();
        if field.is_secret() {
            element
                .attributes
                .insert("type".to_string(), "password".to_string());
            let mut toggle = Element::default();
            toggle.classes.insert("fa-eye".to_string());
            self.elements.insert(Target::PasswordToggle(field), toggle);
        }
        self.elements.insert(Target::Field(field), element);
        self.elements.insert(Target::Group(field), Element::default());
        self.values.insert(field, String::new());
        self.groups.insert(field, Vec::new());
        self
    }

    #[must_use]
    pub fn with_checkbox(mut self, checkbox: Checkbox) -> Self {
        self.checkboxes.insert(checkbox, false);
        self
    }

    #[must_use]
    pub fn with_social(mut self, provider: SocialProvider) -> Self {
        self.elements.insert(
            Target::Social(provider),
            Element {
                content: provider.name().to_string(),
                ..Element::default()
            },
        );
        self
    }

    #[must_use]
    pub fn with_card(mut self) -> Self {
        let index = (0..)
            .find(|index| !self.elements.contains_key(&Target::Card(*index)))
            .unwrap_or_default();
        self.elements.insert(Target::Card(index), Element::default());
        self
    }

    #[must_use]
    pub fn with_value(mut self, field: Field, value: &str) -> Self {
        self.set_value(field, value);
        self
    }

    #[must_use]
    pub fn with_checked(mut self, checkbox: Checkbox, checked: bool) -> Self {
        self.set_checked(checkbox, checked);
        self
    }

    /// Drops a field and everything attached to it, as if the markup lacked it.
    #[must_use]
    pub fn without_field(mut self, field: Field) -> Self {
        self.values.remove(&field);
        self.groups.remove(&field);
        self.elements.remove(&Target::Field(field));
        self.elements.remove(&Target::Group(field));
        self.elements.remove(&Target::PasswordToggle(field));
        self
    }

    #[must_use]
    pub fn error_text(&self, field: Field) -> Option<&str> {
        self.annotations(field, AnnotationKind::Error)
            .next()
            .map(|annotation| annotation.text.as_str())
    }

    #[must_use]
    pub fn strength(&self, field: Field) -> Option<StrengthMeter> {
        self.annotations(field, AnnotationKind::Strength)
            .next()
            .and_then(|annotation| annotation.meter)
    }

    #[must_use]
    pub fn annotation_count(&self, field: Field, kind: AnnotationKind) -> usize {
        self.annotations(field, kind).count()
    }

    /// Fields currently showing an error, in declaration order.
    #[must_use]
    pub fn fields_with_errors(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.error_text(*field).is_some())
            .collect()
    }

    #[must_use]
    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.elements
            .get(&target)
            .and_then(|element| element.styles.get(property))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_disabled(&self, target: Target) -> bool {
        self.elements.get(&target).is_some_and(|element| element.disabled)
    }

    #[must_use]
    pub fn is_busy(&self, target: Target) -> bool {
        self.elements.get(&target).is_some_and(|element| element.busy)
    }

    fn annotations(&self, field: Field, kind: AnnotationKind) -> impl Iterator<Item = &Annotation> {
        self.groups
            .get(&field)
            .into_iter()
            .flatten()
            .filter(move |annotation| annotation.kind == kind)
    }

    fn annotation_mut(&mut self, node: &MemoryNode) -> Option<&mut Annotation> {
        self.groups
            .get_mut(&node.field)?
            .iter_mut()
            .find(|annotation| annotation.id == node.id)
    }
}

impl FormSurface for MemorySurface {
    type Node = MemoryNode;

    fn has_form(&self, form: FormKind) -> bool {
        self.forms.contains(&form)
    }

    fn value(&self, field: Field) -> Option<String> {
        self.values.get(&field).cloned()
    }

    fn set_value(&mut self, field: Field, value: &str) {
        if let Some(current) = self.values.get_mut(&field) {
            *current = value.to_string();
        }
    }

    fn is_checked(&self, checkbox: Checkbox) -> Option<bool> {
        self.checkboxes.get(&checkbox).copied()
    }

    fn set_checked(&mut self, checkbox: Checkbox, checked: bool) {
        if let Some(current) = self.checkboxes.get_mut(&checkbox) {
            *current = checked;
        }
    }

    fn attribute(&self, target: Target, name: &str) -> Option<String> {
        self.elements.get(&target)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&target) {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn add_class(&mut self, target: Target, class: &str) {
        if let Some(element) = self.elements.get_mut(&target) {
            element.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, target: Target, class: &str) {
        if let Some(element) = self.elements.get_mut(&target) {
            element.classes.remove(class);
        }
    }

    fn has_class(&self, target: Target, class: &str) -> bool {
        self.elements
            .get(&target)
            .is_some_and(|element| element.classes.contains(class))
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&target) {
            element
                .styles
                .insert(property.to_string(), value.to_string());
        }
    }

    fn content(&self, target: Target) -> Option<String> {
        self.elements.get(&target).map(|element| element.content.clone())
    }

    fn set_content(&mut self, target: Target, content: &str) {
        if let Some(element) = self.elements.get_mut(&target) {
            element.content = content.to_string();
            element.busy = false;
        }
    }

    fn set_busy(&mut self, target: Target, label: Option<&str>) {
        if let Some(element) = self.elements.get_mut(&target) {
            element.content = match label {
                Some(label) => format!("{SPINNER} {label}"),
                None => SPINNER.to_string(),
            };
            element.busy = true;
        }
    }

    fn set_disabled(&mut self, target: Target, disabled: bool) {
        if let Some(element) = self.elements.get_mut(&target) {
            element.disabled = disabled;
        }
    }

    fn find_annotation(&self, field: Field, kind: AnnotationKind) -> Option<MemoryNode> {
        self.annotations(field, kind)
            .next()
            .map(|annotation| MemoryNode {
                field,
                id: annotation.id,
            })
    }

    fn create_annotation(&mut self, field: Field, kind: AnnotationKind) -> Option<MemoryNode> {
        let group = self.groups.get_mut(&field)?;
        let id = self.next_node;
        self.next_node += 1;
        group.push(Annotation {
            id,
            kind,
            text: String::new(),
            meter: None,
        });
        Some(MemoryNode { field, id })
    }

    fn write_annotation(&mut self, node: &MemoryNode, content: AnnotationContent<'_>) {
        let Some(annotation) = self.annotation_mut(node) else {
            return;
        };
        match content {
            AnnotationContent::Error(message) => {
                annotation.text = message.to_string();
            }
            AnnotationContent::Strength(meter) => {
                annotation.text = meter.label.to_string();
                annotation.meter = Some(*meter);
            }
        }
    }

    fn remove_annotation(&mut self, node: MemoryNode) {
        if let Some(group) = self.groups.get_mut(&node.field) {
            group.retain(|annotation| annotation.id != node.id);
        }
    }
}

/// Records alerts and navigations. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    alerts: Rc<RefCell<Vec<String>>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl MemoryHost {
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Host for MemoryHost {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, target: &str) {
        self.navigations.borrow_mut().push(target.to_string());
    }
}

/// Key-value store that outlives any one controller. Clones share entries, so a
/// clone handed to a second controller behaves like a reloaded page.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    /// A store whose every operation fails, like storage disabled by the browser.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), Error> {
        if self.unavailable {
            Err(Error::Storage("storage disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.check()?;
        Ok(self.peek(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
