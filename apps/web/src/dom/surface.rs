//! `FormSurface` over the live document. Elements are looked up on every call
//! so the controller always sees what the router currently has mounted.

use crate::app_lib::AppError;
use auth_forms::{
    AnnotationContent, AnnotationKind, Checkbox, Field, FormKind, FormSurface, StrengthMeter,
    Target,
};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

const GROUP_SELECTOR: &str = ".form-group";
const TOGGLE_CLASS: &str = "toggle-password";
const CARD_SELECTOR: &str = ".auth-card";
const ERROR_STYLE: &str =
    "color: var(--danger-color); font-size: 0.8rem; margin-top: 5px; animation: slideDown 0.3s ease;";
const STRENGTH_STYLE: &str =
    "margin-top: 5px; font-size: 0.8rem; display: flex; align-items: center; gap: 10px;";
const SPINNER: &str = "<i class=\"fas fa-spinner fa-spin\"></i>";

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// # Errors
    /// Returns [`AppError::Dom`] when there is no window or document.
    pub fn new() -> Result<Self, AppError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::Dom("document is not available".to_string()))?;
        Ok(Self { document })
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn field(&self, field: Field) -> Option<Element> {
        self.by_id(field.dom_id())
    }

    fn group(&self, field: Field) -> Option<Element> {
        self.field(field)?.closest(GROUP_SELECTOR).ok().flatten()
    }

    fn element(&self, target: Target) -> Option<Element> {
        match target {
            Target::Field(field) => self.field(field),
            Target::Group(field) => self.group(field),
            Target::Submit(form) => self
                .by_id(form.dom_id())?
                .query_selector("button[type=\"submit\"]")
                .ok()
                .flatten(),
            Target::PasswordToggle(field) => self
                .field(field)?
                .next_element_sibling()
                .filter(|sibling| sibling.class_list().contains(TOGGLE_CLASS)),
            Target::Social(provider) => self
                .document
                .query_selector(&format!(".social-btn.{}", provider.class()))
                .ok()
                .flatten(),
            Target::Card(index) => {
                let index = u32::try_from(index).ok()?;
                self.document
                    .query_selector_all(CARD_SELECTOR)
                    .ok()?
                    .item(index)?
                    .dyn_into::<Element>()
                    .ok()
            }
        }
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.by_id(id)?.dyn_into::<HtmlInputElement>().ok()
    }
}

fn report(result: Result<(), JsValue>, action: &str) {
    if let Err(err) = result {
        warn!("DOM {action} failed: {err:?}");
    }
}

fn strength_markup(meter: &StrengthMeter) -> String {
    format!(
        "<div class=\"strength-bar\" style=\"width: {width}%; background: {color}; \
         height: 4px; border-radius: 2px; transition: var(--transition);\"></div>\
         <span class=\"strength-text\">{label}</span>",
        width = meter.width_percent,
        color = meter.color,
        label = meter.label,
    )
}

impl FormSurface for DomSurface {
    type Node = Element;

    fn has_form(&self, form: FormKind) -> bool {
        self.by_id(form.dom_id()).is_some()
    }

    fn value(&self, field: Field) -> Option<String> {
        let element = self.field(field)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }

    fn set_value(&mut self, field: Field, value: &str) {
        let Some(element) = self.field(field) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn is_checked(&self, checkbox: Checkbox) -> Option<bool> {
        self.input(checkbox.dom_id()).map(|input| input.checked())
    }

    fn set_checked(&mut self, checkbox: Checkbox, checked: bool) {
        if let Some(input) = self.input(checkbox.dom_id()) {
            input.set_checked(checked);
        }
    }

    fn attribute(&self, target: Target, name: &str) -> Option<String> {
        self.element(target)?.get_attribute(name)
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) {
        if let Some(element) = self.element(target) {
            report(element.set_attribute(name, value), "set_attribute");
        }
    }

    fn add_class(&mut self, target: Target, class: &str) {
        if let Some(element) = self.element(target) {
            report(element.class_list().add_1(class), "add_class");
        }
    }

    fn remove_class(&mut self, target: Target, class: &str) {
        if let Some(element) = self.element(target) {
            report(element.class_list().remove_1(class), "remove_class");
        }
    }

    fn has_class(&self, target: Target, class: &str) -> bool {
        self.element(target)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        if let Some(element) = self.element(target).and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            report(element.style().set_property(property, value), "set_style");
        }
    }

    fn content(&self, target: Target) -> Option<String> {
        self.element(target).map(|element| element.inner_html())
    }

    fn set_content(&mut self, target: Target, content: &str) {
        if let Some(element) = self.element(target) {
            element.set_inner_html(content);
        }
    }

    fn set_busy(&mut self, target: Target, label: Option<&str>) {
        let markup = match label {
            Some(label) => format!("{SPINNER} {label}"),
            None => SPINNER.to_string(),
        };
        self.set_content(target, &markup);
    }

    fn set_disabled(&mut self, target: Target, disabled: bool) {
        let Some(element) = self.element(target) else {
            return;
        };
        if disabled {
            report(element.set_attribute("disabled", ""), "set_disabled");
        } else {
            report(element.remove_attribute("disabled"), "set_disabled");
        }
    }

    fn find_annotation(&self, field: Field, kind: AnnotationKind) -> Option<Element> {
        self.group(field)?
            .query_selector(&format!(".{}", kind.class()))
            .ok()
            .flatten()
    }

    fn create_annotation(&mut self, field: Field, kind: AnnotationKind) -> Option<Element> {
        let group = self.group(field)?;
        let node = self.document.create_element("div").ok()?;
        node.set_class_name(kind.class());
        group.append_child(&node).ok()?;
        Some(node)
    }

    fn write_annotation(&mut self, node: &Element, content: AnnotationContent<'_>) {
        match content {
            AnnotationContent::Error(message) => {
                node.set_text_content(Some(message));
                report(node.set_attribute("style", ERROR_STYLE), "write_annotation");
            }
            AnnotationContent::Strength(meter) => {
                node.set_inner_html(&strength_markup(meter));
                report(node.set_attribute("style", STRENGTH_STYLE), "write_annotation");
            }
        }
    }

    fn remove_annotation(&mut self, node: Element) {
        node.remove();
    }
}
