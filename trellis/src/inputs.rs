//! Primitive form controls.
//!
//! Each builder qualifies the field with the helper's prefix, derives an id
//! from the qualified name, merges the caller's attributes (without
//! overwriting what is already set) and finally the field's validation
//! attributes. The result is an [`Element`], so widgets can keep decorating it.

use crate::context::Helper;
use crate::element::{Attributes, Element, Html};
use crate::error::{Result, require_non_empty};
use crate::escape::escape_text;
use crate::models::SelectItem;

/// Turn a field name into a valid HTML id.
///
/// Characters other than ASCII letters, digits, `-`, `_` and `:` become `_`
/// (so `Order.Lines[0]` becomes `Order_Lines_0_`). Returns `None` when the
/// name is empty or does not start with a letter.
pub fn sanitized_id(name: &str) -> Option<String> {
    let first = name.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    Some(
        name.chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | ':' => c,
                _ => '_',
            })
            .collect(),
    )
}

/// Escaped text for read-only display.
pub fn display_text(value: &str) -> Html {
    Html::new(escape_text(value))
}

impl Helper<'_> {
    /// `<input type="radio">` for `field`, checked when `checked` is set.
    pub fn radio_button(
        &self,
        field: &str,
        value: &str,
        checked: bool,
        attributes: &Attributes,
    ) -> Result<Element> {
        self.input("radio", field, Some(value), checked, attributes)
    }

    /// `<input type="checkbox">` for `field` posting `value` when checked.
    pub fn checkbox(
        &self,
        field: &str,
        value: &str,
        checked: bool,
        attributes: &Attributes,
    ) -> Result<Element> {
        self.input("checkbox", field, Some(value), checked, attributes)
    }

    pub fn hidden(&self, field: &str, value: &str, attributes: &Attributes) -> Result<Element> {
        self.input("hidden", field, Some(value), false, attributes)
    }

    pub fn text_box(&self, field: &str, value: &str, attributes: &Attributes) -> Result<Element> {
        self.input("text", field, Some(value), false, attributes)
    }

    /// A single-choice `<select>`.
    ///
    /// The selected option is the first item flagged `selected`, else the
    /// one whose value equals `value`. `option_label` adds a leading option
    /// with an empty value.
    pub fn select(
        &self,
        field: &str,
        items: &[SelectItem],
        value: Option<&str>,
        option_label: Option<&str>,
        attributes: &Attributes,
    ) -> Result<Element> {
        let full_name = self.full_name(field);
        require_non_empty(&full_name, "field")?;

        let mut select = Element::new("select")?;
        self.name_and_id(&mut select, &full_name, attributes)?;
        select.merge_attributes(attributes)?;
        select.merge_attributes(&self.validation_attributes(&full_name))?;

        if let Some(label) = option_label {
            let mut option = Element::new("option")?;
            option.set_attribute("value", "", true)?;
            if !label.is_empty() {
                option.set_inner_text(label)?;
            }
            select.append_child(option);
        }

        let selected = items
            .iter()
            .find(|item| item.selected)
            .map(|item| item.value.as_str())
            .or(value);
        for item in items {
            let mut option = Element::new("option")?;
            option.set_attribute("value", &item.value, true)?;
            if selected.is_some_and(|v| item.value.eq_ignore_ascii_case(v)) {
                option.set_attribute("selected", "selected", true)?;
            }
            if !item.text.is_empty() {
                option.set_inner_text(&item.text)?;
            }
            select.append_child(option);
        }
        Ok(select)
    }

    /// `<label for="...">` pointing at the id derived from `field`.
    pub fn label(&self, field: &str, text: &str, attributes: &Attributes) -> Result<Element> {
        let full_name = self.full_name(field);
        let mut label = Element::new("label")?;
        if let Some(id) = sanitized_id(&full_name) {
            label.set_attribute("for", &id, true)?;
        }
        label.merge_attributes(attributes)?;
        if !text.is_empty() {
            label.set_inner_text(text)?;
        }
        Ok(label)
    }

    fn input(
        &self,
        input_type: &str,
        field: &str,
        value: Option<&str>,
        checked: bool,
        attributes: &Attributes,
    ) -> Result<Element> {
        let full_name = self.full_name(field);
        require_non_empty(&full_name, "field")?;

        let mut input = Element::new("input")?;
        self.name_and_id(&mut input, &full_name, attributes)?;
        input.set_attribute("type", input_type, true)?;
        if let Some(value) = value {
            input.set_attribute("value", value, true)?;
        }
        if checked {
            input.set_attribute("checked", "checked", true)?;
        }
        input.merge_attributes(attributes)?;
        input.merge_attributes(&self.validation_attributes(&full_name))?;
        Ok(input)
    }

    /// `name` is always the qualified name; a caller-supplied `id` wins over
    /// the derived one.
    fn name_and_id(
        &self,
        element: &mut Element,
        full_name: &str,
        attributes: &Attributes,
    ) -> Result<()> {
        element.set_attribute("name", full_name, true)?;
        let id = attributes
            .get("id")
            .cloned()
            .or_else(|| sanitized_id(full_name));
        if let Some(id) = id {
            element.set_attribute("id", &id, true)?;
        }
        Ok(())
    }
}
