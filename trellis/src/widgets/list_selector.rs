//! List selectors: an always-open list used instead of a drop-down, with
//! hidden radio buttons (single choice) or checkboxes (multiple choice).

use crate::context::Helper;
use crate::element::{Attributes, Element, Html};
use crate::error::Result;
use crate::models::SelectItem;

use super::{error_span, hidden_attribute, icon, text_span};

impl Helper<'_> {
    /// `ul.list-selector-for`: one item can be chosen.
    pub fn list_selector(
        &self,
        field: &str,
        value: Option<&str>,
        items: &[SelectItem],
        attributes: &Attributes,
    ) -> Result<Html> {
        let is_checked = |item: &SelectItem| {
            item.selected
                || value.is_some_and(|v| !v.is_empty() && item.value.eq_ignore_ascii_case(v))
        };
        self.list_selector_with("list-selector-for", field, items, attributes, |item| {
            self.radio_button(field, &item.value, is_checked(item), &hidden_attribute())
        })
    }

    /// `ul.list-multi-selector-for`: any number of items can be chosen.
    pub fn list_multi_selector<S: AsRef<str>>(
        &self,
        field: &str,
        values: &[S],
        items: &[SelectItem],
        attributes: &Attributes,
    ) -> Result<Html> {
        let is_checked = |item: &SelectItem| {
            item.selected || values.iter().any(|v| v.as_ref() == item.value)
        };
        self.list_selector_with("list-multi-selector-for", field, items, attributes, |item| {
            self.checkbox(field, &item.value, is_checked(item), &hidden_attribute())
        })
    }

    fn list_selector_with(
        &self,
        list_class: &str,
        field: &str,
        items: &[SelectItem],
        attributes: &Attributes,
        selector: impl Fn(&SelectItem) -> Result<Element>,
    ) -> Result<Html> {
        let mut list = Element::new("ul")?;
        list.merge_attributes(attributes)?.add_class(list_class)?;

        for item in items {
            let mut content = Element::new("div")?;
            content
                .add_class("content-container")?
                .append_child(icon("keyboard_arrow_right")?)
                .append_child(text_span(&item.text)?)
                .append_child(selector(item)?);

            let mut li = Element::new("li")?;
            li.set_inner_html(content.into_html());
            list.append_child(li);
        }

        let full_name = self.full_name(field);
        list.append_child(error_span(
            &format!("{list_class}__error"),
            self.validation_message(&full_name),
        )?);
        Ok(list.into_html())
    }
}
