//! Drop-down button: a styled replacement for `<select>`.
//!
//! ```text
//! div.dropdown-button
//!   div.dropdown-button-container
//!     i.default-icons            keyboard_arrow_down
//!     span.dropdown-button-header
//!   ul.dropdown-menu
//!     li[.selected]              span + hidden radio, one per item
//!   span.dropdown-button__error
//! ```

use crate::context::Helper;
use crate::element::{Attributes, Element, Html};
use crate::error::Result;
use crate::models::SelectItem;
use crate::tracing_macros::trace;

use super::{error_span, hidden_attribute, icon, text_span};

const SELECTED: &str = "selected";

impl Helper<'_> {
    /// Render a drop-down button for `field`.
    ///
    /// The selected item is the first one flagged `selected`, otherwise the
    /// one whose value matches `value` ignoring ASCII case. The header shows
    /// the selected item's text, or `option_label` when nothing is selected.
    /// With `allow_default`, a leading item with an empty value lets the user
    /// clear the selection.
    pub fn drop_down_button(
        &self,
        field: &str,
        value: Option<&str>,
        items: &[SelectItem],
        option_label: &str,
        allow_default: bool,
        attributes: &Attributes,
    ) -> Result<Html> {
        let full_name = self.full_name(field);
        let model_value = value.filter(|v| !v.is_empty());

        let explicit = items
            .iter()
            .find(|item| item.selected)
            .map(|item| item.value.as_str())
            .filter(|v| !v.is_empty());
        let selected_value = explicit.or(model_value);
        let matches_selection = |item: &SelectItem| {
            selected_value.is_some_and(|selected| item.value.eq_ignore_ascii_case(selected))
        };
        trace!(%full_name, ?selected_value, "rendering drop-down button");

        let mut dropdown = Element::new("div")?;
        dropdown.merge_attributes(attributes)?.add_class("dropdown-button")?;

        let header_text = items
            .iter()
            .find(|item| matches_selection(*item))
            .map(|item| item.text.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(option_label);
        let mut header = Element::new("span")?;
        header.add_class("dropdown-button-header")?;
        if !header_text.is_empty() {
            header.set_inner_text(header_text)?;
        }

        let mut container = Element::new("div")?;
        container
            .add_class("dropdown-button-container")?
            .append_child(icon("keyboard_arrow_down")?)
            .append_child(header);
        dropdown.append_child(container);

        let mut menu = Element::new("ul")?;
        menu.add_class("dropdown-menu")?;

        if allow_default {
            let default_item = SelectItem::new(option_label, "");
            let mut item = self.drop_down_menu_item(field, &default_item, false)?;
            if model_value.is_none() {
                item.add_class(SELECTED)?;
            }
            menu.append_child(item);
        }

        // A model value only checks the first matching radio.
        let mut model_match_used = explicit.is_some();
        for item in items {
            let checked = if item.selected {
                true
            } else if !model_match_used && matches_selection(item) {
                model_match_used = true;
                true
            } else {
                false
            };
            let mut menu_item = self.drop_down_menu_item(field, item, checked)?;
            if matches_selection(item) {
                menu_item.add_class(SELECTED)?;
            }
            menu.append_child(menu_item);
        }
        dropdown.append_child(menu);

        dropdown.append_child(error_span(
            "dropdown-button__error",
            self.validation_message(&full_name),
        )?);
        Ok(dropdown.into_html())
    }

    fn drop_down_menu_item(&self, field: &str, item: &SelectItem, checked: bool) -> Result<Element> {
        let mut li = Element::new("li")?;
        li.append_child(text_span(&item.text)?).append_child(self.radio_button(
            field,
            &item.value,
            checked,
            &hidden_attribute(),
        )?);
        Ok(li)
    }
}
