//! Composite widgets.
//!
//! Every widget is bound to a field through a [`Helper`](crate::Helper) and
//! closes with a `<span class="{widget}__error">` holding the field's
//! validation message, which the client script toggles.

mod combo_date;
mod dropdown;
mod list_editor;
mod list_selector;
mod sorting;
mod tree_view;

pub use combo_date::ComboDateOptions;
pub use list_editor::{
    ClientSide, EditorKind, Field, ItemAction, ListAction, ListEditor, Management, ServerSide,
};
pub use sorting::{SortingControl, SortingField};
pub use tree_view::TreeView;

use crate::element::{Attributes, Element, Html, html_attributes};
use crate::error::Result;

/// `<i class="default-icons">{name}</i>`, a ligature icon.
pub(crate) fn icon(name: &str) -> Result<Element> {
    let mut icon = Element::new("i")?;
    icon.add_class("default-icons")?.set_inner_html(name);
    Ok(icon)
}

/// `<span class="{class}">{message}</span>`
pub(crate) fn error_span(class: &str, message: Option<Html>) -> Result<Element> {
    let mut span = Element::new("span")?;
    span.add_class(class)?.append_child(message);
    Ok(span)
}

/// `<span>{text}</span>` with the text escaped; empty text leaves it empty.
pub(crate) fn text_span(text: &str) -> Result<Element> {
    let mut span = Element::new("span")?;
    if !text.is_empty() {
        span.set_inner_text(text)?;
    }
    Ok(span)
}

/// `<button type="button" class="{class}">{label}</button>`
pub(crate) fn button(class: &str, label: &str) -> Result<Element> {
    let mut button = Element::new("button")?;
    button
        .set_attribute("type", "button", true)?
        .add_class(class)?
        .set_inner_text(label)?;
    Ok(button)
}

pub(crate) fn hidden_attribute() -> Attributes {
    html_attributes([("hidden", "hidden")])
}
