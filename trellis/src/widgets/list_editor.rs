//! List editor: display a list of items and, optionally, manage it.
//!
//! Three management modes:
//!
//! - **display only**: rows of labelled values
//! - **server side**: list actions (fixed urls) and item actions (per-item
//!   urls, optionally conditional) rendered as links
//! - **client side**: hidden inputs that bind the whole collection on post,
//!   an editor panel, and a row template the client script clones when an
//!   item is added
//!
//! ```text
//! div.list-editor-for
//!   div.list-editor                (client side only)
//!   div.list-data
//!     div.list-action_container    (when there are list actions)
//!     div.list-data-row            one per item
//! ```

use std::fmt;

use crate::collection::hidden_indexer_element;
use crate::context::Helper;
use crate::element::{Attributes, Element, Html, html_attributes};
use crate::error::{Error, Result, require_non_empty};
use crate::inputs::display_text;
use crate::models::SelectItem;
use crate::tracing_macros::debug;

use super::button;

/// Index used in the names of the client-side row template.
pub const TEMPLATE_INDEX: &str = "_template_index_";

type Getter<'a, T> = Box<dyn Fn(&T) -> String + 'a>;
type Condition<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type RowAttributes<'a, T> = Box<dyn Fn(&T) -> Attributes + 'a>;

/// Input used for a field in the client-side editor panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorKind {
    #[default]
    TextBox,
    Select(Vec<SelectItem>),
    Hidden,
}

/// One column of the list.
pub struct Field<'a, T> {
    name: String,
    value: Getter<'a, T>,
    label: Option<String>,
    without_label: bool,
    caption: bool,
    image: bool,
    condition: Option<Condition<'a, T>>,
    editor: EditorKind,
}

impl<'a, T> Field<'a, T> {
    pub fn with_label(&mut self, label: &str) -> Result<&mut Self> {
        require_non_empty(label, "label")?;
        self.label = Some(label.to_string());
        Ok(self)
    }

    pub fn without_label(&mut self) -> &mut Self {
        self.without_label = true;
        self
    }

    /// Style the row as the item's caption.
    pub fn as_caption(&mut self) -> &mut Self {
        self.caption = true;
        self
    }

    /// Render the value as the `src` of an image.
    pub fn as_image(&mut self) -> &mut Self {
        self.image = true;
        self
    }

    /// Only render the field for items matching `condition`. Ignored when
    /// the list is managed at client side, where every field must post back.
    pub fn when(&mut self, condition: impl Fn(&T) -> bool + 'a) -> &mut Self {
        self.condition = Some(Box::new(condition));
        self
    }

    /// Edit the field with a `<select>` over `items`.
    pub fn as_select(&mut self, items: Vec<SelectItem>) -> Result<&mut Self> {
        if items.is_empty() {
            return Err(Error::invalid_argument("items"));
        }
        self.editor = EditorKind::Select(items);
        Ok(self)
    }

    /// Only bind the field through a hidden input.
    pub fn as_hidden(&mut self) -> &mut Self {
        self.editor = EditorKind::Hidden;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured label, else the last segment of the field name.
    pub fn label(&self) -> &str {
        match &self.label {
            Some(label) => label.as_str(),
            None => self.name.rsplit('.').next().unwrap_or(&self.name),
        }
    }

    fn should_render(&self, item: &T) -> bool {
        self.condition.as_ref().is_none_or(|condition| condition(item))
    }

    fn value_of(&self, item: Option<&T>) -> String {
        item.map(|item| (self.value)(item)).unwrap_or_default()
    }
}

impl<T> fmt::Debug for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("without_label", &self.without_label)
            .field("caption", &self.caption)
            .field("image", &self.image)
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}

/// A link acting on the whole list, such as "create".
#[derive(Debug, Clone)]
pub struct ListAction {
    name: String,
    label: Option<String>,
    attributes: Attributes,
    url: Option<String>,
}

impl ListAction {
    pub fn with_label(&mut self, label: &str) -> Result<&mut Self> {
        require_non_empty(label, "label")?;
        self.label = Some(label.to_string());
        Ok(self)
    }

    pub fn with_attributes(&mut self, attributes: Attributes) -> &mut Self {
        self.attributes = attributes;
        self
    }

    pub fn with_url(&mut self, url: &str) -> Result<&mut Self> {
        require_non_empty(url, "url")?;
        self.url = Some(url.to_string());
        Ok(self)
    }

    fn link(&self) -> Result<Element> {
        let url = self.url.as_deref().ok_or_else(|| Error::MissingUrlGenerator {
            target: format!("list action `{}`", self.name),
        })?;
        action_link(&self.name, self.label.as_deref(), &self.attributes, url)
    }
}

/// A link acting on one item, such as "edit" or "delete".
pub struct ItemAction<'a, T> {
    name: String,
    label: Option<String>,
    attributes: Attributes,
    url: Option<Getter<'a, T>>,
    condition: Option<Condition<'a, T>>,
}

impl<'a, T> ItemAction<'a, T> {
    pub fn with_label(&mut self, label: &str) -> Result<&mut Self> {
        require_non_empty(label, "label")?;
        self.label = Some(label.to_string());
        Ok(self)
    }

    pub fn with_attributes(&mut self, attributes: Attributes) -> &mut Self {
        self.attributes = attributes;
        self
    }

    pub fn with_url(&mut self, url: impl Fn(&T) -> String + 'a) -> &mut Self {
        self.url = Some(Box::new(url));
        self
    }

    /// Only offer the action for items matching `condition`.
    pub fn when(&mut self, condition: impl Fn(&T) -> bool + 'a) -> &mut Self {
        self.condition = Some(Box::new(condition));
        self
    }

    fn link(&self, item: &T) -> Result<Option<Element>> {
        let url = self.url.as_ref().ok_or_else(|| Error::MissingUrlGenerator {
            target: format!("item action `{}`", self.name),
        })?;
        if self.condition.as_ref().is_some_and(|condition| !condition(item)) {
            return Ok(None);
        }
        action_link(&self.name, self.label.as_deref(), &self.attributes, &url(item)).map(Some)
    }
}

impl<T> fmt::Debug for ItemAction<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemAction")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// `a.list-data-action-link__{name}`
fn action_link(
    name: &str,
    label: Option<&str>,
    attributes: &Attributes,
    url: &str,
) -> Result<Element> {
    let mut link = Element::new("a")?;
    link.add_class(&format!("list-data-action-link__{name}"))?
        .merge_attributes(attributes)?
        .merge_attribute("href", url)?
        .set_inner_text(label.unwrap_or(name))?;
    Ok(link)
}

/// Actions of a list managed at server side.
#[derive(Debug)]
pub struct ServerSide<'a, T> {
    list_actions: Vec<ListAction>,
    item_actions: Vec<ItemAction<'a, T>>,
}

impl<'a, T> ServerSide<'a, T> {
    pub fn add_list_action(&mut self, name: &str) -> Result<&mut ListAction> {
        require_non_empty(name, "name")?;
        self.list_actions.push(ListAction {
            name: name.to_string(),
            label: None,
            attributes: Attributes::new(),
            url: None,
        });
        let index = self.list_actions.len() - 1;
        Ok(&mut self.list_actions[index])
    }

    pub fn add_item_action(&mut self, name: &str) -> Result<&mut ItemAction<'a, T>> {
        require_non_empty(name, "name")?;
        self.item_actions.push(ItemAction {
            name: name.to_string(),
            label: None,
            attributes: Attributes::new(),
            url: None,
            condition: None,
        });
        let index = self.item_actions.len() - 1;
        Ok(&mut self.item_actions[index])
    }

    fn list_action_container(&self) -> Result<Option<Element>> {
        if self.list_actions.is_empty() {
            return Ok(None);
        }
        let mut container = Element::new("div")?;
        for action in &self.list_actions {
            container.append_child(action.link()?);
        }
        Ok(Some(container))
    }

    fn item_action_container(&self, item: &T) -> Result<Option<Element>> {
        if self.item_actions.is_empty() {
            return Ok(None);
        }
        let mut container = Element::new("div")?;
        container.add_class("list-data-action-container")?;
        for action in &self.item_actions {
            container.append_child(action.link(item)?);
        }
        Ok(Some(container))
    }
}

/// Options of a list managed at client side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSide {
    add: bool,
    edit: bool,
    delete: bool,
    more_info: bool,
    add_label: String,
    edit_label: String,
    delete_label: String,
    more_info_label: String,
    save_label: String,
    cancel_label: String,
    collection_name: Option<String>,
}

impl Default for ClientSide {
    fn default() -> Self {
        Self {
            add: false,
            edit: false,
            delete: false,
            more_info: false,
            add_label: "+ Add new".to_string(),
            edit_label: "Edit".to_string(),
            delete_label: "Delete".to_string(),
            more_info_label: "More info".to_string(),
            save_label: "Save".to_string(),
            cancel_label: "Cancel".to_string(),
            collection_name: None,
        }
    }
}

macro_rules! client_label_setter {
    ($($(#[$meta:meta])* $method:ident => $field:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self, label: &str) -> Result<&mut Self> {
                require_non_empty(label, "label")?;
                self.$field = label.to_string();
                Ok(self)
            }
        )*
    };
}

impl ClientSide {
    pub fn enable_add(&mut self) -> &mut Self {
        self.add = true;
        self
    }

    pub fn enable_edit(&mut self) -> &mut Self {
        self.edit = true;
        self
    }

    pub fn enable_delete(&mut self) -> &mut Self {
        self.delete = true;
        self
    }

    pub fn enable_more_info(&mut self) -> &mut Self {
        self.more_info = true;
        self
    }

    client_label_setter! {
        with_add_button_label => add_label;
        with_edit_button_label => edit_label;
        with_delete_button_label => delete_label;
        with_more_info_button_label => more_info_label;
        /// Label of the editor panel's save button.
        with_save_button_label => save_label;
        /// Label of the editor panel's cancel button.
        with_cancel_button_label => cancel_label;
    }

    /// Name the posted collection binds to. Required before rendering.
    pub fn with_collection_name(&mut self, name: &str) -> Result<&mut Self> {
        require_non_empty(name, "collection_name")?;
        self.collection_name = Some(name.to_string());
        Ok(self)
    }

    fn list_action_container(&self) -> Result<Option<Element>> {
        if !self.add {
            return Ok(None);
        }
        let mut container = Element::new("div")?;
        container.append_child(button("list-data-action-button__add", &self.add_label)?);
        Ok(Some(container))
    }

    fn item_action_container(&self) -> Result<Option<Element>> {
        if !(self.edit || self.delete || self.more_info) {
            return Ok(None);
        }
        let mut container = Element::new("div")?;
        container.add_class("list-data-action-container")?;
        if self.more_info {
            container.append_child(button(
                "list-data-action-button__more-info",
                &self.more_info_label,
            )?);
        }
        if self.edit {
            container.append_child(button("list-data-action-button__edit", &self.edit_label)?);
        }
        if self.delete {
            container.append_child(button(
                "list-data-action-button__delete",
                &self.delete_label,
            )?);
        }
        Ok(Some(container))
    }
}

/// How the list is managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Management {
    #[default]
    DisplayOnly,
    ServerSide,
    ClientSide,
}

/// Builder returned by [`Helper::list_editor`].
pub struct ListEditor<'a, T> {
    helper: Helper<'a>,
    items: &'a [T],
    fields: Vec<Field<'a, T>>,
    row_attributes: Attributes,
    row_attributes_for: Option<RowAttributes<'a, T>>,
    management: Management,
    server: ServerSide<'a, T>,
    client: ClientSide,
}

impl<'c> Helper<'c> {
    /// Start a list editor over `items`.
    pub fn list_editor<'a, T>(&self, items: &'a [T]) -> ListEditor<'a, T>
    where
        'c: 'a,
    {
        ListEditor {
            helper: self.clone(),
            items,
            fields: Vec::new(),
            row_attributes: Attributes::new(),
            row_attributes_for: None,
            management: Management::default(),
            server: ServerSide {
                list_actions: Vec::new(),
                item_actions: Vec::new(),
            },
            client: ClientSide::default(),
        }
    }
}

impl<'a, T> ListEditor<'a, T> {
    /// Add a field named `name` (used for labels and input names) whose
    /// display value is produced by `value`.
    pub fn field(
        &mut self,
        name: &str,
        value: impl Fn(&T) -> String + 'a,
    ) -> Result<&mut Field<'a, T>> {
        require_non_empty(name, "name")?;
        self.fields.push(Field {
            name: name.to_string(),
            value: Box::new(value),
            label: None,
            without_label: false,
            caption: false,
            image: false,
            condition: None,
            editor: EditorKind::default(),
        });
        let index = self.fields.len() - 1;
        Ok(&mut self.fields[index])
    }

    /// Attributes of every data row.
    pub fn with_data_row_attributes(&mut self, attributes: Attributes) -> &mut Self {
        self.row_attributes = attributes;
        self
    }

    /// Attributes of each data row, computed from its item. The row
    /// template falls back to the fixed attributes.
    pub fn with_data_row_attributes_for(
        &mut self,
        attributes: impl Fn(&T) -> Attributes + 'a,
    ) -> &mut Self {
        self.row_attributes_for = Some(Box::new(attributes));
        self
    }

    pub fn manage_at_server_side(&mut self) -> &mut ServerSide<'a, T> {
        self.management = Management::ServerSide;
        &mut self.server
    }

    pub fn manage_at_client_side(&mut self) -> &mut ClientSide {
        self.management = Management::ClientSide;
        &mut self.client
    }

    pub fn management(&self) -> Management {
        self.management
    }

    /// Render the list.
    ///
    /// Fails with [`Error::MissingCollectionName`] when managed at client
    /// side without a collection name.
    pub fn render(&self, attributes: &Attributes) -> Result<Html> {
        let collection = match self.management {
            Management::ClientSide => Some(
                self.client
                    .collection_name
                    .as_deref()
                    .ok_or(Error::MissingCollectionName)?,
            ),
            _ => None,
        };
        debug!(
            management = ?self.management,
            items = self.items.len(),
            fields = self.fields.len(),
            "rendering list editor"
        );

        let mut list_editor = Element::new("div")?;
        list_editor
            .merge_attributes(attributes)?
            .add_class("list-editor-for")?;

        // The editor panel goes first so its inputs take the validation
        // attributes rather than the hidden inputs of the rows.
        if let Some(collection) = collection {
            list_editor.append_child(self.editor_panel(collection)?);
        }

        let mut data = Element::new("div")?;
        data.add_class("list-data")?;

        let list_actions = match self.management {
            Management::DisplayOnly => None,
            Management::ServerSide => self.server.list_action_container()?,
            Management::ClientSide => self.client.list_action_container()?,
        };
        if let Some(mut list_actions) = list_actions {
            list_actions.add_class("list-action_container")?;
            data.append_child(list_actions);
        }

        for item in self.items {
            let row = match collection {
                Some(collection) => {
                    let scoped = self.helper.collection_item(collection, &Attributes::new())?;
                    let mut row = self.data_row(&scoped.helper, Some(item))?;
                    row.append_child(scoped.hidden_indexer)
                        .append_child(self.client.item_action_container()?);
                    row
                }
                None => {
                    let mut row = self.data_row(&self.helper, Some(item))?;
                    if self.management == Management::ServerSide {
                        row.append_child(self.server.item_action_container(item)?);
                    }
                    row
                }
            };
            data.append_child(row);
        }

        list_editor.append_child(data);
        Ok(list_editor.into_html())
    }

    fn data_row(&self, helper: &Helper<'_>, item: Option<&T>) -> Result<Element> {
        let client_side = self.management == Management::ClientSide;
        let row_attributes = match (item, &self.row_attributes_for) {
            (Some(item), Some(attributes_for)) => attributes_for(item),
            _ => self.row_attributes.clone(),
        };

        let mut row = Element::new("div")?;
        row.merge_attributes(&row_attributes)?
            .add_class("list-data-row")?;

        for field in &self.fields {
            if !client_side && item.is_some_and(|item| !field.should_render(item)) {
                continue;
            }
            let value = field.value_of(item);

            let mut field_row = Element::new("div")?;
            field_row.add_class("list-data-field-row")?;

            if field.editor == EditorKind::Hidden {
                field_row.append_child(helper.hidden(&field.name, &value, &Attributes::new())?);
                row.append_child(field_row);
                continue;
            }

            let mut display = Element::new("div")?;
            display.add_class("list-data-display__field")?;
            if field.image {
                let mut image = Element::new("img")?;
                image.merge_attribute("src", &value)?;
                display.append_child(image);
            } else {
                let mut span = Element::new("span")?;
                span.append_child(display_text(&value));
                display.append_child(span);
            }
            if client_side {
                display.append_child(helper.hidden(&field.name, &value, &Attributes::new())?);
            }

            if field.caption {
                field_row.add_class("list-data-field-row__caption")?;
            }
            if field.image {
                field_row.add_class("list-data-field-row__image")?;
            }
            if !field.without_label {
                let mut label = Element::new("div")?;
                label
                    .add_class("list-data-display__label")?
                    .append_child(helper.label(&field.name, field.label(), &Attributes::new())?);
                field_row.append_child(label);
            }
            field_row.append_child(display);
            row.append_child(field_row);
        }
        Ok(row)
    }

    fn editor_panel(&self, collection: &str) -> Result<Element> {
        let mut panel = Element::new("div")?;
        panel
            .add_class("list-editor")?
            .merge_attribute("hidden", "hidden")?;

        for field in &self.fields {
            let label = match field.editor {
                EditorKind::Hidden => None,
                _ => {
                    let mut label = Element::new("div")?;
                    label.add_class("list-editor-row__label")?.append_child(
                        self.helper
                            .label(&field.name, field.label(), &Attributes::new())?,
                    );
                    Some(label)
                }
            };

            let none = Attributes::new();
            let input = match &field.editor {
                EditorKind::TextBox => self.helper.text_box(&field.name, "", &none)?,
                EditorKind::Select(items) => {
                    self.helper.select(&field.name, items, None, None, &none)?
                }
                EditorKind::Hidden => self.helper.hidden(&field.name, "", &none)?,
            };
            let mut editor = Element::new("div")?;
            editor
                .add_class("list-editor-row__field")?
                .append_child(input);

            let mut editor_row = Element::new("div")?;
            editor_row
                .add_class("list-editor-row")?
                .append_child(label)
                .append_child(editor);
            panel.append_child(editor_row);
        }

        let mut actions = Element::new("div")?;
        actions
            .add_class("list-editor-action-container")?
            .append_child(button("list-editor-action__save", &self.client.save_label)?)
            .append_child(button(
                "list-editor-action__cancel",
                &self.client.cancel_label,
            )?);
        panel.append_child(actions);

        // The template is not a real item: it neither consumes a posted index
        // nor posts back, so its indexer is disabled.
        let template_helper = self
            .helper
            .with_prefix(format!("{collection}[{TEMPLATE_INDEX}]"));
        let mut template_row = self.data_row(&template_helper, None)?;
        template_row
            .append_child(hidden_indexer_element(
                collection,
                TEMPLATE_INDEX,
                &html_attributes([("disabled", "disabled")]),
            )?)
            .append_child(self.client.item_action_container()?);

        let mut template = Element::new("div")?;
        template
            .merge_attribute("hidden", "hidden")?
            .add_class("list-editor-data__template")?
            .append_child(template_row);
        panel.append_child(template);
        Ok(panel)
    }
}

impl<T> fmt::Debug for ListEditor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEditor")
            .field("helper", &self.helper)
            .field("items", &self.items.len())
            .field("fields", &self.fields)
            .field("management", &self.management)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticContext;
    use facet_testhelpers::test;

    struct Person {
        id: u32,
        name: String,
        photo: String,
        active: bool,
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                id: 1,
                name: "Ada".to_string(),
                photo: "/img/ada.png".to_string(),
                active: true,
            },
            Person {
                id: 2,
                name: "Bob <Jr>".to_string(),
                photo: "/img/bob.png".to_string(),
                active: false,
            },
        ]
    }

    #[test]
    fn test_display_only() {
        let context = StaticContext::new();
        let helper = Helper::new(&context);
        let people = people();
        let mut editor = helper.list_editor(&people[..1]);
        editor
            .field("Name", |p: &Person| p.name.clone())
            .unwrap()
            .as_caption();
        editor
            .field("Photo", |p: &Person| p.photo.clone())
            .unwrap()
            .as_image()
            .without_label();
        editor.with_data_row_attributes(html_attributes([("data_kind", "person")]));

        let html = editor.render(&Attributes::new()).unwrap();
        assert_eq!(
            html.as_str(),
            concat!(
                r#"<div class="list-editor-for"><div class="list-data">"#,
                r#"<div data-kind="person" class="list-data-row">"#,
                r#"<div class="list-data-field-row list-data-field-row__caption">"#,
                r#"<div class="list-data-display__label"><label for="Name">Name</label></div>"#,
                r#"<div class="list-data-display__field"><span>Ada</span></div>"#,
                "</div>",
                r#"<div class="list-data-field-row list-data-field-row__image">"#,
                r#"<div class="list-data-display__field"><img src="/img/ada.png"></img></div>"#,
                "</div>",
                "</div>",
                "</div></div>"
            )
        );
    }

    #[test]
    fn test_server_side_actions() {
        let context = StaticContext::new();
        let helper = Helper::new(&context);
        let people = people();
        let mut editor = helper.list_editor(&people);
        editor
            .field("Name", |p: &Person| p.name.clone())
            .unwrap()
            .with_label("Full name")
            .unwrap();
        editor
            .field("Active", |p: &Person| p.active.to_string())
            .unwrap()
            .when(|p: &Person| p.active);
        editor.with_data_row_attributes_for(|p: &Person| {
            html_attributes([("data_id", p.id.to_string())])
        });
        let server = editor.manage_at_server_side();
        server
            .add_list_action("create")
            .unwrap()
            .with_url("/people/create")
            .unwrap()
            .with_label("New")
            .unwrap();
        server
            .add_item_action("delete")
            .unwrap()
            .with_url(|p: &Person| format!("/people/delete/{}", p.id))
            .when(|p: &Person| !p.active);

        let html = editor.render(&Attributes::new()).unwrap();
        let html = html.as_str();

        assert!(html.contains(concat!(
            r#"<div class="list-data">"#,
            r#"<div class="list-action_container">"#,
            r#"<a class="list-data-action-link__create" href="/people/create">New</a></div>"#
        )));
        assert!(html.contains(r#"<div data-id="1" class="list-data-row">"#));
        assert!(html.contains(r#"<label for="Name">Full name</label>"#));
        assert!(html.contains(r#"<span>Bob &lt;Jr&gt;</span>"#));
        assert_eq!(html.matches(r#"<label for="Active">"#).count(), 1);
        assert_eq!(html.matches("list-data-action-container").count(), 2);
        assert_eq!(html.matches("list-data-action-link__delete").count(), 1);
        assert!(html.contains(
            r#"<a class="list-data-action-link__delete" href="/people/delete/2">delete</a>"#
        ));
        assert!(!html.contains("type=\"hidden\""));
    }

    #[test]
    fn test_server_side_missing_url() {
        let context = StaticContext::new();
        let helper = Helper::new(&context);
        let people = people();
        let mut editor = helper.list_editor(&people);
        editor.manage_at_server_side().add_item_action("edit").unwrap();
        assert_eq!(
            editor.render(&Attributes::new()),
            Err(Error::MissingUrlGenerator {
                target: "item action `edit`".to_string()
            })
        );
    }

    #[test]
    fn test_client_side_requires_collection_name() {
        let context = StaticContext::new();
        let helper = Helper::new(&context);
        let people = people();
        let mut editor = helper.list_editor(&people);
        editor.manage_at_client_side().enable_add();
        assert_eq!(
            editor.render(&Attributes::new()),
            Err(Error::MissingCollectionName)
        );
    }

    #[test]
    fn test_client_side() {
        let context = StaticContext::new()
            .with_form_value("People.index", "first")
            .with_validation("Name", html_attributes([("data_val", "true")]));
        let helper = Helper::new(&context);
        let people = people();
        let mut editor = helper.list_editor(&people);
        editor.field("Id", |p: &Person| p.id.to_string()).unwrap().as_hidden();
        editor.field("Name", |p: &Person| p.name.clone()).unwrap();
        editor
            .manage_at_client_side()
            .with_collection_name("People")
            .unwrap()
            .enable_add()
            .enable_edit()
            .enable_delete()
            .with_save_button_label("Apply")
            .unwrap();

        let html = editor.render(&Attributes::new()).unwrap();
        let html = html.as_str();

        assert!(html.starts_with(concat!(
            r#"<div class="list-editor-for">"#,
            r#"<div class="list-editor" hidden="hidden">"#,
            r#"<div class="list-editor-row"><div class="list-editor-row__field">"#,
            r#"<input name="Id" id="Id" type="hidden" value=""></input></div></div>"#,
            r#"<div class="list-editor-row">"#,
            r#"<div class="list-editor-row__label"><label for="Name">Name</label></div>"#,
            r#"<div class="list-editor-row__field"><input name="Name" id="Name" type="text" value="" data-val="true"></input></div>"#,
            "</div>",
            r#"<div class="list-editor-action-container">"#,
            r#"<button type="button" class="list-editor-action__save">Apply</button>"#,
            r#"<button type="button" class="list-editor-action__cancel">Cancel</button>"#,
            "</div>",
            r#"<div hidden="hidden" class="list-editor-data__template">"#,
        )));
        assert_eq!(html.matches(r#"data-val="true""#).count(), 1);

        // row template
        assert!(html.contains(
            r#"<input name="People[_template_index_].Name" id="People__template_index___Name" type="hidden" value=""></input>"#
        ));
        assert!(html.contains(
            r#"<input name="People.index" type="hidden" value="_template_index_" autocomplete="off" disabled="disabled"></input>"#
        ));

        // first row reuses the posted index
        assert!(html.contains(
            r#"<input name="People[first].Id" id="People_first__Id" type="hidden" value="1"></input>"#
        ));
        assert!(html.contains(
            r#"<input name="People.index" type="hidden" value="first" autocomplete="off"></input>"#
        ));
        assert!(html.contains(concat!(
            r#"<div class="list-data-action-container">"#,
            r#"<button type="button" class="list-data-action-button__edit">Edit</button>"#,
            r#"<button type="button" class="list-data-action-button__delete">Delete</button>"#,
            "</div>"
        )));
        assert!(html.contains(concat!(
            r#"<div class="list-action_container">"#,
            r#"<button type="button" class="list-data-action-button__add">+ Add new</button></div>"#
        )));
        assert_eq!(html.matches(r#"<div class="list-data-row">"#).count(), 3);
    }
}
