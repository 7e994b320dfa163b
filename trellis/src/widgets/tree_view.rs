//! Tree view: pick one node of a hierarchy.
//!
//! Loaded levels are rendered inline. Levels without items render as empty
//! lists that the client fills from `data-tv-source-url` when expanded.

use std::fmt::Display;

use crate::context::Helper;
use crate::element::{Attributes, Element, Html};
use crate::error::{Result, require_non_empty};
use crate::models::{TreeViewItem, TreeViewSource};
use crate::tracing_macros::trace;

use super::{error_span, hidden_attribute, icon, text_span};

const LEVEL_ATTRIBUTE: &str = "data-tv-level";

/// Builder returned by [`Helper::tree_view`].
#[derive(Debug)]
pub struct TreeView<'h, 'c, K> {
    helper: &'h Helper<'c>,
    field: String,
    source: &'h TreeViewSource<K>,
    value: Option<&'h K>,
    source_url: String,
    search_expression: String,
}

impl<'c> Helper<'c> {
    /// Start a tree view for `field` over `source`.
    pub fn tree_view<'h, K>(
        &'h self,
        field: &str,
        source: &'h TreeViewSource<K>,
    ) -> TreeView<'h, 'c, K> {
        TreeView {
            helper: self,
            field: field.to_string(),
            source,
            value: None,
            source_url: String::new(),
            search_expression: String::new(),
        }
    }
}

impl<'h, K> TreeView<'h, '_, K>
where
    K: Display + PartialEq,
{
    /// The currently selected node id.
    pub fn with_value(mut self, value: Option<&'h K>) -> Self {
        self.value = value;
        self
    }

    /// Url the client fetches child levels from.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Expression the client uses to search the tree.
    pub fn with_search_expression(mut self, expression: impl Into<String>) -> Self {
        self.search_expression = expression.into();
        self
    }

    pub fn render(&self, attributes: &Attributes) -> Result<Html> {
        let full_name = self.helper.full_name(&self.field);
        require_non_empty(&full_name, "field")?;
        trace!(%full_name, items = self.source.items.len(), "rendering tree view");

        let mut root = self.list(Some(self.source))?;
        root.add_class("level-0")?
            .add_class("root-list")?
            .merge_attribute(LEVEL_ATTRIBUTE, "0")?;

        let mut tree = Element::new("div")?;
        tree.merge_attributes(attributes)?
            .merge_attribute("data-tv-for", &full_name)?
            .merge_attribute("data-tv-source-url", &self.source_url)?
            .merge_attribute("data-tv-search-exp", &self.search_expression)?
            .add_class("tree-view")?
            .append_child(root)
            .append_child(error_span(
                "tree-view__error",
                self.helper.validation_message(&full_name),
            )?);
        Ok(tree.into_html())
    }

    fn list(&self, source: Option<&TreeViewSource<K>>) -> Result<Element> {
        let mut list = Element::new("ul")?;
        list.add_class("tree-view-list")?;

        let Some(source) = source.filter(|source| !source.is_empty()) else {
            return Ok(list);
        };
        list.add_class("tv-loaded")?;
        for item in &source.items {
            list.append_child(self.list_item(item)?);
        }
        Ok(list)
    }

    fn list_item(&self, item: &TreeViewItem<K>) -> Result<Element> {
        let checked = self.value.is_some_and(|value| *value == item.id);
        let mut content = Element::new("div")?;
        content
            .add_class("content-container")?
            .append_child(icon("keyboard_arrow_right")?)
            .append_child(text_span(&item.value)?)
            .append_child(self.helper.radio_button(
                &self.field,
                &item.id.to_string(),
                checked,
                &hidden_attribute(),
            )?);

        let level = item.level.to_string();
        let mut children = self.list(item.children.as_ref())?;
        children
            .add_class(&format!("level-{level}"))?
            .merge_attribute(LEVEL_ATTRIBUTE, &level)?
            .merge_attribute("hidden", "hidden")?;

        let mut li = Element::new("li")?;
        li.append_child(content)
            .append_child(children)
            .add_class("tree-view-list-item")?;
        Ok(li)
    }
}

#[cfg(test)]
mod tests {
    use crate::context::{Helper, StaticContext};
    use crate::element::Attributes;
    use crate::models::{TreeViewItem, TreeViewSource};
    use facet_testhelpers::test;

    #[test]
    fn test_empty_tree() {
        let context = StaticContext::new().without_client_validation();
        let helper = Helper::new(&context);
        let source = TreeViewSource::<i32>::unloaded();
        let html = helper
            .tree_view("CategoryId", &source)
            .with_source_url("/categories/children")
            .with_search_expression("name")
            .render(&Attributes::new())
            .unwrap();
        assert_eq!(
            html.as_str(),
            concat!(
                r#"<div data-tv-for="CategoryId" data-tv-source-url="/categories/children" data-tv-search-exp="name" class="tree-view">"#,
                r#"<ul class="tree-view-list level-0 root-list" data-tv-level="0"></ul>"#,
                r#"<span class="tree-view__error"></span>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_nested_items() {
        let context = StaticContext::new().without_client_validation();
        let helper = Helper::new(&context);
        let source = TreeViewSource::new(vec![
            TreeViewItem::new(1, 1, "Fruit").with_children(TreeViewSource::new(vec![
                TreeViewItem::new(2, 2, "Apple").with_parent(1),
            ])),
        ]);
        let selected = 2;
        let html = helper
            .tree_view("CategoryId", &source)
            .with_value(Some(&selected))
            .render(&Attributes::new())
            .unwrap();
        let html = html.as_str();

        assert!(html.contains(
            r#"<ul class="tree-view-list tv-loaded level-0 root-list" data-tv-level="0">"#
        ));
        assert!(html.contains(concat!(
            r#"<li class="tree-view-list-item"><div class="content-container">"#,
            r#"<i class="default-icons">keyboard_arrow_right</i><span>Fruit</span>"#,
            r#"<input name="CategoryId" id="CategoryId" type="radio" value="1" hidden="hidden"></input></div>"#,
            r#"<ul class="tree-view-list tv-loaded level-1" data-tv-level="1" hidden="hidden">"#
        )));
        assert!(html.contains(
            r#"<span>Apple</span><input name="CategoryId" id="CategoryId" type="radio" value="2" checked="checked" hidden="hidden"></input>"#
        ));
        assert!(html.contains(
            r#"<ul class="tree-view-list level-2" data-tv-level="2" hidden="hidden"></ul>"#
        ));
    }
}
