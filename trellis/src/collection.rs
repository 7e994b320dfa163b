//! Binding of collections of objects.
//!
//! Every item of a posted collection carries a hidden `{collection}.index`
//! input next to its fields, which are prefixed with `{collection}[{index}]`.
//! Indices posted back with a request are reused in order so that re-rendered
//! items keep their names; new items get a fresh UUID.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::context::Helper;
use crate::element::{Attributes, Element, Html};
use crate::error::{Error, Result};
use crate::tracing_macros::trace;

static COLLECTION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<name>.*)\[(?<index>.*)\]$").expect("collection prefix pattern is valid")
});

/// `<input name="{collection}.index" type="hidden" value="{index}" autocomplete="off">`
pub fn hidden_indexer(collection: &str, index: &str, attributes: &Attributes) -> Result<Html> {
    Ok(hidden_indexer_element(collection, index, attributes)?.into_html())
}

pub(crate) fn hidden_indexer_element(
    collection: &str,
    index: &str,
    attributes: &Attributes,
) -> Result<Element> {
    let mut input = Element::new("input")?;
    input
        .set_attribute("name", &format!("{collection}.index"), true)?
        .set_attribute("type", "hidden", true)?
        .set_attribute("value", index, true)?
        .set_attribute("autocomplete", "off", true)?
        .merge_attributes(attributes)?;
    Ok(input)
}

/// Split a `{collection}[{index}]` prefix into its parts.
pub fn parse_collection_prefix(prefix: &str) -> Option<(&str, &str)> {
    let captures = COLLECTION_PREFIX.captures(prefix)?;
    let name = captures.name("name")?.as_str();
    let index = captures.name("index")?.as_str();
    Some((name, index))
}

/// One item of a collection being rendered.
#[derive(Debug, Clone)]
pub struct CollectionItem<'c> {
    /// Index used in the prefix and in the hidden indexer.
    pub index: String,
    /// Helper scoped to `{collection}[{index}]`.
    pub helper: Helper<'c>,
    /// The hidden indexer to render with the item's fields.
    pub hidden_indexer: Html,
}

impl<'c> Helper<'c> {
    /// Hidden indexer for the item the current prefix points at.
    ///
    /// Fails with [`Error::MissingCollectionName`] when the prefix is not of
    /// the `{collection}[{index}]` form.
    pub fn hidden_indexer_for_model(&self, attributes: &Attributes) -> Result<Html> {
        let (collection, index) =
            parse_collection_prefix(self.prefix()).ok_or(Error::MissingCollectionName)?;
        hidden_indexer(collection, index, attributes)
    }

    /// Start rendering the next item of `collection`.
    pub fn begin_collection_item(&self, collection: &str) -> Result<CollectionItem<'c>> {
        self.collection_item(collection, &Attributes::new())
    }

    pub(crate) fn collection_item(
        &self,
        collection: &str,
        indexer_attributes: &Attributes,
    ) -> Result<CollectionItem<'c>> {
        if collection.is_empty() {
            return Err(Error::MissingCollectionName);
        }
        let index = self.next_collection_index(collection);
        let hidden_indexer = hidden_indexer(collection, &index, indexer_attributes)?;
        let helper = self.with_prefix(format!("{collection}[{index}]"));
        Ok(CollectionItem {
            index,
            helper,
            hidden_indexer,
        })
    }

    fn next_collection_index(&self, collection: &str) -> String {
        let mut indices = self.indices.borrow_mut();
        let queue = indices.entry(collection.to_owned()).or_insert_with(|| {
            self.context()
                .form_value(&format!("{collection}.index"))
                .map(|posted| {
                    posted
                        .split(',')
                        .map(str::trim)
                        .filter(|index| !index.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default()
        });
        match queue.pop_front() {
            Some(index) => {
                trace!(collection, %index, "reusing posted collection index");
                index
            }
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticContext;
    use crate::element::html_attributes;
    use facet_testhelpers::test;

    #[test]
    fn test_hidden_indexer() {
        let html = hidden_indexer("Lines", "7", &html_attributes([("disabled", "disabled")]))
            .unwrap();
        assert_eq!(
            html.as_str(),
            r#"<input name="Lines.index" type="hidden" value="7" autocomplete="off" disabled="disabled"></input>"#
        );
    }

    #[test]
    fn test_parse_collection_prefix() {
        assert_eq!(
            parse_collection_prefix("Order.Lines[abc]"),
            Some(("Order.Lines", "abc"))
        );
        assert_eq!(parse_collection_prefix("Order"), None);
    }

    #[test]
    fn test_hidden_indexer_for_model() {
        let context = StaticContext::new();
        let helper = Helper::new(&context).with_prefix("Lines[3]");
        let html = helper.hidden_indexer_for_model(&Attributes::new()).unwrap();
        assert!(html.as_str().contains(r#"name="Lines.index""#));
        assert!(html.as_str().contains(r#"value="3""#));

        let unscoped = Helper::new(&context);
        assert_eq!(
            unscoped.hidden_indexer_for_model(&Attributes::new()),
            Err(Error::MissingCollectionName)
        );
    }

    #[test]
    fn test_posted_indices_are_reused_in_order() {
        let context = StaticContext::new().with_form_value("Lines.index", "a,,b");
        let helper = Helper::new(&context);
        let first = helper.begin_collection_item("Lines").unwrap();
        let second = helper.begin_collection_item("Lines").unwrap();
        let third = helper.begin_collection_item("Lines").unwrap();

        assert_eq!(first.index, "a");
        assert_eq!(first.helper.prefix(), "Lines[a]");
        assert_eq!(first.helper.full_name("Name"), "Lines[a].Name");
        assert_eq!(second.index, "b");
        assert!(Uuid::parse_str(&third.index).is_ok());
    }

    #[test]
    fn test_scoped_helpers_share_the_queue() {
        let context = StaticContext::new().with_form_value("Lines.index", "a,b");
        let helper = Helper::new(&context);
        let first = helper.begin_collection_item("Lines").unwrap();
        let nested = first.helper.with_prefix("");
        assert_eq!(nested.begin_collection_item("Lines").unwrap().index, "b");
    }

    #[test]
    fn test_empty_collection_name_rejected() {
        let context = StaticContext::new();
        let helper = Helper::new(&context);
        assert!(matches!(
            helper.begin_collection_item(""),
            Err(Error::MissingCollectionName)
        ));
    }
}
