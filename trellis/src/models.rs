//! View-model types consumed by the widgets.
//!
//! These are plain data: the host fills them from its own models and hands
//! them to a widget. All of them derive [`Facet`] so they can travel as JSON
//! (tree view children are usually fetched from the source url that way).

use facet::Facet;

use crate::error::{Error, Result};

/// One entry of a drop-down, list selector or `<select>`.
#[derive(Facet, Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectItem {
    /// Text shown to the user.
    pub text: String,
    /// Value posted back when the item is chosen.
    pub value: String,
    /// Explicitly selected, regardless of the bound model value.
    pub selected: bool,
}

impl SelectItem {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// Mark the item as explicitly selected.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// Information needed for paging.
#[derive(Facet, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagingInfo {
    pub items_per_page: u32,
    pub current_page: u32,
    pub item_count: u32,
}

impl PagingInfo {
    /// Number of pages needed to show every item, rounded up.
    ///
    /// Zero when `items_per_page` is zero.
    pub fn total_page_count(&self) -> u32 {
        if self.items_per_page == 0 {
            return 0;
        }
        self.item_count.div_ceil(self.items_per_page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_page_count()
    }
}

/// Order of sorting.
#[derive(Facet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Every order, in the order the sorting control lists them.
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Information about the current sorting.
#[derive(Facet, Debug, Clone, PartialEq, Eq, Default)]
pub struct SortingInfo {
    /// Name of the property the data is sorted by.
    pub property_name: String,
    pub order: SortOrder,
}

impl SortingInfo {
    pub fn new(property_name: impl Into<String>, order: SortOrder) -> Self {
        Self {
            property_name: property_name.into(),
            order,
        }
    }
}

/// Items of one level of a tree view.
///
/// An unloaded source (or one without items) renders as an empty list that
/// the client fills on demand from the tree view's source url.
#[derive(Facet, Debug, Clone, PartialEq)]
pub struct TreeViewSource<K> {
    pub is_loaded: bool,
    pub items: Vec<TreeViewItem<K>>,
}

/// One node of a tree view.
#[derive(Facet, Debug, Clone, PartialEq)]
pub struct TreeViewItem<K> {
    pub id: K,
    pub parent_id: Option<K>,
    /// Depth of the item's children in the hierarchy.
    pub level: u32,
    pub value: String,
    pub children: Option<TreeViewSource<K>>,
}

impl<K> TreeViewSource<K> {
    pub fn new(items: Vec<TreeViewItem<K>>) -> Self {
        Self {
            is_loaded: true,
            items,
        }
    }

    /// A source whose items have not been fetched yet.
    pub fn unloaded() -> Self {
        Self {
            is_loaded: false,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K> TreeViewSource<K>
where
    K: for<'f> Facet<'f>,
{
    /// Serialize to JSON, the shape served behind a tree view's source url.
    pub fn to_json(&self) -> Result<String> {
        facet_json::to_string(self).map_err(|e| Error::Serialization {
            reason: format!("{e:?}"),
        })
    }
}

impl<K> TreeViewItem<K> {
    pub fn new(id: K, level: u32, value: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: None,
            level,
            value: value.into(),
            children: None,
        }
    }

    pub fn with_parent(mut self, parent_id: K) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_children(mut self, children: TreeViewSource<K>) -> Self {
        self.children = Some(children);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_total_page_count_rounds_up() {
        let info = PagingInfo {
            items_per_page: 10,
            current_page: 1,
            item_count: 21,
        };
        assert_eq!(info.total_page_count(), 3);
        assert!(info.has_next_page());
        assert!(!info.has_previous_page());
    }

    #[test]
    fn test_total_page_count_exact_and_empty() {
        let exact = PagingInfo {
            items_per_page: 5,
            current_page: 2,
            item_count: 10,
        };
        assert_eq!(exact.total_page_count(), 2);
        assert!(!exact.has_next_page());
        assert!(exact.has_previous_page());

        let empty = PagingInfo::default();
        assert_eq!(empty.total_page_count(), 0);
    }

    #[test]
    fn test_sort_order_reversed() {
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.reversed(), SortOrder::Asc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn test_tree_view_source_json_roundtrip() {
        let source = TreeViewSource::new(vec![
            TreeViewItem::new(1_i64, 1, "Fruit").with_children(TreeViewSource::new(vec![
                TreeViewItem::new(2_i64, 2, "Apple").with_parent(1),
            ])),
            TreeViewItem::new(3_i64, 1, "Vegetables").with_children(TreeViewSource::unloaded()),
        ]);

        let json = source.to_json().unwrap();
        assert!(json.contains("\"value\":\"Apple\""));
        assert!(json.contains("\"is_loaded\":false"));

        let parsed: TreeViewSource<i64> =
            facet_json::from_str(&json).expect("deserialization should work");
        assert_eq!(parsed, source);
    }
}
