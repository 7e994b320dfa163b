//! Fluent HTML builder and server-side form widgets.
//!
//! trellis provides:
//! - **Markup builder**: [`Element`], with ordered attributes, a class set and
//!   escaped serialization
//! - **Form controls**: inputs, selects and labels bound to view-model fields
//!   through a [`Helper`]
//! - **Collection binding**: hidden indexers so posted lists bind back to
//!   their items
//! - **Widgets**: drop-down buttons, list selectors, combo dates, tree views,
//!   sorting controls and list editors
//!
//! Validation metadata, posted values and routing come from a
//! [`ViewContext`] supplied by the host framework.
//!
//! # Example
//!
//! ```rust
//! use trellis::{Element, Helper, StaticContext, html_attributes};
//!
//! let mut link = Element::new("a").unwrap();
//! link.add_class("nav").unwrap()
//!     .merge_attribute("href", "/home").unwrap()
//!     .set_inner_text("Home").unwrap();
//! assert_eq!(link.render(), r#"<a class="nav" href="/home">Home</a>"#);
//!
//! let context = StaticContext::new().without_client_validation();
//! let helper = Helper::new(&context).with_prefix("Customer");
//! let input = helper
//!     .text_box("Name", "Ada", &html_attributes([("data_role", "name")]))
//!     .unwrap();
//! assert_eq!(
//!     input.into_html().as_str(),
//!     r#"<input name="Customer.Name" id="Customer_Name" type="text" value="Ada" data-role="name"></input>"#
//! );
//! ```

mod tracing_macros;

pub mod collection;
pub mod context;
pub mod element;
pub mod error;
pub mod escape;
pub mod inputs;
pub mod models;
pub mod url;
pub mod widgets;

pub use collection::{CollectionItem, hidden_indexer, parse_collection_prefix};
pub use context::{Helper, StaticContext, ViewContext, conventional_action_url};
pub use element::{Attributes, Element, Html, IntoMarkup, html_attributes};
pub use error::{Error, Result};
pub use inputs::{display_text, sanitized_id};
pub use models::{PagingInfo, SelectItem, SortOrder, SortingInfo, TreeViewItem, TreeViewSource};
pub use url::persistent_query_string_action;
pub use widgets::{
    ClientSide, ComboDateOptions, EditorKind, Field, ItemAction, ListAction, ListEditor,
    Management, ServerSide, SortingControl, SortingField, TreeView,
};
