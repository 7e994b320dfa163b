//! The markup builder.
//!
//! An [`Element`] accumulates the pieces of one element (attributes, classes,
//! content, children) and serializes them on demand:
//!
//! - attributes are written in insertion order, values attribute-escaped
//! - classes are collapsed into one `class` attribute, positioned where the
//!   first class was added
//! - every tag gets an explicit close tag
//!
//! Children are rendered to text when they are appended, not when the parent
//! renders. Changing a child after appending it has no effect on the parent.
//! The first [`Element::render`] folds the buffered children into the content
//! and caches the result; later calls return the cache.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

use crate::error::{Result, require_non_empty};
use crate::escape::{push_attribute_escaped, push_text_escaped};
use crate::tracing_macros::{debug, trace};

/// Ordered `name -> value` attribute map.
pub type Attributes = IndexMap<String, String>;

/// Build an [`Attributes`] map from pairs, turning `_` in names into `-`.
///
/// ```rust
/// let attrs = trellis::html_attributes([("data_id", "7"), ("title", "x")]);
/// assert_eq!(attrs["data-id"], "7");
/// ```
pub fn html_attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: AsRef<str>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.as_ref().replace('_', "-"), v.into()))
        .collect()
}

/// Already-serialized markup that must not be escaped again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    pub fn new(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}

/// Anything that can be appended to an [`Element`] as a child.
///
/// Returns `None` for absent or empty content, which makes the append a no-op.
/// Strings are taken as raw markup.
pub trait IntoMarkup {
    fn into_markup(self) -> Option<String>;
}

impl IntoMarkup for &mut Element {
    fn into_markup(self) -> Option<String> {
        Some(self.render().to_owned())
    }
}

impl IntoMarkup for Element {
    fn into_markup(self) -> Option<String> {
        Some(self.into_html().into_string())
    }
}

impl IntoMarkup for Html {
    fn into_markup(self) -> Option<String> {
        (!self.is_empty()).then_some(self.0)
    }
}

impl IntoMarkup for &Html {
    fn into_markup(self) -> Option<String> {
        (!self.is_empty()).then(|| self.0.clone())
    }
}

impl IntoMarkup for &str {
    fn into_markup(self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_owned())
    }
}

impl IntoMarkup for String {
    fn into_markup(self) -> Option<String> {
        (!self.is_empty()).then_some(self)
    }
}

impl IntoMarkup for &String {
    fn into_markup(self) -> Option<String> {
        self.as_str().into_markup()
    }
}

impl<T: IntoMarkup> IntoMarkup for Option<T> {
    fn into_markup(self) -> Option<String> {
        self.and_then(IntoMarkup::into_markup)
    }
}

/// One markup element under construction.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    classes: IndexSet<String>,
    content: String,
    children: SmallVec<[String; 4]>,
    rendered: Option<String>,
}

impl Element {
    /// Start a new element. Fails if `tag` is empty.
    pub fn new(tag: &str) -> Result<Self> {
        require_non_empty(tag, "tag")?;
        Ok(Self {
            tag: tag.to_owned(),
            attributes: Attributes::new(),
            classes: IndexSet::new(),
            content: String::new(),
            children: SmallVec::new(),
            rendered: None,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Current value of an attribute, including the joined `class` list.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.is_some()
    }

    /// Content set through [`set_inner_text`](Self::set_inner_text) or
    /// [`set_inner_html`](Self::set_inner_html), without the children.
    pub fn inner_html(&self) -> &str {
        &self.content
    }

    /// Add a CSS class. Adding the same class twice has no further effect.
    pub fn add_class(&mut self, name: &str) -> Result<&mut Self> {
        require_non_empty(name, "name")?;
        if self.classes.insert(name.to_owned()) {
            self.sync_class_attribute();
        }
        Ok(self)
    }

    /// Set an attribute. An existing value is only overwritten when `replace`
    /// is true.
    ///
    /// Setting `class` replaces the class set with the whitespace-separated
    /// tokens of `value`.
    pub fn set_attribute(&mut self, key: &str, value: &str, replace: bool) -> Result<&mut Self> {
        require_non_empty(key, "key")?;
        self.apply_attribute(key, value, replace);
        Ok(self)
    }

    /// Set an attribute unless it is already present.
    pub fn merge_attribute(&mut self, key: &str, value: &str) -> Result<&mut Self> {
        self.set_attribute(key, value, false)
    }

    /// Apply [`set_attribute`](Self::set_attribute) for every entry, in order.
    ///
    /// Every key is checked before anything is applied, so a failing call
    /// leaves the element untouched.
    pub fn set_attributes<'a, I>(&mut self, attributes: I, replace: bool) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
        I::IntoIter: Clone,
    {
        let entries = attributes.into_iter();
        for (key, _) in entries.clone() {
            require_non_empty(key, "key")?;
        }
        for (key, value) in entries {
            self.apply_attribute(key, value, replace);
        }
        Ok(self)
    }

    /// Add every attribute that is not already present.
    pub fn merge_attributes(&mut self, attributes: &Attributes) -> Result<&mut Self> {
        self.set_attributes(attributes, false)
    }

    /// Append a child. Elements are rendered right away; absent or empty
    /// content is ignored.
    pub fn append_child(&mut self, child: impl IntoMarkup) -> &mut Self {
        let Some(markup) = child.into_markup() else {
            return self;
        };
        if self.rendered.is_some() {
            debug!(tag = %self.tag, "child appended to an already rendered element");
        }
        self.children.push(markup);
        self
    }

    /// Replace the content with escaped text. Fails if `text` is empty.
    pub fn set_inner_text(&mut self, text: &str) -> Result<&mut Self> {
        require_non_empty(text, "text")?;
        self.content.clear();
        push_text_escaped(&mut self.content, text);
        Ok(self)
    }

    /// Replace the content with raw markup.
    pub fn set_inner_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.content = html.into();
        self
    }

    /// Serialize the element.
    ///
    /// The first call folds the appended children after the content and
    /// caches the output. Later calls return the cached string unchanged.
    pub fn render(&mut self) -> &str {
        if self.rendered.is_none() {
            for child in self.children.drain(..) {
                self.content.push_str(&child);
            }
            let mut out = String::new();
            write_element(&mut out, &self.tag, &self.attributes, &self.content, &[]);
            trace!(tag = %self.tag, len = out.len(), "rendered element");
            self.rendered = Some(out);
        }
        self.rendered.as_deref().unwrap_or_default()
    }

    /// Render and take the output.
    pub fn into_html(mut self) -> Html {
        self.render();
        Html(self.rendered.unwrap_or_default())
    }

    fn apply_attribute(&mut self, key: &str, value: &str, replace: bool) {
        if !replace && self.attributes.contains_key(key) {
            return;
        }
        if key == "class" {
            self.classes = value.split_whitespace().map(str::to_owned).collect();
            if self.classes.is_empty() {
                self.attributes.shift_remove(key);
            } else {
                let joined = self.joined_classes();
                self.attributes.insert(key.to_owned(), joined);
            }
        } else {
            self.attributes.insert(key.to_owned(), value.to_owned());
        }
    }

    fn sync_class_attribute(&mut self) {
        let joined = self.joined_classes();
        self.attributes.insert("class".to_owned(), joined);
    }

    fn joined_classes(&self) -> String {
        let mut joined = String::new();
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                joined.push(' ');
            }
            joined.push_str(class);
        }
        joined
    }
}

impl fmt::Display for Element {
    /// Same output as [`Element::render`], without caching.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rendered) = &self.rendered {
            return f.write_str(rendered);
        }
        let mut out = String::new();
        write_element(
            &mut out,
            &self.tag,
            &self.attributes,
            &self.content,
            &self.children,
        );
        f.write_str(&out)
    }
}

fn write_element(
    out: &mut String,
    tag: &str,
    attributes: &Attributes,
    content: &str,
    children: &[String],
) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        push_attribute_escaped(out, value);
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    for child in children {
        out.push_str(child);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
