//! The host collaborator and the helper that carries it.
//!
//! Everything the host web framework owns (validation metadata, posted form
//! values, the request query string, route data, url generation) is reached
//! through [`ViewContext`]. [`StaticContext`] is an in-memory implementation
//! for tests and simple hosts. [`Helper`] pairs a context with the current
//! HTML field prefix, and every widget hangs off it.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;

use crate::element::{Attributes, Element, Html};
use crate::error::Result;

/// Services the host framework provides to the helpers.
///
/// Every method has a default so a host only implements what it has.
pub trait ViewContext {
    /// Unobtrusive validation attributes (`data-val-*`) for a field.
    fn validation_attributes(&self, _full_name: &str) -> Attributes {
        Attributes::new()
    }

    /// Validation message markup for a field.
    fn validation_message(&self, _full_name: &str) -> Option<Html> {
        None
    }

    /// A value posted with the current request.
    fn form_value(&self, _key: &str) -> Option<String> {
        None
    }

    /// Query string pairs of the current request.
    fn query_string(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Route data of the current request (`controller`, `action`, ...).
    fn route_value(&self, _key: &str) -> Option<String> {
        None
    }

    /// Url of a controller action.
    ///
    /// Defaults to the conventional `/{controller}/{action}/{id}` route, with
    /// the remaining route values in the query string.
    fn action_url(&self, action: &str, controller: &str, route_values: &Attributes) -> String {
        conventional_action_url(action, controller, route_values)
    }
}

/// `/{controller}/{action}[/{id}][?rest]`
pub fn conventional_action_url(action: &str, controller: &str, route_values: &Attributes) -> String {
    let mut url = format!("/{controller}/{action}");
    if let Some(id) = route_values.get("id").filter(|id| !id.is_empty()) {
        url.push('/');
        // One path segment: `/`, `?` and `#` must not escape it.
        for chunk in ::url::form_urlencoded::byte_serialize(id.as_bytes()) {
            url.push_str(if chunk == "+" { "%20" } else { chunk });
        }
    }

    let mut query = ::url::form_urlencoded::Serializer::new(String::new());
    let mut has_query = false;
    for (key, value) in route_values {
        if key == "id" {
            continue;
        }
        query.append_pair(key, value);
        has_query = true;
    }
    if has_query {
        url.push('?');
        url.push_str(&query.finish());
    }
    url
}

/// In-memory [`ViewContext`].
///
/// Like a host form context, it hands out the validation attributes of a
/// field only once: the first input rendered for a field carries them.
#[derive(Debug)]
pub struct StaticContext {
    validation: HashMap<String, Attributes>,
    errors: HashMap<String, String>,
    form: HashMap<String, String>,
    query: Vec<(String, String)>,
    route: HashMap<String, String>,
    client_validation: bool,
    rendered_fields: RefCell<HashSet<String>>,
}

impl Default for StaticContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticContext {
    pub fn new() -> Self {
        Self {
            validation: HashMap::new(),
            errors: HashMap::new(),
            form: HashMap::new(),
            query: Vec::new(),
            route: HashMap::new(),
            client_validation: true,
            rendered_fields: RefCell::new(HashSet::new()),
        }
    }

    /// Validation attributes for a fully qualified field name.
    pub fn with_validation(mut self, full_name: impl Into<String>, attributes: Attributes) -> Self {
        self.validation.insert(full_name.into(), attributes);
        self
    }

    /// A model error for a fully qualified field name.
    pub fn with_error(mut self, full_name: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.insert(full_name.into(), message.into());
        self
    }

    pub fn with_form_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Parse an `application/x-www-form-urlencoded` query string, with or
    /// without the leading `?`.
    pub fn with_query_string(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        self.query.extend(
            ::url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        );
        self
    }

    pub fn with_route_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route.insert(key.into(), value.into());
        self
    }

    /// Turn off client validation: no `data-val-*` attributes, and no message
    /// placeholder for fields without errors.
    pub fn without_client_validation(mut self) -> Self {
        self.client_validation = false;
        self
    }

    fn message_span(&self, full_name: &str, error: Option<&str>) -> Result<Html> {
        let mut span = Element::new("span")?;
        span.add_class(if error.is_some() {
            "field-validation-error"
        } else {
            "field-validation-valid"
        })?;
        if self.client_validation {
            span.set_attribute("data-valmsg-for", full_name, true)?
                .set_attribute("data-valmsg-replace", "true", true)?;
        }
        if let Some(error) = error.filter(|e| !e.is_empty()) {
            span.set_inner_text(error)?;
        }
        Ok(span.into_html())
    }
}

impl ViewContext for StaticContext {
    fn validation_attributes(&self, full_name: &str) -> Attributes {
        if !self.client_validation {
            return Attributes::new();
        }
        if !self.rendered_fields.borrow_mut().insert(full_name.to_owned()) {
            return Attributes::new();
        }
        self.validation.get(full_name).cloned().unwrap_or_default()
    }

    fn validation_message(&self, full_name: &str) -> Option<Html> {
        let error = self.errors.get(full_name).map(String::as_str);
        if error.is_none() && !self.client_validation {
            return None;
        }
        self.message_span(full_name, error).ok()
    }

    fn form_value(&self, key: &str) -> Option<String> {
        self.form.get(key).cloned()
    }

    fn query_string(&self) -> Vec<(String, String)> {
        self.query.clone()
    }

    fn route_value(&self, key: &str) -> Option<String> {
        self.route.get(key).cloned()
    }
}

/// A [`ViewContext`] plus the current HTML field prefix.
///
/// Cloning is cheap. Helpers derived from one another share the queue of
/// collection indices, so nested partials keep consuming posted indices in
/// order.
#[derive(Clone)]
pub struct Helper<'c> {
    context: &'c dyn ViewContext,
    prefix: String,
    pub(crate) indices: Rc<RefCell<HashMap<String, VecDeque<String>>>>,
}

impl<'c> Helper<'c> {
    pub fn new(context: &'c dyn ViewContext) -> Self {
        Self {
            context,
            prefix: String::new(),
            indices: Rc::default(),
        }
    }

    pub fn context(&self) -> &'c dyn ViewContext {
        self.context
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Qualify `field` with the current prefix.
    pub fn full_name(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            return field.to_owned();
        }
        if field.is_empty() {
            return self.prefix.clone();
        }
        if field.starts_with('[') {
            return format!("{}{}", self.prefix, field);
        }
        format!("{}.{}", self.prefix, field)
    }

    /// A helper with `prefix` in place of the current prefix.
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        Self {
            context: self.context,
            prefix: prefix.into(),
            indices: Rc::clone(&self.indices),
        }
    }

    /// A helper for rendering a partial view bound to `field`.
    ///
    /// An empty `explicit_prefix` counts as none.
    pub fn partial_for(&self, field: &str, explicit_prefix: Option<&str>) -> Self {
        match explicit_prefix {
            Some(prefix) if !prefix.is_empty() => self.with_prefix(prefix),
            _ => self.with_prefix(self.full_name(field)),
        }
    }

    /// Validation attributes for an already qualified name.
    pub fn validation_attributes(&self, full_name: &str) -> Attributes {
        self.context.validation_attributes(full_name)
    }

    /// Validation message for an already qualified name.
    pub fn validation_message(&self, full_name: &str) -> Option<Html> {
        self.context.validation_message(full_name)
    }
}

impl fmt::Debug for Helper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Helper")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
