//! Action urls that keep the current query string.

use crate::context::ViewContext;
use crate::element::Attributes;
use crate::error::{Error, Result};

/// Url of `action` with the current request's query string carried over.
///
/// Explicit `route_values` win over query pairs with the same key. The
/// controller defaults to the current route's `controller` value.
pub fn persistent_query_string_action(
    context: &dyn ViewContext,
    action: &str,
    controller: Option<&str>,
    route_values: &Attributes,
) -> Result<String> {
    let controller = match controller {
        Some(controller) => controller.to_owned(),
        None => context
            .route_value("controller")
            .ok_or_else(|| Error::MissingRouteValue {
                key: "controller".to_owned(),
            })?,
    };

    let mut merged = route_values.clone();
    for (key, value) in context.query_string() {
        merged.entry(key).or_insert(value);
    }
    Ok(context.action_url(action, &controller, &merged))
}
