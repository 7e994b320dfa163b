//! Sorting control: pick the field and the order a list is sorted by.
//!
//! Each choice is a plain link produced by a caller-supplied url generator,
//! so sorting works without client script.

use std::fmt;

use crate::context::Helper;
use crate::element::{Attributes, Element, Html};
use crate::error::{Error, Result, require_non_empty};
use crate::models::{SortOrder, SortingInfo};

use super::{icon, text_span};

/// One field the list can be sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingField {
    property: String,
    label: Option<String>,
    explicit_property_name: Option<String>,
}

impl SortingField {
    fn new(property: &str) -> Self {
        Self {
            property: property.to_string(),
            label: None,
            explicit_property_name: None,
        }
    }

    /// Label shown for the field, instead of its property name.
    pub fn with_label(&mut self, label: &str) -> Result<&mut Self> {
        require_non_empty(label, "label")?;
        self.label = Some(label.to_string());
        Ok(self)
    }

    /// Name passed to the url generator, instead of the property path.
    pub fn with_explicit_property_name(&mut self, name: &str) -> Result<&mut Self> {
        require_non_empty(name, "explicit_property_name")?;
        self.explicit_property_name = Some(name.to_string());
        Ok(self)
    }

    /// The configured label, else the last segment of the property path.
    pub fn label(&self) -> &str {
        match &self.label {
            Some(label) => label.as_str(),
            None => self
                .property
                .rsplit('.')
                .next()
                .unwrap_or(&self.property),
        }
    }

    pub fn property_name(&self) -> &str {
        self.explicit_property_name
            .as_deref()
            .unwrap_or(&self.property)
    }
}

type FieldUrl<'a> = Box<dyn Fn(&str) -> String + 'a>;
type OrderUrl<'a> = Box<dyn Fn(SortOrder) -> String + 'a>;

/// Builder returned by [`Helper::sorting_control`].
pub struct SortingControl<'a> {
    fields: Vec<SortingField>,
    info: Option<SortingInfo>,
    field_url: Option<FieldUrl<'a>>,
    order_url: Option<OrderUrl<'a>>,
    ascending_label: String,
    descending_label: String,
}

impl Default for SortingControl<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SortingControl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortingControl")
            .field("fields", &self.fields)
            .field("info", &self.info)
            .field("ascending_label", &self.ascending_label)
            .field("descending_label", &self.descending_label)
            .finish_non_exhaustive()
    }
}

impl<'a> SortingControl<'a> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            info: None,
            field_url: None,
            order_url: None,
            ascending_label: "Asc".to_string(),
            descending_label: "Desc".to_string(),
        }
    }

    /// Add a field by property path (`Customer.Name`).
    pub fn field(&mut self, property: &str) -> Result<&mut SortingField> {
        require_non_empty(property, "property")?;
        self.fields.push(SortingField::new(property));
        let index = self.fields.len() - 1;
        Ok(&mut self.fields[index])
    }

    pub fn with_sorting_info(&mut self, info: SortingInfo) -> &mut Self {
        self.info = Some(info);
        self
    }

    /// Url of the link that sorts by a property name.
    pub fn with_sort_field_action(&mut self, url: impl Fn(&str) -> String + 'a) -> &mut Self {
        self.field_url = Some(Box::new(url));
        self
    }

    /// Url of the link that switches to an order.
    pub fn with_sort_order_action(
        &mut self,
        url: impl Fn(SortOrder) -> String + 'a,
    ) -> &mut Self {
        self.order_url = Some(Box::new(url));
        self
    }

    pub fn with_ascending_label(&mut self, label: &str) -> Result<&mut Self> {
        require_non_empty(label, "label")?;
        self.ascending_label = label.to_string();
        Ok(self)
    }

    pub fn with_descending_label(&mut self, label: &str) -> Result<&mut Self> {
        require_non_empty(label, "label")?;
        self.descending_label = label.to_string();
        Ok(self)
    }

    fn order_label(&self, order: SortOrder) -> &str {
        match order {
            SortOrder::Asc => &self.ascending_label,
            SortOrder::Desc => &self.descending_label,
        }
    }

    /// Render the control.
    ///
    /// Fails unless at least one field, the sorting info and both url
    /// generators are configured.
    pub fn render(&self, attributes: &Attributes) -> Result<Html> {
        let first_field = self.fields.first().ok_or(Error::NoSortingFields)?;
        let info = self.info.as_ref().ok_or(Error::MissingSortingInfo)?;
        let field_url = self
            .field_url
            .as_ref()
            .ok_or_else(|| Error::MissingUrlGenerator {
                target: "sort field".to_string(),
            })?;
        let order_url = self
            .order_url
            .as_ref()
            .ok_or_else(|| Error::MissingUrlGenerator {
                target: "sort order".to_string(),
            })?;

        let mut field_list = Element::new("ul")?;
        field_list.add_class("sorting-control-list")?;
        let mut current = None;
        for field in &self.fields {
            let property_name = field.property_name();
            let selected = property_name == info.property_name;
            if selected && current.is_none() {
                current = Some(field);
            }
            field_list.append_child(choice(&field_url(property_name), field.label(), selected)?);
        }
        let current = current.unwrap_or(first_field);

        let mut field_picker = Element::new("div")?;
        field_picker
            .add_class("sorting-control-field")?
            .append_child(header(current.label())?)
            .append_child(field_list);

        let mut order_list = Element::new("ul")?;
        order_list.add_class("sorting-control-list")?;
        for order in SortOrder::ALL {
            order_list.append_child(choice(
                &order_url(order),
                self.order_label(order),
                order == info.order,
            )?);
        }

        let mut order_picker = Element::new("div")?;
        order_picker
            .add_class("sorting-control-order")?
            .append_child(header(self.order_label(info.order))?)
            .append_child(order_list);

        let mut control = Element::new("div")?;
        control
            .merge_attributes(attributes)?
            .add_class("sorting-control")?
            .append_child(field_picker)
            .append_child(order_picker);
        Ok(control.into_html())
    }
}

/// `div.sorting-control-header` with the current choice and an arrow.
fn header(label: &str) -> Result<Element> {
    let mut header = Element::new("div")?;
    header
        .add_class("sorting-control-header")?
        .append_child(text_span(label)?)
        .append_child(icon("keyboard_arrow_down")?);
    Ok(header)
}

/// `li[.selected] > a[href]`
fn choice(href: &str, label: &str, selected: bool) -> Result<Element> {
    let mut link = Element::new("a")?;
    link.merge_attribute("href", href)?;
    if !label.is_empty() {
        link.set_inner_text(label)?;
    }
    let mut li = Element::new("li")?;
    li.append_child(link);
    if selected {
        li.add_class("selected")?;
    }
    Ok(li)
}

impl Helper<'_> {
    /// Start a sorting control.
    pub fn sorting_control<'a>(&self) -> SortingControl<'a> {
        SortingControl::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticContext;
    use facet_testhelpers::test;

    fn configured<'a>() -> SortingControl<'a> {
        let mut control = SortingControl::new();
        control.field("Name").unwrap();
        control
            .field("Customer.City")
            .unwrap()
            .with_label("City")
            .unwrap()
            .with_explicit_property_name("city")
            .unwrap();
        control
            .with_sort_field_action(|property| format!("/orders?sort={property}"))
            .with_sort_order_action(|order| match order {
                SortOrder::Asc => "/orders?order=asc".to_string(),
                SortOrder::Desc => "/orders?order=desc".to_string(),
            });
        control
    }

    #[test]
    fn test_field_label_and_property_name() {
        let mut field = SortingField::new("Customer.Address.City");
        assert_eq!(field.label(), "City");
        assert_eq!(field.property_name(), "Customer.Address.City");
        field.with_explicit_property_name("city").unwrap();
        assert_eq!(field.property_name(), "city");
        assert!(field.with_label("").is_err());
    }

    #[test]
    fn test_render() {
        let mut control = configured();
        control.with_sorting_info(SortingInfo::new("city", SortOrder::Desc));
        control.with_ascending_label("A-Z").unwrap();
        let html = control.render(&Attributes::new()).unwrap();

        assert_eq!(
            html.as_str(),
            concat!(
                r#"<div class="sorting-control">"#,
                r#"<div class="sorting-control-field">"#,
                r#"<div class="sorting-control-header"><span>City</span><i class="default-icons">keyboard_arrow_down</i></div>"#,
                r#"<ul class="sorting-control-list">"#,
                r#"<li><a href="/orders?sort=Name">Name</a></li>"#,
                r#"<li class="selected"><a href="/orders?sort=city">City</a></li>"#,
                "</ul></div>",
                r#"<div class="sorting-control-order">"#,
                r#"<div class="sorting-control-header"><span>Desc</span><i class="default-icons">keyboard_arrow_down</i></div>"#,
                r#"<ul class="sorting-control-list">"#,
                r#"<li><a href="/orders?order=asc">A-Z</a></li>"#,
                r#"<li class="selected"><a href="/orders?order=desc">Desc</a></li>"#,
                "</ul></div>",
                "</div>"
            )
        );
    }

    #[test]
    fn test_unknown_current_field_falls_back_to_first() {
        let mut control = configured();
        control.with_sorting_info(SortingInfo::new("missing", SortOrder::Asc));
        let html = control.render(&Attributes::new()).unwrap();
        assert!(html.as_str().contains(r#"<span>Name</span>"#));
        assert!(!html.as_str().contains(r#"<li class="selected"><a href="/orders?sort"#));
    }

    #[test]
    fn test_configuration_errors() {
        let context = StaticContext::new();
        let helper = Helper::new(&context);

        let empty = helper.sorting_control();
        assert_eq!(empty.render(&Attributes::new()), Err(Error::NoSortingFields));

        let mut without_info = helper.sorting_control();
        without_info.field("Name").unwrap();
        assert_eq!(
            without_info.render(&Attributes::new()),
            Err(Error::MissingSortingInfo)
        );

        let mut without_urls = helper.sorting_control();
        without_urls.field("Name").unwrap();
        without_urls.with_sorting_info(SortingInfo::default());
        assert_eq!(
            without_urls.render(&Attributes::new()),
            Err(Error::MissingUrlGenerator {
                target: "sort field".to_string()
            })
        );
    }
}
