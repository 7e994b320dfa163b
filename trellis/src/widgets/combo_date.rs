//! Combo date: a date picked with three drop-down buttons.
//!
//! The day, month and year buttons post `{field}.Day`, `{field}.Month` and
//! `{field}.Year`. A hidden `type=date` input carries the whole value and the
//! validation attributes so client validation has a single element to check.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::context::Helper;
use crate::element::{Attributes, Element, Html};
use crate::error::{Result, require_non_empty};
use crate::inputs::sanitized_id;
use crate::models::SelectItem;

use super::error_span;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Labels and ranges of a combo date.
#[derive(Clone, Debug)]
pub struct ComboDateOptions {
    /// Header of the day button when no day is selected.
    pub day_label: String,
    pub month_label: String,
    pub year_label: String,
    /// Display names of the months, January first.
    pub month_names: [String; 12],
    /// Years offered, in order.
    pub years: Vec<i32>,
}

impl Default for ComboDateOptions {
    fn default() -> Self {
        Self {
            day_label: "Day".to_string(),
            month_label: "Month".to_string(),
            year_label: "Year".to_string(),
            month_names: MONTHS.map(str::to_string),
            years: (1900..=2099).collect(),
        }
    }
}

impl ComboDateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(
        mut self,
        day: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        self.day_label = day.into();
        self.month_label = month.into();
        self.year_label = year.into();
        self
    }

    pub fn with_month_names(mut self, names: [&str; 12]) -> Self {
        self.month_names = names.map(str::to_string);
        self
    }

    pub fn with_years(mut self, years: RangeInclusive<i32>) -> Self {
        self.years = years.collect();
        self
    }
}

impl Helper<'_> {
    /// Combo date for a required date.
    pub fn combo_date(
        &self,
        field: &str,
        value: NaiveDate,
        options: &ComboDateOptions,
        attributes: &Attributes,
    ) -> Result<Html> {
        self.render_combo_date(field, Some(value), false, options, attributes)
    }

    /// Combo date for an optional date.
    ///
    /// Each button gets a leading placeholder item with value `0`, selected
    /// when there is no date.
    pub fn nullable_combo_date(
        &self,
        field: &str,
        value: Option<NaiveDate>,
        options: &ComboDateOptions,
        attributes: &Attributes,
    ) -> Result<Html> {
        self.render_combo_date(field, value, true, options, attributes)
    }

    fn render_combo_date(
        &self,
        field: &str,
        value: Option<NaiveDate>,
        nullable: bool,
        options: &ComboDateOptions,
        attributes: &Attributes,
    ) -> Result<Html> {
        let full_name = self.full_name(field);
        require_non_empty(&full_name, "field")?;

        let mut combo = Element::new("div")?;
        combo.merge_attributes(attributes)?.add_class("combo-date")?;

        let mut input = Element::new("input")?;
        input.set_attribute("name", &full_name, true)?;
        if let Some(id) = sanitized_id(&full_name) {
            input.set_attribute("id", &id, true)?;
        }
        input
            .set_attribute("type", "date", true)?
            .set_attribute("hidden", "hidden", true)?
            .set_attribute("readonly", "readonly", true)?;
        if let Some(date) = value {
            input.set_attribute("value", &date.format("%Y-%m-%d").to_string(), true)?;
        }
        input.merge_attributes(&self.validation_attributes(&full_name))?;
        combo.append_child(input);

        let placeholder = |label: &str| SelectItem {
            text: label.to_string(),
            value: "0".to_string(),
            selected: value.is_none(),
        };
        let with_placeholder = |label: &str, mut items: Vec<SelectItem>| {
            if nullable {
                items.insert(0, placeholder(label));
            }
            items
        };

        let days = with_placeholder(
            options.day_label.as_str(),
            (1..=31)
                .map(|day| SelectItem::new(format!("{day:02}"), day.to_string()))
                .collect(),
        );
        let months = with_placeholder(
            options.month_label.as_str(),
            options
                .month_names
                .iter()
                .zip(1..=12)
                .map(|(name, month)| SelectItem::new(name.as_str(), month.to_string()))
                .collect(),
        );
        let years = with_placeholder(
            options.year_label.as_str(),
            options
                .years
                .iter()
                .map(|year| SelectItem::new(year.to_string(), year.to_string()))
                .collect(),
        );

        let parts = [
            (
                "Day",
                "day-container",
                &options.day_label,
                days,
                value.map(|d| d.day().to_string()),
            ),
            (
                "Month",
                "month-container",
                &options.month_label,
                months,
                value.map(|d| d.month().to_string()),
            ),
            (
                "Year",
                "year-container",
                &options.year_label,
                years,
                value.map(|d| d.year().to_string()),
            ),
        ];
        for (part, container_class, label, items, part_value) in parts {
            let button = self.drop_down_button(
                &format!("{field}.{part}"),
                part_value.as_deref(),
                &items,
                label,
                false,
                &Attributes::new(),
            )?;
            let mut container = Element::new("div")?;
            container.add_class(container_class)?.append_child(button);
            combo.append_child(container);
        }

        combo.append_child(error_span(
            "combo-date__error",
            self.validation_message(&full_name),
        )?);
        Ok(combo.into_html())
    }
}
