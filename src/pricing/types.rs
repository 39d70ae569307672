//! Core types for the pricing table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pricing plan, i.e. one data column of the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    /// Plan name, e.g. "Plan GOLD".
    pub title: String,
    /// Tagline following the title in the header cell.
    pub subtitle: String,
    /// Header cell carried the three-star marker.
    pub is_popular: bool,
    /// Header cell carried the gem marker.
    pub is_premium: bool,
    /// Bracketed annotation from the header cell, e.g. "EL MÁS POPULAR".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Items per feature category, each list in source order.
    pub features: BTreeMap<String, Vec<String>>,
    /// Headline price and per-unit equivalence; empty until a price row is seen.
    pub price: Vec<String>,
    /// Call-to-action button label.
    pub cta: String,
}

impl PricingPlan {
    /// Items listed under `category`, empty if the plan has none.
    pub fn items(&self, category: &str) -> &[String] {
        self.features
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Borrowed view of the price pair, if a price row filled it.
    pub fn price_pair(&self) -> Option<PricePair<'_>> {
        let headline = self.price.first()?;
        Some(PricePair {
            headline,
            equivalence: self.price.get(1).map(String::as_str),
        })
    }
}

/// The `[headline, equivalence]` price of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePair<'a> {
    /// e.g. "$149 USD(Pago único)".
    pub headline: &'a str,
    /// e.g. "$49.67/mes".
    pub equivalence: Option<&'a str>,
}

impl<'a> PricePair<'a> {
    /// Headline up to the billing-period annotation, e.g. "$149 USD".
    pub fn amount(&self) -> &'a str {
        match self.headline.split_once('(') {
            Some((amount, _)) => amount.trim(),
            None => self.headline.trim(),
        }
    }

    /// Parenthesised billing period, e.g. "(Pago único)".
    ///
    /// Only the text up to the next `(` counts; later annotations are dropped.
    pub fn billing_period(&self) -> Option<String> {
        let rest = self.headline.split('(').nth(1)?.trim();
        if rest.is_empty() {
            return None;
        }
        Some(format!("({rest}"))
    }

    /// Per-unit equivalence, if present and non-blank.
    pub fn equivalence(&self) -> Option<&'a str> {
        self.equivalence.map(str::trim).filter(|s| !s.is_empty())
    }
}

/// The fully interpreted pricing table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTable {
    /// Feature categories in display order. Never contains the price row.
    pub features: Vec<String>,
    /// One plan per header column after the label column.
    pub plans: Vec<PricingPlan>,
    /// Index into `features` before which the price row appeared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_row: Option<usize>,
}

impl ParsedTable {
    /// Looks a plan up by its title.
    pub fn plan(&self, title: &str) -> Option<&PricingPlan> {
        self.plans.iter().find(|p| p.title == title)
    }
}
