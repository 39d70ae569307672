//! Pricing table parsing and rendering.
//!
//! Data flows line by line: [`tokenize_row`] splits cells, the header row
//! becomes plan shells via [`interpret_header`], and every data row is
//! classified as a [`RowKind`] and applied to those shells.

mod catalog;
mod header;
pub mod render;
mod rows;
mod tokenizer;
mod types;

pub use catalog::{parse, PlanCatalog, PLAN_SOURCE};
pub use header::{interpret_header, plan_shell, POPULAR_MARKER, PREMIUM_MARKER};
pub use rows::{
    category_key, split_items, split_price, DataRow, RowKind, CTA_LABEL, EQUIVALENCE_PHRASE,
    PRICE_MARKER,
};
pub use tokenizer::tokenize_row;
pub use types::{ParsedTable, PricePair, PricingPlan};
