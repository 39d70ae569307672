//! Classifies data rows and applies each kind to the plan shells.
//!
//! Data cells map to plans by position: cell `i` after the label belongs to
//! `plans[i]`. Surplus cells are ignored; missing cells leave CTA and price
//! untouched and give the plan an empty item list for the category.

use crate::pricing::tokenizer::tokenize_row;
use crate::pricing::types::PricingPlan;

/// Label of the call-to-action row.
pub const CTA_LABEL: &str = "CTA (Botón)";
/// Substring identifying the price row label.
pub const PRICE_MARKER: &str = "INVERSIÓN";
/// Separates the headline price from the per-unit equivalence.
pub const EQUIVALENCE_PHRASE: &str = "Equivale a solo";

/// What a data row carries, decided from its label cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Button labels, one per plan.
    CallToAction,
    /// Headline price and equivalence, one per plan.
    Price,
    /// Items of the feature category `key`.
    Feature {
        /// Category name, the second word of the label.
        key: String,
    },
}

impl RowKind {
    /// Classifies a row by its (trimmed) label cell.
    pub fn classify(label: &str) -> Self {
        if label == CTA_LABEL {
            Self::CallToAction
        } else if label.contains(PRICE_MARKER) {
            Self::Price
        } else {
            Self::Feature {
                key: category_key(label),
            }
        }
    }
}

/// Category key for a feature label: the second whitespace token if there is
/// one, which drops a leading icon ("💪 ENTRENAMIENTO" -> "ENTRENAMIENTO").
pub fn category_key(label: &str) -> String {
    label
        .split_whitespace()
        .nth(1)
        .unwrap_or(label)
        .to_string()
}

/// A tokenized, classified data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    /// Row classification.
    pub kind: RowKind,
    /// Cells after the label column.
    pub cells: Vec<String>,
}

impl DataRow {
    /// Tokenizes and classifies `line`. Blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }
        let mut cells = tokenize_row(line);
        let label = cells.remove(0);
        Some(Self {
            kind: RowKind::classify(label.trim()),
            cells,
        })
    }

    /// Applies the row to the plan shells.
    pub fn apply(&self, plans: &mut [PricingPlan]) {
        if self.cells.len() > plans.len() {
            tracing::debug!(
                cells = self.cells.len(),
                plans = plans.len(),
                "ignoring surplus cells"
            );
        }
        match &self.kind {
            RowKind::CallToAction => self.apply_cta(plans),
            RowKind::Price => self.apply_price(plans),
            RowKind::Feature { key } => self.apply_feature(key, plans),
        }
    }

    fn apply_cta(&self, plans: &mut [PricingPlan]) {
        for (plan, cell) in plans.iter_mut().zip(&self.cells) {
            plan.cta = cell.trim().to_string();
        }
    }

    fn apply_price(&self, plans: &mut [PricingPlan]) {
        for (plan, cell) in plans.iter_mut().zip(&self.cells) {
            plan.price = split_price(cell);
        }
    }

    fn apply_feature(&self, key: &str, plans: &mut [PricingPlan]) {
        if self.cells.len() < plans.len() {
            tracing::warn!(
                category = key,
                cells = self.cells.len(),
                plans = plans.len(),
                "feature row is short, missing plans keep their items"
            );
        }
        for (i, plan) in plans.iter_mut().enumerate() {
            match self.cells.get(i) {
                Some(cell) => {
                    plan.features.insert(key.to_string(), split_items(cell));
                }
                // Keep whatever an earlier row with the same key left here
                None => {
                    plan.features.entry(key.to_string()).or_default();
                }
            }
        }
    }
}

/// Splits a price cell into `[headline, equivalence]`.
///
/// Asterisks are emphasis in the source and are dropped. A cell without the
/// equivalence phrase yields just the headline.
pub fn split_price(cell: &str) -> Vec<String> {
    let cell = cell.replace('*', "");
    let cell = cell.trim();
    match cell.split_once(EQUIVALENCE_PHRASE) {
        Some((headline, equivalence)) => {
            vec![headline.trim().to_string(), equivalence.trim().to_string()]
        }
        None => vec![cell.to_string()],
    }
}

/// Splits a feature cell on `+` into trimmed items. Blank cells have none.
pub fn split_items(cell: &str) -> Vec<String> {
    let cell = cell.replace('"', "");
    if cell.trim().is_empty() {
        return Vec::new();
    }
    cell.split('+').map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shells(n: usize) -> Vec<PricingPlan> {
        vec![PricingPlan::default(); n]
    }

    #[test]
    fn test_classify() {
        assert_eq!(RowKind::classify("CTA (Botón)"), RowKind::CallToAction);
        assert_eq!(RowKind::classify("💰 INVERSIÓN (3 Meses)"), RowKind::Price);
        assert_eq!(
            RowKind::classify("💪 ENTRENAMIENTO"),
            RowKind::Feature {
                key: "ENTRENAMIENTO".into()
            }
        );
        assert_eq!(
            RowKind::classify("SUPPORT BONUS"),
            RowKind::Feature {
                key: "BONUS".into()
            }
        );
        assert_eq!(
            RowKind::classify("NUTRITION"),
            RowKind::Feature {
                key: "NUTRITION".into()
            }
        );
    }

    #[test]
    fn test_cta_label_must_match_exactly() {
        assert_eq!(
            RowKind::classify("CTA (Botón) extra"),
            RowKind::Feature {
                key: "(Botón)".into()
            }
        );
    }

    #[test]
    fn test_feature_row() {
        let row = DataRow::from_line("💪 ENTRENAMIENTO,X+Y,X+Y,X+Y").unwrap();
        let mut plans = shells(3);
        row.apply(&mut plans);
        for plan in &plans {
            assert_eq!(plan.items("ENTRENAMIENTO"), ["X", "Y"]);
        }
    }

    #[test]
    fn test_price_row() {
        let row = DataRow::from_line(
            "💰 INVERSIÓN (3 Meses),$149 USD(Pago único)Equivale a solo $49.67/mes,*$249 USD*(Pago único)Equivale a solo $83/mes",
        )
        .unwrap();
        assert_eq!(row.kind, RowKind::Price);
        let mut plans = shells(2);
        row.apply(&mut plans);
        assert_eq!(plans[0].price, vec!["$149 USD(Pago único)", "$49.67/mes"]);
        assert_eq!(plans[1].price, vec!["$249 USD(Pago único)", "$83/mes"]);
        assert!(plans[0].features.is_empty());
    }

    #[test]
    fn test_price_without_equivalence() {
        assert_eq!(split_price(" *$99* "), vec!["$99"]);
    }

    #[test]
    fn test_cta_row_is_positional() {
        let row = DataRow::from_line("CTA (Botón),¡EMPEZAR AHORA!, ¡ELEGIR PLAN GOLD! ").unwrap();
        let mut plans = shells(3);
        plans[2].cta = "kept".into();
        row.apply(&mut plans);
        assert_eq!(plans[0].cta, "¡EMPEZAR AHORA!");
        assert_eq!(plans[1].cta, "¡ELEGIR PLAN GOLD!");
        assert_eq!(plans[2].cta, "kept");
    }

    #[test]
    fn test_short_feature_row_fills_empty_lists() {
        let row = DataRow::from_line("🍎 NUTRICIÓN,a+b").unwrap();
        let mut plans = shells(3);
        row.apply(&mut plans);
        assert_eq!(plans[0].items("NUTRICIÓN"), ["a", "b"]);
        assert_eq!(plans[1].features.get("NUTRICIÓN"), Some(&Vec::new()));
        assert_eq!(plans[2].features.get("NUTRICIÓN"), Some(&Vec::new()));
    }

    #[test]
    fn test_surplus_cells_are_ignored() {
        let row = DataRow::from_line("CTA (Botón),a,b,c").unwrap();
        let mut plans = shells(1);
        row.apply(&mut plans);
        assert_eq!(plans[0].cta, "a");
    }

    #[test]
    fn test_split_items() {
        assert_eq!(
            split_items(r#"Tu plan premium + variedad+ 3 nuevos menús"#),
            vec!["Tu plan premium", "variedad", "3 nuevos menús"]
        );
        assert!(split_items("   ").is_empty());
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert_eq!(DataRow::from_line("   "), None);
    }
}
