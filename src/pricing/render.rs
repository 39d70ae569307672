//! Plain-text rendition of the plan comparison.

use std::fmt::Write;

use crate::pricing::types::{ParsedTable, PricingPlan};

/// Heading shown above the plan comparison.
pub const TABLE_HEADING: &str = "Planes de Entrenamiento";
/// Line shown under the heading.
pub const TABLE_TAGLINE: &str =
    "Elige el plan que se adapte a tus metas y comienza tu transformación hoy mismo.";

/// Renders every plan as a text card, features in table order.
pub fn render_text(table: &ParsedTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TABLE_HEADING}");
    let _ = writeln!(out, "{TABLE_TAGLINE}");

    for plan in &table.plans {
        out.push('\n');
        render_plan(&mut out, plan, &table.features);
    }
    out
}

fn render_plan(out: &mut String, plan: &PricingPlan, features: &[String]) {
    let _ = writeln!(out, "== {} ==", plan.title);
    if let Some(badge) = &plan.badge {
        let _ = writeln!(out, "   {badge}");
    }
    if !plan.subtitle.is_empty() {
        let _ = writeln!(out, "   {}", plan.subtitle);
    }

    for feature in features {
        let _ = writeln!(out, "{feature}");
        for item in plan.items(feature) {
            let _ = writeln!(out, "  ✓ {item}");
        }
    }

    if let Some(price) = plan.price_pair() {
        let _ = write!(out, "{}", price.amount());
        if let Some(period) = price.billing_period() {
            let _ = write!(out, " {period}");
        }
        out.push('\n');
        if let Some(equivalence) = price.equivalence() {
            let _ = writeln!(out, "solo {equivalence}");
        }
    }

    if !plan.cta.is_empty() {
        let _ = writeln!(out, "[ {} ]", plan.cta);
    }
}
