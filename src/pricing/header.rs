//! Turns the header row into plan shells.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pricing::types::PricingPlan;

/// Marks the most popular plan.
pub const POPULAR_MARKER: &str = "⭐⭐⭐";
/// Marks the premium plan.
pub const PREMIUM_MARKER: &str = "💎";

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

static DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"⭐|💎|\[.*?\]").expect("Invalid decoration regex"));

static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("Invalid annotation regex"));

static SEGMENT_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("Invalid segment regex"));

/// Builds one plan shell per header column after the label column.
pub fn interpret_header(cells: &[String]) -> Vec<PricingPlan> {
    cells.iter().skip(1).map(|cell| plan_shell(cell)).collect()
}

/// Builds the plan shell for a single raw header cell.
///
/// Flags are read from `raw` before cleaning since cleaning removes the
/// markers themselves.
pub fn plan_shell(raw: &str) -> PricingPlan {
    // A tag always ends a segment, so it leaves a break wide enough to split on.
    let cleaned = MARKUP_TAG.replace_all(raw, "  ");
    let cleaned = DECORATION.replace_all(&cleaned, " ");

    let mut segments = SEGMENT_BREAK.split(cleaned.trim());
    let title = segments.next().unwrap_or_default().to_string();
    let subtitle = segments.collect::<Vec<_>>().join(" ");

    let badge = ANNOTATION
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|b| !b.is_empty());

    PricingPlan {
        title,
        subtitle,
        is_popular: raw.contains(POPULAR_MARKER),
        is_premium: raw.contains(PREMIUM_MARKER),
        badge,
        ..Default::default()
    }
}
