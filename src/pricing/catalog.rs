//! The embedded plan table and the top-level parse.

use crate::pricing::header::interpret_header;
use crate::pricing::rows::{DataRow, RowKind};
use crate::pricing::tokenizer::tokenize_row;
use crate::pricing::types::{ParsedTable, PricingPlan};

/// Source text of the training-plan comparison table.
pub const PLAN_SOURCE: &str = r#"Característica,<h3>Plan SILVER</h3>Inicia tu Cambio,<h3>Plan GOLD</h3>Acelera tus Resultados⭐⭐⭐[EL MÁS POPULAR],<h3>Plan PLATINUM</h3>Transformación Total💎[SERVICIO PREMIUM]
💪 ENTRENAMIENTO,Plan de ejercicios 100% personalizado+ Videos demostrativos+ 1 Videollamada inicial de bienvenida y explicación,Plan de ejercicios 100% personalizado+ Videos demostrativos+ 1 Videollamada inicial de bienvenida y explicación,Plan de ejercicios 100% personalizado+ Videos demostrativos+ 1 Videollamada inicial de bienvenida y explicación
🍎 NUTRICIÓN,"Tu plan base en PDF(Menú básico, sin intercambios)","Tu plan flexible y mensual+ 1 nuevo menú cada mes+ Aplicación de seguimiento+ Guía de intercambios","Tu plan premium + variedad+ 3 nuevos menús cada mes+ Aplicación de seguimiento+ Guía de intercambios ilimitados"
SUPPORT BONUS,Soporte por WhatsApp(1 día a la semana)+ Cuaderno de entrenamiento (PDF),Soporte por WhatsApp(3 días a la semana)+ 1 Videollamada de seguimiento mensual+ Guía de suplementación+ Cuaderno de entrenamiento (PDF),Soporte por WhatsApp ILIMITADO+ 1 Videollamada de seguimiento SEMANAL+ Guía de suplementación+ Recetario de postres saludables+ Lista de compras+ Cuaderno de entrenamiento (PDF)
💰 INVERSIÓN (3 Meses),$149 USD(Pago único)Equivale a solo $49.67/mes,*$249 USD*(Pago único)Equivale a solo $83/mes,*$449 USD*(Pago único)Equivale a solo $149.67/mes
CTA (Botón),¡EMPEZAR AHORA!,¡ELEGIR PLAN GOLD!,¡QUIERO EL PLAN VIP!"#;

/// Parses plan source text into a table.
///
/// The first line is the header; every further non-blank line is a data row.
/// Malformed input degrades to partially filled plans rather than failing.
pub fn parse(raw: &str) -> ParsedTable {
    let mut lines = raw.trim().lines();

    let header = lines.next().map(tokenize_row).unwrap_or_default();
    let mut plans: Vec<PricingPlan> = interpret_header(&header);

    let mut features = Vec::new();
    let mut price_row = None;

    for row in lines.filter_map(DataRow::from_line) {
        match &row.kind {
            RowKind::Feature { key } => features.push(key.clone()),
            RowKind::Price => price_row = Some(features.len()),
            RowKind::CallToAction => {}
        }
        row.apply(&mut plans);
    }

    tracing::debug!(
        plans = plans.len(),
        features = features.len(),
        "parsed plan table"
    );

    ParsedTable {
        features,
        plans,
        price_row,
    }
}

/// The parsed plan table, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    table: ParsedTable,
}

impl PlanCatalog {
    /// Parses the embedded [`PLAN_SOURCE`].
    pub fn load() -> Self {
        Self::from_source(PLAN_SOURCE)
    }

    /// Parses arbitrary plan source text.
    pub fn from_source(raw: &str) -> Self {
        Self { table: parse(raw) }
    }

    /// The parsed table.
    pub fn table(&self) -> &ParsedTable {
        &self.table
    }

    /// Feature categories in display order.
    pub fn features(&self) -> &[String] {
        &self.table.features
    }

    /// Plans in column order.
    pub fn plans(&self) -> &[PricingPlan] {
        &self.table.plans
    }

    /// Consumes the catalog, returning the table.
    pub fn into_table(self) -> ParsedTable {
        self.table
    }
}
