//! Display helpers for whole-pound amounts.

use crate::pricing::{Finish, Tariff};

/// Render an amount as en-GB pounds sterling with no fractional digits, e.g. `£2,315`.
pub fn format_gbp(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("£{}", grouped)
}

/// Selector label for a finish, including its per-door upcharge.
pub fn finish_label(finish: Finish, tariff: &Tariff) -> String {
    match finish {
        Finish::Mirror => "Mirror (Standard)".to_string(),
        Finish::Glass => format!(
            "Coloured Glass (+{} / door)",
            format_gbp(tariff.upcharge(finish).into())
        ),
        Finish::Wood => format!(
            "Wood Finish (+{} / door)",
            format_gbp(tariff.upcharge(finish).into())
        ),
    }
}

/// CSS class for a finish swatch.
pub fn finish_swatch_class(finish: Finish) -> &'static str {
    match finish {
        Finish::Mirror => "swatch swatch-mirror",
        Finish::Glass => "swatch swatch-glass",
        Finish::Wood => "swatch swatch-wood",
    }
}
