// src/domain/normalize.rs

//! Lenient number parsing for form and JSON input.
//!
//! Nothing in here fails: junk becomes the field's default, negatives become
//! zero, and anything above a ceiling is pulled back down to it.

/// Parse a user-typed number. Accepts "$1,250.50" style input.
/// Returns `None` for empty, non-numeric, NaN or infinite text.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    let cleaned: String = raw?
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | ' ' | '_'))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Non-negative amount, 0 when unparseable.
pub fn amount(raw: Option<&str>) -> f64 {
    parse_number(raw).map(|v| v.max(0.0)).unwrap_or(0.0)
}

/// Non-negative amount clamped to `[0, ceiling]`.
pub fn amount_capped(raw: Option<&str>, ceiling: f64) -> f64 {
    amount(raw).min(ceiling)
}

/// Whole, non-negative count (fractions round down) clamped to `ceiling`.
pub fn count(raw: Option<&str>, ceiling: u32) -> u32 {
    let v = amount(raw).floor();
    if v >= f64::from(ceiling) {
        ceiling
    } else {
        v as u32
    }
}

/// Snap to the nearest half unit (baths are 1, 1.5, 2, ...).
pub fn half_steps(raw: Option<&str>, ceiling: f64) -> f64 {
    ((amount(raw) * 2.0).round() / 2.0).min(ceiling)
}

/// Integer rating in `[min, max]`; `default` when unparseable.
pub fn rating(raw: Option<&str>, min: u8, max: u8, default: u8) -> u8 {
    match parse_number(raw) {
        Some(v) => v.round().clamp(f64::from(min), f64::from(max)) as u8,
        None => default,
    }
}

/// Checkbox-ish truthiness.
pub fn flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("on" | "true" | "1" | "yes" | "y")
    )
}

/// Percentage in `[0, 100]`.
pub fn percent(raw: Option<&str>) -> f64 {
    amount_capped(raw, 100.0)
}
