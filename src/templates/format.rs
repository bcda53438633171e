// templates/format.rs

/// "$3,004" / "-$854". Rounded to whole dollars.
pub fn money(v: f64) -> String {
    let rounded = v.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}${grouped}")
}

/// Signed, for deltas: "+$120" / "-$854".
pub fn signed_money(v: f64) -> String {
    if v.round() > 0.0 {
        format!("+{}", money(v))
    } else {
        money(v)
    }
}

pub fn percent(v: f64) -> String {
    format!("{v:.1}%")
}
