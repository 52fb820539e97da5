/// Format an amount with two decimals and comma thousands separators.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Like [`format_amount`] but always carries a sign, for event deltas.
pub fn format_signed_amount(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_amount(value))
    } else {
        format_amount(value)
    }
}
