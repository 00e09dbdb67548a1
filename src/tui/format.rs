//! Number formatting for cards, tables and chart labels (en-US style).

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// `2275` → `"2,275"`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `773000` → `"$773,000"`
pub fn format_currency(value: u64) -> String {
    format!("${}", format_number(value))
}

/// Signed change: `12.5` → `"+12.5%"`, `-2.1` → `"-2.1%"`, `0` → `"0%"`.
pub fn format_change(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent}%")
    } else {
        format!("{percent}%")
    }
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent}%")
}

/// Short axis label: `45000` → `"45k"`, `1300000` → `"1.3M"`.
pub fn format_compact(value: u64) -> String {
    match value {
        0..1_000 => value.to_string(),
        1_000..1_000_000 => format!("{}k", value / 1_000),
        _ => format!("{:.1}M", value as f64 / 1_000_000.0),
    }
}

pub fn spinner(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}
