// Output formatting for CLI
//
// All locale/display formatting lives here. Values on the wire are raw
// numbers; nothing in this module feeds back into stored or fetched data.

use serde::Serialize;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Text,
        }
    }

    pub fn print_value<T: Serialize>(&self, value: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value).unwrap());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(value).unwrap());
            }
            OutputFormat::Text => {
                // Text format is handled by each command
            }
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// Print a simple key-value pair for text output
pub fn print_field(label: &str, value: &str) {
    println!("{:<16} {}", format!("{}:", label), value);
}

/// Print a table header
pub fn print_table_header(columns: &[(&str, usize)]) {
    let header: String = columns
        .iter()
        .map(|(name, width)| format!("{:<width$}", name, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header);
}

/// Print a table row
pub fn print_table_row(values: &[(&str, usize)]) {
    let row: String = values
        .iter()
        .map(|(val, width)| {
            let s = if val.chars().count() > *width {
                let head: String = val.chars().take(width.saturating_sub(3)).collect();
                format!("{}...", head)
            } else {
                val.to_string()
            };
            format!("{:<width$}", s, width = width)
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", row);
}

/// Horizontal bar scaled against the largest value in the chart
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

/// Euros with thousands grouping, e.g. 116250 -> "116,250 €"
pub fn format_eur(value: f64) -> String {
    format!("{} €", group_thousands(value.round() as i64))
}

/// Liters with one decimal, e.g. 2236.4 -> "2236.4 L"
pub fn format_liters(value: f64) -> String {
    format!("{:.1} L", value)
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eur_formatting_groups_thousands() {
        assert_eq!(format_eur(116250.0), "116,250 €");
        assert_eq!(format_eur(5100.0), "5,100 €");
        assert_eq!(format_eur(250.0), "250 €");
    }

    #[test]
    fn liters_formatting_keeps_one_decimal() {
        assert_eq!(format_liters(2236.4), "2236.4 L");
        assert_eq!(format_liters(610.0), "610.0 L");
    }

    #[test]
    fn bar_scales_against_max() {
        assert_eq!(bar(50.0, 100.0, 40).chars().count(), 20);
        assert_eq!(bar(100.0, 100.0, 40).chars().count(), 40);
        assert_eq!(bar(0.0, 100.0, 40), "");
        // Tiny but non-zero values still show one cell.
        assert_eq!(bar(0.1, 100.0, 40).chars().count(), 1);
    }
}
