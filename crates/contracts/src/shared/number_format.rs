//! Number formatting in the es-CO convention used across the UI
//! (`.` groups thousands, `,` separates decimals).

/// Format with thousands grouping and a fixed number of decimals
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Insert a separator every 3 digits from the right
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Peso amount with 2 decimals, e.g. `$ 1.234.567,89`
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-$ {}", format_number_with_decimals(-value, 2))
    } else {
        format!("$ {}", format_number_with_decimals(value, 2))
    }
}

/// Percentage with 2 decimals, e.g. `26,67 %`
pub fn format_percent(value: f64) -> String {
    format!("{} %", format_number_with_decimals(value, 2))
}

/// Round to cents, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$ 1.234,56");
        assert_eq!(format_money(1234567.891), "$ 1.234.567,89");
        assert_eq!(format_money(0.0), "$ 0,00");
        assert_eq!(format_money(-1234.5), "-$ 1.234,50");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123.456");
    }

    #[test]
    fn test_format_percent_and_round() {
        assert_eq!(format_percent(26.666), "26,67 %");
        assert_eq!(round2(1428.5714), 1428.57);
        assert_eq!(round2(33.336), 33.34);
    }
}
