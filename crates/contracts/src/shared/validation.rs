//! Field rules mirrored from the API schemas so forms can reject early.

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Exclusive lower bound (`gt` in the API schemas)
    pub greater_than: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            greater_than: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Required text with a character-length window
    pub const fn text(min_length: usize, max_length: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min_length),
            max_length: Some(max_length),
            ..Self::none()
        }
    }

    /// Optional text capped at `max_length`
    pub const fn optional_text(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::none()
        }
    }

    /// Required strictly positive number
    pub const fn positive() -> Self {
        Self {
            required: true,
            greater_than: Some(0.0),
            ..Self::none()
        }
    }

    /// Required number inside `[min, max]`
    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            required: true,
            min: Some(min),
            max: Some(max),
            ..Self::none()
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} es obligatorio", field_label));
            }
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} debe tener al menos {} caracteres",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} no debe superar {} caracteres",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} debe ser un número", field_label));
        }

        if let Some(gt) = self.greater_than {
            if value <= gt {
                return Err(format!("{} debe ser mayor que {}", field_label, gt));
            }
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} debe ser al menos {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} no debe superar {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Parse a numeric form input and validate it
    pub fn parse_number(&self, raw: &str, field_label: &str) -> Result<f64, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(format!("{} es obligatorio", field_label));
        }
        let value = trimmed
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| format!("{} debe ser un número", field_label))?;
        self.validate_number(value, field_label)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length_window() {
        let rules = ValidationRules::text(3, 5);
        assert!(rules.validate_string("ab", "Código").is_err());
        assert!(rules.validate_string("abc", "Código").is_ok());
        assert!(rules.validate_string("abcdef", "Código").is_err());
        assert_eq!(
            rules.validate_string("  ", "Código").unwrap_err(),
            "Código es obligatorio"
        );
    }

    #[test]
    fn test_optional_text_accepts_empty() {
        let rules = ValidationRules::optional_text(4);
        assert!(rules.validate_string("", "Descripción").is_ok());
        assert!(rules.validate_string("hello", "Descripción").is_err());
    }

    #[test]
    fn test_positive_excludes_zero() {
        let rules = ValidationRules::positive();
        assert!(rules.validate_number(0.0, "Precio").is_err());
        assert!(rules.validate_number(0.01, "Precio").is_ok());
    }

    #[test]
    fn test_parse_number_accepts_decimal_comma() {
        let rules = ValidationRules::range(20.0, 500.0);
        assert_eq!(rules.parse_number("120,5", "Ancho").unwrap(), 120.5);
        assert!(rules.parse_number("x", "Ancho").is_err());
        assert!(rules.parse_number("19.99", "Ancho").is_err());
    }
}
