//! Display formatting for entry values.

use serde::{Deserialize, Serialize};

/// Rules for turning an entry value into display text.
///
/// # Example
///
/// ```rust
/// use abacus::core::DisplayFormat;
///
/// let format = DisplayFormat::default();
/// assert_eq!(format.format("1000000000000000"), "1.00000e+15");
/// assert_eq!(format.format("123.456789012345"), "123.4567890123");
/// assert_eq!(format.format("12."), "12.");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// Fractional digits shown before truncation.
    pub max_fraction_digits: usize,
    /// Magnitude at which values switch to scientific notation.
    pub scientific_threshold: f64,
    /// Fractional digits of the mantissa in scientific notation.
    pub scientific_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_fraction_digits: 10,
            scientific_threshold: 1e15,
            scientific_digits: 5,
        }
    }
}

impl DisplayFormat {
    /// Format an entry value for the display.
    ///
    /// The fractional part is kept as typed (trailing zeros and a bare
    /// trailing point survive) so in-progress entries render faithfully.
    /// Strings that are not numbers are returned unchanged.
    pub fn format(&self, value: &str) -> String {
        let Ok(number) = value.strip_suffix('.').unwrap_or(value).parse::<f64>() else {
            return value.to_string();
        };
        if !number.is_finite() {
            return value.to_string();
        }

        if number.abs() >= self.scientific_threshold {
            return to_exponential(number, self.scientific_digits);
        }

        match value.split_once('.') {
            Some((integer, fraction)) => {
                let fraction: String = fraction.chars().take(self.max_fraction_digits).collect();
                format!("{}.{}", format_integer(integer), fraction)
            }
            None => format_integer(value),
        }
    }
}

/// Format a value with the default display rules.
pub fn format_for_display(value: &str) -> String {
    DisplayFormat::default().format(value)
}

/// Integer part without grouping separators.
fn format_integer(integer: &str) -> String {
    match integer.parse::<f64>() {
        // Keep the sign of "-0" for values like "-0.5".
        Ok(n) if n == 0.0 && integer.starts_with('-') => "-0".to_string(),
        Ok(n) => format!("{}", n.trunc()),
        Err(_) => integer.to_string(),
    }
}

/// Scientific notation with an explicit exponent sign, e.g. `1.00000e+15`.
fn to_exponential(value: f64, digits: usize) -> String {
    let formatted = format!("{:.*e}", digits, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_grouping() {
        assert_eq!(format_for_display("0"), "0");
        assert_eq!(format_for_display("1234567"), "1234567");
        assert_eq!(format_for_display("-42"), "-42");
    }

    #[test]
    fn threshold_switches_to_scientific() {
        assert_eq!(format_for_display("1000000000000000"), "1.00000e+15");
        assert_eq!(format_for_display("-2500000000000000"), "-2.50000e+15");
        assert_eq!(format_for_display("999999999999999"), "999999999999999");
    }

    #[test]
    fn fraction_capped_at_ten_digits() {
        assert_eq!(format_for_display("123.456789012345"), "123.4567890123");
        assert_eq!(format_for_display("0.1234567890"), "0.1234567890");
    }

    #[test]
    fn in_progress_entries_render_as_typed() {
        assert_eq!(format_for_display("0."), "0.");
        assert_eq!(format_for_display("1.50"), "1.50");
        assert_eq!(format_for_display("-0.5"), "-0.5");
    }

    #[test]
    fn non_numeric_passes_through() {
        assert_eq!(format_for_display("Error"), "Error");
        assert_eq!(format_for_display("Infinity"), "Infinity");
    }

    #[test]
    fn custom_rules_apply() {
        let format = DisplayFormat {
            max_fraction_digits: 2,
            scientific_threshold: 1000.0,
            scientific_digits: 2,
        };
        assert_eq!(format.format("3.14159"), "3.14");
        assert_eq!(format.format("12345"), "1.23e+4");
    }

    #[test]
    fn small_exponents_keep_their_sign() {
        assert_eq!(to_exponential(0.00012, 1), "1.2e-4");
    }
}
