/// Smallest magnitude printed without an exponent.
const MIN_PLAIN: f64 = 1e-4;
/// First magnitude printed with an exponent.
const MAX_PLAIN: f64 = 1e21;

/// Formats a number for display.
///
/// - Integral values print without a fractional part: `7`.
/// - Other values print the shortest decimal that reads back exactly: `34.6`.
/// - Magnitudes below `1e-4` or from `1e21` upward use an exponent with an
///   explicit sign and at least two digits: `1e+21`, `1.5e-07`.
/// - Non-finite values print as `+Inf`, `-Inf` and `NaN`.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(34.6), "34.6");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(MIN_PLAIN..MAX_PLAIN).contains(&magnitude) {
        let formatted = format!("{value:e}");
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(("+", exponent), |digits| ("-", digits));
            return format!("{mantissa}e{sign}{digits:0>2}");
        }
    }

    format!("{value}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn fractions_use_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(123.9), "123.9");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(1e100), "1e+100");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "+Inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
