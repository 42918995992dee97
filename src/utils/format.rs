use std::iter;

// Enough fraction digits to print any f64 exactly (smallest subnormal is 2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1_074;

/// Rounds a plain decimal string ("123.456", no sign) to `places` fraction digits.
/// Ties round away from zero. Returns (integer digits, fraction digits).
fn round_half_up(plain: &str, places: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(places).is_some_and(|&d| d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let to_string = |ds: &[u8]| ds.iter().map(|&d| char::from(b'0' + d)).collect::<String>();
    (to_string(&digits[..split]), to_string(&digits[split..]))
}

/// Fixed-point text with exactly `places` fraction digits.
/// Rounds the exact binary value, ties away from zero (2.625 -> "2.63").
pub fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return js_non_finite(value).to_string();
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = round_half_up(&exact, places);
    let is_zero = int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if places == 0 {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

fn js_non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// Short label text: 1.50M, 2.25B, 12.00k. Below 1000 the plain value is shown.
///
/// Examples:
/// 1_500_000 -> "1.50M"
/// 1_125_000 -> "1.13M"
/// -2_000    -> "-2.00k"
/// 999       -> "999"
/// 12.5      -> "12.5"
/// 1e-7      -> "1e-7"
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        return format!("{}B", format_fixed(value / 1_000_000_000.0, 2));
    }
    if abs >= 1_000_000.0 {
        return format!("{}M", format_fixed(value / 1_000_000.0, 2));
    }
    if abs >= 1_000.0 {
        return format!("{}k", format_fixed(value / 1_000.0, 2));
    }
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    if value.is_nan() {
        return js_non_finite(value).to_string();
    }
    if abs < 1e-6 {
        // Tiny values switch to exponent notation: 1e-7, 2.5e-8
        return format!("{:e}", value);
    }
    value.to_string()
}

/// `format_compact` without an all-zero fraction: "100k", "3k", "1.50M".
pub fn format_compact_trimmed(value: f64) -> String {
    let compact = format_compact(value);
    for suffix in ["k", "M", "B"] {
        if let Some(whole) = compact
            .strip_suffix(suffix)
            .and_then(|s| s.strip_suffix(".00"))
        {
            return format!("{}{}", whole, suffix);
        }
    }
    compact
}

/// Full-precision label: thousands separated by ',' and at most two fraction digits,
/// trailing zeros trimmed. Rounds the shortest decimal form of the value, ties away
/// from zero. Negative values keep their sign even when they round to zero ("-0").
///
/// Examples:
/// 1234567.891 -> "1,234,567.89"
/// 1000        -> "1,000"
/// 1.005       -> "1.01"
/// 0.5         -> "0.5"
pub fn format_full(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Display for f64 is the shortest round-trip form, never in exponent notation
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = round_half_up(&shortest, 2);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if value.is_sign_negative() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Annual growth multiplier for a YoY percentage, e.g. 200 -> "3", 150 -> "2.5".
pub fn format_multiplier(yoy_percent: f64) -> String {
    format_full(1.0 + yoy_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_thresholds() {
        assert_eq!(format_compact(1_500_000.0), "1.50M");
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(1_000.0), "1.00k");
        assert_eq!(format_compact(21_000.0), "21.00k");
        assert_eq!(format_compact(999_999.0), "1000.00k");
        assert_eq!(format_compact(1_000_000_000.0), "1.00B");
        assert_eq!(format_compact(25_200_000_000.0), "25.20B");
    }

    #[test]
    fn compact_rounds_ties_up() {
        assert_eq!(format_compact(1_125_000.0), "1.13M");
        assert_eq!(format_compact(2_625.0), "2.63k");
        assert_eq!(format_compact(-2_625.0), "-2.63k");
        assert_eq!(format_compact(1_234_999_999.0), "1.23B");
    }

    #[test]
    fn compact_keeps_sign_and_small_values() {
        assert_eq!(format_compact(-1_500_000.0), "-1.50M");
        assert_eq!(format_compact(-2_000.0), "-2.00k");
        assert_eq!(format_compact(-42.0), "-42");
        assert_eq!(format_compact(12.5), "12.5");
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(-0.0), "0");
    }

    #[test]
    fn compact_uses_exponent_for_tiny_values() {
        assert_eq!(format_compact(1e-7), "1e-7");
        assert_eq!(format_compact(-2.5e-8), "-2.5e-8");
        assert_eq!(format_compact(0.000001), "0.000001");
        assert_eq!(format_compact(f64::NAN), "NaN");
        assert_eq!(format_compact(f64::INFINITY), "InfinityB");
    }

    #[test]
    fn compact_trimmed_drops_zero_fraction() {
        assert_eq!(format_compact_trimmed(100_000.0), "100k");
        assert_eq!(format_compact_trimmed(3_000.0), "3k");
        assert_eq!(format_compact_trimmed(1_500_000.0), "1.50M");
        assert_eq!(format_compact_trimmed(999.0), "999");
        assert_eq!(format_compact_trimmed(1.005), "1.005");
    }

    #[test]
    fn fixed_rounds_exact_binary_value() {
        assert_eq!(format_fixed(3.0, 2), "3.00");
        assert_eq!(format_fixed(1.125, 2), "1.13");
        // 1.005 is stored just below the tie
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(9.999, 2), "10.00");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn full_groups_thousands() {
        assert_eq!(format_full(1_234_567.891), "1,234,567.89");
        assert_eq!(format_full(1_000.0), "1,000");
        assert_eq!(format_full(100_000.0), "100,000");
        assert_eq!(format_full(999.0), "999");
        assert_eq!(format_full(5_000_000.0), "5,000,000");
        assert_eq!(format_full(999_999.999), "1,000,000");
    }

    #[test]
    fn full_limits_fraction_digits() {
        assert_eq!(format_full(0.5), "0.5");
        assert_eq!(format_full(238.095_238), "238.1");
        assert_eq!(format_full(12.345_6), "12.35");
        assert_eq!(format_full(2.999), "3");
        assert_eq!(format_full(0.0), "0");
    }

    #[test]
    fn full_rounds_shortest_decimal_ties_up() {
        assert_eq!(format_full(0.125), "0.13");
        assert_eq!(format_full(1.005), "1.01");
        assert_eq!(format_full(2.675), "2.68");
    }

    #[test]
    fn full_handles_negatives() {
        assert_eq!(format_full(-1_234.5), "-1,234.5");
        assert_eq!(format_full(-0.001), "-0");
        assert_eq!(format_full(-0.0), "-0");
        assert_eq!(format_full(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn multiplier_text() {
        assert_eq!(format_multiplier(200.0), "3");
        assert_eq!(format_multiplier(150.0), "2.5");
        assert_eq!(format_multiplier(0.0), "1");
        assert_eq!(format_multiplier(5.0), "1.05");
    }
}
