/// Parses a planar coordinate value.
///
/// Leading whitespace is ignored and the longest prefix that forms
/// a decimal number is used, so `"600000.5ft"` reads as `600000.5`.
/// Fields without such a prefix and infinite values are rejected.
pub fn parse_coordinate(field: &str) -> Option<f64> {
    let field = field.trim_start();
    let len = decimal_prefix_len(field.as_bytes());
    if len == 0 {
        return None;
    }
    field[..len]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` literal,
/// with at least one digit in the mantissa.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let exp_digits = count_digits(&bytes[pos + 1 + sign..]);
        if exp_digits > 0 {
            pos += 1 + sign + exp_digits;
        }
    }
    pos
}
