/// Quantity and unit label split out of a free-form unit string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUnit {
    pub quantity: f64,
    pub unit_label: String,
}

impl ParsedUnit {
    /// True when the unit string had no numeric prefix
    pub fn is_malformed(&self) -> bool {
        self.quantity.is_nan()
    }
}

/// Split a unit string such as `"200 g"` or `"1 large clove"` into quantity and label.
///
/// The first whitespace-separated token is read as a decimal number, taking
/// its longest numeric prefix (`"200g"` reads as 200, `"1/2"` as 1). A token
/// with no numeric prefix yields NaN. The remaining tokens are joined with
/// single spaces to form the label.
pub fn parse_unit(unit: &str) -> ParsedUnit {
    let mut tokens = unit.split_whitespace();
    let quantity = tokens.next().map_or(f64::NAN, parse_leading_float);
    let unit_label = tokens.collect::<Vec<_>>().join(" ");

    ParsedUnit {
        quantity,
        unit_label,
    }
}

fn parse_leading_float(token: &str) -> f64 {
    let bytes = token.as_bytes();
    let signed = matches!(bytes.first(), Some(b'+' | b'-'));
    let mut end = usize::from(signed);

    if token[end..].starts_with("Infinity") {
        return if token.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = digits_at(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_at(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_at(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    token[..end].parse().unwrap_or(f64::NAN)
}

fn digits_at(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

const VULGAR_FRACTIONS: [(char, &str); 9] = [
    ('\u{00bd}', "0.5"),
    ('\u{00bc}', "0.25"),
    ('\u{2153}', "0.333"),
    ('\u{2154}', "0.667"),
    ('\u{00be}', "0.75"),
    ('\u{215b}', "0.125"),
    ('\u{215c}', "0.375"),
    ('\u{215d}', "0.625"),
    ('\u{215e}', "0.875"),
];

/// Replace Unicode vulgar fractions with decimals so `"½ cup"` reads as `"0.5 cup"`.
/// A fraction glued to a whole number becomes a mixed number: `"1½"` is `"1.5"`.
pub fn normalize_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        let Some((_, decimal)) = VULGAR_FRACTIONS.iter().find(|(frac, _)| *frac == c) else {
            out.push(c);
            continue;
        };

        if ends_with_whole_number(&out) {
            out.push_str(&decimal[1..]);
        } else {
            out.push_str(decimal);
        }
    }

    out
}

fn ends_with_whole_number(text: &str) -> bool {
    let digits = text.chars().rev().take_while(char::is_ascii_digit).count();
    digits > 0 && !text[..text.len() - digits].ends_with('.')
}
