use crate::value::FilterValue;
use serde::Serialize;
use std::fmt;

/// Country code assumed for ten-digit numbers and hidden on output.
pub const IMPLICIT_COUNTRY_CODE: &str = "1";

const IMPLICIT_COUNTRY_VALUE: u32 = 1;

const EXCHANGE_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Fixed(&'static str),
    Slice(usize, usize),
}

impl Segment {
    fn extract(self, digits: &str) -> String {
        match self {
            Segment::Fixed(value) => value.to_string(),
            Segment::Slice(start, end) => digits.get(start..end).unwrap_or_default().to_string(),
        }
    }

    pub fn width(self) -> usize {
        match self {
            Segment::Fixed(value) => value.len(),
            Segment::Slice(start, end) => end.saturating_sub(start),
        }
    }
}

/// Positional split of a digit string of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneLayout {
    pub digits: usize,
    pub country: Segment,
    pub area_code: Segment,
    pub local_number: Segment,
}

pub const PHONE_LAYOUTS: [PhoneLayout; 3] = [
    // PPP####### -> (PPP) ###-####
    PhoneLayout {
        digits: 10,
        country: Segment::Fixed(IMPLICIT_COUNTRY_CODE),
        area_code: Segment::Slice(0, 3),
        local_number: Segment::Slice(3, 10),
    },
    // CPPP####### -> C (PPP) ###-####
    PhoneLayout {
        digits: 11,
        country: Segment::Slice(0, 1),
        area_code: Segment::Slice(1, 4),
        local_number: Segment::Slice(4, 11),
    },
    // CCCPP####### -> CCC (PP) ###-####
    PhoneLayout {
        digits: 12,
        country: Segment::Slice(0, 3),
        area_code: Segment::Slice(3, 5),
        local_number: Segment::Slice(5, 12),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneParts {
    pub country: String,
    pub area_code: String,
    pub local_number: String,
}

impl fmt::Display for PhoneParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compared by value: a padded "001" is hidden like "1".
        let country = if self.country.parse::<u32>() == Ok(IMPLICIT_COUNTRY_VALUE) {
            ""
        } else {
            self.country.as_str()
        };
        let (exchange, line) = split_local_number(&self.local_number);
        let rendered = format!("{} ({}) {}-{}", country, self.area_code, exchange, line);
        f.write_str(rendered.trim())
    }
}

/// Trims the raw value and drops a single leading `+`.
pub fn digit_string(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('+').unwrap_or(trimmed)
}

/// Splits an already normalized digit string into its components. Returns
/// `None` for non-digit content or an unsupported length.
pub fn parse_phone(digits: &str) -> Option<PhoneParts> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let layout = PHONE_LAYOUTS
        .iter()
        .find(|layout| layout.digits == digits.len())?;

    Some(PhoneParts {
        country: layout.country.extract(digits),
        area_code: layout.area_code.extract(digits),
        local_number: layout.local_number.extract(digits),
    })
}

/// Formats a phone-like value for display.
///
/// Empty input renders as an empty string. Input that is not a 10, 11 or 12
/// digit number (after trimming and dropping one leading `+`) is returned
/// unchanged.
pub fn format_phone(input: impl Into<FilterValue>) -> String {
    let input = input.into();
    if input.is_empty_input() {
        return String::new();
    }

    let raw = input.to_string();
    match parse_phone(digit_string(&raw)) {
        Some(parts) => parts.to_string(),
        None => raw,
    }
}

// A short local number keeps the hyphen with an empty suffix.
fn split_local_number(local: &str) -> (&str, &str) {
    let split = local
        .char_indices()
        .nth(EXCHANGE_DIGITS)
        .map_or(local.len(), |(idx, _)| idx);
    local.split_at(split)
}

#[cfg(test)]
mod tests {
    use super::{
        digit_string, format_phone, parse_phone, split_local_number, PhoneParts, Segment,
        PHONE_LAYOUTS,
    };
    use crate::value::FilterValue;

    #[test]
    fn empty_inputs_render_empty() {
        assert_eq!(format_phone(FilterValue::Null), "");
        assert_eq!(format_phone(None::<&str>), "");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone(0), "");
    }

    #[test]
    fn ten_digits_assume_nanp() {
        assert_eq!(format_phone("5555555555"), "(555) 555-5555");
    }

    #[test]
    fn explicit_country_one_is_suppressed() {
        assert_eq!(format_phone("15555555555"), "(555) 555-5555");
        assert_eq!(format_phone("+15555555555"), "(555) 555-5555");
    }

    #[test]
    fn single_digit_country_is_shown() {
        assert_eq!(format_phone("44155555555"), "4 (415) 555-5555");
    }

    #[test]
    fn three_digit_country_uses_two_digit_area() {
        assert_eq!(format_phone("442055555555"), "442 (05) 555-5555");
    }

    #[test]
    fn zero_padded_country_one_is_suppressed() {
        assert_eq!(format_phone("001415555555"), "(41) 555-5555");
        assert_eq!(format_phone("+001415555555"), "(41) 555-5555");
        assert_eq!(format_phone("010415555555"), "010 (41) 555-5555");
    }

    #[test]
    fn unsupported_length_returns_input() {
        assert_eq!(format_phone("4415555555555"), "4415555555555");
        assert_eq!(format_phone("555555"), "555555");
    }

    #[test]
    fn non_digits_return_input_untouched() {
        assert_eq!(format_phone("555-555-5555"), "555-555-5555");
        assert_eq!(format_phone(" +1 555 555 5555 "), " +1 555 555 5555 ");
        assert_eq!(format_phone("++15555555555"), "++15555555555");
    }

    #[test]
    fn whitespace_only_falls_through_unchanged() {
        assert_eq!(format_phone("   "), "   ");
    }

    #[test]
    fn surrounding_whitespace_is_ignored_when_formatting() {
        assert_eq!(format_phone("  5555555555\n"), "(555) 555-5555");
    }

    #[test]
    fn numeric_input_is_coerced() {
        assert_eq!(format_phone(5555555555_i64), "(555) 555-5555");
        assert_eq!(format_phone(44155555555_u64), "4 (415) 555-5555");
        assert_eq!(format_phone(5555555555.5), "5555555555.5");
    }

    #[test]
    fn formatting_twice_is_stable() {
        for input in [
            "5555555555",
            "15555555555",
            "+15555555555",
            "44155555555",
            "442055555555",
            "4415555555555",
            "555-555-5555",
            "",
        ] {
            let once = format_phone(input);
            assert_eq!(format_phone(once.as_str()), once, "input {input:?}");
        }
    }

    #[test]
    fn every_layout_yields_a_full_local_number() {
        for layout in PHONE_LAYOUTS {
            assert_eq!(layout.local_number.width(), 7, "layout {layout:?}");
            for segment in [layout.country, layout.area_code, layout.local_number] {
                if let Segment::Slice(_, end) = segment {
                    assert!(end <= layout.digits, "layout {layout:?}");
                }
            }
        }
    }

    #[test]
    fn short_local_number_keeps_bare_hyphen() {
        assert_eq!(split_local_number("55"), ("55", ""));
        let parts = PhoneParts {
            country: "44".to_string(),
            area_code: "20".to_string(),
            local_number: "55".to_string(),
        };
        assert_eq!(parts.to_string(), "44 (20) 55-");
    }

    #[test]
    fn parse_phone_exposes_components() {
        let parts = parse_phone("44155555555").expect("parts");
        assert_eq!(parts.country, "4");
        assert_eq!(parts.area_code, "415");
        assert_eq!(parts.local_number, "5555555");
        assert!(parse_phone("").is_none());
        assert!(parse_phone("55a5555555").is_none());
    }

    #[test]
    fn digit_string_strips_one_plus() {
        assert_eq!(digit_string(" +155 "), "155");
        assert_eq!(digit_string("++1"), "+1");
    }
}
