use crate::error::{AdvisorError, Result};
use crate::models::{CropTemperatureProfile, DaySpan, RawTemperatureRanges, TemperatureRange};

/// Parse a `"<low>-<high>"` band such as `"10-15"` or `"-5 - 2"`
///
/// Halves are parsed independently; `low <= high` is not checked here.
///
/// # Examples
/// ```
/// use crop_advisor::readers::parse_range;
///
/// let band = parse_range(" 10-15 ").unwrap();
/// assert_eq!((band.min, band.max), (10.0, 15.0));
///
/// let frost = parse_range("-5--2").unwrap();
/// assert_eq!((frost.min, frost.max), (-5.0, -2.0));
/// ```
pub fn parse_range(text: &str) -> Result<TemperatureRange> {
    let trimmed = text.trim();

    let separator = find_separator(trimmed).ok_or_else(|| AdvisorError::RangeFormat {
        input: text.to_string(),
        reason: "expected '<low>-<high>'".to_string(),
    })?;

    let min = parse_bound(text, &trimmed[..separator])?;
    let max = parse_bound(text, &trimmed[separator + 1..])?;

    Ok(TemperatureRange::new(min, max))
}

/// Parse the three raw bands of a crop record and check their ordering
pub fn parse_temperature_profile(raw: &RawTemperatureRanges) -> Result<CropTemperatureProfile> {
    let profile = CropTemperatureProfile::new(
        parse_range(&raw.min)?,
        parse_range(&raw.optimal)?,
        parse_range(&raw.max)?,
    );

    profile.validate_ordering()?;

    Ok(profile)
}

/// Like [`parse_range`], but a lone number is read as a zero-width band.
/// Used for catalog quantities such as `"500 - 800"` or `"90"`.
pub fn parse_span(text: &str) -> Result<TemperatureRange> {
    let trimmed = text.trim();

    match find_separator(trimmed) {
        Some(_) => parse_range(text),
        None => {
            let value = parse_bound(text, trimmed)?;
            Ok(TemperatureRange::new(value, value))
        }
    }
}

/// Parse a growing period value (`"120 - 150"`, `"90"`) into whole days
pub fn parse_day_span(text: &str) -> Result<DaySpan> {
    let span = parse_span(text)?;

    let whole_days = |value: f64| -> Result<u32> {
        if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
            Ok(value as u32)
        } else {
            Err(AdvisorError::RangeFormat {
                input: text.to_string(),
                reason: format!("'{}' is not a whole number of days", value),
            })
        }
    };

    let shortest = whole_days(span.min)?;
    let longest = whole_days(span.max)?;

    if shortest > longest {
        return Err(AdvisorError::RangeFormat {
            input: text.to_string(),
            reason: "shortest period exceeds longest".to_string(),
        });
    }

    Ok(DaySpan::new(shortest, longest))
}

/// Byte index of the `-` splitting the two halves. A leading `-` belongs to
/// the lower bound, and a `-` right after the separator belongs to the upper.
fn find_separator(text: &str) -> Option<usize> {
    let mut previous: Option<char> = None;

    for (index, c) in text.char_indices() {
        if c == '-' && matches!(previous, Some(p) if p.is_ascii_digit() || p == '.') {
            return Some(index);
        }
        if !c.is_whitespace() {
            previous = Some(c);
        }
    }

    None
}

fn parse_bound(input: &str, half: &str) -> Result<f64> {
    let half = half.trim();

    match half.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AdvisorError::RangeFormat {
            input: input.to_string(),
            reason: format!("'{}' is not a number", half),
        }),
    }
}
