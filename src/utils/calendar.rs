use crate::error::{AdvisorError, Result};

/// Days elapsed before the first of each month in a non-leap year
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Longest legal day per month. February allows the 29th even though the
/// ordinal table is non-leap.
const MAX_DAY_OF_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Check that `month`/`day` name a real calendar day (Feb 29 allowed)
pub fn validate_month_day(month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) || day == 0 || day > MAX_DAY_OF_MONTH[(month - 1) as usize] {
        return Err(AdvisorError::InvalidDate { month, day });
    }
    Ok(())
}

/// Ordinal day within a non-leap year (1 January = 1)
///
/// Leap years are never special-cased: 29 February and 1 March share
/// ordinal 60.
///
/// # Examples
/// ```
/// use crop_advisor::utils::day_of_year;
///
/// assert_eq!(day_of_year(1, 1).unwrap(), 1);
/// assert_eq!(day_of_year(12, 31).unwrap(), 365);
/// assert!(day_of_year(13, 1).is_err());
/// ```
pub fn day_of_year(month: u32, day: u32) -> Result<u32> {
    validate_month_day(month, day)?;
    Ok(DAYS_BEFORE_MONTH[(month - 1) as usize] + day)
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_boundaries() {
        assert_eq!(day_of_year(1, 31).unwrap(), 31);
        assert_eq!(day_of_year(2, 1).unwrap(), 32);
        assert_eq!(day_of_year(3, 1).unwrap(), 60);
        assert_eq!(day_of_year(6, 15).unwrap(), 166);
        assert_eq!(day_of_year(12, 1).unwrap(), 335);
        assert_eq!(day_of_year(12, 31).unwrap(), 365);
    }

    #[test]
    fn test_leap_day_not_distinguished() {
        assert_eq!(day_of_year(2, 29).unwrap(), day_of_year(3, 1).unwrap());
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(day_of_year(0, 10).is_err());
        assert!(day_of_year(13, 10).is_err());
        assert!(day_of_year(4, 0).is_err());
        assert!(day_of_year(4, 31).is_err());
        assert!(day_of_year(2, 30).is_err());
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
