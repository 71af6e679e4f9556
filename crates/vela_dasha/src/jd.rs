//! Julian-date helpers and the year-length convention.
//!
//! All years→instant conversions in the engine go through
//! [`days_per_year`]. Using one constant everywhere is what keeps child
//! boundaries re-derivable from durations without drift between levels.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Days per dasha year: 365.25.
pub fn days_per_year() -> Decimal {
    Decimal::new(36525, 2)
}

/// Convert a span in years to days.
pub fn years_to_days(years: Decimal) -> Decimal {
    years * days_per_year()
}

/// Convert a span in days to years.
pub fn days_to_years(days: Decimal) -> Decimal {
    days / days_per_year()
}

/// Julian Date (UTC) at 00:00 of a Gregorian calendar date.
///
/// Integer Fliegel–Van Flandern form, exact for any date after 4800 BCE.
pub fn calendar_to_jd(year: i32, month: u32, day: u32) -> Decimal {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);

    let a = (14 - m) / 12;
    let y2 = y + 4800 - a;
    let m2 = m + 12 * a - 3;
    let jdn = d + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 32045;

    // jdn is the JD at noon; midnight is half a day earlier.
    Decimal::from(jdn) - Decimal::new(5, 1)
}

/// Gregorian calendar date containing a Julian Date (UTC).
///
/// Returns `None` if `jd` is outside the convertible range.
pub fn jd_to_calendar(jd: Decimal) -> Option<(i32, u32, u32)> {
    let jdn = (jd + Decimal::new(5, 1)).floor().to_i64()?;

    let mut l = jdn + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l = l - (1461 * i) / 4 + 31;
    let j = (80 * l) / 2447;
    let d = l - (2447 * j) / 80;
    l = j / 11;
    let m = j + 2 - 12 * l;
    let y = 100 * (n - 49) + i + l;

    Some((i32::try_from(y).ok()?, u32::try_from(m).ok()?, u32::try_from(d).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_per_year_is_julian() {
        assert_eq!(days_per_year(), Decimal::new(36525, 2));
    }

    #[test]
    fn years_days_round_trip() {
        let years = Decimal::from(20u32);
        assert_eq!(days_to_years(years_to_days(years)), years);
    }

    #[test]
    fn j2000_midnight() {
        // 2000-01-01 00:00 UTC = JD 2451544.5
        assert_eq!(calendar_to_jd(2000, 1, 1), Decimal::new(24515445, 1));
    }

    #[test]
    fn epoch_1990() {
        // 1990-06-15 00:00 UTC = JD 2448057.5
        assert_eq!(calendar_to_jd(1990, 6, 15), Decimal::new(24480575, 1));
    }

    #[test]
    fn calendar_round_trip() {
        let dates = [(2000, 1, 1), (1987, 3, 29), (2024, 12, 31), (1900, 2, 28)];
        for (y, m, d) in dates {
            let jd = calendar_to_jd(y, m, d);
            assert_eq!(jd_to_calendar(jd), Some((y, m, d)));
        }
    }

    #[test]
    fn mid_day_maps_to_same_date() {
        let jd = calendar_to_jd(2000, 1, 1) + Decimal::new(25, 2);
        assert_eq!(jd_to_calendar(jd), Some((2000, 1, 1)));
    }
}
