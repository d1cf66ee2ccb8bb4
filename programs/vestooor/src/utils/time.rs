//! UTC calendar helpers for vesting end dates.
//! - date picker values become UTC midnight Unix seconds
//! - millisecond wall-clock values round to the nearest second, halves up
//! - timestamps render as `YYYY-MM-DD HH:MM:SS UTC`

use crate::constants::SECONDS_PER_DAY;
use crate::error::VestooorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: i32,  // e.g. 2026
    pub month: u32, // 1-12
    pub day: u32,   // 1-31
    pub sod: u32,   // seconds of day [0, 86399]
}

/// UTC midnight of the given calendar date.
pub fn unix_from_date(year: i32, month: u32, day: u32) -> Result<i64, VestooorError> {
    if day > days_in_month(year, month)? {
        return Err(VestooorError::InvalidTimestamp);
    }
    unix_from_datetime(DateTimeUtc {
        year,
        month,
        day,
        sod: 0,
    })
}

/// Milliseconds to seconds, rounding halves toward +inf.
pub fn seconds_from_millis(ms: i64) -> i64 {
    ms.saturating_add(500).div_euclid(1000)
}

pub fn format_utc(ts: i64) -> String {
    let dt = datetime_from_unix(ts);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        dt.year,
        dt.month,
        dt.day,
        dt.sod / 3600,
        (dt.sod % 3600) / 60,
        dt.sod % 60
    )
}

pub fn datetime_from_unix(ts: i64) -> DateTimeUtc {
    let days = ts.div_euclid(SECONDS_PER_DAY);
    let sod = ts.rem_euclid(SECONDS_PER_DAY) as u32;
    let (year, month, day) = civil_from_days(days);
    DateTimeUtc {
        year,
        month,
        day,
        sod,
    }
}

pub fn unix_from_datetime(dt: DateTimeUtc) -> Result<i64, VestooorError> {
    if dt.sod >= 86_400 {
        return Err(VestooorError::InvalidTimestamp);
    }
    let days = days_from_civil(dt.year, dt.month, dt.day)?;
    days.checked_mul(SECONDS_PER_DAY)
        .ok_or(VestooorError::MathOverflow)?
        .checked_add(dt.sod as i64)
        .ok_or(VestooorError::MathOverflow)
}

fn days_in_month(year: i32, month: u32) -> Result<u32, VestooorError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(VestooorError::InvalidTimestamp),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Proleptic Gregorian conversion: days from civil date.
/// Algorithm by Howard Hinnant (public domain).
fn days_from_civil(y: i32, m: u32, d: u32) -> Result<i64, VestooorError> {
    if !(1..=12).contains(&m) || d == 0 || d > 31 {
        return Err(VestooorError::InvalidTimestamp);
    }
    let y = y as i64 - if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 }.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = m as i64 + if m > 2 { -3 } else { 9 }; // [0, 11]
    let doy = (153 * mp + 2).div_euclid(5) + (d as i64) - 1; // [0, 365]
    let doe = yoe * 365 + yoe.div_euclid(4) - yoe.div_euclid(100) + doy; // [0, 146096]
    Ok(era * 146097 + doe - 719468)
}

/// Proleptic Gregorian conversion: civil date from days since epoch.
/// Algorithm by Howard Hinnant (public domain).
fn civil_from_days(z: i64) -> (i32, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 }.div_euclid(146097);
    let doe = z - era * 146097; // [0, 146096]
    let yoe = (doe - doe.div_euclid(1460) + doe.div_euclid(36524) - doe.div_euclid(146096))
        .div_euclid(365); // [0, 399]
    let y = (yoe + era * 400) as i32;
    let doy = doe - (365 * yoe + yoe.div_euclid(4) - yoe.div_euclid(100)); // [0, 365]
    let mp = (5 * doy + 2).div_euclid(153); // [0, 11]
    let d = (doy - (153 * mp + 2).div_euclid(5) + 1) as u32; // [1, 31]
    let m = (mp + if mp < 10 { 3 } else { -9 }) as u32; // [1, 12]
    let y = y + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}
