//! Century buckets for signed (BC/AD) years

/// Signed century of a year.
///
/// Century 1 spans years 1..=100 and century -1 spans -1..=-100; there is no
/// year zero in the calendar, so `century(0)` is 0 by convention.
#[inline]
pub const fn century(year: i32) -> i32 {
    if year == 0 {
        return 0;
    }
    let bucket = (year.unsigned_abs() - 1) / 100 + 1;
    if year < 0 {
        -(bucket as i32)
    } else {
        bucket as i32
    }
}

/// Century of an optional year; an absent year has no century
#[inline]
pub fn century_of(year: Option<i32>) -> Option<i32> {
    year.map(century)
}
