//! Identity documents and dates.

use chrono::{Days, Months, NaiveDate};
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Oldest birth date is this many years before the reference date.
pub const MAX_BIRTH_AGE_YEARS: u32 = 115;

/// US SSN-shaped identifier: `AAA-GG-SSSS`.
///
/// Area numbers 000, 666 and 900-999 are never issued, nor are group 00 or
/// serial 0000.
pub fn national_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = loop {
        let area = rng.random_range(1..=899);
        if area != 666 {
            break area;
        }
    };
    let group = rng.random_range(1..=99);
    let serial = rng.random_range(1..=9999);
    format!("{area:03}-{group:02}-{serial:04}")
}

/// 8 to 12 ASCII letters.
pub fn passport_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(8..=12);
    (0..len)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}

/// Uniform date between `MAX_BIRTH_AGE_YEARS` before `reference` and `reference`.
pub fn date_of_birth<R: Rng + ?Sized>(reference: NaiveDate, rng: &mut R) -> NaiveDate {
    let earliest = reference
        .checked_sub_months(Months::new(MAX_BIRTH_AGE_YEARS * 12))
        .unwrap_or(reference);
    let span = (reference - earliest).num_days().max(0) as u64;
    let offset = rng.random_range(0..=span);
    earliest
        .checked_add_days(Days::new(offset))
        .unwrap_or(reference)
}
