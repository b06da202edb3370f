//! Realistic-looking values from the `fake` crate (en locale).

use fake::Fake;
use fake::faker::address::en::{CityName, CountryName, StateName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    PhoneNumber().fake_with_rng(rng)
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    CityName().fake_with_rng(rng)
}

pub fn country<R: Rng + ?Sized>(rng: &mut R) -> String {
    CountryName().fake_with_rng(rng)
}

pub fn state<R: Rng + ?Sized>(rng: &mut R) -> String {
    StateName().fake_with_rng(rng)
}

pub fn zip_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    ZipCode().fake_with_rng(rng)
}

pub fn occupation<R: Rng + ?Sized>(rng: &mut R) -> String {
    Title().fake_with_rng(rng)
}

/// `count` lorem words joined by `", "`.
pub fn word_list<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    let words: Vec<String> = Words(count..count + 1).fake_with_rng(rng);
    words.join(", ")
}
