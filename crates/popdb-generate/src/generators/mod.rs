pub mod faker_rs;
pub mod identity;

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use popdb_core::persons::column;
use popdb_core::{TableDef, persons_table, validate_table};

use crate::errors::GenerationError;
use crate::model::{EducationLevel, Gender, MaritalStatus, Person, UNHASHED};
use crate::text::truncate;

pub const AGE_RANGE: RangeInclusive<i32> = 18..=80;
pub const HOBBY_COUNT: usize = 5;
pub const LANGUAGE_COUNT: usize = 3;

/// RNG for a generation run: reproducible when `seed` is set, seeded from
/// OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Maximum lengths of the string columns, read once from the table definition.
#[derive(Debug, Clone, Copy)]
struct FieldLimits {
    full_name: usize,
    date_of_birth: usize,
    email: usize,
    gender: usize,
    national_id: usize,
    phone_number: usize,
    passport_number: usize,
    city: usize,
    country: usize,
    state: usize,
    zip_code: usize,
    occupation: usize,
    marital_status: usize,
    education_level: usize,
    hobbies: usize,
    language_preferences: usize,
    status: usize,
}

impl FieldLimits {
    fn from_table(table: &TableDef) -> Result<Self, GenerationError> {
        let limit = |name: &str| {
            table.max_length(name).ok_or_else(|| {
                GenerationError::InvalidSchema(format!(
                    "table {} has no string column '{}'",
                    table.name, name
                ))
            })
        };

        Ok(Self {
            full_name: limit(column::FULL_NAME)?,
            date_of_birth: limit(column::DATE_OF_BIRTH)?,
            email: limit(column::EMAIL)?,
            gender: limit(column::GENDER)?,
            national_id: limit(column::NATIONAL_ID)?,
            phone_number: limit(column::PHONE_NUMBER)?,
            passport_number: limit(column::PASSPORT_NUMBER)?,
            city: limit(column::CITY)?,
            country: limit(column::COUNTRY)?,
            state: limit(column::STATE)?,
            zip_code: limit(column::ZIP_CODE)?,
            occupation: limit(column::OCCUPATION)?,
            marital_status: limit(column::MARITAL_STATUS)?,
            education_level: limit(column::EDUCATION_LEVEL)?,
            hobbies: limit(column::HOBBIES)?,
            language_preferences: limit(column::LANGUAGE_PREFERENCES)?,
            status: limit(column::STATUS)?,
        })
    }
}

/// Builds [`Person`] records that fit a `persons` table definition.
#[derive(Debug, Clone)]
pub struct PersonGenerator {
    limits: FieldLimits,
    reference_date: NaiveDate,
}

impl PersonGenerator {
    /// Generator for `table`; birth dates are drawn relative to `reference_date`.
    pub fn new(table: &TableDef, reference_date: NaiveDate) -> Result<Self, GenerationError> {
        validate_table(table)?;
        Ok(Self {
            limits: FieldLimits::from_table(table)?,
            reference_date,
        })
    }

    /// Generator for the built-in `persons` table.
    pub fn for_persons(reference_date: NaiveDate) -> Result<Self, GenerationError> {
        Self::new(&persons_table(), reference_date)
    }

    /// One fully populated record.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Person {
        let limits = &self.limits;
        let gender = Gender::ALL[rng.random_range(0..Gender::ALL.len())];
        let marital_status = MaritalStatus::ALL[rng.random_range(0..MaritalStatus::ALL.len())];
        let education_level =
            EducationLevel::ALL[rng.random_range(0..EducationLevel::ALL.len())];

        // Category labels are all shorter than their columns; they are never cut.
        debug_assert!(gender.as_str().len() <= limits.gender);
        debug_assert!(marital_status.as_str().len() <= limits.marital_status);
        debug_assert!(education_level.as_str().len() <= limits.education_level);

        let date_of_birth = identity::date_of_birth(self.reference_date, rng)
            .format("%Y-%m-%d")
            .to_string();

        Person {
            age: rng.random_range(AGE_RANGE),
            date_of_birth: truncate(&date_of_birth, limits.date_of_birth),
            full_name: truncate(&faker_rs::full_name(rng), limits.full_name),
            email: truncate(&faker_rs::email(rng), limits.email),
            gender,
            national_id: truncate(&identity::national_id(rng), limits.national_id),
            phone_number: truncate(&faker_rs::phone_number(rng), limits.phone_number),
            passport_number: truncate(&identity::passport_number(rng), limits.passport_number),
            city: truncate(&faker_rs::city(rng), limits.city),
            country: truncate(&faker_rs::country(rng), limits.country),
            state: truncate(&faker_rs::state(rng), limits.state),
            zip_code: truncate(&faker_rs::zip_code(rng), limits.zip_code),
            occupation: truncate(&faker_rs::occupation(rng), limits.occupation),
            marital_status,
            education_level,
            hobbies: truncate(&faker_rs::word_list(HOBBY_COUNT, rng), limits.hobbies),
            language_preferences: truncate(
                &faker_rs::word_list(LANGUAGE_COUNT, rng),
                limits.language_preferences,
            ),
            status: truncate(UNHASHED, limits.status),
        }
    }

    pub fn generate_batch<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Person> {
        let people: Vec<Person> = (0..count).map(|_| self.generate(rng)).collect();
        debug!(event = "batch_generated", rows = people.len());
        people
    }
}

#[cfg(test)]
mod tests {
    use popdb_core::{ColumnDef, persons_table};

    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
    }

    #[test]
    fn same_seed_gives_same_records() {
        let generator = PersonGenerator::for_persons(reference()).expect("generator");
        let first = generator.generate_batch(10, &mut seeded_rng(Some(42)));
        let second = generator.generate_batch(10, &mut seeded_rng(Some(42)));
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let generator = PersonGenerator::for_persons(reference()).expect("generator");
        let first = generator.generate_batch(10, &mut seeded_rng(Some(1)));
        let second = generator.generate_batch(10, &mut seeded_rng(Some(2)));
        assert_ne!(first, second);
    }

    #[test]
    fn honors_shorter_declared_lengths() {
        let mut table = persons_table();
        for col in &mut table.columns {
            if col.name == column::FULL_NAME || col.name == column::HOBBIES {
                *col = ColumnDef::varchar(col.name.clone(), 4);
            }
        }
        let generator = PersonGenerator::new(&table, reference()).expect("generator");
        let mut rng = seeded_rng(Some(9));
        for person in generator.generate_batch(50, &mut rng) {
            assert!(person.full_name.chars().count() <= 4);
            assert!(person.hobbies.chars().count() <= 4);
        }
    }

    #[test]
    fn rejects_table_without_required_column() {
        let mut table = persons_table();
        table.columns.retain(|c| c.name != column::EMAIL);
        assert!(matches!(
            PersonGenerator::new(&table, reference()),
            Err(GenerationError::InvalidSchema(_))
        ));
    }

    #[test]
    fn word_lists_have_expected_counts() {
        let generator = PersonGenerator::for_persons(reference()).expect("generator");
        let person = generator.generate(&mut seeded_rng(Some(5)));
        assert_eq!(person.hobbies.split(", ").count(), HOBBY_COUNT);
        assert_eq!(
            person.language_preferences.split(", ").count(),
            LANGUAGE_COUNT
        );
    }
}
