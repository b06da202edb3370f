use popdb_core::persons::column;
use popdb_core::{Record, SqlValue};

/// Status of a record that has not gone through downstream hashing.
pub const UNHASHED: &str = "UNHASHED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 3] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Divorced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    PhD,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::PhD,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::PhD => "PhD",
        }
    }
}

/// One synthetic person. The identity key is left to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub full_name: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub email: String,
    pub gender: Gender,
    pub national_id: String,
    pub phone_number: String,
    pub passport_number: String,
    pub age: i32,
    pub city: String,
    pub country: String,
    pub state: String,
    pub zip_code: String,
    pub occupation: String,
    pub marital_status: MaritalStatus,
    pub education_level: EducationLevel,
    /// Comma-joined words.
    pub hobbies: String,
    /// Comma-joined words.
    pub language_preferences: String,
    pub status: String,
}

impl Record for Person {
    fn value(&self, name: &str) -> Option<SqlValue> {
        let value: SqlValue = match name {
            column::FULL_NAME => self.full_name.as_str().into(),
            column::DATE_OF_BIRTH => self.date_of_birth.as_str().into(),
            column::EMAIL => self.email.as_str().into(),
            column::GENDER => self.gender.as_str().into(),
            column::NATIONAL_ID => self.national_id.as_str().into(),
            column::PHONE_NUMBER => self.phone_number.as_str().into(),
            column::PASSPORT_NUMBER => self.passport_number.as_str().into(),
            column::AGE => self.age.into(),
            column::CITY => self.city.as_str().into(),
            column::COUNTRY => self.country.as_str().into(),
            column::STATE => self.state.as_str().into(),
            column::ZIP_CODE => self.zip_code.as_str().into(),
            column::OCCUPATION => self.occupation.as_str().into(),
            column::MARITAL_STATUS => self.marital_status.as_str().into(),
            column::EDUCATION_LEVEL => self.education_level.as_str().into(),
            column::HOBBIES => self.hobbies.as_str().into(),
            column::LANGUAGE_PREFERENCES => self.language_preferences.as_str().into(),
            column::STATUS => self.status.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}
