//! The `persons` table.

use crate::schema::{ColumnDef, TableDef};

pub const PERSONS_TABLE: &str = "persons";

/// Column names of the `persons` table.
pub mod column {
    pub const ID: &str = "id";
    pub const FULL_NAME: &str = "full_name";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const EMAIL: &str = "email";
    pub const GENDER: &str = "gender";
    pub const NATIONAL_ID: &str = "national_id";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const PASSPORT_NUMBER: &str = "passport_number";
    pub const AGE: &str = "age";
    pub const CITY: &str = "city";
    pub const COUNTRY: &str = "country";
    pub const STATE: &str = "state";
    pub const ZIP_CODE: &str = "zip_code";
    pub const OCCUPATION: &str = "occupation";
    pub const MARITAL_STATUS: &str = "marital_status";
    pub const EDUCATION_LEVEL: &str = "education_level";
    pub const HOBBIES: &str = "hobbies";
    pub const LANGUAGE_PREFERENCES: &str = "language_preferences";
    pub const STATUS: &str = "status";
}

/// Definition of the `persons` table, in column order.
pub fn persons_table() -> TableDef {
    TableDef::new(
        PERSONS_TABLE,
        vec![
            ColumnDef::identity(column::ID),
            ColumnDef::varchar(column::FULL_NAME, 100),
            ColumnDef::varchar(column::DATE_OF_BIRTH, 20),
            ColumnDef::varchar(column::EMAIL, 100),
            ColumnDef::varchar(column::GENDER, 10),
            ColumnDef::varchar(column::NATIONAL_ID, 20),
            ColumnDef::varchar(column::PHONE_NUMBER, 20),
            ColumnDef::varchar(column::PASSPORT_NUMBER, 20),
            ColumnDef::integer(column::AGE),
            ColumnDef::varchar(column::CITY, 50),
            ColumnDef::varchar(column::COUNTRY, 50),
            ColumnDef::varchar(column::STATE, 50),
            ColumnDef::varchar(column::ZIP_CODE, 20),
            ColumnDef::varchar(column::OCCUPATION, 50),
            ColumnDef::varchar(column::MARITAL_STATUS, 20),
            ColumnDef::varchar(column::EDUCATION_LEVEL, 50),
            ColumnDef::varchar(column::HOBBIES, 200),
            ColumnDef::varchar(column::LANGUAGE_PREFERENCES, 200),
            ColumnDef::varchar(column::STATUS, 20),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnType;

    #[test]
    fn has_nineteen_columns_with_identity_first() {
        let table = persons_table();
        assert_eq!(table.columns.len(), 19);
        assert!(table.columns[0].primary_key);
        assert_eq!(table.columns[0].name, column::ID);
        assert_eq!(table.insertable_columns().count(), 18);
    }

    #[test]
    fn declares_expected_lengths() {
        let table = persons_table();
        assert_eq!(table.max_length(column::FULL_NAME), Some(100));
        assert_eq!(table.max_length(column::GENDER), Some(10));
        assert_eq!(table.max_length(column::HOBBIES), Some(200));
        assert_eq!(table.max_length(column::STATUS), Some(20));
        assert_eq!(
            table.column(column::AGE).map(|c| c.column_type),
            Some(ColumnType::Integer)
        );
    }
}
