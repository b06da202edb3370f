use serde::{Deserialize, Serialize};

/// A table the populator owns end to end: it is dropped, recreated and
/// filled on every run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

/// Column definition in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
    pub is_nullable: bool,
    /// Identity primary key, assigned by the database on insert.
    pub primary_key: bool,
}

/// Scalar column types supported by the populator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    /// Variable-length string with a maximum length in characters.
    Varchar(u32),
}

impl ColumnType {
    /// SQL type name as used in `CREATE TABLE`.
    pub fn sql(&self) -> String {
        match self {
            ColumnType::Integer => "integer".to_string(),
            ColumnType::Varchar(len) => format!("varchar({len})"),
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        match self {
            ColumnType::Integer => None,
            ColumnType::Varchar(len) => Some(*len as usize),
        }
    }
}

impl ColumnDef {
    pub fn identity(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Integer,
            is_nullable: false,
            primary_key: true,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Integer,
            is_nullable: true,
            primary_key: false,
        }
    }

    pub fn varchar(name: impl Into<String>, max_length: u32) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Varchar(max_length),
            is_nullable: true,
            primary_key: false,
        }
    }

    /// Column clause for `CREATE TABLE`.
    pub fn sql_definition(&self) -> String {
        let mut definition = format!("{} {}", self.name, self.column_type.sql());
        if self.primary_key {
            definition.push_str(" GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY");
        } else if !self.is_nullable {
            definition.push_str(" NOT NULL");
        }
        definition
    }
}

impl TableDef {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Maximum length of a string column, `None` for unknown or non-string columns.
    pub fn max_length(&self, name: &str) -> Option<usize> {
        self.column(name)
            .and_then(|column| column.column_type.max_length())
    }

    /// Columns written by inserts (everything but the identity key).
    pub fn insertable_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|column| !column.primary_key)
    }

    pub fn drop_table_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }

    pub fn create_table_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(ColumnDef::sql_definition)
            .collect::<Vec<_>>()
            .join(",\n    ");
        format!("CREATE TABLE {} (\n    {}\n)", self.name, columns)
    }

    /// `INSERT INTO <table> (<insertable columns>) ` prefix; values are
    /// appended by the caller.
    pub fn insert_prefix(&self) -> String {
        let columns = self
            .insertable_columns()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("INSERT INTO {} ({}) ", self.name, columns)
    }
}
