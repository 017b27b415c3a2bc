//! Tabular input: column tables, validation and the CSV snapshot provider.

pub mod sheet;
pub mod snapshot;
pub mod table;
pub mod validator;

pub use snapshot::SourceError;
pub use table::{
    ColumnTable,
    SourceData,
};
pub use validator::{
    ValidationResult,
    validate,
    validate_plurals,
};
