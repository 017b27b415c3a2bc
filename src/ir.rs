//! Intermediate representation between the validated sheet and the renderers.

pub mod namespace;
pub mod rows;

pub use namespace::{
    EnumModel,
    build_enum_model,
};
pub use rows::{
    PluralColumns,
    ValidatedTranslations,
    parse,
};
