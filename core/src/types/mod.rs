pub(crate) mod field;
pub use field::FieldValue;

pub(crate) mod record;
pub use record::{Record, records_from_json};

pub(crate) mod schema;
pub use schema::Schema;

pub(crate) mod scope;
pub use scope::Scope;

pub(crate) mod tag;
pub use tag::{TypeTag, TypeTagError};
