use nutype::nutype;

/// A record-type discriminant value.
///
/// Schema keys and scope entries share this type. Trimmed on construction
/// and must be non-empty.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct TypeTag(String);
