//! Structural equality.
//!
//! Absent values, byte strings and text take fast paths; everything else is
//! compared by canonical form, which is exactly what [`diff`](crate::diff)
//! renders. Anything the renderer hides through an option is therefore
//! also ignored by equality.

use serde::Serialize;

use attest_repr::{render, to_value_lossy, CompareOptions, Kind, Value};

/// Compare two values for structural equality.
///
/// Maps compare regardless of iteration order. Sequences are ordered, and
/// serde hands a `HashSet` over as a sequence in iteration order, so two
/// equal hash sets can compare unequal. Use `BTreeSet` for set fields.
pub fn equal<T: Serialize + ?Sized>(a: &T, b: &T, options: &CompareOptions) -> bool {
    equal_values(&to_value_lossy(a), &to_value_lossy(b), options)
}

/// Compare two captured values for structural equality.
pub fn equal_values(a: &Value, b: &Value, options: &CompareOptions) -> bool {
    match (a.kind(), b.kind()) {
        (Kind::Absent, _) | (_, Kind::Absent) => a.kind() == b.kind(),
        (Kind::Bytes, Kind::Bytes) | (Kind::Text, Kind::Text) => a == b,
        _ => {
            let directives = options.directives();
            render(a, &directives) == render(b, &directives)
        }
    }
}
