//! Narrowing of PandaScore integers to the store's column width.

use crate::{error::Error, model::entity::EntityKind};

/// Converts an integer from the API into the store's 32-bit column type.
///
/// # Arguments
/// - `kind` - Entity kind the value belongs to, reported in the error
/// - `value` - ID, score or game count as decoded from PandaScore
///
/// # Returns
/// - `Ok(i32)` - The value unchanged
/// - `Err(Error::IdOutOfRange)` - The value does not fit a signed 32-bit column
pub fn store_int(kind: EntityKind, value: i64) -> Result<i32, Error> {
    i32::try_from(value).map_err(|_| Error::IdOutOfRange { kind, value })
}
