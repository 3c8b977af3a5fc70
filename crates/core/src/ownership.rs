//! The ownership rule for instructor-authored resources.
//!
//! Courses, lectures, documents, events, and live sessions record the
//! instructor who created them. Only that identity may mutate or delete
//! the row, and only the owner of a course may attach content to it.

use crate::error::CoreError;
use crate::types::DbId;

/// Check that `caller` is the recorded owner of an `entity` row.
pub fn ensure_owner(entity: &'static str, owner_id: DbId, caller: DbId) -> Result<(), CoreError> {
    if owner_id == caller {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Only the owning instructor may modify this {}",
            entity.to_lowercase()
        )))
    }
}

/// Resolve an optional owner lookup into the ownership check.
///
/// `None` means the row does not exist and maps to `NotFound`, so callers
/// can distinguish a missing row from one owned by someone else.
pub fn check_owner_lookup(
    entity: &'static str,
    id: DbId,
    owner_id: Option<DbId>,
    caller: DbId,
) -> Result<(), CoreError> {
    match owner_id {
        Some(owner_id) => ensure_owner(entity, owner_id, caller),
        None => Err(CoreError::NotFound { entity, id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn owner_may_modify() {
        assert!(ensure_owner("Course", 7, 7).is_ok());
    }

    #[test]
    fn other_caller_is_forbidden() {
        assert_matches!(
            ensure_owner("Course", 7, 8),
            Err(CoreError::Forbidden(msg)) if msg.contains("course")
        );
    }

    #[test]
    fn missing_row_is_not_found() {
        assert_matches!(
            check_owner_lookup("Lecture", 42, None, 1),
            Err(CoreError::NotFound { entity: "Lecture", id: 42 })
        );
    }

    #[test]
    fn lookup_delegates_to_owner_check() {
        assert!(check_owner_lookup("Event", 1, Some(3), 3).is_ok());
        assert_matches!(
            check_owner_lookup("Event", 1, Some(3), 4),
            Err(CoreError::Forbidden(_))
        );
    }
}
