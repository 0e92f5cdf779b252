//! Inline status edits.

use tracing::debug;

use crate::model::{Record, Status};

use super::ViewError;

/// Returns a new record set where record `id` has `status`.
/// Every other record is copied unchanged.
pub fn update_status(records: &[Record], id: u32, status: Status) -> Result<Vec<Record>, ViewError> {
    if !records.iter().any(|r| r.id == id) {
        return Err(ViewError::RecordNotFound(id));
    }

    debug!(id, status = %status, "status updated");
    Ok(records
        .iter()
        .map(|r| if r.id == id { r.with_status(status) } else { r.clone() })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::generate_seeded;

    #[test]
    fn changes_only_target_record() {
        let records = generate_seeded(20, Some(9));
        let target = records[4].id;
        let new_status = records[4].status().next();

        let updated = update_status(&records, target, new_status).unwrap();
        assert_eq!(updated.len(), records.len());
        for (before, after) in records.iter().zip(&updated) {
            if before.id == target {
                assert_eq!(after.status(), new_status);
                assert_eq!(after.about.name, before.about.name);
                assert_eq!(after.details, before.details);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn idempotent_for_same_pair() {
        let records = generate_seeded(10, Some(2));
        let once = update_status(&records, 3, Status::Blocked).unwrap();
        let twice = update_status(&once, 3, Status::Blocked).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let records = generate_seeded(10, Some(2));
        assert_eq!(
            update_status(&records, 999, Status::Active),
            Err(ViewError::RecordNotFound(999))
        );
    }
}
