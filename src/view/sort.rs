//! Column sorting with typed field accessors.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::model::Record;
use crate::util::natural_cmp;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Id,
    Name,
    Status,
    Email,
    Date,
    InvitedBy,
}

/// Typed value of a sort field for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue<'a> {
    Integer(u32),
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl SortValue<'_> {
    /// Compares two values of the same field. Values of different kinds
    /// never come from one field; they compare by kind order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Integer(a), SortValue::Integer(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => natural_cmp(a, b),
            (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }

    fn kind(&self) -> u8 {
        match self {
            SortValue::Integer(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Timestamp(_) => 2,
        }
    }
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Id,
            SortField::Name,
            SortField::Status,
            SortField::Email,
            SortField::Date,
            SortField::InvitedBy,
        ]
    }

    /// Dotted field path, e.g. `about.name`.
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "about.name",
            SortField::Status => "about.status",
            SortField::Email => "about.email",
            SortField::Date => "details.date",
            SortField::InvitedBy => "details.invitedBy",
        }
    }

    /// Column header: last segment of the field path.
    pub fn label(&self) -> &'static str {
        let key = self.key();
        key.rsplit('.').next().unwrap_or(key)
    }

    /// Column position in the table.
    pub fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<SortField> {
        Self::all().get(index).copied()
    }

    /// Extracts this field's value from a record.
    pub fn value<'a>(&self, record: &'a Record) -> SortValue<'a> {
        match self {
            SortField::Id => SortValue::Integer(record.id),
            SortField::Name => SortValue::Text(&record.about.name),
            SortField::Status => SortValue::Text(record.about.status.as_str()),
            SortField::Email => SortValue::Text(&record.about.email),
            SortField::Date => SortValue::Timestamp(record.details.date),
            SortField::InvitedBy => SortValue::Text(&record.details.invited_by),
        }
    }

    /// Compares two records by this field in ascending order.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.value(a).compare(&self.value(b))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for SortField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Error returned for an unknown sort field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortFieldError(pub String);

impl fmt::Display for ParseSortFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = SortField::all().iter().map(|s| s.key()).collect();
        write!(
            f,
            "unknown sort field '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for ParseSortFieldError {}

impl FromStr for SortField {
    type Err = ParseSortFieldError;

    /// Accepts the dotted path (`about.name`) or the bare label (`name`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SortField::all()
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(needle) || f.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseSortFieldError(s.to_string()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        *self == SortDirection::Asc
    }
}

/// Current sort column and direction. Default is `(id, asc)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Next sort state after the user requests `requested`:
/// the same field flips direction, another field starts ascending.
pub fn toggle_sort(current: SortState, requested: SortField) -> SortState {
    if current.field == requested {
        SortState::new(requested, current.direction.flipped())
    } else {
        SortState::new(requested, SortDirection::Asc)
    }
}

/// Returns a new list ordered by `state`. The sort is stable in both
/// directions: equal keys keep their input order.
pub fn sort_records<'a>(records: &[&'a Record], state: SortState) -> Vec<&'a Record> {
    let mut sorted = records.to_vec();
    let field = state.field;
    match state.direction {
        SortDirection::Asc => sorted.sort_by(|a, b| field.compare(a, b)),
        SortDirection::Desc => sorted.sort_by(|a, b| field.compare(b, a)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::generate_seeded;
    use crate::model::Status;
    use crate::model::test_support::record;

    fn sample() -> Vec<Record> {
        vec![
            record(3, "User 10", Status::Blocked, (2010, 5, 5)),
            record(1, "User 9", Status::Active, (2020, 1, 1)),
            record(2, "user 100", Status::Invited, (2001, 7, 20)),
        ]
    }

    fn ids(rows: &[&Record]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn id_sorts_numerically() {
        let records = sample();
        let refs: Vec<&Record> = records.iter().collect();
        let asc = sort_records(&refs, SortState::new(SortField::Id, SortDirection::Asc));
        assert_eq!(ids(&asc), vec![1, 2, 3]);
        let desc = sort_records(&refs, SortState::new(SortField::Id, SortDirection::Desc));
        assert_eq!(ids(&desc), vec![3, 2, 1]);
    }

    #[test]
    fn name_sorts_in_natural_order() {
        let records = sample();
        let refs: Vec<&Record> = records.iter().collect();
        let asc = sort_records(&refs, SortState::new(SortField::Name, SortDirection::Asc));
        assert_eq!(ids(&asc), vec![1, 3, 2]);
    }

    #[test]
    fn date_sorts_chronologically() {
        let records = sample();
        let refs: Vec<&Record> = records.iter().collect();
        let asc = sort_records(&refs, SortState::new(SortField::Date, SortDirection::Asc));
        assert_eq!(ids(&asc), vec![2, 3, 1]);
    }

    #[test]
    fn status_sorts_by_label() {
        let records = sample();
        let refs: Vec<&Record> = records.iter().collect();
        let asc = sort_records(&refs, SortState::new(SortField::Status, SortDirection::Asc));
        // ACTIVE < BLOCKED < INVITED
        assert_eq!(ids(&asc), vec![1, 3, 2]);
    }

    #[test]
    fn toggle_same_field_flips_and_other_field_resets() {
        let start = SortState::default();
        assert_eq!(start, SortState::new(SortField::Id, SortDirection::Asc));

        let name_asc = toggle_sort(start, SortField::Name);
        assert_eq!(name_asc, SortState::new(SortField::Name, SortDirection::Asc));

        let name_desc = toggle_sort(name_asc, SortField::Name);
        assert_eq!(name_desc, SortState::new(SortField::Name, SortDirection::Desc));

        let back = toggle_sort(name_desc, SortField::Name);
        assert_eq!(back.direction, SortDirection::Asc);

        let email = toggle_sort(name_desc, SortField::Email);
        assert_eq!(email, SortState::new(SortField::Email, SortDirection::Asc));
    }

    #[test]
    fn toggling_direction_reverses_order() {
        let records = generate_seeded(100, Some(5));
        let refs: Vec<&Record> = records.iter().collect();

        for &field in SortField::all() {
            let asc_state = toggle_sort(SortState::new(SortField::Id, SortDirection::Desc), field);
            let desc_state = toggle_sort(asc_state, field);
            assert_eq!(desc_state.direction, SortDirection::Desc);

            let asc = sort_records(&refs, asc_state);
            let desc = sort_records(&refs, desc_state);

            // Compare key sequences, since equal keys may keep input order.
            let asc_keys: Vec<SortValue> = asc.iter().map(|r| field.value(r)).collect();
            let mut desc_keys: Vec<SortValue> = desc.iter().map(|r| field.value(r)).collect();
            desc_keys.reverse();
            assert_eq!(asc_keys, desc_keys, "field {}", field);

            for pair in asc.windows(2) {
                assert_ne!(field.compare(pair[0], pair[1]), Ordering::Greater);
            }
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = vec![
            record(1, "Same", Status::Active, (2010, 1, 1)),
            record(2, "Same", Status::Active, (2011, 1, 1)),
            record(3, "Same", Status::Active, (2012, 1, 1)),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let asc = sort_records(&refs, SortState::new(SortField::Name, SortDirection::Asc));
        let desc = sort_records(&refs, SortState::new(SortField::Name, SortDirection::Desc));
        assert_eq!(ids(&asc), vec![1, 2, 3]);
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn field_names_parse_from_path_or_label() {
        assert_eq!("about.name".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!("details.invitedBy".parse::<SortField>(), Ok(SortField::InvitedBy));
        assert_eq!("invitedby".parse::<SortField>(), Ok(SortField::InvitedBy));
        assert_eq!("ID".parse::<SortField>(), Ok(SortField::Id));
        assert!("about.age".parse::<SortField>().is_err());
    }

    #[test]
    fn labels_and_indices() {
        let labels: Vec<&str> = SortField::all().iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["id", "name", "status", "email", "date", "invitedBy"]
        );
        for (i, f) in SortField::all().iter().enumerate() {
            assert_eq!(f.index(), i);
            assert_eq!(SortField::from_index(i), Some(*f));
        }
        assert_eq!(SortField::from_index(6), None);
    }
}
