//! Users table view model.

use crate::model::{Record, Status};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};
use crate::view::sort::SortField;
use crate::view::{DerivedView, ViewState};

/// Column widths in field order; the last column (invitedBy) takes the rest.
const WIDTHS: &[u16] = &[5, 12, 9, 24, 11];

pub fn status_style(status: Status) -> RowStyleClass {
    match status {
        Status::Active => RowStyleClass::Active,
        Status::Invited => RowStyleClass::Warning,
        Status::Blocked => RowStyleClass::Critical,
    }
}

fn build_row(record: &Record) -> ViewRow<u32> {
    let status = record.about.status;
    ViewRow {
        id: record.id,
        cells: vec![
            ViewCell::styled(record.id.to_string(), RowStyleClass::Dimmed),
            ViewCell::plain(record.about.name.clone()),
            ViewCell::styled(status.as_str().to_string(), status_style(status)),
            ViewCell::plain(record.about.email.clone()),
            ViewCell::plain(record.details.date.format("%Y-%m-%d").to_string()),
            ViewCell::plain(record.details.invited_by.clone()),
        ],
        style: RowStyleClass::Normal,
    }
}

/// Builds the table for the current page of `view`.
pub fn build_users_view(view: &DerivedView<'_>, state: &ViewState) -> TableViewModel<u32> {
    let headers = SortField::all()
        .iter()
        .map(|f| f.label().to_string())
        .collect();

    let window = view.window();
    let title = if view.filtered_len == 0 {
        " Users: no matches ".to_string()
    } else {
        format!(
            " Users {}-{} of {} ",
            window.start + 1,
            window.end,
            view.filtered_len
        )
    };

    TableViewModel {
        title,
        headers,
        widths: WIDTHS.to_vec(),
        rows: view.rows.iter().map(|r| build_row(r)).collect(),
        sort_column: state.sort.field.index(),
        sort_ascending: state.sort.direction.is_ascending(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::record;
    use crate::view::derive_view;
    use crate::view::sort::SortDirection;

    fn sample() -> Vec<Record> {
        (1..=7)
            .map(|i| {
                let status = Status::all()[(i as usize) % 3];
                record(i, &format!("User {}", i), status, (2000 + i as i32, 1, 2))
            })
            .collect()
    }

    #[test]
    fn headers_and_sort_marker() {
        let records = sample();
        let state = ViewState::default()
            .with_sort_toggled(SortField::Date)
            .with_sort_toggled(SortField::Date);
        let view = derive_view(&records, &state);
        let vm = build_users_view(&view, &state);

        assert_eq!(
            vm.headers,
            vec!["id", "name", "status", "email", "date", "invitedBy"]
        );
        assert_eq!(vm.sort_column, 4);
        assert!(!vm.sort_ascending);
        assert_eq!(state.sort.direction, SortDirection::Desc);
        // Newest first.
        assert_eq!(vm.rows[0].id, 7);
        assert_eq!(vm.rows[0].cells[4].text, "2007-01-02");
    }

    #[test]
    fn rows_follow_page_window() {
        let records = sample();
        let state = ViewState::default().with_page(1);
        let view = derive_view(&records, &state);
        let vm = build_users_view(&view, &state);

        let ids: Vec<u32> = vm.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 7]);
        assert_eq!(vm.title, " Users 6-7 of 7 ");
    }

    #[test]
    fn status_cell_is_styled_by_status() {
        let records = sample();
        let state = ViewState::default();
        let view = derive_view(&records, &state);
        let vm = build_users_view(&view, &state);

        for (row, record) in vm.rows.iter().zip(view.rows.iter()) {
            assert_eq!(row.cells[2].text, record.about.status.as_str());
            assert_eq!(row.cells[2].style, Some(status_style(record.about.status)));
        }
    }

    #[test]
    fn empty_result_title() {
        let records = sample();
        let state = ViewState::default().with_search("nobody");
        let view = derive_view(&records, &state);
        let vm = build_users_view(&view, &state);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.title, " Users: no matches ");
    }
}
