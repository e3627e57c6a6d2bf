//! Bill-listing container: fetch, sort, format, preview.

use crate::bill::Bill;
use crate::format;
use crate::gateway::BillsGateway;
use crate::routes;
use crate::validate::is_image_file_name;
use crate::views::{BillRow, BillsView, ErrorView, Preview, View};
use tracing::warn;

pub struct BillsPane<'a, G: BillsGateway> {
    gateway: &'a G,
}

impl<'a, G: BillsGateway> BillsPane<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Fetch all bills and produce the list view, most recent first.
    ///
    /// A gateway rejection is caught here and becomes an error view with
    /// the message embedded; no retry is attempted.
    pub async fn list(&self) -> View {
        match self.gateway.list().await {
            Ok(bills) => View::Bills(BillsView { rows: present(bills) }),
            Err(err) => View::Error(ErrorView {
                message: err.to_string(),
            }),
        }
    }

    /// Modal description for a row's receipt. Rows without a usable image
    /// get a fallback message instead of an error.
    pub fn open_preview(&self, row: &BillRow) -> Preview {
        if !row.file_url.is_empty() && is_image_file_name(&row.file_name) {
            Preview::Image {
                file_url: row.file_url.clone(),
                file_name: row.file_name.clone(),
            }
        } else {
            Preview::Unavailable {
                message: "No receipt image available".to_string(),
            }
        }
    }

    /// Path token the shell feeds back into the router when the new-bill
    /// button is activated.
    pub fn new_bill_path(&self) -> &'static str {
        routes::NEW_BILL_PATH
    }
}

/// Sort newest first on the raw date token, then format rows for display.
///
/// The comparator is plain string order over the raw tokens: canonical
/// YYYY-MM-DD dates compare correctly, and anything else keeps the
/// historical string behavior rather than a calendar-aware order. The sort
/// is stable, so equal dates keep their input order.
fn present(mut bills: Vec<Bill>) -> Vec<BillRow> {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
    bills.into_iter().map(row).collect()
}

/// A date that fails to parse is kept raw; the record is never dropped.
fn row(bill: Bill) -> BillRow {
    let date_display = match format::format_date(&bill.date) {
        Ok(display) => display,
        Err(err) => {
            warn!(bill = %bill.id, "keeping raw date: {err}");
            bill.date.clone()
        }
    };
    BillRow {
        category_label: bill.category.label(),
        amount_display: format::format_amount(bill.amount),
        status_label: bill.status.label(),
        date_display,
        id: bill.id,
        name: bill.name,
        date: bill.date,
        file_url: bill.file_url,
        file_name: bill.file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::{BillCategory, BillStatus};

    fn bill(id: &str, date: &str) -> Bill {
        Bill {
            id: id.to_string(),
            email: "a@a".to_string(),
            category: BillCategory::Transport,
            name: format!("bill {id}"),
            date: date.to_string(),
            amount: 100.0,
            vat: None,
            pct: Some(20),
            commentary: None,
            file_url: "https://test.storage.tld/a.jpg".to_string(),
            file_name: "a.jpg".to_string(),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }

    #[test]
    fn test_present_sorts_latest_first() {
        let rows = present(vec![
            bill("a", "2001-01-01"),
            bill("b", "2004-04-04"),
            bill("c", "2003-03-03"),
        ]);
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2004-04-04", "2003-03-03", "2001-01-01"]);
    }

    #[test]
    fn test_present_is_stable_on_equal_dates() {
        let rows = present(vec![
            bill("first", "2003-03-03"),
            bill("second", "2003-03-03"),
            bill("newer", "2004-04-04"),
        ]);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["newer", "first", "second"]);
    }

    #[test]
    fn test_bad_date_passes_through_raw() {
        let rows = present(vec![bill("a", "2004-04-04"), bill("weird", "pas une date")]);
        let weird = rows.iter().find(|r| r.id == "weird").unwrap();
        assert_eq!(weird.date_display, "pas une date");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_row_formats_display_fields() {
        let rows = present(vec![bill("a", "2004-04-04")]);
        assert_eq!(rows[0].date_display, "4 Avr. 04");
        assert_eq!(rows[0].amount_display, "100 €");
        assert_eq!(rows[0].status_label, "En attente");
    }
}
