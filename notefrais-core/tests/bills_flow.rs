use anyhow::{Result, bail};
use notefrais_core::routes::BILLS_PATH;
use notefrais_core::{
    Bill, BillCategory, BillStatus, BillsGateway, BillsPane, FileRequest, FileStub, Preview,
    Router, StaticSession, View,
};

struct FixedGateway {
    bills: Vec<Bill>,
}

impl BillsGateway for FixedGateway {
    async fn list(&self) -> Result<Vec<Bill>> {
        Ok(self.bills.clone())
    }

    async fn create_file(&self, _req: &FileRequest) -> Result<FileStub> {
        bail!("not used here")
    }

    async fn update_bill(&self, _bill: &Bill) -> Result<Bill> {
        bail!("not used here")
    }
}

/// Gateway whose list call always rejects, with a configurable message.
struct FailingGateway {
    message: &'static str,
}

impl BillsGateway for FailingGateway {
    async fn list(&self) -> Result<Vec<Bill>> {
        bail!("{}", self.message)
    }

    async fn create_file(&self, _req: &FileRequest) -> Result<FileStub> {
        bail!("{}", self.message)
    }

    async fn update_bill(&self, _bill: &Bill) -> Result<Bill> {
        bail!("{}", self.message)
    }
}

fn bill(id: &str, date: &str) -> Bill {
    Bill {
        id: id.to_string(),
        email: "a@a".to_string(),
        category: BillCategory::HotelAndLodging,
        name: format!("bill {id}"),
        date: date.to_string(),
        amount: 400.0,
        vat: Some(80.0),
        pct: Some(20),
        commentary: None,
        file_url: "https://test.storage.tld/receipt.jpg".to_string(),
        file_name: "receipt.jpg".to_string(),
        status: BillStatus::Pending,
        comment_admin: None,
    }
}

async fn rows_for(bills: Vec<Bill>) -> Vec<notefrais_core::BillRow> {
    let gateway = FixedGateway { bills };
    match BillsPane::new(&gateway).list().await {
        View::Bills(view) => view.rows,
        other => panic!("expected bills view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bills_ordered_latest_first() {
    let rows = rows_for(vec![
        bill("a", "2001-01-01"),
        bill("b", "2004-04-04"),
        bill("c", "2002-02-02"),
        bill("d", "2003-03-03"),
    ])
    .await;

    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);
}

#[tokio::test]
async fn test_equal_dates_keep_input_order() {
    let rows = rows_for(vec![
        bill("first", "2003-03-03"),
        bill("second", "2003-03-03"),
        bill("third", "2003-03-03"),
    ])
    .await;

    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

/// A record with an unformattable date stays in the list, date untouched.
#[tokio::test]
async fn test_malformed_date_not_dropped() {
    let rows = rows_for(vec![bill("ok", "2004-04-04"), bill("raw", "n'importe quoi")]).await;

    assert_eq!(rows.len(), 2);
    let raw = rows.iter().find(|r| r.id == "raw").unwrap();
    assert_eq!(raw.date, "n'importe quoi");
    assert_eq!(raw.date_display, "n'importe quoi");

    let ok = rows.iter().find(|r| r.id == "ok").unwrap();
    assert_eq!(ok.date_display, "4 Avr. 04");
}

#[tokio::test]
async fn test_list_failure_renders_error_404() {
    let gateway = FailingGateway { message: "Erreur 404" };
    let view = BillsPane::new(&gateway).list().await;

    match view {
        View::Error(err) => assert!(err.message.contains("Erreur 404"), "{}", err.message),
        other => panic!("expected error view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_failure_renders_error_500() {
    let gateway = FailingGateway { message: "Erreur 500" };
    let view = BillsPane::new(&gateway).list().await;

    match view {
        View::Error(err) => assert!(err.message.contains("Erreur 500"), "{}", err.message),
        other => panic!("expected error view, got {other:?}"),
    }
}

/// The router still lights the window icon when the list fetch fails; the
/// error page lives inside the bills route.
#[tokio::test]
async fn test_list_failure_through_router_keeps_route() {
    let mut router = Router::new(
        StaticSession::employee("a@a"),
        FailingGateway { message: "Erreur 500" },
    );
    let view = router.navigate(BILLS_PATH).await;

    assert!(matches!(view, View::Error(_)));
    assert!(router.navigation().is_active(notefrais_core::NavIcon::Window));
}

#[tokio::test]
async fn test_preview_shows_image_when_available() {
    let rows = rows_for(vec![bill("a", "2004-04-04")]).await;
    let gateway = FixedGateway { bills: vec![] };
    let pane = BillsPane::new(&gateway);

    match pane.open_preview(&rows[0]) {
        Preview::Image { file_url, file_name } => {
            assert_eq!(file_url, "https://test.storage.tld/receipt.jpg");
            assert_eq!(file_name, "receipt.jpg");
        }
        Preview::Unavailable { message } => panic!("expected image, got {message:?}"),
    }
}

#[tokio::test]
async fn test_preview_falls_back_without_image() {
    let mut no_file = bill("a", "2004-04-04");
    no_file.file_url = String::new();
    no_file.file_name = String::new();

    let mut pdf = bill("b", "2004-04-04");
    pdf.file_name = "facture.pdf".to_string();
    pdf.file_url = "https://test.storage.tld/facture.pdf".to_string();

    let rows = rows_for(vec![no_file, pdf]).await;
    let gateway = FixedGateway { bills: vec![] };
    let pane = BillsPane::new(&gateway);

    for row in &rows {
        match pane.open_preview(row) {
            Preview::Unavailable { message } => assert!(!message.is_empty()),
            Preview::Image { file_name, .. } => panic!("expected fallback for {file_name:?}"),
        }
    }
}

#[tokio::test]
async fn test_new_bill_button_targets_the_creation_path() {
    let gateway = FixedGateway { bills: vec![] };
    let pane = BillsPane::new(&gateway);
    assert_eq!(pane.new_bill_path(), notefrais_core::routes::NEW_BILL_PATH);
}
