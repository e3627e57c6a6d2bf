//! In-memory gateway carrying the canonical fixture bills. Backs the demo
//! mode and most tests; behaves like the remote service minus the network.

use anyhow::{Result, anyhow};
use notefrais_core::{Bill, BillCategory, BillStatus, BillsGateway, FileRequest, FileStub};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct MemoryBillsGateway {
    bills: Mutex<Vec<Bill>>,
    next_key: AtomicU64,
}

impl MemoryBillsGateway {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            next_key: AtomicU64::new(1),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The four canonical fixture bills.
    pub fn seeded() -> Self {
        Self::new(fixture_bills())
    }
}

impl BillsGateway for MemoryBillsGateway {
    async fn list(&self) -> Result<Vec<Bill>> {
        let bills = self.bills.lock().map_err(|_| anyhow!("bills store poisoned"))?;
        Ok(bills.clone())
    }

    async fn create_file(&self, req: &FileRequest) -> Result<FileStub> {
        let key = self.next_key.fetch_add(1, Ordering::Relaxed);
        Ok(FileStub {
            file_url: format!("https://localhost:3456/images/{}", req.file_name),
            file_name: req.file_name.clone(),
            key: format!("{key}"),
        })
    }

    async fn update_bill(&self, bill: &Bill) -> Result<Bill> {
        let mut bills = self.bills.lock().map_err(|_| anyhow!("bills store poisoned"))?;
        match bills.iter_mut().find(|b| b.id == bill.id) {
            Some(slot) => *slot = bill.clone(),
            None => bills.push(bill.clone()),
        }
        Ok(bill.clone())
    }
}

/// Fixture data mirroring the reference dataset of the bills service.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            email: "a@a".to_string(),
            category: BillCategory::HotelAndLodging,
            name: "encore".to_string(),
            date: "2004-04-04".to_string(),
            amount: 400.0,
            vat: Some(80.0),
            pct: Some(20),
            commentary: Some("séminaire billed".to_string()),
            file_url: "https://test.storage.tld/preview-facture-free-201801-pdf-1.jpg".to_string(),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
            status: BillStatus::Pending,
            comment_admin: Some("ok".to_string()),
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            email: "a@a".to_string(),
            category: BillCategory::Transport,
            name: "test1".to_string(),
            date: "2001-01-01".to_string(),
            amount: 100.0,
            vat: None,
            pct: Some(20),
            commentary: Some("plane ticket".to_string()),
            file_url: String::new(),
            file_name: String::new(),
            status: BillStatus::Refused,
            comment_admin: Some("en fait, je kiffe pas".to_string()),
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            email: "a@a".to_string(),
            category: BillCategory::OnlineServices,
            name: "test3".to_string(),
            date: "2003-03-03".to_string(),
            amount: 300.0,
            vat: Some(60.0),
            pct: Some(20),
            commentary: None,
            file_url: "https://test.storage.tld/facture-client-php-exportee-dans-document-pdf.png"
                .to_string(),
            file_name: "facture-client-php-exportee-dans-document-pdf.png".to_string(),
            status: BillStatus::Accepted,
            comment_admin: Some("bon bah d'accord".to_string()),
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            email: "a@a".to_string(),
            category: BillCategory::RestaurantsAndBars,
            name: "test2".to_string(),
            date: "2002-02-02".to_string(),
            amount: 200.0,
            vat: Some(40.0),
            pct: Some(20),
            commentary: Some("déjeuner équipe".to_string()),
            file_url: String::new(),
            file_name: String::new(),
            status: BillStatus::Refused,
            comment_admin: Some("à valider".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_gateway_lists_the_fixture_set() {
        let gateway = MemoryBillsGateway::seeded();
        let bills = gateway.list().await.unwrap();
        assert_eq!(bills.len(), 4);
        assert!(bills.iter().any(|b| b.id == "47qAXb6fIm2zOKkLzMro"));
    }

    #[tokio::test]
    async fn test_create_file_mints_stub_and_keys() {
        let gateway = MemoryBillsGateway::empty();
        let req = FileRequest {
            file_name: "test.jpg".to_string(),
            email: "a@a".to_string(),
        };

        let first = gateway.create_file(&req).await.unwrap();
        assert_eq!(first.file_url, "https://localhost:3456/images/test.jpg");
        assert_eq!(first.file_name, "test.jpg");
        assert_eq!(first.key, "1");

        let second = gateway.create_file(&req).await.unwrap();
        assert_eq!(second.key, "2");
    }

    #[tokio::test]
    async fn test_update_bill_upserts() {
        let gateway = MemoryBillsGateway::seeded();

        let mut changed = fixture_bills()[0].clone();
        changed.name = "encore (modifié)".to_string();
        gateway.update_bill(&changed).await.unwrap();

        let bills = gateway.list().await.unwrap();
        assert_eq!(bills.len(), 4);
        let kept = bills.iter().find(|b| b.id == changed.id).unwrap();
        assert_eq!(kept.name, "encore (modifié)");

        let mut fresh = changed.clone();
        fresh.id = "brand-new".to_string();
        gateway.update_bill(&fresh).await.unwrap();
        assert_eq!(gateway.list().await.unwrap().len(), 5);
    }

    #[test]
    fn test_fixture_bills_round_trip_the_wire_form() {
        let json = serde_json::to_string(&fixture_bills()).unwrap();
        let back: Vec<Bill> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixture_bills());
    }
}
