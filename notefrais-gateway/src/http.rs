//! HTTP client for the remote bills service.

use anyhow::{Context, Result, anyhow};
use notefrais_core::{Bill, BillsGateway, FileRequest, FileStub};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

pub struct HttpBillsGateway {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBillsGateway {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).context("malformed token")?,
            );
        }
        Ok(headers)
    }
}

/// Uniform error surfaced to the containers; they render the message and
/// never look at the code itself.
fn transport_error(status: StatusCode) -> anyhow::Error {
    anyhow!("Erreur {}", status.as_u16())
}

impl BillsGateway for HttpBillsGateway {
    async fn list(&self) -> Result<Vec<Bill>> {
        let resp = self
            .client
            .get(self.url("/bills"))
            .headers(self.headers()?)
            .send()
            .await
            .context("reaching the bills service")?;
        if !resp.status().is_success() {
            return Err(transport_error(resp.status()));
        }
        resp.json::<Vec<Bill>>().await.context("decoding bills")
    }

    async fn create_file(&self, req: &FileRequest) -> Result<FileStub> {
        let resp = self
            .client
            .post(self.url("/bills/files"))
            .headers(self.headers()?)
            .json(req)
            .send()
            .await
            .context("uploading receipt metadata")?;
        if !resp.status().is_success() {
            return Err(transport_error(resp.status()));
        }
        resp.json::<FileStub>().await.context("decoding upload result")
    }

    async fn update_bill(&self, bill: &Bill) -> Result<Bill> {
        let resp = self
            .client
            .patch(self.url(&format!("/bills/{}", bill.id)))
            .headers(self.headers()?)
            .json(bill)
            .send()
            .await
            .context("submitting bill")?;
        if !resp.status().is_success() {
            return Err(transport_error(resp.status()));
        }
        resp.json::<Bill>().await.context("decoding submitted bill")
    }
}
