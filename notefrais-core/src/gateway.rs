//! External collaborator contract for the remote bills service.

use crate::bill::Bill;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Receipt metadata sent on upload. The binary payload itself lives with
/// the external file-storage service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRequest {
    pub file_name: String,
    pub email: String,
}

/// Upload result consumed by the new-bill submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileStub {
    pub file_url: String,
    pub file_name: String,
    pub key: String,
}

/// Remote bills service abstraction.
///
/// Any operation may reject with a transport or server error. Callers treat
/// a rejection uniformly as "operation failed" and only ever surface the
/// message; status codes are never inspected past the gateway boundary.
#[allow(async_fn_in_trait)]
pub trait BillsGateway {
    async fn list(&self) -> Result<Vec<Bill>>;
    async fn create_file(&self, req: &FileRequest) -> Result<FileStub>;
    async fn update_bill(&self, bill: &Bill) -> Result<Bill>;
}
