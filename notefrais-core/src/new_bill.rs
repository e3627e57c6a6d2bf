//! Bill-creation container: receipt gating, form validation, submission.

use crate::bill::{Bill, BillCategory, BillStatus};
use crate::gateway::{BillsGateway, FileRequest, FileStub};
use crate::routes::Route;
use crate::validate::{self, BillForm, ValidationError};
use crate::views::NewBillView;
use std::fmt;
use tracing::error;

/// Why a selected receipt was not kept. Either way the file input ends up
/// cleared and nothing is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    /// Extension outside {jpg, jpeg, png}.
    Rejected { file_name: String },
    /// The upload itself failed.
    Upload(String),
}

impl fmt::Display for AttachmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentError::Rejected { file_name } => {
                write!(f, "only jpg, jpeg and png receipts are accepted (got {file_name:?})")
            }
            AttachmentError::Upload(msg) => write!(f, "receipt upload failed: {msg}"),
        }
    }
}

impl std::error::Error for AttachmentError {}

#[derive(Debug)]
pub enum SubmitError {
    /// Blocked locally; no gateway call was made.
    Invalid(ValidationError),
    /// The gateway rejected the submission; the form stays on-screen.
    Gateway(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(err) => err.fmt(f),
            SubmitError::Gateway(msg) => write!(f, "submission failed: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

pub struct NewBillPane<'a, G: BillsGateway> {
    gateway: &'a G,
    email: String,
    attachment: Option<FileStub>,
    message: Option<String>,
}

impl<'a, G: BillsGateway> NewBillPane<'a, G> {
    pub fn new(gateway: &'a G, email: impl Into<String>) -> Self {
        Self {
            gateway,
            email: email.into(),
            attachment: None,
            message: None,
        }
    }

    /// Current form description.
    pub fn view(&self) -> NewBillView {
        NewBillView {
            email: self.email.clone(),
            categories: BillCategory::ALL.iter().map(|c| c.label()).collect(),
            file_name: self.attachment.as_ref().map(|a| a.file_name.clone()),
            message: self.message.clone(),
        }
    }

    /// Validate the selected receipt and upload its metadata.
    ///
    /// A refused extension clears the input and surfaces an inline message;
    /// nothing reaches the gateway. On acceptance the returned stub is kept
    /// for the submission step.
    pub async fn handle_file_change(&mut self, file_name: &str) -> Result<FileStub, AttachmentError> {
        if !validate::is_image_file_name(file_name) {
            self.attachment = None;
            let err = AttachmentError::Rejected {
                file_name: file_name.to_string(),
            };
            self.message = Some(err.to_string());
            return Err(err);
        }

        let req = FileRequest {
            file_name: file_name.trim().to_string(),
            email: self.email.clone(),
        };
        match self.gateway.create_file(&req).await {
            Ok(stub) => {
                self.message = None;
                self.attachment = Some(stub.clone());
                Ok(stub)
            }
            Err(err) => {
                self.attachment = None;
                error!("{err}");
                Err(AttachmentError::Upload(err.to_string()))
            }
        }
    }

    /// Validate, assemble and submit the bill.
    ///
    /// Success routes back to the bills list. A gateway rejection is logged
    /// verbatim on the error channel and nothing navigates; the caller keeps
    /// the form on-screen so the user can retry.
    pub async fn handle_submit(&mut self, form: &BillForm) -> Result<Route, SubmitError> {
        let fields = validate::validate_form(form).map_err(|err| {
            self.message = Some(err.to_string());
            SubmitError::Invalid(err)
        })?;

        let Some(stub) = self.attachment.clone() else {
            let err = ValidationError::MissingReceipt;
            self.message = Some(err.to_string());
            return Err(SubmitError::Invalid(err));
        };

        let bill = Bill {
            id: stub.key,
            email: self.email.clone(),
            category: form.category,
            name: form.name.clone(),
            date: fields.date,
            amount: fields.amount,
            vat: fields.vat,
            pct: Some(fields.pct),
            commentary: form.commentary.clone(),
            file_url: stub.file_url,
            file_name: stub.file_name,
            status: BillStatus::Pending,
            comment_admin: None,
        };

        match self.gateway.update_bill(&bill).await {
            Ok(_) => {
                self.message = None;
                Ok(Route::Bills)
            }
            Err(err) => {
                error!("{err}");
                Err(SubmitError::Gateway(err.to_string()))
            }
        }
    }
}
