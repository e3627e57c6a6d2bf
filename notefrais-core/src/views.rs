//! View descriptions: pure render targets handed to the shell.
//!
//! Containers render state into these values; terminal renderers (plain or
//! interactive) consume them. The core never retains renderer state.

/// Stable identifiers for interactive elements, kept for external rendering
/// targets and test harnesses that locate elements by identifier rather
/// than structure.
pub mod testid {
    pub const ICON_WINDOW: &str = "icon-window";
    pub const ICON_MAIL: &str = "icon-mail";
    pub const ICON_EYE: &str = "icon-eye";
    pub const BTN_NEW_BILL: &str = "btn-new-bill";
    pub const FORM_NEW_BILL: &str = "form-new-bill";
    pub const FILE_INPUT: &str = "file";
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Login(LoginView),
    Bills(BillsView),
    NewBill(NewBillView),
    Error(ErrorView),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginView {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillsView {
    pub rows: Vec<BillRow>,
}

/// One formatted bill row. `date` keeps the raw token (the sort key);
/// `date_display` is the short French form, or the raw token again when it
/// could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: String,
    pub category_label: &'static str,
    pub name: String,
    pub date: String,
    pub date_display: String,
    pub amount_display: String,
    pub status_label: &'static str,
    pub file_url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBillView {
    pub email: String,
    pub categories: Vec<&'static str>,
    /// Displayed value of the file input; `None` when cleared.
    pub file_name: Option<String>,
    /// Inline validation feedback.
    pub message: Option<String>,
}

/// Gateway failures render into this page with the message embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub message: String,
}

/// Receipt preview modal description.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Image { file_url: String, file_name: String },
    Unavailable { message: String },
}
