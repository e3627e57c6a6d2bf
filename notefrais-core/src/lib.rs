//! notefrais-core: domain model, route table and view logic for the
//! notefrais expense-bills client

pub mod bill;
pub mod bills_pane;
pub mod format;
pub mod gateway;
pub mod new_bill;
pub mod router;
pub mod routes;
pub mod session;
pub mod validate;
pub mod views;

pub use bill::{Bill, BillCategory, BillStatus};
pub use bills_pane::BillsPane;
pub use gateway::{BillsGateway, FileRequest, FileStub};
pub use new_bill::{AttachmentError, NewBillPane, SubmitError};
pub use router::Router;
pub use routes::{NavIcon, NavigationState, Route};
pub use session::{Session, SessionProvider, StaticSession, UserKind};
pub use validate::{BillForm, ValidationError, DEFAULT_PCT};
pub use views::{BillRow, BillsView, ErrorView, LoginView, NewBillView, Preview, View};
