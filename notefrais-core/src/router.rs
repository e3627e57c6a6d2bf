//! Route resolution gated on the injected session capability.

use crate::bills_pane::BillsPane;
use crate::gateway::BillsGateway;
use crate::new_bill::NewBillPane;
use crate::routes::{NavigationState, Route};
use crate::session::{Session, SessionProvider};
use crate::views::{LoginView, View};

/// Translates path tokens into rendered views and tracks which navigation
/// icon is lit. Both capabilities are injected at construction.
pub struct Router<S: SessionProvider, G: BillsGateway> {
    session: S,
    gateway: G,
    nav: NavigationState,
}

impl<S: SessionProvider, G: BillsGateway> Router<S, G> {
    pub fn new(session: S, gateway: G) -> Self {
        Self {
            session,
            gateway,
            nav: NavigationState::default(),
        }
    }

    /// Resolve a path token to a view.
    ///
    /// No error escapes: an unauthorized request falls back to the login
    /// view, an unknown token to the not-found view, and gateway failures
    /// surface as the container's error view. The shell performs
    /// navigations strictly sequentially, so a superseded call cannot
    /// overwrite a newer one here.
    pub async fn navigate(&mut self, path: &str) -> View {
        let route = Route::from_path(path);
        let session = self.session.current();

        if !route.allowed_for(session.as_ref()) {
            self.nav = NavigationState::default();
            return View::Login(LoginView {
                message: Some("please log in as an employee".to_string()),
            });
        }

        let view = match route {
            Route::Login => View::Login(LoginView::default()),
            Route::Bills => BillsPane::new(&self.gateway).list().await,
            Route::NewBill => {
                let email = session.map(|s| s.email).unwrap_or_default();
                View::NewBill(NewBillPane::new(&self.gateway, email).view())
            }
            Route::NotFound => View::NotFound,
        };

        self.nav = NavigationState::for_route(route);
        view
    }

    /// Icon state derived by the last navigation.
    pub fn navigation(&self) -> NavigationState {
        self.nav
    }

    pub fn session(&self) -> Option<Session> {
        self.session.current()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
