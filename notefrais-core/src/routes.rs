//! Static route table, role gating and navigation-icon state.

use crate::session::{Session, UserKind};

pub const LOGIN_PATH: &str = "/";
pub const BILLS_PATH: &str = "#employee/bills";
pub const NEW_BILL_PATH: &str = "#employee/bill/new";

/// Every view the shell can ask for. Closed set, resolved by exhaustive
/// matching; unknown path tokens land on `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    NotFound,
}

impl Route {
    /// Resolve a requested path token.
    pub fn from_path(path: &str) -> Route {
        match path {
            LOGIN_PATH => Route::Login,
            BILLS_PATH => Route::Bills,
            NEW_BILL_PATH => Route::NewBill,
            _ => Route::NotFound,
        }
    }

    /// Path token for routes that have one.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Login => Some(LOGIN_PATH),
            Route::Bills => Some(BILLS_PATH),
            Route::NewBill => Some(NEW_BILL_PATH),
            Route::NotFound => None,
        }
    }

    /// The employee area requires an employee session; everything else is
    /// open. An admin session does not grant the employee views.
    pub fn allowed_for(self, session: Option<&Session>) -> bool {
        match self {
            Route::Login | Route::NotFound => true,
            Route::Bills | Route::NewBill => {
                matches!(session, Some(s) if s.kind == UserKind::Employee)
            }
        }
    }

    /// Navigation icon lit while this route is shown.
    pub fn icon(self) -> Option<NavIcon> {
        match self {
            Route::Bills => Some(NavIcon::Window),
            Route::NewBill => Some(NavIcon::Mail),
            Route::Login | Route::NotFound => None,
        }
    }
}

/// Vertical-layout navigation icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Window,
    Mail,
}

impl NavIcon {
    pub const ALL: [NavIcon; 2] = [NavIcon::Window, NavIcon::Mail];

    /// Stable identifier for external rendering targets.
    pub fn test_id(self) -> &'static str {
        match self {
            NavIcon::Window => "icon-window",
            NavIcon::Mail => "icon-mail",
        }
    }
}

/// Derived on every navigation, never persisted. At most one icon is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Option<NavIcon>,
}

impl NavigationState {
    pub fn for_route(route: Route) -> Self {
        Self { active: route.icon() }
    }

    pub fn is_active(&self, icon: NavIcon) -> bool {
        self.active == Some(icon)
    }
}
