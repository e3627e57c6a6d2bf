//! Plain-text rendering of view descriptions.

use notefrais_core::{NavIcon, NavigationState, Preview, View};
use std::fmt::Write;

fn icon_mark(nav: NavigationState, icon: NavIcon) -> char {
    if nav.is_active(icon) { '*' } else { ' ' }
}

fn nav_bar(nav: NavigationState) -> String {
    format!(
        "[{}] Mes notes de frais   [{}] Nouvelle note de frais",
        icon_mark(nav, NavIcon::Window),
        icon_mark(nav, NavIcon::Mail),
    )
}

/// Render a view description to terminal text. Pure: same view, same text.
pub fn render(view: &View, nav: NavigationState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", nav_bar(nav));
    let _ = writeln!(out);

    match view {
        View::Login(login) => {
            let _ = writeln!(out, "Connexion");
            if let Some(message) = &login.message {
                let _ = writeln!(out, "  {message}");
            }
            let _ = writeln!(out, "  run: notefrais login --email <you>");
        }
        View::Bills(bills) => {
            let _ = writeln!(out, "Mes notes de frais ({})", bills.rows.len());
            let _ = writeln!(
                out,
                "  {:<24} {:<22} {:<14} {:>10}  {}",
                "Type", "Nom", "Date", "Montant", "Statut"
            );
            for row in &bills.rows {
                let _ = writeln!(
                    out,
                    "  {:<24} {:<22} {:<14} {:>10}  {}",
                    row.category_label, row.name, row.date_display, row.amount_display, row.status_label
                );
            }
        }
        View::NewBill(form) => {
            let _ = writeln!(out, "Envoyer une note de frais ({})", form.email);
            let _ = writeln!(out, "  Type de dépense : {}", form.categories.join(" | "));
            let _ = writeln!(
                out,
                "  Justificatif    : {}",
                form.file_name.as_deref().unwrap_or("(aucun)")
            );
            if let Some(message) = &form.message {
                let _ = writeln!(out, "  ! {message}");
            }
        }
        View::Error(err) => {
            let _ = writeln!(out, "Erreur");
            let _ = writeln!(out, "  {}", err.message);
        }
        View::NotFound => {
            let _ = writeln!(out, "Page introuvable (404)");
        }
    }

    out
}

pub fn render_preview(preview: &Preview) -> String {
    match preview {
        Preview::Image { file_url, file_name } => {
            format!("Justificatif: {file_name}\n  {file_url}\n")
        }
        Preview::Unavailable { message } => format!("Justificatif: {message}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notefrais_core::{BillRow, BillsView, ErrorView, NavigationState, Route};

    fn row(date_display: &str) -> BillRow {
        BillRow {
            id: "a".to_string(),
            category_label: "Transports",
            name: "vol".to_string(),
            date: "2004-04-04".to_string(),
            date_display: date_display.to_string(),
            amount_display: "400 €".to_string(),
            status_label: "En attente",
            file_url: String::new(),
            file_name: String::new(),
        }
    }

    #[test]
    fn test_error_view_embeds_the_message() {
        let text = render(
            &View::Error(ErrorView {
                message: "Erreur 404".to_string(),
            }),
            NavigationState::for_route(Route::Bills),
        );
        assert!(text.contains("Erreur 404"));
    }

    #[test]
    fn test_nav_bar_marks_the_active_icon() {
        let text = render(
            &View::Bills(BillsView { rows: vec![row("4 Avr. 04")] }),
            NavigationState::for_route(Route::Bills),
        );
        assert!(text.starts_with("[*] Mes notes de frais   [ ] Nouvelle note de frais"));
        assert!(text.contains("4 Avr. 04"));
    }

    #[test]
    fn test_preview_fallback_text() {
        let text = render_preview(&Preview::Unavailable {
            message: "No receipt image available".to_string(),
        });
        assert!(text.contains("No receipt image available"));
    }
}
