//! Bill record types shared with the remote bills service.

use anyhow::bail;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One expense-reimbursement record submitted by an employee.
///
/// Field names follow the service's wire form (camelCase, `type` for the
/// category) so records round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub category: BillCategory,
    pub name: String,
    /// Calendar date as received. Kept as the raw token: the list view must
    /// pass records with unparseable dates through unchanged.
    pub date: String,
    pub amount: f64,
    /// Older records carry vat as a string ("80"); tolerate both forms.
    #[serde(default, deserialize_with = "vat_string_or_number")]
    pub vat: Option<f64>,
    #[serde(default)]
    pub pct: Option<u32>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub file_name: String,
    pub status: BillStatus,
    #[serde(default)]
    pub comment_admin: Option<String>,
}

fn vat_string_or_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(de)? {
        None => None,
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
    })
}

/// Expense categories accepted by the service ("type" on the wire).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BillCategory {
    #[serde(rename = "Transports")]
    Transport,
    #[serde(rename = "Restaurants et bars")]
    RestaurantsAndBars,
    #[serde(rename = "Hôtel et logement")]
    HotelAndLodging,
    #[serde(rename = "Services en ligne")]
    OnlineServices,
    #[serde(rename = "IT et électronique")]
    ItAndElectronics,
    #[serde(rename = "Equipement et matériel")]
    EquipmentAndMaterial,
    #[serde(rename = "Fournitures de bureau")]
    OfficeSupplies,
}

impl BillCategory {
    pub const ALL: [BillCategory; 7] = [
        BillCategory::Transport,
        BillCategory::RestaurantsAndBars,
        BillCategory::HotelAndLodging,
        BillCategory::OnlineServices,
        BillCategory::ItAndElectronics,
        BillCategory::EquipmentAndMaterial,
        BillCategory::OfficeSupplies,
    ];

    /// Wire label, also what the form's select shows.
    pub fn label(&self) -> &'static str {
        match self {
            BillCategory::Transport => "Transports",
            BillCategory::RestaurantsAndBars => "Restaurants et bars",
            BillCategory::HotelAndLodging => "Hôtel et logement",
            BillCategory::OnlineServices => "Services en ligne",
            BillCategory::ItAndElectronics => "IT et électronique",
            BillCategory::EquipmentAndMaterial => "Equipement et matériel",
            BillCategory::OfficeSupplies => "Fournitures de bureau",
        }
    }

    /// ASCII shorthand accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            BillCategory::Transport => "transports",
            BillCategory::RestaurantsAndBars => "restaurants",
            BillCategory::HotelAndLodging => "hotel",
            BillCategory::OnlineServices => "services",
            BillCategory::ItAndElectronics => "it",
            BillCategory::EquipmentAndMaterial => "equipement",
            BillCategory::OfficeSupplies => "fournitures",
        }
    }
}

impl FromStr for BillCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        for cat in BillCategory::ALL {
            if wanted == cat.label().to_lowercase() || wanted == cat.slug() {
                return Ok(cat);
            }
        }
        bail!(
            "unknown category {s:?} (expected one of: {})",
            BillCategory::ALL.map(|c| c.slug()).join(", ")
        );
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Review status of a bill. Transitions are driven by the admin service;
/// this client only ever creates pending bills and checks moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "accepted")]
    Accepted,
    #[serde(rename = "refused")]
    Refused,
}

impl BillStatus {
    /// Display label shown in bill rows.
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }

    /// Only pending bills move, and only to accepted or refused.
    pub fn can_transition_to(self, next: BillStatus) -> bool {
        matches!(
            (self, next),
            (BillStatus::Pending, BillStatus::Accepted) | (BillStatus::Pending, BillStatus::Refused)
        )
    }
}
