use std::{fmt, str::FromStr};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ValueError;

/// Type of account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeCompte {
    /// Current (checking) account
    #[default]
    Courant,
    /// Savings account
    Epargne,
}

impl TypeCompte {
    /// Wire name, as sent to and received from the backend.
    pub fn name(&self) -> &'static str {
        match self {
            TypeCompte::Courant => "COURANT",
            TypeCompte::Epargne => "EPARGNE",
        }
    }

    /// Human readable label used by the form.
    pub fn label(&self) -> &'static str {
        match self {
            TypeCompte::Courant => "Courant",
            TypeCompte::Epargne => "Épargne",
        }
    }

    pub fn toggled(self) -> TypeCompte {
        match self {
            TypeCompte::Courant => TypeCompte::Epargne,
            TypeCompte::Epargne => TypeCompte::Courant,
        }
    }
}

impl fmt::Display for TypeCompte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TypeCompte {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "courant" | "current" => Ok(TypeCompte::Courant),
            "epargne" | "épargne" | "savings" => Ok(TypeCompte::Epargne),
            _ => Err(ValueError::TypeCompte),
        }
    }
}

/// Creation date of an account.
///
/// The backend owns the format of this value, so it is kept as the raw string it sent
/// and echoed back untouched on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateCreation(String);

impl DateCreation {
    /// Timestamp of the current instant, used for drafts submitted by the client.
    pub fn now() -> Self {
        Self(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DateCreation {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A bank account as exposed by the `/comptes` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compte {
    /// Identifier assigned by the backend, `None` until the account is persisted
    pub id: Option<i64>,
    /// Balance
    pub solde: f64,
    /// Set by the backend at creation time, never modified afterwards
    pub date_creation: Option<DateCreation>,
    /// The type of account
    #[serde(rename = "type")]
    pub kind: TypeCompte,
}

impl Compte {
    /// Build a draft for a create call: no id, creation date captured now.
    pub fn draft(solde: f64, kind: TypeCompte) -> Self {
        Self {
            id: None,
            solde,
            date_creation: Some(DateCreation::now()),
            kind,
        }
    }

    /// Copy of this account carrying a new balance and type.
    ///
    /// Identifier and creation date are kept as the backend sent them.
    pub fn with_changes(&self, solde: f64, kind: TypeCompte) -> Self {
        Self {
            id: self.id,
            solde,
            date_creation: self.date_creation.clone(),
            kind,
        }
    }
}

/// Parse the balance as typed by the user.
///
/// Returns `None` for anything that is not a finite number, including empty input.
/// `NaN` and infinities have no JSON representation.
pub fn parse_solde(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|solde| solde.is_finite())
}
