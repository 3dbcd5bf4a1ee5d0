use compte_api::compte::Compte;

pub const DATE_PLACEHOLDER: &str = "N/A";

/// Balance as shown on cards and pre-filled in the edit form.
///
/// Always carries a fractional part (`100.0`, `-3.5`), so an edited value reads the same
/// way it was displayed.
pub fn format_solde(solde: f64) -> String {
    format!("{:?}", solde)
}

/// The three text rows of an account card.
pub fn card_lines(compte: &Compte) -> [String; 3] {
    [
        format!("Solde: {}", format_solde(compte.solde)),
        format!("Type: {}", compte.kind),
        format!(
            "Date de création: {}",
            compte
                .date_creation
                .as_ref()
                .map(|d| d.as_str())
                .unwrap_or(DATE_PLACEHOLDER)
        ),
    ]
}
