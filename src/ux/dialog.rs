use compte_api::compte::{parse_solde, Compte, TypeCompte};

use super::card::format_solde;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    Add,
    /// Editing the given account, kept to echo its id and creation date
    Edit(Compte),
}

/// Transient state of the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDialog {
    mode: DialogMode,
    solde: String,
    kind: TypeCompte,
}

impl AccountDialog {
    pub fn add() -> Self {
        Self {
            mode: DialogMode::Add,
            solde: String::new(),
            kind: TypeCompte::default(),
        }
    }

    pub fn edit(compte: &Compte) -> Self {
        Self {
            solde: format_solde(compte.solde),
            kind: compte.kind,
            mode: DialogMode::Edit(compte.clone()),
        }
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn solde_text(&self) -> &str {
        &self.solde
    }

    pub fn kind(&self) -> TypeCompte {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Ajouter un compte",
            DialogMode::Edit(_) => "Modifier le compte",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Ajouter",
            DialogMode::Edit(_) => "Modifier",
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.solde.push(c);
    }

    pub fn backspace(&mut self) {
        self.solde.pop();
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    pub fn is_valid(&self) -> bool {
        parse_solde(&self.solde).is_some()
    }

    /// Values to submit, or `None` while the balance does not parse.
    pub fn confirm(&self) -> Option<(f64, TypeCompte)> {
        parse_solde(&self.solde).map(|solde| (solde, self.kind))
    }
}
