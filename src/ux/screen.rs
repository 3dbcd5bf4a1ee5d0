use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    widgets::ListState,
};

use compte_api::compte::{Compte, TypeCompte};

use super::dialog::{AccountDialog, DialogMode};
use crate::services::ComptesService;

/// One network round trip requested by the screen.
///
/// Each variant carries the list as it was when the user acted; the completion replaces
/// the screen's list with the result computed from that snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Fetch,
    Add {
        current: Vec<Compte>,
        solde: f64,
        kind: TypeCompte,
    },
    Update {
        compte: Compte,
        current: Vec<Compte>,
        solde: f64,
        kind: TypeCompte,
    },
    Delete {
        compte: Compte,
        current: Vec<Compte>,
    },
}

impl Action {
    /// Run the call; `Some` is the list that replaces the screen's one.
    pub async fn perform(self, service: &ComptesService) -> Option<Vec<Compte>> {
        match self {
            Action::Fetch => service.fetch_comptes().await,
            Action::Add {
                current,
                solde,
                kind,
            } => service.add_compte(&current, solde, kind).await,
            Action::Update {
                compte,
                current,
                solde,
                kind,
            } => service.update_compte(&compte, &current, solde, kind).await,
            Action::Delete { compte, current } => service.delete_compte(&compte, &current).await,
        }
    }
}

/// Accounts list plus the optional add/edit dialog.
#[derive(Debug, Default)]
pub struct Screen {
    comptes: Vec<Compte>,
    list_state: ListState,
    dialog: Option<AccountDialog>,
    should_quit: bool,
}

impl Screen {
    pub fn comptes(&self) -> &[Compte] {
        &self.comptes
    }

    pub fn dialog(&self) -> Option<&AccountDialog> {
        self.dialog.as_ref()
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected(&self) -> Option<&Compte> {
        self.list_state.selected().and_then(|i| self.comptes.get(i))
    }

    /// Apply a completed call.
    pub fn replace_comptes(&mut self, comptes: Vec<Compte>) {
        self.comptes = comptes;
        let selected = match (self.comptes.len(), self.list_state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(selected);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }
        if self.dialog.is_some() {
            self.handle_dialog_key(key)
        } else {
            self.handle_list_key(key)
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('a') | KeyCode::Char('+') => self.dialog = Some(AccountDialog::add()),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(compte) = self.selected() {
                    self.dialog = Some(AccountDialog::edit(compte));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                return self.selected().cloned().map(|compte| Action::Delete {
                    compte,
                    current: self.comptes.clone(),
                });
            }
            KeyCode::Char('r') => return Some(Action::Fetch),
            _ => {}
        }
        None
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Option<Action> {
        let dialog = self.dialog.as_mut()?;
        match key.code {
            KeyCode::Esc => self.dialog = None,
            KeyCode::Enter => {
                let (solde, kind) = dialog.confirm()?;
                let action = match dialog.mode() {
                    DialogMode::Add => Action::Add {
                        current: self.comptes.clone(),
                        solde,
                        kind,
                    },
                    DialogMode::Edit(compte) => Action::Update {
                        compte: compte.clone(),
                        current: self.comptes.clone(),
                        solde,
                        kind,
                    },
                };
                self.dialog = None;
                return Some(action);
            }
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char(' ') => dialog.toggle_kind(),
            KeyCode::Backspace => dialog.backspace(),
            KeyCode::Char(c) => dialog.push_char(c),
            _ => {}
        }
        None
    }

    fn select_next(&mut self) {
        if self.comptes.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.comptes.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.comptes.is_empty() {
            return;
        }
        let previous = self
            .list_state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        self.list_state.select(Some(previous));
    }
}
