//! Terminal rendition of the accounts screen: a list of account cards and a modal
//! add/edit form.

pub mod card;
pub mod dialog;
pub mod render;
pub mod screen;
pub mod terminal;

pub use terminal::run_screen;
