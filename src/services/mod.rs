pub mod comptes;

pub use comptes::{ClientFactory, ComptesService, DefaultClientFactory};
