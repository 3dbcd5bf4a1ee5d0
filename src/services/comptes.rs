use std::sync::Arc;

use tracing::{error, info};

use compte_api::{
    client::{error::ClientError, ComptesApi},
    compte::{Compte, TypeCompte},
    types::BaseUrl,
};

pub trait ClientFactory {
    fn new_client(&self, base_url: BaseUrl) -> Arc<dyn ComptesApi>;
}
pub struct DefaultClientFactory;
impl ClientFactory for DefaultClientFactory {
    fn new_client(&self, base_url: BaseUrl) -> Arc<dyn ComptesApi> {
        Arc::new(compte_api::get_client(base_url))
    }
}

/// Runs one API call per user action and computes the list that should replace the
/// current one.
///
/// Every operation returns `Some(list)` on success and `None` after logging the failure,
/// in which case the caller keeps its list as it was.
#[derive(Clone)]
pub struct ComptesService {
    api: Arc<dyn ComptesApi>,
}

impl ComptesService {
    pub fn new(api: Arc<dyn ComptesApi>) -> Self {
        Self { api }
    }

    pub async fn fetch_comptes(&self) -> Option<Vec<Compte>> {
        match self.api.get_comptes().await {
            Ok(comptes) => {
                info!("Fetched comptes: {:?}", comptes);
                Some(comptes)
            }
            Err(e) => {
                log_failure("fetch", &e);
                None
            }
        }
    }

    pub async fn add_compte(
        &self,
        current: &[Compte],
        solde: f64,
        kind: TypeCompte,
    ) -> Option<Vec<Compte>> {
        let draft = Compte::draft(solde, kind);
        match self.api.create_compte(&draft).await {
            Ok(added) => {
                info!("Added compte: {:?}", added);
                let mut comptes = current.to_vec();
                comptes.push(added);
                Some(comptes)
            }
            Err(e) => {
                log_failure("add", &e);
                None
            }
        }
    }

    pub async fn update_compte(
        &self,
        compte: &Compte,
        current: &[Compte],
        solde: f64,
        kind: TypeCompte,
    ) -> Option<Vec<Compte>> {
        let Some(id) = compte.id else {
            error!("Cannot update compte with null ID");
            return None;
        };

        let updated = compte.with_changes(solde, kind);
        match self.api.update_compte(id, &updated).await {
            Ok(persisted) => {
                info!("Updated compte: {:?}", persisted);
                Some(
                    current
                        .iter()
                        .map(|c| {
                            if c.id == Some(id) {
                                persisted.clone()
                            } else {
                                c.clone()
                            }
                        })
                        .collect(),
                )
            }
            Err(e) => {
                log_failure("update", &e);
                None
            }
        }
    }

    pub async fn delete_compte(&self, compte: &Compte, current: &[Compte]) -> Option<Vec<Compte>> {
        let Some(id) = compte.id else {
            error!("Cannot delete compte with null ID");
            return None;
        };

        match self.api.delete_compte(id).await {
            Ok(()) => {
                info!("Deleted compte: {:?}", compte);
                Some(current.iter().filter(|c| c.id != Some(id)).cloned().collect())
            }
            Err(e) => {
                log_failure("delete", &e);
                None
            }
        }
    }
}

fn log_failure(action: &str, err: &ClientError) {
    match err {
        ClientError::Transport(source) => {
            error!(error = %source, "Network error during {}", action)
        }
        ClientError::Status { .. } | ClientError::Decode(_) => {
            error!("Failed to {} compte: {}", action, err)
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use compte_api::{
        client::{error::ClientError, ComptesApi},
        compte::{Compte, DateCreation},
    };

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List,
        Create(Compte),
        Update(i64, Compte),
        Delete(i64),
    }

    /// Creation date the fake backend stamps on updated accounts.
    pub const UPDATED_DATE: &str = "2026-10-19T09:15:00.000Z";

    /// Records every call; answers from `comptes`, or with `failure` when set.
    #[derive(Default)]
    pub struct FakeApi {
        pub comptes: Vec<Compte>,
        pub failure: Option<u16>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl FakeApi {
        pub fn with(comptes: Vec<Compte>) -> Self {
            Self {
                comptes,
                ..Default::default()
            }
        }

        pub fn failing(code: u16) -> Self {
            Self {
                failure: Some(code),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(call);
            match self.failure {
                Some(code) => Err(ClientError::Status {
                    code,
                    message: "Fake failure".to_string(),
                }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ComptesApi for FakeApi {
        async fn get_comptes(&self) -> Result<Vec<Compte>, ClientError> {
            self.record(Call::List)?;
            Ok(self.comptes.clone())
        }

        async fn create_compte(&self, compte: &Compte) -> Result<Compte, ClientError> {
            self.record(Call::Create(compte.clone()))?;
            Ok(Compte {
                id: Some(100),
                date_creation: Some(DateCreation::from("2026-10-19T08:30:00.000Z")),
                ..compte.clone()
            })
        }

        async fn update_compte(&self, id: i64, compte: &Compte) -> Result<Compte, ClientError> {
            self.record(Call::Update(id, compte.clone()))?;
            Ok(Compte {
                date_creation: Some(DateCreation::from(UPDATED_DATE)),
                ..compte.clone()
            })
        }

        async fn delete_compte(&self, id: i64) -> Result<(), ClientError> {
            self.record(Call::Delete(id))
        }
    }

    pub fn compte(id: i64, solde: f64, kind: compte_api::compte::TypeCompte) -> Compte {
        Compte {
            id: Some(id),
            solde,
            date_creation: Some(DateCreation::from("2024-11-05")),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{compte, Call, FakeApi, UPDATED_DATE};
    use compte_api::compte::DateCreation;
    use super::*;

    fn service(api: &Arc<FakeApi>) -> ComptesService {
        ComptesService::new(api.clone())
    }

    fn sample() -> Vec<Compte> {
        vec![
            compte(1, 100.0, TypeCompte::Courant),
            compte(2, 250.0, TypeCompte::Epargne),
            compte(3, -10.0, TypeCompte::Courant),
        ]
    }

    #[tokio::test]
    async fn test_fetch_returns_backend_list() {
        let api = Arc::new(FakeApi::with(sample()));
        assert_eq!(service(&api).fetch_comptes().await, Some(sample()));
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_add_sends_one_draft_and_appends() {
        let api = Arc::new(FakeApi::default());
        let current = sample();

        let comptes = service(&api)
            .add_compte(&current, 42.0, TypeCompte::Epargne)
            .await
            .unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        let Call::Create(draft) = &calls[0] else {
            panic!("expected a create call, got {:?}", calls[0]);
        };
        assert_eq!(draft.id, None);
        assert_eq!(draft.solde, 42.0);
        assert_eq!(draft.kind, TypeCompte::Epargne);
        assert!(draft.date_creation.is_some());

        assert_eq!(comptes.len(), current.len() + 1);
        assert_eq!(&comptes[..current.len()], &current[..]);
        assert_eq!(comptes.last().unwrap().id, Some(100));
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_entry() {
        let api = Arc::new(FakeApi::default());
        let current = sample();

        let comptes = service(&api)
            .update_compte(&current[1], &current, 999.0, TypeCompte::Courant)
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Update(2, current[1].with_changes(999.0, TypeCompte::Courant))]
        );
        assert_eq!(comptes.len(), current.len());
        assert_eq!(comptes[0], current[0]);
        assert_eq!(comptes[2], current[2]);
        assert_eq!(
            comptes[1],
            Compte {
                id: Some(2),
                solde: 999.0,
                date_creation: Some(DateCreation::from(UPDATED_DATE)),
                kind: TypeCompte::Courant,
            }
        );
    }

    #[tokio::test]
    async fn test_delete_filters_by_id() {
        let api = Arc::new(FakeApi::default());
        let current = sample();

        let comptes = service(&api)
            .delete_compte(&current[0], &current)
            .await
            .unwrap();

        assert_eq!(api.calls(), vec![Call::Delete(1)]);
        assert_eq!(comptes.len(), current.len() - 1);
        assert!(comptes.iter().all(|c| c.id != Some(1)));
    }

    #[tokio::test]
    async fn test_null_id_is_rejected_before_any_call() {
        let api = Arc::new(FakeApi::default());
        let current = sample();
        let draft = Compte::draft(5.0, TypeCompte::Courant);

        assert_eq!(service(&api).delete_compte(&draft, &current).await, None);
        assert_eq!(
            service(&api)
                .update_compte(&draft, &current, 1.0, TypeCompte::Courant)
                .await,
            None
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_status_leaves_nothing_to_apply() {
        let api = Arc::new(FakeApi::failing(500));
        let current = sample();
        let service = service(&api);

        assert_eq!(service.fetch_comptes().await, None);
        assert_eq!(
            service
                .add_compte(&current, 1.0, TypeCompte::Courant)
                .await,
            None
        );
        assert_eq!(
            service
                .update_compte(&current[0], &current, 1.0, TypeCompte::Courant)
                .await,
            None
        );
        assert_eq!(service.delete_compte(&current[0], &current).await, None);
        assert_eq!(api.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_nothing_to_apply() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = compte_api::get_client(BaseUrl::new(&format!("http://{addr}")).unwrap());
        let service = ComptesService::new(Arc::new(api));
        let current = sample();

        assert_eq!(service.fetch_comptes().await, None);
        assert_eq!(
            service
                .add_compte(&current, 1.0, TypeCompte::Courant)
                .await,
            None
        );
        assert_eq!(
            service
                .update_compte(&current[1], &current, 1.0, TypeCompte::Epargne)
                .await,
            None
        );
        assert_eq!(service.delete_compte(&current[2], &current).await, None);
    }
}
