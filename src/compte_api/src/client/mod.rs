pub mod error;

use async_trait::async_trait;
use reqwest::{header, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use error::ClientError;

use crate::{compte::Compte, constants::COMPTES_PATH, types::BaseUrl};

/// The four calls the accounts screen makes against the `/comptes` resource.
#[async_trait]
pub trait ComptesApi: Send + Sync {
    /// `GET /comptes`
    async fn get_comptes(&self) -> Result<Vec<Compte>, ClientError>;
    /// `POST /comptes`, the body is expected to carry a null id
    async fn create_compte(&self, compte: &Compte) -> Result<Compte, ClientError>;
    /// `PUT /comptes/{id}`
    async fn update_compte(&self, id: i64, compte: &Compte) -> Result<Compte, ClientError>;
    /// `DELETE /comptes/{id}`, success is signaled by the status only
    async fn delete_compte(&self, id: i64) -> Result<(), ClientError>;
}

pub struct ComptesWebClient {
    /// The client used to make requests to the backend.
    client: reqwest::Client,
    /// Root URL of the backend, the resource path is appended to it.
    base_url: BaseUrl,
}

impl ComptesWebClient {
    pub fn new(base_url: BaseUrl) -> ComptesWebClient {
        ComptesWebClient {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Get the headers sent with every request.
    fn get_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn collection_url(&self) -> String {
        format!("{}{COMPTES_PATH}", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{COMPTES_PATH}/{id}", self.base_url)
    }
}

#[async_trait]
impl ComptesApi for ComptesWebClient {
    async fn get_comptes(&self) -> Result<Vec<Compte>, ClientError> {
        let url = self.collection_url();
        debug!("GET {}", url);
        let res = self
            .client
            .get(url)
            .headers(self.get_headers())
            .send()
            .await
            .map_err(ClientError::Transport)?;

        decode(ensure_success(res)?).await
    }

    async fn create_compte(&self, compte: &Compte) -> Result<Compte, ClientError> {
        let url = self.collection_url();
        debug!("POST {} {:?}", url, compte);
        let res = self
            .client
            .post(url)
            .headers(self.get_headers())
            .json(compte)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        decode(ensure_success(res)?).await
    }

    async fn update_compte(&self, id: i64, compte: &Compte) -> Result<Compte, ClientError> {
        let url = self.item_url(id);
        debug!("PUT {} {:?}", url, compte);
        let res = self
            .client
            .put(url)
            .headers(self.get_headers())
            .json(compte)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        decode(ensure_success(res)?).await
    }

    async fn delete_compte(&self, id: i64) -> Result<(), ClientError> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let res = self
            .client
            .delete(url)
            .headers(self.get_headers())
            .send()
            .await
            .map_err(ClientError::Transport)?;

        ensure_success(res)?;
        Ok(())
    }
}

/// Turn any non-2xx response into a `ClientError::Status`.
fn ensure_success(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(ClientError::Status {
            code: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    res.json::<T>().await.map_err(ClientError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = ComptesWebClient::new(BaseUrl::new("http://10.0.2.2:8082/api/").unwrap());
        assert_eq!(client.collection_url(), "http://10.0.2.2:8082/api/comptes");
        assert_eq!(client.item_url(42), "http://10.0.2.2:8082/api/comptes/42");
    }

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            code: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "404 - Not Found");
        assert_eq!(err.status_code(), Some(404));
    }
}
