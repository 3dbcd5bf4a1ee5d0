pub mod client;
pub mod compte;
pub mod constants;
pub mod types;

use types::BaseUrl;

pub fn get_client(base_url: BaseUrl) -> client::ComptesWebClient {
    client::ComptesWebClient::new(base_url)
}
