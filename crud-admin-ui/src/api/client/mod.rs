use crud::{Config, PageLocation, UserId};
use dioxus::prelude::{info, warn};
use reqwest::Client;
use shared_http::api::DeleteUserForm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server rejected the request with status {0}")]
    Rejected(u16),
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    location: PageLocation,
    csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config, location: PageLocation) -> Self {
        Self {
            client: reqwest::Client::new(),
            location,
            csrf_token: config.csrf_token.clone(),
        }
    }
}

impl ApiClient {
    /// Submit the delete form for one user. The refreshed list arrives over the channel.
    pub async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        let url = self.location.delete_form_url();
        let form = DeleteUserForm::new(id, self.csrf_token.clone());
        info!("Deleting user {} via {}", id, url);

        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            Ok(())
        } else {
            warn!("Delete of user {} failed with {}", id, status);
            Err(ApiError::Rejected(status.as_u16()))
        }
    }
}
