// relay-client/src/client.rs
use crate::config::Settings;
use relay_api::{CancellationToken, HttpClient, RelayClient, RelayError, ReqwestClient};

/// High-level entry point: mask selection and export on top of [`RelayClient`]
pub struct RelayService<C: HttpClient = ReqwestClient> {
    api: RelayClient<C>,
}

impl RelayService<ReqwestClient> {
    /// Build the production client. `cancel` aborts whatever request is in
    /// flight when it fires.
    pub fn connect(
        settings: &Settings,
        user_agent: &str,
        cancel: CancellationToken,
    ) -> Result<Self, RelayError> {
        let http = ReqwestClient::builder(settings.api_key.clone())
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;

        let api = RelayClient::new(http, &settings.base_url).with_cancellation(cancel);
        Ok(Self { api })
    }
}

impl<C: HttpClient> RelayService<C> {
    pub fn new(api: RelayClient<C>) -> Self {
        Self { api }
    }

    /// Direct access for resources without selection logic
    pub fn api(&self) -> &RelayClient<C> {
        &self.api
    }
}
