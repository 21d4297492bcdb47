// relay-api/src/http/reqwest.rs
use super::{HttpClient, HttpError, HttpRequest, HttpResponse, Method};
use crate::client::DEFAULT_TIMEOUT;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

const CONTENT_TYPE_JSON: &str = "application/json";

pub struct ReqwestClient {
    inner: reqwest::Client,
    token: String,
}

impl ReqwestClient {
    pub fn builder(token: impl Into<String>) -> ReqwestClientBuilder {
        ReqwestClientBuilder {
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    pub fn new(token: impl Into<String>) -> Result<Self, HttpError> {
        Self::builder(token).build()
    }

    fn headers(&self) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Token {}", self.token))
            .map_err(|_| HttpError::new("API key contains characters not allowed in a header"))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        Ok(headers)
    }
}

pub struct ReqwestClientBuilder {
    token: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ReqwestClientBuilder {
    /// Bound for each individual request, not cumulative
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<ReqwestClient, HttpError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        let inner = builder
            .build()
            .map_err(|e| HttpError::new(format!("building HTTP client: {}", e)))?;

        Ok(ReqwestClient {
            inner,
            token: self.token,
        })
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn transport_error(e: reqwest::Error) -> HttpError {
    HttpError {
        timed_out: e.is_timeout(),
        message: e.to_string(),
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut req = self
            .inner
            .request(to_reqwest(request.method), &request.url)
            .headers(self.headers()?);

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await.map_err(transport_error)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(transport_error)?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
