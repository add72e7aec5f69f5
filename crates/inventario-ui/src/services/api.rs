//! HTTP client helpers (REST).

use crate::core::auth::{Credentials, LoginError, LoginService, fetch_failure, status_failure};
use async_trait::async_trait;
use gloo::console;
use gloo_net::http::{Request, Response};
use inventario_api_models::{ErrorBody, LoginRequest, User};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_login(&self, credentials: &Credentials) -> Result<User, LoginError> {
        let body = LoginRequest::from(credentials.clone());
        let req = Request::post(&self.url("/api/login"))
            .json(&body)
            .map_err(|err| LoginError::Unexpected {
                detail: format!("encode login request: {err}"),
            })?;
        let resp = req.send().await.map_err(send_error)?;
        if resp.ok() {
            return resp.json::<User>().await.map_err(|err| LoginError::Unexpected {
                detail: format!("decode user: {err}"),
            });
        }
        Err(status_error(resp).await)
    }
}

#[async_trait(?Send)]
impl LoginService for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<User, LoginError> {
        let result = self.post_login(credentials).await;
        if let Err(err) = &result {
            console::warn!("login request failed", err.to_string());
        }
        result
    }
}

fn send_error(err: gloo_net::Error) -> LoginError {
    match err {
        gloo_net::Error::JsError(js) => fetch_failure(&js.name, js.message),
        other => LoginError::Unexpected {
            detail: other.to_string(),
        },
    }
}

async fn status_error(resp: Response) -> LoginError {
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.ok();
    status_failure(status, body.as_ref())
}
