//! Backend REST client
//!
//! Pages talk to the backend through the [`BankApi`] trait, reached from the
//! Dioxus context via [`ApiClient`]. The browser build uses [`HttpBankApi`];
//! tests substitute an in-memory fake.

use crate::error::ApiError;
use crate::model::{Account, AccountRequest, ProfileRequest, Transaction, UserProfile};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use std::rc::Rc;

pub const PROFILE_PATH: &str = "/auth/profile";
pub const ACCOUNTS_PATH: &str = "/accounts";
pub const TRANSACTIONS_PATH: &str = "/transactions";

#[async_trait(?Send)]
pub trait BankApi {
    /// `POST /auth/profile`
    async fn create_profile(
        &self,
        token: &str,
        request: &ProfileRequest,
    ) -> Result<UserProfile, ApiError>;

    /// `POST /accounts`
    async fn create_account(
        &self,
        token: &str,
        request: &AccountRequest,
    ) -> Result<Account, ApiError>;

    /// `GET /transactions`
    async fn list_transactions(&self, token: Option<&str>) -> Result<Vec<Transaction>, ApiError>;
}

/// Shared handle put in the Dioxus context
#[derive(Clone)]
pub struct ApiClient(Rc<dyn BankApi>);

impl ApiClient {
    pub fn new(api: impl BankApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Deref for ApiClient {
    type Target = dyn BankApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub struct HttpBankApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBankApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(
        &self,
        request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Backend answered {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: message_from_body(&body),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Extracts the `message` field of a JSON error body
fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

#[async_trait(?Send)]
impl BankApi for HttpBankApi {
    async fn create_profile(
        &self,
        token: &str,
        request: &ProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        log::debug!("POST {}", PROFILE_PATH);
        let builder = self.client.post(self.url(PROFILE_PATH)).json(request);
        self.send(self.authorized(builder, Some(token))).await
    }

    async fn create_account(
        &self,
        token: &str,
        request: &AccountRequest,
    ) -> Result<Account, ApiError> {
        log::debug!("POST {} ({:?})", ACCOUNTS_PATH, request.account_type);
        let builder = self.client.post(self.url(ACCOUNTS_PATH)).json(request);
        self.send(self.authorized(builder, Some(token))).await
    }

    async fn list_transactions(&self, token: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
        log::debug!("GET {}", TRANSACTIONS_PATH);
        let builder = self.client.get(self.url(TRANSACTIONS_PATH));
        self.send(self.authorized(builder, token)).await
    }
}

/// In-memory [`BankApi`] recording every call it receives
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    pub struct FakeApi {
        pub calls: RefCell<Vec<String>>,
        pub profile: Result<UserProfile, ApiError>,
        pub account: Result<Account, ApiError>,
        pub transactions: Result<Vec<Transaction>, ApiError>,
    }

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                profile: Ok(UserProfile::default()),
                account: Ok(Account {
                    account_number: Some("ACC-1".to_string()),
                    account_type: None,
                    balance: None,
                    currency: None,
                    extra: Default::default(),
                }),
                transactions: Ok(Vec::new()),
            }
        }
    }

    impl FakeApi {
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl BankApi for FakeApi {
        async fn create_profile(
            &self,
            token: &str,
            request: &ProfileRequest,
        ) -> Result<UserProfile, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("profile:{}:{}", token, request.name));
            self.profile.clone()
        }

        async fn create_account(
            &self,
            token: &str,
            request: &AccountRequest,
        ) -> Result<Account, ApiError> {
            self.calls.borrow_mut().push(format!(
                "account:{}:{}:{}",
                token,
                request.account_type.code(),
                request.currency.code()
            ));
            self.account.clone()
        }

        async fn list_transactions(
            &self,
            token: Option<&str>,
        ) -> Result<Vec<Transaction>, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("transactions:{}", token.unwrap_or("-")));
            self.transactions.clone()
        }
    }
}
