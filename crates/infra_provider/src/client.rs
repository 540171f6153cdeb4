//! HTTP client for the billing provider
//!
//! A thin adapter over the provider's REST API. The static credential is
//! attached to every call via the `access_token` header. Error bodies are
//! logged before being surfaced so failed calls can be diagnosed from the
//! server logs alone; there is no retry.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use async_trait::async_trait;
use domain_finance::{
    Customer, NewCustomer, NewPayment, Payment, PaymentQuery, PortError, ProviderPort,
};

use crate::wire::{ListEnvelope, WireCustomer, WireNewCustomer, WireNewPayment, WirePayment};

/// Header carrying the provider credential
const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Client for the external billing provider API
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ProviderClient {
    /// Creates a client against `base_url`, authenticating every call with
    /// `api_key`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(token) = HeaderValue::from_str(&self.api_key) {
            headers.insert(ACCESS_TOKEN_HEADER, token);
        }
        headers
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, PortError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .headers(self.headers())
            .query(query)
            .send()
            .await
            .map_err(|e| PortError::connection(e.to_string()))?;
        Self::decode(path, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, PortError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| PortError::connection(e.to_string()))?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, PortError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%path, status = status.as_u16(), %body, "provider call failed");
            return Err(PortError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| PortError::decode(e.to_string()))
    }
}

/// Query-string parameters for a payment listing
fn payment_query_params(query: &PaymentQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(customer_id) = &query.customer_id {
        params.push(("customerId", customer_id.to_string()));
    }
    if let Some(status) = query.status {
        params.push(("status", status.as_str().to_string()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

#[async_trait]
impl ProviderPort for ProviderClient {
    async fn list_customers(&self, limit: u32) -> Result<Vec<Customer>, PortError> {
        let envelope: ListEnvelope<WireCustomer> = self
            .get_json("/customers", &[("limit", limit.to_string())])
            .await?;
        Ok(envelope.data.into_iter().map(Customer::from).collect())
    }

    async fn create_customer(&self, new: NewCustomer) -> Result<Customer, PortError> {
        let wire: WireCustomer = self
            .post_json("/customers", &WireNewCustomer::from(new))
            .await?;
        Ok(wire.into())
    }

    async fn list_payments(&self, query: PaymentQuery) -> Result<Vec<Payment>, PortError> {
        let envelope: ListEnvelope<WirePayment> = self
            .get_json("/payments", &payment_query_params(&query))
            .await?;
        Ok(envelope.data.into_iter().map(Payment::from).collect())
    }

    async fn create_payment(&self, new: NewPayment) -> Result<Payment, PortError> {
        let wire: WirePayment = self
            .post_json("/payments", &WireNewPayment::from(new))
            .await?;
        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CustomerId;
    use domain_finance::PaymentStatus;

    #[test]
    fn payment_query_params_cover_all_filters() {
        let query = PaymentQuery {
            customer_id: Some(CustomerId::new("cus_1")),
            status: Some(PaymentStatus::Received),
            limit: Some(100),
        };
        assert_eq!(
            payment_query_params(&query),
            vec![
                ("customerId", "cus_1".to_string()),
                ("status", "RECEIVED".to_string()),
                ("limit", "100".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query_produces_no_params() {
        assert!(payment_query_params(&PaymentQuery::default()).is_empty());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ProviderClient::new("https://api.example.com/v3/", "key");
        assert_eq!(client.base_url, "https://api.example.com/v3");
    }
}
