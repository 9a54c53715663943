//! Cookie-session HTTP implementation of the [`Api`] contract.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use stockdesk_core::{AuthError, ProductId, TransportError};

use crate::api::Api;
use crate::product::{Product, ProductPage, ProductQuery, ProductUpdate, SaveReceipt};

/// HTTP transport with an internal cookie store.
///
/// The session cookie set by `/auth/login` is held by the underlying client
/// and attached to every request automatically. Cloning is cheap and all
/// clones share the same cookie jar, so one login covers the whole app.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::network(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and parse the body as JSON.
    ///
    /// An unparseable body is treated as an empty object (error extraction
    /// then falls back to the generic message); a non-success status fails
    /// with the extracted message.
    async fn call(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&'static str, String)]>,
        body: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;
        let parsed: Value =
            serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Default::default()));

        if !(200..300).contains(&status) {
            let message = error_message(status, &parsed);
            tracing::debug!(%method, path, status, %message, "request failed");
            return Err(TransportError::http(status, message));
        }

        Ok(parsed)
    }
}

/// Extract a display message from a failed response body.
pub(crate) fn error_message(status: u16, body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value)
        .map_err(|e| TransportError::network(format!("invalid response body: {e}")))
}

impl Api for HttpTransport {
    async fn fetch_identity(&self) -> Result<Value, TransportError> {
        self.call(Method::GET, "/auth/me", None, None).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        self.call(Method::POST, "/auth/login", None, Some(&body))
            .await
            .map(|_| ())
            .map_err(AuthError::from)
    }

    async fn logout(&self) -> Result<(), TransportError> {
        self.call(Method::POST, "/auth/logout", None, None)
            .await
            .map(|_| ())
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, TransportError> {
        let params = query.params();
        let value = self
            .call(Method::GET, "/products", Some(&params), None)
            .await?;
        decode(value)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, TransportError> {
        let value = self
            .call(Method::GET, &format!("/products/{id}"), None, None)
            .await?;
        decode(value)
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<SaveReceipt, TransportError> {
        let body = serde_json::to_value(update)
            .map_err(|e| TransportError::network(format!("invalid update payload: {e}")))?;
        let value = self
            .call(Method::PUT, &format!("/products/{id}"), None, Some(&body))
            .await?;
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_the_body_error_field() {
        let body = json!({ "error": "invalid credentials" });
        assert_eq!(error_message(401, &body), "invalid credentials");
    }

    #[test]
    fn error_message_falls_back_to_generic_http_status() {
        assert_eq!(error_message(500, &json!({})), "HTTP 500");
        assert_eq!(error_message(403, &json!({ "error": 42 })), "HTTP 403");
    }

    #[test]
    fn trailing_slashes_are_stripped_from_the_base_url() {
        let transport = HttpTransport::new("http://localhost:5000///").unwrap();
        assert_eq!(transport.base_url(), "http://localhost:5000");
    }
}
