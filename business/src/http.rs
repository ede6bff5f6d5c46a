//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it wraps JS values. Requests are
//! therefore executed with `wasm_bindgen_futures::spawn_local` and the result is passed
//! back through a `flume` channel, so every command can still return a `Send` future.
//! On native the same request runs inline.

use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// A response that only holds Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Lowercased header names.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A single file sent as a multipart form part.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
}

#[derive(Debug, Clone)]
enum Body {
    Bytes(Vec<u8>),
    Multipart(FilePart),
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<Body>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds `Authorization: Bearer <token>` when a token is present.
    pub fn bearer(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.header("Authorization", format!("Bearer {token}")),
            None => self,
        }
    }

    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        let json_bytes = serde_json::to_vec(value)?;
        self.body = Some(Body::Bytes(json_bytes));
        self.headers
            .insert("content-type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Send a multipart form with a single file part. The boundary header is set by reqwest.
    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = Some(Body::Multipart(part));
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.execute().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            wasm_bindgen_futures::spawn_local(async move {
                let result = self.execute().await;
                // The receiver may already be gone.
                let _ = tx.send_async(result).await;
            });
            rx.recv_async()
                .await
                .map_err(|_| HttpError::new("Request cancelled"))?
        }
    }

    async fn execute(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = match self.method {
            Method::Get => client.get(&self.url),
            Method::Post => client.post(&self.url),
            Method::Put => client.put(&self.url),
        };

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        match self.body {
            Some(Body::Bytes(bytes)) => request = request.body(bytes),
            Some(Body::Multipart(part)) => {
                let file = reqwest::multipart::Part::bytes(part.bytes.as_ref().clone())
                    .file_name(part.file_name)
                    .mime_str(&part.mime)
                    .map_err(|e| HttpError::new(e.to_string()))?;
                request = request.multipart(reqwest::multipart::Form::new().part(part.field, file));
            }
            None => {}
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), v.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// HTTP client with Send-safe futures on all platforms.
///
/// ```ignore
/// let response = Client::get(format!("{base}/auth/me"))
///     .bearer(Some("token"))
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Put, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            headers: HashMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut resp = response(200, b"");
        resp.headers
            .insert("content-type".to_string(), "application/json".to_string());

        assert_eq!(resp.header("Content-Type"), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_response_json() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Payload {
            url: String,
        }

        let resp = response(200, br#"{"url": "https://cdn/x.png"}"#);
        let data: Payload = resp.json().unwrap();
        assert_eq!(data.url, "https://cdn/x.png");
    }

    #[test]
    fn test_bearer_only_when_token_present() {
        let with = Client::get("https://example.com").bearer(Some("abc"));
        assert_eq!(
            with.headers.get("Authorization"),
            Some(&"Bearer abc".to_string())
        );

        let without = Client::get("https://example.com").bearer(None);
        assert!(without.headers.is_empty());
    }

    #[test]
    fn test_request_builder_json() {
        let builder = Client::put("https://example.com")
            .json(&serde_json::json!({ "name": "Ada" }))
            .unwrap();

        assert_eq!(
            builder.headers.get("content-type"),
            Some(&"application/json".to_string())
        );
        assert!(matches!(builder.body, Some(Body::Bytes(_))));
    }

    #[test]
    fn test_request_builder_multipart() {
        let builder = Client::post("https://example.com/api/upload").multipart(FilePart {
            field: "file".to_string(),
            file_name: "avatar.png".to_string(),
            mime: "image/png".to_string(),
            bytes: Arc::new(vec![1, 2, 3]),
        });

        assert_eq!(builder.method, Method::Post);
        assert!(matches!(builder.body, Some(Body::Multipart(ref p)) if p.field == "file"));
    }
}
