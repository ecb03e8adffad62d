use serde_json::Value;

use crate::collection::types::{
    Auth, Body, Event, Header, Method, Request, RequestItem, Script, Url,
};

/// Variable the default bearer auth points at
pub const ACCESS_TOKEN_VARIABLE: &str = "accessToken";

/// Builds one collection request.
///
/// Auth defaults to bearer `{{accessToken}}`; every other part is opt-in.
/// Building is pure and never fails.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    name: String,
    method: Method,
    path: String,
    body: Option<Value>,
    auth: bool,
    test_script: Vec<String>,
    description: Option<String>,
}

impl RequestBuilder {
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            body: None,
            auth: true,
            test_script: Vec::new(),
            description: None,
        }
    }

    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Get, path)
    }

    pub fn post(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Post, path)
    }

    pub fn put(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Put, path)
    }

    pub fn delete(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Delete, path)
    }

    /// JSON payload, pretty-printed into `body.raw`
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_auth(mut self, auth: bool) -> Self {
        self.auth = auth;
        self
    }

    pub fn public(self) -> Self {
        self.with_auth(false)
    }

    pub fn with_test_script<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_script = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> RequestItem {
        let mut request = Request {
            method: self.method,
            header: Vec::new(),
            url: Url::from_path(&self.path),
            description: self.description.filter(|d| !d.is_empty()),
            auth: None,
            body: None,
        };

        if self.auth {
            request.auth = Some(Auth::bearer(ACCESS_TOKEN_VARIABLE));
        }

        if let Some(body) = self.body.filter(|b| !is_empty_body(b)) {
            request
                .header
                .push(Header::new("Content-Type", "application/json"));
            let raw = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
            request.body = Some(Body {
                mode: "raw".to_string(),
                raw,
            });
        }

        let event = if self.test_script.is_empty() {
            Vec::new()
        } else {
            vec![Event {
                listen: "test".to_string(),
                script: Script {
                    exec: self.test_script,
                    kind: "text/javascript".to_string(),
                },
            }]
        };

        RequestItem {
            name: self.name,
            request,
            event,
        }
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        // false / 0 也是合法的 JSON body
        _ => false,
    }
}
