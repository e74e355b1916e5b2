use lambda_http::http::header::{CONTENT_TYPE, SET_COOKIE};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An API Gateway (HTTP API) response, serialised with the v2 payload field names.
///
/// The header and cookie containers are always present, even when empty, so the
/// runtime never has to deal with a missing collection.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub multi_value_headers: HashMap<String, Vec<String>>,
    pub cookies: Vec<String>,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single-value header, replacing any existing entry whose name differs only in case.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    pub fn with_multi_value_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let key = self
            .multi_value_headers
            .keys()
            .find(|existing| existing.eq_ignore_ascii_case(&name))
            .cloned()
            .unwrap_or(name);
        self.multi_value_headers
            .entry(key)
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookies.push(cookie.into());
        self
    }

    /// Looks up a single-value header, ignoring the case of `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Converts the envelope into the response handed back to the Lambda runtime.
    ///
    /// Headers present in `multi_value_headers` win over the single-value map, every
    /// cookie becomes its own `Set-Cookie` line and the body is passed through untouched.
    pub fn into_http_response(self) -> Result<Response<Body>, Error> {
        let status = StatusCode::from_u16(self.status_code).map_err(Box::new)?;

        let mut builder = Response::builder().status(status);

        for (name, value) in &self.headers {
            let overridden = self
                .multi_value_headers
                .keys()
                .any(|multi| multi.eq_ignore_ascii_case(name));
            if !overridden {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        for (name, values) in &self.multi_value_headers {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        for cookie in &self.cookies {
            builder = builder.header(SET_COOKIE, cookie.as_str());
        }

        let body = if self.body.is_empty() {
            Body::Empty
        } else {
            Body::Text(self.body)
        };

        let response = builder.body(body).map_err(Box::new)?;

        Ok(response)
    }
}
