//! Browser `fetch` transport

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use super::{ApiReply, ApiRequest, CartTransport};
use crate::error::CartError;

/// JSON requests against the storefront origin, sending the session cookie
#[derive(Clone, Debug, Default)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build(&self, request: &ApiRequest) -> Result<Request, JsValue> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_credentials(RequestCredentials::SameOrigin);

        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        headers.set("Accept", "application/json")?;
        init.set_headers(&headers);

        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let url = format!("{}{}", self.base_url, request.path);
        Request::new_with_str_and_init(&url, &init)
    }
}

#[async_trait(?Send)]
impl CartTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, CartError> {
        let js_request = self.build(&request).map_err(js_error)?;
        let window = web_sys::window().ok_or_else(|| CartError::Network("no window".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(ApiReply {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn js_error(value: JsValue) -> CartError {
    CartError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
