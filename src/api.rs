//! Sous-type Endpoint
//!
//! Frontend binding for `GET /api/sous-types/{parent_id}`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dropdown::{SousTypeRequest, SousTypeSource};
use crate::error::{describe_js, FormError};
use crate::models::{ChildOptionList, ParentSelection};

/// Characters escaped inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `{endpoint}/{parent}` with the parent id escaped as a single segment
pub fn sous_types_url(endpoint: &str, parent: &ParentSelection) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        utf8_percent_encode(parent.as_str(), PATH_SEGMENT)
    )
}

/// Sous-types fetched from the Flask backend with `window.fetch`
#[derive(Debug, Clone)]
pub struct FetchSousTypes {
    endpoint: String,
}

impl FetchSousTypes {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SousTypeSource for FetchSousTypes {
    fn fetch(&self, parent: &ParentSelection) -> SousTypeRequest {
        let url = sous_types_url(&self.endpoint, parent);
        // The request is on the wire before the caller first polls.
        let sent = web_sys::window()
            .ok_or_else(|| FormError::Network("no window".to_string()))
            .map(|window| window.fetch_with_str(&url));
        Box::pin(async move {
            let response = JsFuture::from(sent?).await.map_err(FormError::network)?;
            let response: Response = response.dyn_into().map_err(FormError::network)?;
            decode_response(response).await
        })
    }
}

async fn decode_response(response: Response) -> Result<ChildOptionList, FormError> {
    if !response.ok() {
        return Err(FormError::Status(response.status()));
    }
    let body = response
        .json()
        .map_err(|e| FormError::Decode(describe_js(&e)))?;
    let value = JsFuture::from(body)
        .await
        .map_err(|e| FormError::Decode(describe_js(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(FormError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_numeric_parent() {
        let url = sous_types_url("/api/sous-types", &ParentSelection::new("5"));
        assert_eq!(url, "/api/sous-types/5");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let url = sous_types_url("/api/sous-types/", &ParentSelection::new("12"));
        assert_eq!(url, "/api/sous-types/12");
    }

    #[test]
    fn test_url_keeps_whitespace_escaped() {
        let url = sous_types_url("/api/sous-types", &ParentSelection::new(" 12"));
        assert_eq!(url, "/api/sous-types/%2012");
    }

    #[test]
    fn test_url_escapes_segment() {
        let url = sous_types_url("/api/sous-types", &ParentSelection::new("a/b?c d"));
        assert_eq!(url, "/api/sous-types/a%2Fb%3Fc%20d");
    }
}
