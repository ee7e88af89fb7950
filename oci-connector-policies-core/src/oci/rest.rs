//! Signed REST calls against OCI service endpoints.

use crate::oci::signer::{http_date, ApiKeySigner};
use crate::oci::{OciError, OciResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

/// Pagination token header returned by list operations.
const NEXT_PAGE_HEADER: &str = "opc-next-page";

/// Everything except RFC 3986 unreserved characters.
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub struct OciRestClient {
    http: reqwest::Client,
    signer: ApiKeySigner,
}

impl OciRestClient {
    pub fn new(signer: ApiKeySigner) -> Self {
        Self {
            http: reqwest::Client::new(),
            signer,
        }
    }

    /// Signed GET, body deserialized as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        host: &str,
        path_and_query: &str,
    ) -> OciResult<T> {
        let (body, _) = self.get(host, path_and_query).await?;
        serde_json::from_str(&body).map_err(|e| OciError::DecodeError(e.to_string()))
    }

    /// Signed GET for a list operation; also returns the `opc-next-page`
    /// token when the service has more pages.
    pub async fn get_json_page<T: DeserializeOwned>(
        &self,
        host: &str,
        path_and_query: &str,
    ) -> OciResult<(Vec<T>, Option<String>)> {
        let (body, next_page) = self.get(host, path_and_query).await?;
        let items = serde_json::from_str(&body).map_err(|e| OciError::DecodeError(e.to_string()))?;
        Ok((items, next_page))
    }

    async fn get(&self, host: &str, path_and_query: &str) -> OciResult<(String, Option<String>)> {
        let date = http_date();
        let authorization = self.signer.authorization("GET", host, path_and_query, &date)?;
        let url = format!("https://{host}{path_and_query}");

        let response = self
            .http
            .get(&url)
            .header("date", date)
            .header("host", host)
            .header("authorization", authorization)
            .send()
            .await
            .map_err(|e| OciError::RequestError(format!("GET {url}: {e}")))?;

        let status = response.status();
        let next_page = response
            .headers()
            .get(NEXT_PAGE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| OciError::RequestError(format!("reading body of {url}: {e}")))?;

        if !status.is_success() {
            return Err(OciError::ServiceError {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok((body, next_page))
    }
}

/// Assemble a query string whose encoding matches what gets signed.
pub fn query_string(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_ENCODE)))
        .collect();
    format!("?{}", encoded.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_empty() {
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn query_string_plain_values() {
        assert_eq!(
            query_string(&[("compartmentId", "ocid1.compartment.oc1..aaaa")]),
            "?compartmentId=ocid1.compartment.oc1..aaaa"
        );
    }

    #[test]
    fn query_string_encodes_reserved_characters() {
        assert_eq!(
            query_string(&[("page", "AAAA==/+"), ("limit", "50")]),
            "?page=AAAA%3D%3D%2F%2B&limit=50"
        );
    }
}
