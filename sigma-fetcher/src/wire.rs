//! random.org JSON-RPC `generateIntegers` envelope.
//!
//! API reference: <https://api.random.org/json-rpc/4/basic>

use serde::{Deserialize, Serialize};
use sigma_core::{RandomSet, SetSize};

use crate::UpstreamError;

/// Lower bound of every drawn integer.
pub const MIN_VALUE: u32 = 1;

/// Upper bound of every drawn integer.
pub const MAX_VALUE: u32 = 100;

/// Request body for `generateIntegers`.
#[derive(Debug, Serialize)]
pub struct GenerateIntegersRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: GenerateIntegersParams<'a>,
    id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateIntegersParams<'a> {
    api_key: &'a str,
    n: u32,
    min: u32,
    max: u32,
    replacement: bool,
    base: u32,
}

impl<'a> GenerateIntegersRequest<'a> {
    /// Build a request for `count` base-10 integers in `[MIN_VALUE, MAX_VALUE]`,
    /// drawn with replacement.
    #[must_use]
    pub fn new(api_key: &'a str, count: SetSize, id: String) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "generateIntegers",
            params: GenerateIntegersParams {
                api_key,
                n: count.get(),
                min: MIN_VALUE,
                max: MAX_VALUE,
                replacement: true,
                base: 10,
            },
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    error: Option<RpcError>,
    #[serde(default)]
    result: Option<RpcResult>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResult {
    random: RpcRandom,
}

#[derive(Debug, Deserialize)]
struct RpcRandom {
    data: Vec<u32>,
}

/// Decode a `generateIntegers` response body for a draw of `count` integers.
///
/// # Errors
/// Returns [`UpstreamError::Protocol`] if the envelope carries a non-zero
/// error code, and [`UpstreamError::Malformed`] if the body is not valid JSON,
/// lacks `result.random.data`, holds other than `count` values, or holds a
/// value outside `[MIN_VALUE, MAX_VALUE]`.
pub fn decode_response(body: &[u8], count: SetSize) -> Result<RandomSet, UpstreamError> {
    let response: RpcResponse = serde_json::from_slice(body)
        .map_err(|e| UpstreamError::Malformed(format!("decode body: {e}")))?;

    if let Some(error) = response.error {
        if error.code != 0 {
            return Err(UpstreamError::Protocol {
                code: error.code,
                message: error.message,
            });
        }
    }

    let data = response
        .result
        .map(|result| result.random.data)
        .ok_or_else(|| UpstreamError::Malformed("missing result.random.data".to_owned()))?;

    if data.len() != count.get() as usize {
        return Err(UpstreamError::Malformed(format!(
            "expected {count} values, got {}",
            data.len()
        )));
    }
    if let Some(value) = data.iter().find(|&&v| !(MIN_VALUE..=MAX_VALUE).contains(&v)) {
        return Err(UpstreamError::Malformed(format!(
            "value {value} outside [{MIN_VALUE}, {MAX_VALUE}]"
        )));
    }

    Ok(RandomSet::new(data))
}
