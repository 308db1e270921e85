//! Execution parameters carried by request orders and deals.
//!
//! Parameters are a JSON object. A params string that is not such an object
//! is a legacy deal whose whole params string is the command line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage provider used when none is requested.
pub const DEFAULT_STORAGE_PROVIDER: &str = "ipfs";

/// Parsed deal parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealParams {
    /// Command line arguments.
    #[serde(rename = "iexec_args", default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    /// URLs of files downloaded before execution.
    #[serde(
        rename = "iexec_input_files",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub input_files: Vec<String>,
    /// Whether results are encrypted for the beneficiary.
    #[serde(rename = "iexec_result_encryption", default)]
    pub result_encryption: bool,
    /// Where results are pushed.
    #[serde(
        rename = "iexec_result_storage_provider",
        default = "default_storage_provider"
    )]
    pub result_storage_provider: String,
    /// Proxy of the result storage provider.
    #[serde(
        rename = "iexec_result_storage_proxy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub result_storage_proxy: Option<String>,
    /// Requester secrets, by index.
    #[serde(
        rename = "iexec_secrets",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub secrets: BTreeMap<String, String>,
    /// Whether execution logs are reported to the developer.
    #[serde(rename = "iexec_developer_logger", default)]
    pub developer_logger: bool,
}

fn default_storage_provider() -> String {
    DEFAULT_STORAGE_PROVIDER.to_string()
}

impl Default for DealParams {
    fn default() -> Self {
        Self {
            args: None,
            input_files: Vec::new(),
            result_encryption: false,
            result_storage_provider: default_storage_provider(),
            result_storage_proxy: None,
            secrets: BTreeMap::new(),
            developer_logger: false,
        }
    }
}

impl DealParams {
    /// Parse a deal's params string.
    pub fn from_params(params: &str) -> Self {
        if params.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(params).unwrap_or_else(|_| Self {
            args: Some(params.to_string()),
            ..Self::default()
        })
    }

    /// Serialize to the JSON params string of a request order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
