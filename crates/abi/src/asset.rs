//! # Assets
//! Registry calls creating and predicting apps, datasets and workerpools,
//! and decoders for the accessor calls describing an existing asset.
//!
//! Multiaddresses are carried as the UTF-8 bytes of their text form.

use crate::{
    decode::{
        decode_address_return, decode_bool_return, decode_bytes32_return, decode_bytes_return,
        decode_string_return, DecodeError,
    },
    encode::{encode_call, Token},
    selector,
};
use poco_types::{Address, Bytes32, ChainApp, ChainDataset};


/// What an app registry is asked to create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppDefinition {
    /// Display name.
    pub name: String,
    /// Runtime kind, e.g. `DOCKER`.
    pub app_type: String,
    /// Where the app image lives.
    pub multiaddr: String,
    /// Checksum of the image.
    pub checksum: Bytes32,
    /// Enclave configuration JSON, empty for standard apps.
    pub mr_enclave: Vec<u8>,
}

/// What a dataset registry is asked to create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetDefinition {
    /// Display name.
    pub name: String,
    /// Where the dataset lives.
    pub multiaddr: String,
    /// Checksum of the dataset content.
    pub checksum: Bytes32,
}

fn app_tokens(owner: &Address, app: &AppDefinition) -> Vec<Token> {
    vec![
        Token::Address(*owner),
        Token::String(app.name.clone()),
        Token::String(app.app_type.clone()),
        Token::Bytes(app.multiaddr.as_bytes().to_vec()),
        Token::FixedBytes(app.checksum),
        Token::Bytes(app.mr_enclave.clone()),
    ]
}

fn dataset_tokens(owner: &Address, dataset: &DatasetDefinition) -> Vec<Token> {
    vec![
        Token::Address(*owner),
        Token::String(dataset.name.clone()),
        Token::Bytes(dataset.multiaddr.as_bytes().to_vec()),
        Token::FixedBytes(dataset.checksum),
    ]
}

fn workerpool_tokens(owner: &Address, description: &str) -> Vec<Token> {
    vec![
        Token::Address(*owner),
        Token::String(description.to_string()),
    ]
}

/// `createApp(owner, name, type, multiaddr, checksum, mrenclave)`.
pub fn encode_create_app(owner: &Address, app: &AppDefinition) -> String {
    encode_call(selector::CREATE_APP, &app_tokens(owner, app))
}

/// `predictApp(owner, name, type, multiaddr, checksum, mrenclave)`.
pub fn encode_predict_app(owner: &Address, app: &AppDefinition) -> String {
    encode_call(selector::PREDICT_APP, &app_tokens(owner, app))
}

/// `createDataset(owner, name, multiaddr, checksum)`.
pub fn encode_create_dataset(owner: &Address, dataset: &DatasetDefinition) -> String {
    encode_call(selector::CREATE_DATASET, &dataset_tokens(owner, dataset))
}

/// `predictDataset(owner, name, multiaddr, checksum)`.
pub fn encode_predict_dataset(owner: &Address, dataset: &DatasetDefinition) -> String {
    encode_call(selector::PREDICT_DATASET, &dataset_tokens(owner, dataset))
}

/// `createWorkerpool(owner, description)`.
pub fn encode_create_workerpool(owner: &Address, description: &str) -> String {
    encode_call(
        selector::CREATE_WORKERPOOL,
        &workerpool_tokens(owner, description),
    )
}

/// `predictWorkerpool(owner, description)`.
pub fn encode_predict_workerpool(owner: &Address, description: &str) -> String {
    encode_call(
        selector::PREDICT_WORKERPOOL,
        &workerpool_tokens(owner, description),
    )
}

/// `isRegistered(asset)`.
pub fn encode_is_registered(asset: &Address) -> String {
    encode_call(selector::IS_REGISTERED, &[Token::Address(*asset)])
}

/// Decode the address returned by a `predict*` call.
pub fn decode_predicted_address(raw: &str) -> Result<Address, DecodeError> {
    decode_address_return(raw)
}

/// Decode the flag returned by `isRegistered`.
pub fn decode_is_registered(raw: &str) -> Result<bool, DecodeError> {
    decode_bool_return(raw)
}

/// Raw return data of the accessor calls describing an app.
#[derive(Clone, Copy, Debug)]
pub struct AppReturnData<'a> {
    /// `owner()`.
    pub owner: &'a str,
    /// `m_appName()`.
    pub name: &'a str,
    /// `m_appType()`.
    pub app_type: &'a str,
    /// `m_appMultiaddr()`.
    pub multiaddr: &'a str,
    /// `m_appChecksum()`.
    pub checksum: &'a str,
    /// `m_appMREnclave()`.
    pub mr_enclave: &'a str,
}

/// Raw return data of the accessor calls describing a dataset.
#[derive(Clone, Copy, Debug)]
pub struct DatasetReturnData<'a> {
    /// `owner()`.
    pub owner: &'a str,
    /// `m_datasetName()`.
    pub name: &'a str,
    /// `m_datasetMultiaddr()`.
    pub multiaddr: &'a str,
    /// `m_datasetChecksum()`.
    pub checksum: &'a str,
}

fn decode_multiaddr(raw: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8_lossy(&decode_bytes_return(raw)?).into_owned())
}

/// Assemble the app at `id` from its accessor return data.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(app = %id), err))]
pub fn decode_app(id: &Address, raw: &AppReturnData<'_>) -> Result<ChainApp, DecodeError> {
    Ok(ChainApp {
        id: *id,
        owner: decode_address_return(raw.owner)?,
        name: decode_string_return(raw.name)?,
        app_type: decode_string_return(raw.app_type)?,
        multiaddr: decode_multiaddr(raw.multiaddr)?,
        checksum: decode_bytes32_return(raw.checksum)?,
        mr_enclave: decode_bytes_return(raw.mr_enclave)?,
    })
}

/// Assemble the dataset at `id` from its accessor return data.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(dataset = %id), err))]
pub fn decode_dataset(
    id: &Address,
    raw: &DatasetReturnData<'_>,
) -> Result<ChainDataset, DecodeError> {
    Ok(ChainDataset {
        id: *id,
        owner: decode_address_return(raw.owner)?,
        name: decode_string_return(raw.name)?,
        multiaddr: decode_multiaddr(raw.multiaddr)?,
        checksum: decode_bytes32_return(raw.checksum)?,
    })
}
