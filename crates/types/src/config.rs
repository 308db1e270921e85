//! Chain configuration needed to build signing domains.

use crate::{Address, Eip712Domain};
use serde::{Deserialize, Serialize};

/// Configuration of the chain and hub this library talks to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PocoConfig {
    /// Chain id.
    ///
    /// Default: `134`
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Hub contract, the verifying contract of order signatures.
    pub hub_address: Address,
    /// Name of the order signing domain.
    ///
    /// Default: `"iExecODB"`
    #[serde(default = "default_domain_name")]
    pub domain_name: String,
    /// Version of the order signing domain.
    ///
    /// Default: `"5.0.0"`
    #[serde(default = "default_domain_version")]
    pub domain_version: String,
}

fn default_chain_id() -> u64 {
    PocoConfig::DEFAULT_CHAIN_ID
}

fn default_domain_name() -> String {
    Eip712Domain::POCO_NAME.to_string()
}

fn default_domain_version() -> String {
    Eip712Domain::POCO_VERSION.to_string()
}

impl PocoConfig {
    /// Default chain id.
    pub const DEFAULT_CHAIN_ID: u64 = 134;

    /// Configuration for `hub_address` with every other field defaulted.
    pub fn new(hub_address: Address) -> Self {
        Self {
            chain_id: default_chain_id(),
            hub_address,
            domain_name: default_domain_name(),
            domain_version: default_domain_version(),
        }
    }

    /// Domain orders are signed under.
    pub fn order_domain(&self) -> Eip712Domain {
        Eip712Domain {
            name: self.domain_name.clone(),
            version: self.domain_version.clone(),
            chain_id: self.chain_id,
            verifying_contract: Some(self.hub_address),
        }
    }

    /// Domain challenges are signed under.
    pub fn challenge_domain(&self) -> Eip712Domain {
        Eip712Domain::challenge(self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_yaml() {
        let config: PocoConfig =
            serde_yaml::from_str("hubAddress: \"0x3eca1B216A7DF1C7689aEb259fFB83ADFB894E7f\"\n")
                .unwrap();
        assert_eq!(
            config,
            PocoConfig::new("0x3eca1b216a7df1c7689aeb259ffb83adfb894e7f".parse().unwrap())
        );
        let domain = config.order_domain();
        assert_eq!(domain.name, "iExecODB");
        assert_eq!(domain.version, "5.0.0");
        assert_eq!(domain.chain_id, 134);
        assert_eq!(domain.verifying_contract, Some(config.hub_address));
    }

    #[test]
    fn overrides_from_yaml() {
        let yaml = "chainId: 65535\nhubAddress: \"0xc4b11d9e2f8a5e7f4c0f9c2d1f6c4a3b2e1d0c9b\"\ndomainVersion: \"5.1.0\"\n";
        let config: PocoConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.chain_id, 65535);
        assert_eq!(config.domain_version, "5.1.0");
        assert_eq!(config.challenge_domain(), Eip712Domain::challenge(65535));
    }
}
