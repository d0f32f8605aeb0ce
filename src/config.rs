use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

/// Number of decimals of the airdropped token.
pub const TOKEN_DECIMALS: u32 = 18;

/// Default amount credited per successful claim: two whole tokens.
pub fn default_claim_amount() -> U256 {
    U256::from(2u64) * U256::exp10(TOKEN_DECIMALS as usize)
}

/// Parameters of one airdrop deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirdropConfig {
    /// The only account allowed to rotate the published root.
    pub authority: Address,
    /// Fixed amount credited to every successful claimant, in base units.
    #[serde(default = "default_claim_amount")]
    pub claim_amount: U256,
}

impl AirdropConfig {
    pub fn new(authority: Address) -> Self {
        AirdropConfig {
            authority,
            claim_amount: default_claim_amount(),
        }
    }

    pub fn with_claim_amount(mut self, claim_amount: U256) -> Self {
        self.claim_amount = claim_amount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_claim_amount_is_two_tokens() {
        let amount = default_claim_amount();
        assert_eq!(amount, U256::from_dec_str("2000000000000000000").unwrap());
    }

    #[test]
    fn test_config_claim_amount_defaults_when_missing() {
        let json = r#"{"authority":"0x627306090abab3a6e1400e9345bc60c78a8bef57"}"#;
        let config: AirdropConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.claim_amount, default_claim_amount());
        assert_eq!(
            config.authority,
            "0x627306090abaB3A6e1400e9345bC60c78a8BEf57"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn test_config_round_trips_custom_amount() {
        let config =
            AirdropConfig::new(Address::from_low_u64_be(7)).with_claim_amount(U256::from(5u64));
        let json = serde_json::to_string(&config).unwrap();
        let restored: AirdropConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
