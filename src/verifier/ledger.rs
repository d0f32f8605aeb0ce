use std::collections::HashMap;

use ethers::types::{Address, U256};
use parking_lot::RwLock;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Crediting {amount} would exceed the supply cap of {cap}")]
    SupplyCapExceeded { amount: U256, cap: U256 },

    #[error("Balance overflow")]
    Overflow,
}

/// The token balance ledger credited by the verifier.
///
/// `credit` is called exactly once per successful claim, while the verifier holds its claim lock.
/// An error leaves the claim unrecorded.
pub trait Ledger: Send + Sync {
    fn credit(&self, account: Address, amount: U256) -> Result<(), LedgerError>;
}

#[derive(Debug, Default)]
struct Balances {
    accounts: HashMap<Address, U256>,
    total_supply: U256,
}

/// Ledger kept in memory, with an optional cap on the total supply.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: RwLock<Balances>,
    supply_cap: Option<U256>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_supply_cap(supply_cap: U256) -> Self {
        InMemoryLedger {
            balances: RwLock::new(Balances::default()),
            supply_cap: Some(supply_cap),
        }
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances
            .read()
            .accounts
            .get(account)
            .copied()
            .unwrap_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.balances.read().total_supply
    }
}

impl Ledger for InMemoryLedger {
    fn credit(&self, account: Address, amount: U256) -> Result<(), LedgerError> {
        let mut balances = self.balances.write();

        let total_supply = balances
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        if let Some(cap) = self.supply_cap {
            if total_supply > cap {
                return Err(LedgerError::SupplyCapExceeded { amount, cap });
            }
        }
        let balance = balances
            .accounts
            .get(&account)
            .copied()
            .unwrap_or_default()
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        balances.accounts.insert(account, balance);
        balances.total_supply = total_supply;
        Ok(())
    }
}
