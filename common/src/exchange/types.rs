use soroban_sdk::{contracterror, contracttype, Address};

use crate::pricefeed::types::OracleError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DeskError {
    NotInitialized = 1,
    InvalidAmount = 2,
    InsufficientBalance = 3,
    InsufficientCoins = 4,
    PriceUnavailable = 5,
    StaleData = 6,
    StaleSnapshot = 7,
    OracleFailure = 8,
}

impl From<OracleError> for DeskError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::PriceUnavailable => DeskError::PriceUnavailable,
            OracleError::StaleData => DeskError::StaleData,
            OracleError::StaleSnapshot => DeskError::StaleSnapshot,
            OracleError::InvalidSignature | OracleError::NotInitialized => DeskError::OracleFailure,
        }
    }
}

#[contracttype(export = false)]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PriceFeed,
    UsdBalance(Address),
    CoinBalance(Address),
}
