use soroban_sdk::{contracterror, contracttype};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    InvalidSignature = 1,
    StaleSnapshot = 2,
    PriceUnavailable = 3,
    StaleData = 4,
    NotInitialized = 5,
}

/// Byte length of the message signed by the trusted oracle.
pub const PRICE_MESSAGE_LEN: usize = 16;

/// Last accepted oracle reading. `time` is in UNIX seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceRecord {
    pub price: u64,
    pub time: u64,
}

impl PriceRecord {
    pub fn new(price: u64, time: u64) -> Self {
        Self { price, time }
    }

    /// The initial, never-set record.
    pub fn unset() -> Self {
        Self::new(0, 0)
    }

    pub fn is_set(&self) -> bool {
        self.price > 0
    }

    /// Message the oracle signs: `price || time`, both big-endian.
    pub fn message(&self) -> [u8; PRICE_MESSAGE_LEN] {
        let mut msg = [0u8; PRICE_MESSAGE_LEN];
        msg[..8].copy_from_slice(&self.price.to_be_bytes());
        msg[8..].copy_from_slice(&self.time.to_be_bytes());
        msg
    }
}

#[contracttype(export = false)]
#[derive(Clone)]
pub enum DataKey {
    OraclePublicKey,
    PriceData,
    MaxDelayTime,
    Admin,
}
