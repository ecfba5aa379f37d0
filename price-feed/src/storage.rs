use common::{
    pricefeed::types::{DataKey, OracleError, PriceRecord},
    storage::get_data,
};
use soroban_sdk::{Address, BytesN, Env};

pub use common::storage::store_data;

pub fn read_oracle_key(env: &Env) -> Result<BytesN<32>, OracleError> {
    get_data(env, &DataKey::OraclePublicKey).ok_or(OracleError::NotInitialized)
}

pub fn read_price_record(env: &Env) -> Result<PriceRecord, OracleError> {
    get_data(env, &DataKey::PriceData).ok_or(OracleError::NotInitialized)
}

/// Replaces the whole record; there is no per-field setter.
pub fn write_price_record(env: &Env, record: &PriceRecord) {
    store_data(env, &DataKey::PriceData, record);
}

pub fn read_max_delay(env: &Env) -> Result<u64, OracleError> {
    get_data(env, &DataKey::MaxDelayTime).ok_or(OracleError::NotInitialized)
}

pub fn write_max_delay(env: &Env, max_delay_time: u64) {
    store_data(env, &DataKey::MaxDelayTime, &max_delay_time);
}

pub fn read_admin(env: &Env) -> Result<Address, OracleError> {
    get_data(env, &DataKey::Admin).ok_or(OracleError::NotInitialized)
}
