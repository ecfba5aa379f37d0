use soroban_sdk::{contractclient, Address, BytesN, Env};

use super::types::{OracleError, PriceRecord};

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn __constructor(env: Env, admin: Address) -> Result<(), OracleError>;
    fn version() -> u32;
    fn verify(env: Env, time: u64, price: u64, signature: BytesN<64>) -> Result<(), OracleError>;
    fn get_price_data(env: Env) -> Result<PriceRecord, OracleError>;
    fn is_fresh(env: Env) -> Result<bool, OracleError>;
    fn set_max_delay_time(env: Env, max_delay_time: u64) -> Result<(), OracleError>;
    fn oracle_public_key(env: Env) -> Result<BytesN<32>, OracleError>;
    fn price_data(env: Env) -> Result<PriceRecord, OracleError>;
    fn max_delay_time(env: Env) -> Result<u64, OracleError>;
    fn admin(env: Env) -> Result<Address, OracleError>;
}
