use soroban_sdk::{contractclient, Address, Env};

use super::types::DeskError;
use crate::pricefeed::types::PriceRecord;

#[contractclient(name = "ExchangeDeskClient")]
pub trait ExchangeDeskInterface {
    fn __constructor(env: Env, admin: Address, price_feed: Address) -> Result<(), DeskError>;
    fn version() -> u32;
    fn fund(env: Env, account: Address, amount: i128) -> Result<(), DeskError>;
    fn buy(env: Env, buyer: Address, quoted: PriceRecord) -> Result<PriceRecord, DeskError>;
    fn sell(env: Env, seller: Address, quoted: PriceRecord) -> Result<PriceRecord, DeskError>;
    fn usd_balance(env: Env, account: Address) -> i128;
    fn coin_balance(env: Env, account: Address) -> u64;
}
