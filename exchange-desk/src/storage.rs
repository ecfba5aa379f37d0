use common::{
    exchange::types::DataKey,
    storage::{get_persistent, store_persistent},
};
use soroban_sdk::{Address, Env};

pub use common::storage::{get_data, store_data};

// Balances default to zero for accounts the desk has never seen.

pub fn read_usd_balance(env: &Env, account: &Address) -> i128 {
    get_persistent(env, &DataKey::UsdBalance(account.clone())).unwrap_or(0)
}

pub fn write_usd_balance(env: &Env, account: &Address, amount: i128) {
    store_persistent(env, &DataKey::UsdBalance(account.clone()), &amount);
}

pub fn read_coin_balance(env: &Env, account: &Address) -> u64 {
    get_persistent(env, &DataKey::CoinBalance(account.clone())).unwrap_or(0)
}

pub fn write_coin_balance(env: &Env, account: &Address, amount: u64) {
    store_persistent(env, &DataKey::CoinBalance(account.clone()), &amount);
}
