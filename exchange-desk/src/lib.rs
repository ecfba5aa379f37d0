#![no_std]

//! Trades a single coin against USD units at the price published by the
//! price feed. Every trade reads the price through the feed's freshness gate
//! and only goes through if the reading the trader quoted is still current.

mod events;
mod storage;
mod utils;

use common::{
    exchange::{
        interface::ExchangeDeskInterface,
        types::{DataKey, DeskError},
    },
    pricefeed::types::PriceRecord,
};
use events::DeskEvent;
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::{
    get_data, read_coin_balance, read_usd_balance, store_data, write_coin_balance,
    write_usd_balance,
};
use utils::current_price;

#[contract]
pub struct ExchangeDeskContract;

#[contractimpl]
impl ExchangeDeskInterface for ExchangeDeskContract {
    fn __constructor(env: Env, admin: Address, price_feed: Address) -> Result<(), DeskError> {
        store_data(&env, &DataKey::Admin, &admin);
        store_data(&env, &DataKey::PriceFeed, &price_feed);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn fund(env: Env, account: Address, amount: i128) -> Result<(), DeskError> {
        let admin: Address = get_data(&env, &DataKey::Admin).ok_or(DeskError::NotInitialized)?;
        admin.require_auth();

        if amount <= 0 {
            return Err(DeskError::InvalidAmount);
        }

        let balance = read_usd_balance(&env, &account)
            .checked_add(amount)
            .ok_or(DeskError::InvalidAmount)?;
        write_usd_balance(&env, &account, balance);

        DeskEvent::Funded(account, amount).publish(&env);
        Ok(())
    }

    fn buy(env: Env, buyer: Address, quoted: PriceRecord) -> Result<PriceRecord, DeskError> {
        buyer.require_auth();

        let record = current_price(&env, &quoted)?;
        let cost = i128::from(record.price);

        let usd = read_usd_balance(&env, &buyer);
        if usd < cost {
            return Err(DeskError::InsufficientBalance);
        }
        let coins = read_coin_balance(&env, &buyer)
            .checked_add(1)
            .ok_or(DeskError::InvalidAmount)?;

        write_usd_balance(&env, &buyer, usd - cost);
        write_coin_balance(&env, &buyer, coins);

        DeskEvent::Purchase(buyer, record.price, record.time).publish(&env);
        Ok(record)
    }

    fn sell(env: Env, seller: Address, quoted: PriceRecord) -> Result<PriceRecord, DeskError> {
        seller.require_auth();

        let record = current_price(&env, &quoted)?;

        let coins = read_coin_balance(&env, &seller);
        if coins == 0 {
            return Err(DeskError::InsufficientCoins);
        }
        let usd = read_usd_balance(&env, &seller)
            .checked_add(i128::from(record.price))
            .ok_or(DeskError::InvalidAmount)?;

        write_coin_balance(&env, &seller, coins - 1);
        write_usd_balance(&env, &seller, usd);

        DeskEvent::Sale(seller, record.price, record.time).publish(&env);
        Ok(record)
    }

    fn usd_balance(env: Env, account: Address) -> i128 {
        read_usd_balance(&env, &account)
    }

    fn coin_balance(env: Env, account: Address) -> u64 {
        read_coin_balance(&env, &account)
    }
}
