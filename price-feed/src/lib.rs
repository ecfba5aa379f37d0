#![no_std]

mod events;
mod freshness;
mod storage;
mod verifier;

use common::pricefeed::{
    guards::ensure_snapshot_current,
    interface::PriceFeedInterface,
    types::{DataKey, OracleError, PriceRecord},
};
use events::OracleEvent;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env};
use storage::{
    read_admin, read_max_delay, read_oracle_key, read_price_record, store_data,
    write_max_delay, write_price_record,
};

/// Ed25519 key of the only data provider whose readings are accepted.
pub const ORACLE_PUBLIC_KEY: [u8; 32] = [
    0xea, 0x4a, 0x6c, 0x63, 0xe2, 0x9c, 0x52, 0x0a, 0xbe, 0xf5, 0x50, 0x7b, 0x13, 0x2e, 0xc5,
    0xf9, 0x95, 0x47, 0x76, 0xae, 0xbe, 0xbe, 0x7b, 0x92, 0x42, 0x1e, 0xea, 0x69, 0x14, 0x46,
    0xd2, 0x2c,
];

/// Freshness window in seconds applied until the admin changes it.
pub const DEFAULT_MAX_DELAY_TIME: u64 = 60;

#[contract]
pub struct PriceFeedContract;

#[contractimpl]
impl PriceFeedInterface for PriceFeedContract {
    fn __constructor(env: Env, admin: Address) -> Result<(), OracleError> {
        store_data(&env, &DataKey::Admin, &admin);
        store_data(
            &env,
            &DataKey::OraclePublicKey,
            &BytesN::from_array(&env, &ORACLE_PUBLIC_KEY),
        );
        write_price_record(&env, &PriceRecord::unset());
        write_max_delay(&env, DEFAULT_MAX_DELAY_TIME);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn verify(env: Env, time: u64, price: u64, signature: BytesN<64>) -> Result<(), OracleError> {
        let oracle_key: BytesN<32> = read_oracle_key(&env)?;
        ensure_snapshot_current(
            &BytesN::from_array(&env, &ORACLE_PUBLIC_KEY),
            &oracle_key,
            OracleError::StaleSnapshot,
        )?;

        let record = PriceRecord::new(price, time);
        if let Err(err) =
            verifier::verify_price_signature(&oracle_key.to_array(), &record, &signature.to_array())
        {
            log!(&env, "rejected reading", price, time);
            return Err(err);
        }

        write_price_record(&env, &record);
        OracleEvent::VerifiedPrice(price).publish(&env);
        OracleEvent::VerifiedTime(time).publish(&env);
        Ok(())
    }

    fn get_price_data(env: Env) -> Result<PriceRecord, OracleError> {
        let record = read_price_record(&env)?;
        let max_delay = read_max_delay(&env)?;
        let now = env.ledger().timestamp();

        if let Err(err) = freshness::check_fresh(&record, now, max_delay) {
            log!(&env, "price read refused", now, record.time);
            return Err(err);
        }
        Ok(record)
    }

    fn is_fresh(env: Env) -> Result<bool, OracleError> {
        let record = read_price_record(&env)?;
        let max_delay = read_max_delay(&env)?;
        Ok(freshness::check_fresh(&record, env.ledger().timestamp(), max_delay).is_ok())
    }

    fn set_max_delay_time(env: Env, max_delay_time: u64) -> Result<(), OracleError> {
        let admin: Address = read_admin(&env)?;
        admin.require_auth();

        write_max_delay(&env, max_delay_time);
        OracleEvent::MaxDelayUpdated(max_delay_time).publish(&env);
        Ok(())
    }

    fn oracle_public_key(env: Env) -> Result<BytesN<32>, OracleError> {
        read_oracle_key(&env)
    }

    fn price_data(env: Env) -> Result<PriceRecord, OracleError> {
        read_price_record(&env)
    }

    fn max_delay_time(env: Env) -> Result<u64, OracleError> {
        read_max_delay(&env)
    }

    fn admin(env: Env) -> Result<Address, OracleError> {
        read_admin(&env)
    }
}
