use crate::storage::get_data;
use common::{
    exchange::types::{DataKey, DeskError},
    pricefeed::{
        guards::ensure_snapshot_current, interface::PriceFeedClient, types::PriceRecord,
    },
};
use soroban_sdk::{log, Address, Env};

pub fn get_feed_client(env: &Env) -> Result<PriceFeedClient<'_>, DeskError> {
    let price_feed_ca: Address =
        get_data(env, &DataKey::PriceFeed).ok_or(DeskError::NotInitialized)?;
    Ok(PriceFeedClient::new(env, &price_feed_ca))
}

/// Reads the price through the feed's freshness gate and checks that it is
/// still the reading the caller quoted.
pub fn current_price(env: &Env, quoted: &PriceRecord) -> Result<PriceRecord, DeskError> {
    let record = match get_feed_client(env)?.try_get_price_data() {
        Ok(Ok(record)) => record,
        Err(Ok(err)) => {
            log!(env, "price feed refused read", err as u32);
            return Err(DeskError::from(err));
        }
        _ => return Err(DeskError::OracleFailure),
    };

    ensure_snapshot_current(quoted, &record, DeskError::StaleSnapshot)?;
    Ok(record)
}
