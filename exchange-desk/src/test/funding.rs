#![cfg(test)]

use super::{ExchangeDeskTest, STARTING_USD};
use common::exchange::types::DeskError;

#[test]
fn test_fund_credits_account() {
    let test = ExchangeDeskTest::setup();

    test.desk_client.fund(&test.bob, &500);
    test.desk_client.fund(&test.bob, &250);

    assert_eq!(test.desk_client.usd_balance(&test.bob), 750);
    assert_eq!(test.desk_client.usd_balance(&test.alice), STARTING_USD);
    assert_eq!(test.desk_client.coin_balance(&test.bob), 0);
}

#[test]
fn test_fund_is_authorized_by_admin() {
    let test = ExchangeDeskTest::setup();

    test.desk_client.fund(&test.bob, &500);

    let auths = test.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, test.admin);
}

#[test]
fn test_fund_rejects_non_positive_amount() {
    let test = ExchangeDeskTest::setup();

    assert_eq!(
        test.desk_client.try_fund(&test.bob, &0),
        Err(Ok(DeskError::InvalidAmount))
    );
    assert_eq!(
        test.desk_client.try_fund(&test.bob, &-10),
        Err(Ok(DeskError::InvalidAmount))
    );
    assert_eq!(test.desk_client.usd_balance(&test.bob), 0);
}
