mod common;

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kantor_core::commissions::{
    CommissionError, CommissionService, CommissionServiceTrait, NewCommission,
};
use kantor_core::errors::Error;
use kantor_core::exchange::{
    ExchangeError, ExchangeRequest, ExchangeService, ExchangeServiceTrait, OperationType,
};
use kantor_core::rates::{NewExchangeRate, RateError, RateService, RateServiceTrait};
use kantor_storage_sqlite::commissions::CommissionRepository;
use kantor_storage_sqlite::rates::RateRepository;

struct App {
    rates: RateService,
    commissions: Arc<CommissionService>,
    exchange: ExchangeService,
    _db: common::TestDb,
}

fn build_app() -> App {
    let db = common::setup();
    let rate_repository = Arc::new(RateRepository::new(db.pool.clone(), db.writer.clone()));
    let commission_repository = Arc::new(CommissionRepository::new(
        db.pool.clone(),
        db.writer.clone(),
    ));

    let commissions = Arc::new(CommissionService::new(commission_repository));
    let rates = RateService::new(rate_repository.clone());
    let exchange = ExchangeService::new(rate_repository, commissions.clone());

    App {
        rates,
        commissions,
        exchange,
        _db: db,
    }
}

fn new_rate(from: &str, to: &str, rate: Decimal) -> NewExchangeRate {
    NewExchangeRate {
        from_currency: from.to_string(),
        to_currency: to.to_string(),
        rate,
    }
}

fn new_commission(from: &str, to: &str, percent: Decimal) -> NewCommission {
    NewCommission {
        from_currency: from.to_string(),
        to_currency: to.to_string(),
        percent,
    }
}

fn give_request(from: &str, to: &str, amount_from: Decimal) -> ExchangeRequest {
    ExchangeRequest {
        amount_from: Some(amount_from),
        amount_to: None,
        currency_from: from.to_string(),
        currency_to: to.to_string(),
        operation_type: OperationType::Give,
    }
}

fn get_request(from: &str, to: &str, amount_to: Decimal) -> ExchangeRequest {
    ExchangeRequest {
        amount_from: None,
        amount_to: Some(amount_to),
        currency_from: from.to_string(),
        currency_to: to.to_string(),
        operation_type: OperationType::Get,
    }
}

#[tokio::test]
async fn test_give_quote_with_commission() {
    let app = build_app();
    app.rates
        .set_exchange_rate(new_rate("UAH", "USD", dec!(2)))
        .await
        .unwrap();
    app.commissions
        .set_commission(new_commission("UAH", "USD", dec!(10)))
        .await
        .unwrap();

    let result = app
        .exchange
        .calculate_exchange(give_request("UAH", "USD", dec!(100)))
        .unwrap();

    // 100 * 2 * 0.90000, truncated to 2 decimal places
    assert_eq!(result.amount_to, Some(dec!(180.00)));
    assert_eq!(result.amount_from, Some(dec!(100)));
    assert_eq!(result.operation_type, OperationType::Give);
}

#[tokio::test]
async fn test_get_quote_with_commission() {
    let app = build_app();
    app.rates
        .set_exchange_rate(new_rate("UAH", "USD", dec!(2)))
        .await
        .unwrap();
    app.commissions
        .set_commission(new_commission("UAH", "USD", dec!(10)))
        .await
        .unwrap();

    let result = app
        .exchange
        .calculate_exchange(get_request("UAH", "USD", dec!(180)))
        .unwrap();

    // divisor = round_down(2 * 0.90000, 2) = 1.80; 180 / 1.80 = 100
    assert_eq!(result.amount_from, Some(dec!(100)));
    assert_eq!(result.amount_to, Some(dec!(180)));
}

#[tokio::test]
async fn test_set_rate_creates_reverse_record() {
    let app = build_app();
    app.rates
        .set_exchange_rate(new_rate("UAH", "USD", dec!(2)))
        .await
        .unwrap();

    let forward = app.rates.get_exchange_rate("UAH", "USD").unwrap().unwrap();
    let reverse = app.rates.get_exchange_rate("USD", "UAH").unwrap().unwrap();

    assert_eq!(forward.rate, dec!(2));
    assert_eq!(reverse.rate, dec!(0.50000));
    assert_eq!(app.rates.get_exchange_rates().unwrap().len(), 2);
}

#[tokio::test]
async fn test_set_rate_twice_is_idempotent() {
    let app = build_app();
    for _ in 0..2 {
        app.rates
            .set_exchange_rate(new_rate("UAH", "USD", dec!(2)))
            .await
            .unwrap();
    }

    let rates = app.rates.get_exchange_rates().unwrap();
    assert_eq!(rates.len(), 2);
    assert_eq!(
        app.rates
            .get_exchange_rate("UAH", "USD")
            .unwrap()
            .unwrap()
            .rate,
        dec!(2)
    );
}

#[tokio::test]
async fn test_set_rate_overwrites_existing_pair() {
    let app = build_app();
    app.rates
        .set_exchange_rate(new_rate("UAH", "USD", dec!(2)))
        .await
        .unwrap();
    app.rates
        .set_exchange_rate(new_rate("USD", "UAH", dec!(0.4)))
        .await
        .unwrap();

    let usd_uah = app.rates.get_exchange_rate("USD", "UAH").unwrap().unwrap();
    let uah_usd = app.rates.get_exchange_rate("UAH", "USD").unwrap().unwrap();

    assert_eq!(usd_uah.rate, dec!(0.4));
    assert_eq!(uah_usd.rate, dec!(2.5));
    assert_eq!(app.rates.get_exchange_rates().unwrap().len(), 2);
}

#[tokio::test]
async fn test_exchange_between_identical_currencies_fails() {
    let app = build_app();
    let result = app
        .exchange
        .calculate_exchange(give_request("USD", "USD", dec!(100)));

    assert!(matches!(
        result,
        Err(Error::Exchange(ExchangeError::UnsupportedPair(_)))
    ));
}

#[tokio::test]
async fn test_commission_bounds_enforced() {
    let app = build_app();

    let at_hundred = app
        .commissions
        .set_commission(new_commission("UAH", "USD", dec!(100)))
        .await;
    assert!(matches!(
        at_hundred,
        Err(Error::Commission(CommissionError::InvalidCommission(_)))
    ));

    app.commissions
        .set_commission(new_commission("UAH", "USD", dec!(99.99)))
        .await
        .unwrap();
    let stored = app
        .commissions
        .get_commission("UAH", "USD")
        .unwrap()
        .unwrap();
    assert_eq!(stored.percent, dec!(99.99));
}

#[tokio::test]
async fn test_exchange_without_rate_fails() {
    let app = build_app();
    let result = app
        .exchange
        .calculate_exchange(give_request("UAH", "USD", dec!(100)));

    assert!(matches!(
        result,
        Err(Error::Exchange(ExchangeError::RateNotFound(_)))
    ));
}

#[tokio::test]
async fn test_invalid_rate_rejected_and_nothing_stored() {
    let app = build_app();
    let result = app
        .rates
        .set_exchange_rate(new_rate("UAH", "USD", dec!(0)))
        .await;

    assert!(matches!(
        result,
        Err(Error::Rate(RateError::InvalidRate(_)))
    ));
    assert!(app.rates.get_exchange_rates().unwrap().is_empty());
}

#[tokio::test]
async fn test_commission_round_trip_preserves_percent() {
    let app = build_app();
    app.commissions
        .set_commission(new_commission("EUR", "USD", dec!(0.123456)))
        .await
        .unwrap();

    let stored = app
        .commissions
        .get_commission("EUR", "USD")
        .unwrap()
        .unwrap();
    assert_eq!(stored.percent, dec!(0.123456));

    // Directional: nothing was written for the reverse pair.
    assert!(app.commissions.get_commission("USD", "EUR").unwrap().is_none());
}

#[tokio::test]
async fn test_list_commissions() {
    let app = build_app();
    app.commissions
        .set_commission(new_commission("UAH", "USD", dec!(10)))
        .await
        .unwrap();
    app.commissions
        .set_commission(new_commission("USD", "UAH", dec!(5)))
        .await
        .unwrap();

    let all = app.commissions.get_commissions().unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_give_get_round_trip_never_gains() {
    // rate * coefficient = 1.80 exactly, so the GET divisor loses nothing
    // and both directions only ever truncate downward.
    let app = build_app();
    app.rates
        .set_exchange_rate(new_rate("UAH", "USD", dec!(2)))
        .await
        .unwrap();
    app.commissions
        .set_commission(new_commission("UAH", "USD", dec!(10)))
        .await
        .unwrap();

    for amount in [dec!(1), dec!(99.99), dec!(1234.56)] {
        let give = app
            .exchange
            .calculate_exchange(give_request("UAH", "USD", amount))
            .unwrap();
        let amount_to = give.amount_to.unwrap();

        let get = app
            .exchange
            .calculate_exchange(get_request("UAH", "USD", amount_to))
            .unwrap();
        assert!(get.amount_from.unwrap() <= amount);
    }
}
