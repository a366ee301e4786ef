use cfxscan_cli::api::stats::*;
use cfxscan_cli::format::FixedClock;

mod common;
use common::{clock, NOW};

#[test]
fn empty_query_defaults_to_last_day() {
    let window = normalize(StatsQuery::default(), &clock());
    assert_eq!(window.max_timestamp, NOW);
    assert_eq!(window.max_timestamp - window.min_timestamp, 86_400);
    assert_eq!(window.sort, "DESC");
    assert_eq!(window.skip, 0);
    assert_eq!(window.limit, 10);
    assert_eq!(window.contract, None);
    assert_eq!(window.interval_type, None);
}

#[test]
fn supplied_fields_pass_through_with_remaining_defaults() {
    let query = StatsQuery {
        limit: Some(500),
        contract: Some("0xabc".to_string()),
        ..Default::default()
    };
    let window = normalize(query, &clock());
    assert_eq!(window.limit, 500);
    assert_eq!(window.contract.as_deref(), Some("0xabc"));
    assert_eq!(window.min_timestamp, NOW - 86_400);
    assert_eq!(window.max_timestamp, NOW);
    assert_eq!(window.sort, "DESC");
    assert_eq!(window.skip, 0);
}

#[test]
fn caller_values_are_never_clamped() {
    let query = StatsQuery {
        min_timestamp: Some(2_000),
        max_timestamp: Some(1_000),
        sort: Some("sideways".to_string()),
        skip: Some(u64::MAX),
        limit: Some(1_000_000),
        contract: None,
        interval_type: Some("fortnight".to_string()),
    };
    let window = normalize(query, &clock());
    assert_eq!(window.min_timestamp, 2_000);
    assert_eq!(window.max_timestamp, 1_000);
    assert_eq!(window.sort, "sideways");
    assert_eq!(window.skip, u64::MAX);
    assert_eq!(window.limit, 1_000_000);
    assert_eq!(window.interval_type.as_deref(), Some("fortnight"));
}

#[test]
fn only_missing_bound_is_defaulted() {
    let query = StatsQuery {
        min_timestamp: Some(NOW - 7 * 86_400),
        ..Default::default()
    };
    let window = normalize(query, &FixedClock(NOW));
    assert_eq!(window.min_timestamp, NOW - 7 * 86_400);
    assert_eq!(window.max_timestamp, NOW);
}

#[test]
fn query_pairs_use_wire_names() {
    let query = StatsQuery {
        contract: Some("0xabc".to_string()),
        interval_type: Some("day".to_string()),
        ..Default::default()
    };
    let pairs = normalize(query, &clock()).to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("minTimestamp", (NOW - 86_400).to_string()),
            ("maxTimestamp", NOW.to_string()),
            ("sort", "DESC".to_string()),
            ("skip", "0".to_string()),
            ("limit", "10".to_string()),
            ("contract", "0xabc".to_string()),
            ("intervalType", "day".to_string()),
        ]
    );
}

#[test]
fn query_deserializes_from_camel_case() {
    let query: StatsQuery =
        serde_json::from_str(r#"{"minTimestamp": 5, "limit": 20, "intervalType": "hour"}"#).unwrap();
    assert_eq!(query.min_timestamp, Some(5));
    assert_eq!(query.limit, Some(20));
    assert_eq!(query.interval_type.as_deref(), Some("hour"));
    assert_eq!(query.sort, None);
}

#[test]
fn window_serializes_without_unset_discriminators() {
    let window = normalize(StatsQuery::default(), &clock());
    let json = serde_json::to_value(&window).unwrap();
    assert_eq!(json["maxTimestamp"], NOW);
    assert!(json.get("contract").is_none());
}

#[test]
fn endpoints_declare_their_fields() {
    use cfxscan_cli::format::StatField;
    assert_eq!(StatsEndpoint::Transactions.fields(), &[StatField::Count]);
    assert_eq!(
        StatsEndpoint::NativeTransfers.fields(),
        &[StatField::Count, StatField::Value]
    );
    assert_eq!(
        StatsEndpoint::Mining.fields(),
        &[StatField::Difficulty, StatField::HashRate]
    );
    assert_eq!(StatsEndpoint::Mining.path(), "/statistics/mining");
    assert!(!StatsEndpoint::Mining.needs_contract());
    assert!(StatsEndpoint::TokenHolders.needs_contract());
    assert_eq!(Span::default().as_str(), "24h");
    assert_eq!(TopEndpoint::NativeSenders.measure(), StatField::Value);
}
