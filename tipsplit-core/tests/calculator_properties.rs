use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tipsplit_core::prelude::*;

fn rate(fraction: Decimal) -> TipRate {
    TipRate::new(fraction).unwrap()
}

fn split(count: u32) -> SplitCount {
    SplitCount::new(count).unwrap()
}

#[test]
fn test_canonical_example() {
    // 100 bill, 10% tip, split two ways is 55 each.
    let per_person = compute_total_per_person(dec!(100), split(2), rate(dec!(0.1))).unwrap();
    assert_eq!(per_person, dec!(55));
}

#[test]
fn test_zero_bill_yields_zero() {
    let per_person = compute_total_per_person(dec!(0), split(4), rate(dec!(0.2))).unwrap();
    assert_eq!(per_person, Decimal::ZERO);
}

#[test]
fn test_identity_inputs_return_bill() {
    // No tip, one person: the share is the bill itself.
    let per_person = compute_total_per_person(dec!(123.45), split(1), TipRate::ZERO).unwrap();
    assert_eq!(per_person, dec!(123.45));
}

#[test]
fn test_share_grows_with_bill() {
    let small = compute_total_per_person(dec!(50), split(3), rate(dec!(0.15))).unwrap();
    let large = compute_total_per_person(dec!(90), split(3), rate(dec!(0.15))).unwrap();
    assert!(large > small);
}

#[test]
fn test_share_grows_with_rate() {
    let modest = compute_total_per_person(dec!(80), split(2), rate(dec!(0.1))).unwrap();
    let generous = compute_total_per_person(dec!(80), split(2), rate(dec!(0.25))).unwrap();
    assert!(generous > modest);
}

#[test]
fn test_share_shrinks_with_split() {
    let pair = compute_total_per_person(dec!(80), split(2), rate(dec!(0.1))).unwrap();
    let table = compute_total_per_person(dec!(80), split(8), rate(dec!(0.1))).unwrap();
    assert!(table < pair);
}

#[test]
fn test_share_never_negative() {
    for bill in [dec!(0), dec!(0.01), dec!(19.99), dec!(5000)] {
        for count in [1, 2, 7] {
            let per_person =
                compute_total_per_person(bill, split(count), rate(dec!(0.18))).unwrap();
            assert!(per_person >= Decimal::ZERO);
        }
    }
}

#[test]
fn test_negative_bill_rejected() {
    let res = compute_total_per_person(dec!(-1), split(2), TipRate::ZERO);
    assert!(matches!(res, Err(TipError::InvalidInput { .. })));

    let res = TipCalculator::new().bill(dec!(-0.01)).calculate();
    assert!(res.is_err());
}

#[test]
fn test_breakdown_carries_label_and_trace() {
    let breakdown = TipCalculator::new()
        .bill(dec!(220))
        .rate(rate(dec!(0.1)))
        .split(split(4))
        .label("Team Dinner")
        .calculate()
        .unwrap();

    assert_eq!(breakdown.label, Some("Team Dinner".to_string()));
    assert_eq!(breakdown.total_per_person, dec!(60.5));

    let explanation = breakdown.explain();
    assert!(explanation.contains("Breakdown for 'Team Dinner'"));
    assert!(explanation.contains("Total Per Person"));
    assert!(explanation.contains("Each person pays: 60.50"));
}

#[test]
fn test_summary_shape() {
    let breakdown = TipCalculator::new()
        .bill(dec!(90))
        .rate(TipRate::ZERO)
        .split(split(3))
        .label("Lunch")
        .calculate()
        .unwrap();

    assert_eq!(breakdown.summary(), "Lunch: 3 way(s) - Each: 30.00");
}

#[test]
fn test_json_shape_for_scripting() {
    let breakdown = TipCalculator::new()
        .bill(dec!(100))
        .rate(rate(dec!(0.1)))
        .split(split(2))
        .calculate()
        .unwrap();

    let json = serde_json::to_value(&breakdown).unwrap();
    for key in [
        "bill_amount",
        "tip_rate",
        "split_count",
        "tip_amount",
        "bill_with_tip",
        "total_per_person",
        "calculation_trace",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }

    // Amounts serialize as decimal strings, counts as plain numbers
    let per_person = json["total_per_person"]
        .as_str()
        .and_then(|s| s.parse::<Decimal>().ok());
    assert_eq!(per_person, Some(dec!(55)));
    assert_eq!(json["split_count"], serde_json::json!(2));
}

#[test]
fn test_breakdown_internals_are_consistent() {
    let breakdown = TipCalculator::new()
        .bill(dec!(75.50))
        .rate(rate(dec!(0.2)))
        .split(split(3))
        .calculate()
        .unwrap();

    assert_eq!(breakdown.tip_amount, dec!(15.10));
    assert_eq!(
        breakdown.bill_with_tip,
        breakdown.bill_amount + breakdown.tip_amount
    );
    assert_eq!(
        breakdown.total_per_person * Decimal::from(breakdown.split_count.get()),
        breakdown.bill_with_tip
    );
}
