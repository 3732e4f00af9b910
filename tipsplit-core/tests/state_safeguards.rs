use rust_decimal_macros::dec;
use tipsplit_core::prelude::*;

#[test]
fn test_fresh_state_displays_zero() {
    let state = CalculatorState::new();
    let display = state.display(&TipConfig::default());

    assert_eq!(display.per_person, "R$0.00");
    assert_eq!(display.tip, "R$0.00");
    assert_eq!(display.split_count, 1);
    assert_eq!(display.percent_label, "0.0%");
}

#[test]
fn test_malformed_text_is_swallowed() {
    // Surfaces the rejection logs when run with --nocapture
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut state = CalculatorState::new();
    state.set_bill_text("100");
    state.set_rate_position(1, 6);

    let before = state.display(&TipConfig::default());

    for garbage in ["abc", "", "   ", "12.3.4", "45,5", "-5"] {
        state.set_bill_text(garbage);
    }

    assert_eq!(state.bill_amount(), dec!(100));
    assert_eq!(state.display(&TipConfig::default()), before);
}

#[test]
fn test_decrement_never_goes_below_one() {
    let mut state = CalculatorState::new();
    state.set_bill_text("100");

    for _ in 0..5 {
        state.decrement_split();
    }
    assert_eq!(state.split_count().get(), 1);

    // A no-op decrement must not disturb the totals either.
    assert_eq!(state.totals().total_per_person, dec!(100));
}

#[test]
fn test_increment_unbounded_within_reason() {
    let mut state = CalculatorState::new();
    for _ in 0..99 {
        state.increment_split();
    }
    assert_eq!(state.split_count().get(), 100);
}

#[test]
fn test_rate_change_recomputes_totals() {
    let mut state = CalculatorState::new();
    state.set_bill_text("100");
    assert_eq!(state.totals().total_per_person, dec!(100));

    state.set_rate(TipRate::from_percent(15).unwrap());
    assert_eq!(state.totals().total_per_person, dec!(115));
    assert_eq!(state.tip_rate().percent_label(), "15.0%");
}

#[test]
fn test_slider_position_labels() {
    let mut state = CalculatorState::new();

    state.set_rate_position(0, 6);
    assert_eq!(state.tip_rate().percent_label(), "0.0%");

    state.set_rate_position(1, 6);
    assert_eq!(state.tip_rate().percent_label(), "16.7%");

    state.set_rate_position(6, 6);
    assert_eq!(state.tip_rate().percent_label(), "100.0%");
}

#[test]
fn test_display_respects_currency_override() {
    let mut state = CalculatorState::new();
    state.set_bill_text("45");

    let config = TipConfig::default().with_currency(Currency::Usd);
    let display = state.display(&config);

    assert_eq!(display.per_person, "$45.00");
    assert_eq!(display.currency_code, "USD");
}

#[test]
fn test_display_whole_flow() {
    // Dinner for three: 60 plus half of it as tip.
    let mut state = CalculatorState::new();
    state.set_bill_text(" 60.00 ");
    state.set_rate_position(3, 6);
    state.increment_split();
    state.increment_split();

    let display = state.display(&TipConfig::default());
    assert_eq!(display.bill, "R$60.00");
    assert_eq!(display.tip, "R$30.00");
    assert_eq!(display.total, "R$90.00");
    assert_eq!(display.per_person, "R$30.00");
    assert_eq!(display.percent_label, "50.0%");
    assert_eq!(display.split_count, 3);
}
