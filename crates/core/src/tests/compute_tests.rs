// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use profit_calc_domain::{AdditionalInfo, DomainError, Form, Item};
use rust_decimal::Decimal;
use serde_json::json;

use super::helpers::{create_labor_only_form, create_profitable_form, create_scenario_form, dec};
use crate::{CoreError, ItemBreakdown, Report, TargetStatus, Totals, compute, compute_totals};

#[test]
fn test_scenario_loss_making_form() {
    let report: Report = compute(&create_scenario_form()).unwrap();

    assert_eq!(report.totals.item_cost, dec("20"));
    assert_eq!(report.totals.labor_cost, dec("20"));
    assert_eq!(report.totals.fixed_overheads, dec("5"));
    assert_eq!(report.totals.total_cost, dec("45"));
    assert_eq!(report.totals.total_revenue, dec("30"));
    assert_eq!(report.totals.profit, dec("-15"));
    assert_eq!(report.margin, dec("-0.5"));
    assert_eq!(report.comparison.status, TargetStatus::BelowTarget);
    assert_eq!(report.comparison.gap, dec("-0.8"));
}

#[test]
fn test_per_item_breakdown() {
    let report: Report = compute(&create_profitable_form()).unwrap();
    let lamp: &ItemBreakdown = &report.totals.items[2];

    assert_eq!(lamp.position, 2);
    assert_eq!(lamp.name, "Lamp");
    assert_eq!(lamp.quantity, 3);
    assert_eq!(lamp.unit_cost, dec("12.50"));
    assert_eq!(lamp.unit_price, dec("19.99"));
    assert_eq!(lamp.cost, dec("37.50"));
    assert_eq!(lamp.revenue, dec("59.97"));
    assert_eq!(lamp.profit, dec("22.47"));
}

#[test]
fn test_aggregate_totals_for_profitable_form() {
    let report: Report = compute(&create_profitable_form()).unwrap();

    // 160 + 150 + 37.50
    assert_eq!(report.totals.item_cost, dec("347.50"));
    assert_eq!(report.totals.total_cost, dec("347.50"));
    // 400 + 300 + 59.97
    assert_eq!(report.totals.total_revenue, dec("759.97"));
    assert_eq!(report.totals.profit, dec("412.47"));
    assert_eq!(report.margin, dec("412.47") / dec("759.97"));
    assert_eq!(report.comparison.status, TargetStatus::MeetsTarget);
}

#[test]
fn test_report_preserves_item_order() {
    let report: Report = compute(&create_profitable_form()).unwrap();
    let names: Vec<&str> = report
        .totals
        .items
        .iter()
        .map(|row| row.name.as_str())
        .collect();

    assert_eq!(names, vec!["Chair", "Table", "Lamp"]);
}

#[test]
fn test_additional_info_is_passed_through() {
    let mut info: AdditionalInfo = AdditionalInfo::new();
    info.insert("supplier", json!("Acme"));
    info.insert("lead_time_days", json!(14));

    let form: Form = Form::new(dec("0"), dec("0"), dec("0"), dec("0")).with_line_item(
        Item::new("Anvil", dec("50"), dec("80"), 1).with_additional_info(info.clone()),
    );

    let report: Report = compute(&form).unwrap();
    assert_eq!(report.totals.items[0].additional_info, info);
}

#[test]
fn test_empty_line_items_yields_labor_and_overhead_cost() {
    let totals: Totals = compute_totals(&create_labor_only_form()).unwrap();

    assert!(totals.items.is_empty());
    assert_eq!(totals.total_revenue, Decimal::ZERO);
    assert_eq!(totals.labor_cost, dec("315.0"));
    assert_eq!(totals.total_cost, dec("435.0"));
    assert_eq!(totals.profit, dec("-435.0"));
}

#[test]
fn test_zero_revenue_is_undefined_margin() {
    let form: Form = Form::new(dec("0"), dec("0"), dec("0"), dec("0"));
    let result: Result<Report, CoreError> = compute(&form);

    assert!(matches!(result, Err(CoreError::UndefinedMargin { .. })));
}

#[test]
fn test_undefined_margin_carries_totals() {
    let err: CoreError = compute(&create_labor_only_form()).unwrap_err();

    match err {
        CoreError::UndefinedMargin { totals } => {
            assert_eq!(totals.total_cost, dec("435.0"));
            assert_eq!(totals.total_revenue, Decimal::ZERO);
        }
        other => panic!("expected UndefinedMargin, got {other:?}"),
    }
}

#[test]
fn test_zero_quantity_items_give_zero_revenue() {
    let form: Form = Form::new(dec("0"), dec("0"), dec("0"), dec("0.1"))
        .with_line_item(Item::new("Unsold", dec("5"), dec("9"), 0));

    let result: Result<Report, CoreError> = compute(&form);
    assert!(matches!(result, Err(CoreError::UndefinedMargin { .. })));
}

#[test]
fn test_invalid_input_is_rejected_before_computation() {
    let mut form: Form = create_scenario_form();
    form.line_items[0].quantity = -1;

    let result: Result<Report, CoreError> = compute(&form);
    assert_eq!(
        result,
        Err(CoreError::InvalidInput(DomainError::NegativeQuantity {
            field: String::from("line_items[0].quantity"),
            quantity: -1,
        }))
    );
}

fn negative_field_cases() -> Vec<(&'static str, Form)> {
    let base: Form = create_scenario_form();

    let mut quantity: Form = base.clone();
    quantity.line_items[0].quantity = -2;
    let mut cost_price: Form = base.clone();
    cost_price.line_items[0].cost_price = dec("-10");
    let mut sell_price: Form = base.clone();
    sell_price.line_items[0].sell_price = dec("-15");
    let mut labor_hours: Form = base.clone();
    labor_hours.labor_hours = dec("-1");
    let mut labor_rate: Form = base.clone();
    labor_rate.labor_cost_per_hour = dec("-20");
    let mut overheads: Form = base;
    overheads.fixed_overheads = dec("-5");

    vec![
        ("line_items[0].quantity", quantity),
        ("line_items[0].cost_price", cost_price),
        ("line_items[0].sell_price", sell_price),
        ("labor_hours", labor_hours),
        ("labor_cost_per_hour", labor_rate),
        ("fixed_overheads", overheads),
    ]
}

#[test]
fn test_each_negative_field_triggers_invalid_input() {
    for (field, form) in negative_field_cases() {
        match compute(&form) {
            Err(CoreError::InvalidInput(err)) => assert_eq!(err.field(), field),
            other => panic!("expected InvalidInput for {field}, got {other:?}"),
        }
        assert!(matches!(
            compute_totals(&form),
            Err(CoreError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_percentage_target_margin_is_rejected() {
    let mut form: Form = create_scenario_form();
    form.target_profit_margin = dec("30");

    let result: Result<Report, CoreError> = compute(&form);
    assert!(matches!(
        result,
        Err(CoreError::InvalidInput(DomainError::InvalidTargetMargin { .. }))
    ));
}

#[test]
fn test_overflow_is_reported_not_panicked() {
    let form: Form = Form::new(dec("0"), dec("0"), dec("0"), dec("0"))
        .with_line_item(Item::new("Huge", Decimal::MAX, Decimal::MAX, 2));

    let result: Result<Report, CoreError> = compute(&form);
    assert!(matches!(
        result,
        Err(CoreError::ArithmeticOverflow { .. })
    ));
}

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::InvalidInput(DomainError::NegativeAmount {
        field: String::from("labor_hours"),
        value: dec("-1"),
    });
    assert_eq!(
        format!("{err}"),
        "Invalid input: Invalid labor_hours: must not be negative, got -1"
    );

    let err: CoreError = compute(&create_labor_only_form()).unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Margin is undefined: total revenue is zero"
    );

    let err: CoreError = CoreError::ArithmeticOverflow {
        operation: String::from("computing labor cost"),
    };
    assert_eq!(
        format!("{err}"),
        "Arithmetic overflow while computing labor cost"
    );
}

#[test]
fn test_domain_error_converts_into_core_error() {
    let domain_err: DomainError = DomainError::InvalidTargetMargin { value: dec("2") };
    let core_err: CoreError = CoreError::from(domain_err.clone());
    assert_eq!(core_err, CoreError::InvalidInput(domain_err));
}
