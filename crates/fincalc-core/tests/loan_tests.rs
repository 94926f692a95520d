use fincalc_core::forms::LoanForm;
use fincalc_core::loan::comparison::{compare_loans, LoanChoice, LoanComparisonInput};
use fincalc_core::loan::emi::{calculate_emi, LoanInput};
use fincalc_core::FinCalcError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const EPSILON: Decimal = dec!(0.0001);

fn sample_loans() -> Vec<LoanInput> {
    vec![
        LoanInput::new(dec!(1000000), dec!(10), dec!(1)),
        LoanInput::new(dec!(250000), dec!(7.25), dec!(3)),
        LoanInput::new(dec!(5000000), dec!(8.5), dec!(20)),
        LoanInput::new(dec!(75000), dec!(18), dec!(2)),
        LoanInput::new(dec!(12000000), dec!(6.9), dec!(30)),
        LoanInput::new(dec!(1), dec!(0.01), dec!(0.5)),
    ]
}

// ===========================================================================
// Amortization invariants
// ===========================================================================

#[test]
fn test_final_balance_is_zero() {
    for loan in sample_loans() {
        let emi = calculate_emi(&loan).unwrap().result;
        let last = emi.schedule.last().unwrap();
        assert!(
            last.remaining_balance.abs() < EPSILON,
            "{loan:?}: final balance {}",
            last.remaining_balance
        );
    }
}

#[test]
fn test_principal_components_sum_to_principal() {
    for loan in sample_loans() {
        let emi = calculate_emi(&loan).unwrap().result;
        let repaid: Decimal = emi.schedule.iter().map(|r| r.principal_component).sum();
        assert!(
            (repaid - loan.principal).abs() < EPSILON,
            "{loan:?}: repaid {repaid}"
        );
    }
}

#[test]
fn test_interest_components_sum_to_total_interest() {
    for loan in sample_loans() {
        let emi = calculate_emi(&loan).unwrap().result;
        let interest: Decimal = emi.schedule.iter().map(|r| r.interest_component).sum();
        assert!(
            (interest - emi.total_interest).abs() < EPSILON,
            "{loan:?}: interest {interest} vs {}",
            emi.total_interest
        );
    }
}

#[test]
fn test_every_row_splits_installment() {
    for loan in sample_loans() {
        let emi = calculate_emi(&loan).unwrap().result;
        for row in &emi.schedule {
            assert!(
                (row.principal_component + row.interest_component - row.installment).abs()
                    < EPSILON
            );
        }
    }
}

#[test]
fn test_thirty_year_schedule_length() {
    let emi = calculate_emi(&LoanInput::new(dec!(12000000), dec!(6.9), dec!(30)))
        .unwrap()
        .result;
    assert_eq!(emi.schedule.len(), 360);
    assert_eq!(emi.schedule.last().unwrap().month, 360);
}

#[test]
fn test_home_loan_known_answer() {
    // 50 lakh at 8.5% for 20 years
    let emi = calculate_emi(&LoanInput::new(dec!(5000000), dec!(8.5), dec!(20)))
        .unwrap()
        .result;
    assert!((emi.monthly_installment - dec!(43391.16)).abs() < dec!(0.01));
    assert!((emi.total_interest - dec!(5413878.80)).abs() < dec!(0.05));
}

#[test]
fn test_longer_tenure_lowers_emi_raises_interest() {
    let short = calculate_emi(&LoanInput::new(dec!(1000000), dec!(9), dec!(5)))
        .unwrap()
        .result;
    let long = calculate_emi(&LoanInput::new(dec!(1000000), dec!(9), dec!(15)))
        .unwrap()
        .result;
    assert!(long.monthly_installment < short.monthly_installment);
    assert!(long.total_interest > short.total_interest);
}

// ===========================================================================
// Form entry
// ===========================================================================

#[test]
fn test_form_to_emi() {
    let form = LoanForm {
        principal: "10,00,000".into(),
        annual_rate_percent: "10".into(),
        tenure_years: "1".into(),
    };
    let emi = calculate_emi(&form.parse().unwrap()).unwrap().result;
    assert!((emi.monthly_installment - dec!(87915.89)).abs() < dec!(0.01));
}

#[test]
fn test_blank_form_is_refused() {
    let form = LoanForm::default();
    assert!(matches!(
        form.parse(),
        Err(FinCalcError::Validation { .. })
    ));
}

// ===========================================================================
// Comparison
// ===========================================================================

#[test]
fn test_comparison_matches_individual_results() {
    let first = LoanInput::new(dec!(2000000), dec!(9.5), dec!(10));
    let second = LoanInput::new(dec!(2000000), dec!(8.75), dec!(15));
    let cmp = compare_loans(&LoanComparisonInput {
        first: first.clone(),
        second: second.clone(),
    })
    .unwrap()
    .result;

    let a = calculate_emi(&first).unwrap().result;
    let b = calculate_emi(&second).unwrap().result;

    assert_eq!(cmp.first, a);
    assert_eq!(cmp.second, b);
    assert_eq!(
        cmp.emi_difference,
        (a.monthly_installment - b.monthly_installment).abs()
    );
    // Lower EMI but longer tenure: the second loan costs more overall
    assert!(b.monthly_installment < a.monthly_installment);
    assert_eq!(cmp.lower_cost, Some(LoanChoice::First));
}

#[test]
fn test_comparison_output_serializes_choice() {
    let loan = LoanInput::new(dec!(100000), dec!(12), dec!(1));
    let cheaper = LoanInput::new(dec!(100000), dec!(11), dec!(1));
    let output = compare_loans(&LoanComparisonInput {
        first: loan,
        second: cheaper,
    })
    .unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["result"]["lower_cost"], "second");
    assert_eq!(json["result"]["first"]["schedule"].as_array().unwrap().len(), 12);
}
