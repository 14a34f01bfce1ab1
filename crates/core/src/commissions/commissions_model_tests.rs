//! Tests for the commission split model.

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::commissions::{
        add_beneficiary, default_splits, is_valid, normalize_for_persistence, remove_beneficiary,
        set_by_percentage, set_by_value, validate_for_save, BeneficiaryKind, CommissionSplit,
        SplitError, SplitPolicy,
    };

    fn split(kind: BeneficiaryKind, id: &str, pct: Decimal, value: Decimal) -> CommissionSplit {
        CommissionSplit {
            beneficiary_kind: kind,
            beneficiary_id: id.to_string(),
            beneficiary_name: id.to_uppercase(),
            percentage: pct,
            value,
        }
    }

    // ==================== setters ====================

    #[test]
    fn test_set_by_percentage_recomputes_value() {
        let mut splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(0), dec!(0))];
        set_by_percentage(&mut splits, 0, dec!(40), dec!(10000)).unwrap();
        assert_eq!(splits[0].percentage, dec!(40));
        assert_eq!(splits[0].value, dec!(4000));
    }

    #[test]
    fn test_set_by_value_recomputes_percentage() {
        let mut splits = vec![split(BeneficiaryKind::Broker, "br-1", dec!(0), dec!(0))];
        set_by_value(&mut splits, 0, dec!(2500), dec!(10000)).unwrap();
        assert_eq!(splits[0].value, dec!(2500));
        assert_eq!(splits[0].percentage, dec!(25));
    }

    #[test]
    fn test_setters_guard_zero_total() {
        let mut splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(10), dec!(77))];
        set_by_percentage(&mut splits, 0, dec!(40), Decimal::ZERO).unwrap();
        // Percentage is taken, value cannot be derived and stays put.
        assert_eq!(splits[0].percentage, dec!(40));
        assert_eq!(splits[0].value, dec!(77));

        set_by_value(&mut splits, 0, dec!(50), Decimal::ZERO).unwrap();
        assert_eq!(splits[0].value, dec!(50));
        assert_eq!(splits[0].percentage, dec!(40));
    }

    #[test]
    fn test_setters_reject_bad_index() {
        let mut splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(0), dec!(0))];
        assert!(matches!(
            set_by_percentage(&mut splits, 3, dec!(10), dec!(100)),
            Err(SplitError::IndexOutOfBounds(3))
        ));
        assert!(matches!(
            set_by_value(&mut splits, 3, dec!(10), dec!(100)),
            Err(SplitError::IndexOutOfBounds(3))
        ));
    }

    // ==================== add / remove ====================

    #[test]
    fn test_add_beneficiary_appends_zero_entry() {
        let mut splits = Vec::new();
        add_beneficiary(&mut splits, BeneficiaryKind::Broker, "br-1", "Carlos").unwrap();
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].percentage, Decimal::ZERO);
        assert_eq!(splits[0].value, Decimal::ZERO);
        assert_eq!(splits[0].beneficiary_name, "Carlos");
    }

    #[test]
    fn test_add_beneficiary_rejects_duplicate_and_leaves_list_unchanged() {
        let mut splits = Vec::new();
        add_beneficiary(&mut splits, BeneficiaryKind::Broker, "br-1", "Carlos").unwrap();
        let before = splits.clone();

        let result = add_beneficiary(&mut splits, BeneficiaryKind::Broker, "br-1", "Carlos");
        assert!(matches!(result, Err(SplitError::DuplicateBeneficiary(_))));
        assert_eq!(splits, before);
    }

    #[test]
    fn test_remove_beneficiary_does_not_renormalize() {
        let mut splits = vec![
            split(BeneficiaryKind::Agency, "ag-1", dec!(60), dec!(600)),
            split(BeneficiaryKind::Broker, "br-1", dec!(40), dec!(400)),
        ];
        let removed = remove_beneficiary(&mut splits, 1).unwrap();
        assert_eq!(removed.beneficiary_id, "br-1");
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].percentage, dec!(60));
    }

    #[test]
    fn test_remove_beneficiary_rejects_bad_index() {
        let mut splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(100), dec!(1))];
        assert!(matches!(
            remove_beneficiary(&mut splits, 5),
            Err(SplitError::IndexOutOfBounds(5))
        ));
    }

    // ==================== validation ====================

    #[test]
    fn test_is_valid_within_tolerance() {
        let policy = SplitPolicy::default();
        let splits = vec![
            split(BeneficiaryKind::Agency, "ag-1", dec!(60.3), dec!(603)),
            split(BeneficiaryKind::Broker, "br-1", dec!(40), dec!(400)),
        ];
        // Sum is 100.3, within the 0.5 default tolerance.
        assert!(is_valid(&splits, &policy));
    }

    #[test]
    fn test_is_valid_rejects_outside_tolerance() {
        let policy = SplitPolicy::default();
        let splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(98), dec!(980))];
        assert!(!is_valid(&splits, &policy));

        let err = validate_for_save(&splits, &policy).unwrap_err();
        assert!(matches!(err, SplitError::PercentagesDoNotSum { sum, .. } if sum == dec!(98)));
    }

    #[test]
    fn test_is_valid_exactly_at_tolerance_boundary() {
        let policy = SplitPolicy::default();
        let splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(100.5), dec!(1005))];
        assert!(is_valid(&splits, &policy));

        let splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(100.51), dec!(1005.1))];
        assert!(!is_valid(&splits, &policy));
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let strict = SplitPolicy {
            tolerance: Decimal::ZERO,
        };
        let splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(100.2), dec!(1002))];
        assert!(!is_valid(&splits, &strict));
        assert!(is_valid(&splits, &SplitPolicy::default()));
    }

    // ==================== normalization ====================

    #[test]
    fn test_normalize_rounds_to_two_decimals() {
        let mut splits = vec![split(
            BeneficiaryKind::Agency,
            "ag-1",
            dec!(33.333333),
            dec!(3333.335),
        )];
        normalize_for_persistence(&mut splits);
        assert_eq!(splits[0].percentage, dec!(33.33));
        assert_eq!(splits[0].value, dec!(3333.34));
    }

    // ==================== defaults ====================

    #[test]
    fn test_default_splits_with_broker_is_fifty_fifty() {
        let splits = default_splits(dec!(10000), "ag-1", "Agency", Some(("br-1", "Carlos")));
        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].beneficiary_kind, BeneficiaryKind::Agency);
        assert_eq!(splits[0].percentage, dec!(50));
        assert_eq!(splits[0].value, dec!(5000));
        assert_eq!(splits[1].beneficiary_kind, BeneficiaryKind::Broker);
        assert_eq!(splits[1].percentage, dec!(50));
        assert_eq!(splits[1].value, dec!(5000));
        assert!(is_valid(&splits, &SplitPolicy::default()));
    }

    #[test]
    fn test_default_splits_without_broker_is_agency_only() {
        let splits = default_splits(dec!(10000), "ag-1", "Agency", None);
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].percentage, dec!(100));
        assert_eq!(splits[0].value, dec!(10000));
    }

    // ==================== end-to-end edit scenario ====================

    #[test]
    fn test_two_way_split_edit_scenario() {
        // Total commission 10,000: agency at 60%, broker added at zero.
        let mut splits = vec![split(BeneficiaryKind::Agency, "ag-1", dec!(60), dec!(6000))];
        add_beneficiary(&mut splits, BeneficiaryKind::Broker, "br-1", "Carlos").unwrap();

        set_by_percentage(&mut splits, 1, dec!(40), dec!(10000)).unwrap();
        assert_eq!(splits[1].value, dec!(4000));
        assert!(is_valid(&splits, &SplitPolicy::default()));
    }
}
