#[cfg(test)]
mod model_tests {
    use jiff::{Timestamp, civil::date};

    use crate::{
        i18n::Locale,
        models::{
            CropCategory, CropEntry, IrrigationMethod, LedgerSummary, Season, TaskKind,
            Transaction, TxKind,
        },
    };

    fn create_test_entry(sowing: bool) -> CropEntry {
        CropEntry {
            id: 7,
            category: CropCategory::Pulses,
            crop: "Tur (Pigeon Pea)".to_string(),
            season: Season::Kharif,
            irrigation: IrrigationMethod::Sprinkler,
            area_acre: 1.5,
            sowing_date: sowing.then(|| date(2025, 6, 15)),
            notes: Some("North plot".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        }
    }

    fn create_test_tx(id: u64, kind: TxKind, category: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            kind,
            category: category.to_string(),
            name: None,
            amount,
            date: date(2025, 7, 1),
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_enums_parse_case_insensitively() {
        assert_eq!("VEGETABLE".parse::<CropCategory>(), Ok(CropCategory::Vegetable));
        assert_eq!(" drip ".parse::<IrrigationMethod>(), Ok(IrrigationMethod::Drip));
        assert_eq!("Pest".parse::<TaskKind>(), Ok(TaskKind::Pest));
        assert_eq!("rabi".parse::<Season>(), Ok(Season::Rabi));
        assert_eq!("Expense".parse::<TxKind>(), Ok(TxKind::Expense));
    }

    #[test]
    fn test_enums_reject_unknown_values() {
        assert!("Spice".parse::<CropCategory>().is_err());
        assert!("Canal".parse::<IrrigationMethod>().is_err());
        assert!("harvest".parse::<TaskKind>().is_err());
        assert!("Winter".parse::<Season>().is_err());
        assert!("refund".parse::<TxKind>().is_err());
    }

    #[test]
    fn test_enum_db_strings_round_trip() {
        for category in CropCategory::ALL {
            assert_eq!(category.as_str().parse::<CropCategory>(), Ok(category));
        }
        for method in IrrigationMethod::ALL {
            assert_eq!(method.as_str().parse::<IrrigationMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_irrigation_intervals() {
        assert_eq!(IrrigationMethod::Rainfed.interval_days(), None);
        assert_eq!(IrrigationMethod::Drip.interval_days(), Some(3));
        assert_eq!(IrrigationMethod::Sprinkler.interval_days(), Some(5));
        assert_eq!(IrrigationMethod::Flood.interval_days(), Some(10));
    }

    #[test]
    fn test_task_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TaskKind::Fertilizer).unwrap();
        assert_eq!(json, "\"fertilizer\"");
        let category = serde_json::to_string(&CropCategory::Oilseed).unwrap();
        assert_eq!(category, "\"Oilseed\"");
    }

    #[test]
    fn test_entry_plan_request_uses_sowing_date() {
        let entry = create_test_entry(true);
        let request = entry.plan_request(Locale::Hi).unwrap();

        assert_eq!(request.category, CropCategory::Pulses);
        assert_eq!(request.crop, "Tur (Pigeon Pea)");
        assert_eq!(request.irrigation, IrrigationMethod::Sprinkler);
        assert_eq!(request.area_acre, 1.5);
        assert_eq!(request.sowing_iso, "2025-06-15");
        assert_eq!(request.locale, Some(Locale::Hi));
    }

    #[test]
    fn test_entry_without_sowing_date_has_no_plan() {
        let entry = create_test_entry(false);
        let err = entry.plan_request(Locale::En).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("add a sowing date"));
    }

    #[test]
    fn test_ledger_summary_totals() {
        let transactions = vec![
            create_test_tx(1, TxKind::Expense, "Seeds", 1200.0),
            create_test_tx(2, TxKind::Income, "Sale", 9000.0),
            create_test_tx(3, TxKind::Expense, "Fertiliser", 800.0),
            create_test_tx(4, TxKind::Expense, "Seeds", 300.0),
            create_test_tx(5, TxKind::Income, "Subsidy", 2000.0),
        ];

        let summary = LedgerSummary::from_transactions(&transactions);

        assert_eq!(summary.total_income, 11000.0);
        assert_eq!(summary.total_expenses, 2300.0);
        assert_eq!(summary.profit, 8700.0);
        assert_eq!(summary.expenses_by_category.len(), 2);
        assert_eq!(summary.expenses_by_category[0].category, "Seeds");
        assert_eq!(summary.expenses_by_category[0].amount, 1500.0);
        assert_eq!(summary.expenses_by_category[1].category, "Fertiliser");
        assert_eq!(summary.max_category_total(), 1500.0);
    }

    #[test]
    fn test_ledger_summary_loss_and_empty() {
        let empty = LedgerSummary::from_transactions(&Vec::<Transaction>::new());
        assert_eq!(empty, LedgerSummary::default());
        assert_eq!(empty.max_category_total(), 0.0);

        let loss = LedgerSummary::from_transactions(&[create_test_tx(
            1,
            TxKind::Expense,
            "Water",
            450.0,
        )]);
        assert_eq!(loss.profit, -450.0);
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(create_test_tx(1, TxKind::Income, "Sale", 10.0).signed_amount(), 10.0);
        assert_eq!(create_test_tx(1, TxKind::Expense, "Seeds", 10.0).signed_amount(), -10.0);
    }
}
