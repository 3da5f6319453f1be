//! Tests for the farmbook facade.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    i18n::Locale,
    models::{CropCategory, IrrigationMethod, Season, TxKind},
    params::{AddCropEntry, EntryPlan, Id, ListTransactions, RecordTransaction},
};

/// Helper function to create a test farmbook
async fn create_test_farmbook() -> (TempDir, Farmbook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let farmbook = FarmbookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create farmbook");
    (temp_dir, farmbook)
}

fn soybean(sowing: Option<&str>) -> AddCropEntry {
    AddCropEntry {
        category: CropCategory::Oilseed,
        crop: "Soybean".to_string(),
        season: Season::Kharif,
        irrigation: IrrigationMethod::Sprinkler,
        area_acre: 3.0,
        sowing_date: sowing.map(String::from),
        notes: Some("Behind the well".to_string()),
    }
}

fn expense(category: &str, amount: f64, day: &str) -> RecordTransaction {
    RecordTransaction {
        kind: TxKind::Expense,
        category: category.to_string(),
        name: None,
        amount: Some(amount),
        rate: None,
        quantity: None,
        date: day.to_string(),
    }
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested/deeper/kheti.db");

    let farmbook = FarmbookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create farmbook");

    assert_eq!(farmbook.database_path(), db_path.as_path());
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_crop_entry_lifecycle() {
    let (_temp_dir, farmbook) = create_test_farmbook().await;

    let first = farmbook
        .add_crop_entry(&soybean(Some("2025-06-20")))
        .await
        .expect("Failed to add entry");
    let second = farmbook
        .add_crop_entry(&soybean(None))
        .await
        .expect("Failed to add entry");

    assert!(second.id > first.id);
    assert_eq!(first.sowing_date, Some(date(2025, 6, 20)));

    let listed = farmbook.list_crop_entries().await.unwrap();
    assert_eq!(
        listed.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    let fetched = farmbook
        .get_crop_entry(&Id { id: first.id })
        .await
        .unwrap()
        .expect("Entry should exist");
    assert_eq!(fetched.crop, "Soybean");
    assert_eq!(fetched.notes.as_deref(), Some("Behind the well"));
    assert_eq!(fetched.created_at, first.created_at);

    let removed = farmbook
        .remove_crop_entry(&Id { id: first.id })
        .await
        .unwrap();
    assert_eq!(removed.id, first.id);
    assert!(
        farmbook
            .get_crop_entry(&Id { id: first.id })
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_remove_missing_entry() {
    let (_temp_dir, farmbook) = create_test_farmbook().await;

    let err = farmbook.remove_crop_entry(&Id { id: 42 }).await.unwrap_err();
    assert!(matches!(err, KhetiError::EntryNotFound { id: 42 }));
}

#[tokio::test]
async fn test_invalid_entry_is_not_stored() {
    let (_temp_dir, farmbook) = create_test_farmbook().await;

    let mut params = soybean(Some("2025-06-20"));
    params.area_acre = 0.0;
    assert!(farmbook.add_crop_entry(&params).await.unwrap_err().is_invalid_input());

    assert!(farmbook.list_crop_entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_plan_for_entry() {
    let (_temp_dir, farmbook) = create_test_farmbook().await;
    let entry = farmbook
        .add_crop_entry(&soybean(Some("2025-06-20")))
        .await
        .unwrap();

    let crop_plan = farmbook
        .plan_for_entry(&EntryPlan {
            id: entry.id,
            locale: Some(Locale::Hi),
        })
        .await
        .unwrap();

    assert_eq!(crop_plan.entry, entry);
    assert_eq!(crop_plan.plan.start, date(2025, 6, 20));
    assert_eq!(crop_plan.plan.duration_days(), 105);
    assert_eq!(crop_plan.plan.stages[0].name, "भूमि तैयारी");
}

#[tokio::test]
async fn test_plan_for_entry_needs_sowing_date() {
    let (_temp_dir, farmbook) = create_test_farmbook().await;
    let entry = farmbook.add_crop_entry(&soybean(None)).await.unwrap();

    let err = farmbook
        .plan_for_entry(&EntryPlan {
            id: entry.id,
            locale: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());

    let err = farmbook
        .plan_for_entry(&EntryPlan {
            id: entry.id + 1,
            locale: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, KhetiError::EntryNotFound { .. }));
}

#[tokio::test]
async fn test_ledger_round() {
    let (_temp_dir, farmbook) = create_test_farmbook().await;

    farmbook
        .record_transaction(&expense("Seeds", 1800.0, "2025-06-10"))
        .await
        .unwrap();
    farmbook
        .record_transaction(&expense("fertiliser", 950.0, "2025-06-05"))
        .await
        .unwrap();
    let sale = farmbook
        .record_transaction(&RecordTransaction {
            kind: TxKind::Income,
            category: "Sale".to_string(),
            name: Some("APMC Latur".to_string()),
            amount: None,
            rate: Some(4200.0),
            quantity: Some(12.5),
            date: "2025-10-20".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(sale.amount, 52500.0);

    let all = farmbook
        .list_transactions(&ListTransactions::default())
        .await
        .unwrap();
    let dates: Vec<_> = all.iter().map(|t| t.date).collect();
    assert_eq!(
        dates,
        vec![date(2025, 6, 5), date(2025, 6, 10), date(2025, 10, 20)]
    );
    assert_eq!(all[0].category, "Fertiliser");

    let expenses = farmbook
        .list_transactions(&ListTransactions {
            kind: Some(TxKind::Expense),
        })
        .await
        .unwrap();
    assert_eq!(expenses.len(), 2);

    let summary = farmbook.ledger_summary().await.unwrap();
    assert_eq!(summary.total_income, 52500.0);
    assert_eq!(summary.total_expenses, 2750.0);
    assert_eq!(summary.profit, 49750.0);
    assert_eq!(summary.expenses_by_category[0].category, "Fertiliser");

    farmbook.remove_transaction(&Id { id: sale.id }).await.unwrap();
    let summary = farmbook.ledger_summary().await.unwrap();
    assert_eq!(summary.profit, -2750.0);

    let err = farmbook
        .remove_transaction(&Id { id: sale.id })
        .await
        .unwrap_err();
    assert!(matches!(err, KhetiError::TransactionNotFound { .. }));
}

#[tokio::test]
async fn test_rejects_income_category_for_expense() {
    let (_temp_dir, farmbook) = create_test_farmbook().await;

    let err = farmbook
        .record_transaction(&expense("Sale", 10.0, "2025-06-10"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(farmbook.ledger_summary().await.unwrap().total_expenses, 0.0);
}
