use jiff::civil::date;
use kheti_core::{
    Database, KhetiError,
    db::migrations::SCHEMA_VERSION,
    models::{
        CropCategory, IrrigationMethod, NewCropEntry, NewTransaction, Season, TxKind,
    },
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_entry(crop: &str, sowing: Option<jiff::civil::Date>) -> NewCropEntry {
    NewCropEntry {
        category: CropCategory::Vegetable,
        crop: crop.to_string(),
        season: Season::Rabi,
        irrigation: IrrigationMethod::Drip,
        area_acre: 0.5,
        sowing_date: sowing,
        notes: None,
    }
}

fn new_tx(kind: TxKind, category: &str, amount: f64, day: jiff::civil::Date) -> NewTransaction {
    NewTransaction {
        kind,
        category: category.to_string(),
        name: None,
        amount,
        date: day,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
}

#[test]
fn test_reopen_keeps_records() {
    let (temp_file, mut db) = create_test_db();
    let entry = db
        .insert_crop_entry(&new_entry("Tomato", Some(date(2025, 11, 3))))
        .expect("Failed to insert entry");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let fetched = db
        .get_crop_entry(entry.id)
        .expect("Failed to get entry")
        .expect("Entry should exist");
    assert_eq!(fetched, entry);
}

#[test]
fn test_entry_roundtrip_without_optional_fields() {
    let (_temp_file, mut db) = create_test_db();

    let entry = db
        .insert_crop_entry(&new_entry("Onion", None))
        .expect("Failed to insert entry");
    let fetched = db.get_crop_entry(entry.id).unwrap().unwrap();

    assert_eq!(fetched.sowing_date, None);
    assert_eq!(fetched.notes, None);
    assert_eq!(fetched.category, CropCategory::Vegetable);
    assert_eq!(fetched.season, Season::Rabi);
}

#[test]
fn test_list_entries_newest_first() {
    let (_temp_file, mut db) = create_test_db();

    let ids: Vec<u64> = ["Tomato", "Onion", "Brinjal"]
        .iter()
        .map(|crop| db.insert_crop_entry(&new_entry(crop, None)).unwrap().id)
        .collect();

    let listed: Vec<u64> = db.list_crop_entries().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(listed, ids.into_iter().rev().collect::<Vec<_>>());
}

#[test]
fn test_delete_entry() {
    let (_temp_file, mut db) = create_test_db();
    let entry = db.insert_crop_entry(&new_entry("Tomato", None)).unwrap();

    db.delete_crop_entry(entry.id).expect("Failed to delete entry");
    assert!(db.get_crop_entry(entry.id).unwrap().is_none());

    match db.delete_crop_entry(entry.id) {
        Err(KhetiError::EntryNotFound { id }) => assert_eq!(id, entry.id),
        other => panic!("Expected EntryNotFound, got {other:?}"),
    }
}

#[test]
fn test_schema_rejects_non_positive_area() {
    let (_temp_file, mut db) = create_test_db();
    let mut entry = new_entry("Tomato", None);
    entry.area_acre = 0.0;

    assert!(matches!(
        db.insert_crop_entry(&entry),
        Err(KhetiError::Database { .. })
    ));
}

#[test]
fn test_transactions_ordered_by_date_then_id() {
    let (_temp_file, mut db) = create_test_db();

    let late = db
        .insert_transaction(&new_tx(TxKind::Income, "Sale", 9000.0, date(2025, 12, 1)))
        .unwrap();
    let early_a = db
        .insert_transaction(&new_tx(TxKind::Expense, "Seeds", 400.0, date(2025, 10, 1)))
        .unwrap();
    let early_b = db
        .insert_transaction(&new_tx(TxKind::Expense, "Water", 150.0, date(2025, 10, 1)))
        .unwrap();

    let ids: Vec<u64> = db
        .list_transactions(None)
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![early_a.id, early_b.id, late.id]);

    let income = db.list_transactions(Some(TxKind::Income)).unwrap();
    assert_eq!(income.len(), 1);
    assert_eq!(income[0], late);
}

#[test]
fn test_delete_transaction() {
    let (_temp_file, mut db) = create_test_db();
    let tx = db
        .insert_transaction(&new_tx(TxKind::Expense, "Electricity", 620.0, date(2025, 7, 31)))
        .unwrap();

    assert_eq!(db.get_transaction(tx.id).unwrap(), Some(tx.clone()));
    db.delete_transaction(tx.id).unwrap();
    assert!(db.get_transaction(tx.id).unwrap().is_none());
    assert!(matches!(
        db.delete_transaction(tx.id),
        Err(KhetiError::TransactionNotFound { .. })
    ));
}
