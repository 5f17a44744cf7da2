// ==========================================
// DataStore 集成测试
// ==========================================
// 测试范围:
// 1. 按表名访问: list_table, get_by_id
// 2. 关联查询: jobs_with_details, transactions_with_details
// 3. 数据完整性: 主键唯一、悬空外键报告
// ==========================================

mod helpers;

use helpers::test_data_builder::*;
use printy_shop::config::FallbackLabels;
use printy_shop::domain::{Record, RecordId, TableName, TransactionType};
use printy_shop::repository::{DataStore, DetailJoiner, RepositoryError};
use serde_json::json;

// ==========================================
// 按表名访问
// ==========================================

#[test]
fn test_list_table_全部已知表() {
    let store = seeded_store();
    for table in TableName::ALL {
        let records = store.list_table(table.as_str());
        assert!(!records.is_empty(), "{} 不应为空", table);
        assert!(records.iter().all(|r| r.table() == table));
    }
}

#[test]
fn test_list_table_未知表名返回空() {
    let store = seeded_store();
    for name in ["", "Customers", "orders", "customer", " areas"] {
        assert!(store.list_table(name).is_empty(), "{:?}", name);
    }
}

#[test]
fn test_get_by_id_宽松ID表示() {
    let store = seeded_store();
    let expected = store.get_by_id("customers", 1).unwrap();

    assert_eq!(store.get_by_id("customers", "1"), Some(expected.clone()));
    assert_eq!(store.get_by_id("customers", " 1 "), Some(expected.clone()));
    assert_eq!(store.get_by_id("customers", 1.0_f64), Some(expected.clone()));
    assert_eq!(store.get_by_id("customers", &json!("1")), Some(expected.clone()));
    assert_eq!(store.get_by_id("customers", &json!(1)), Some(expected));
}

#[test]
fn test_get_by_id_未找到() {
    let store = seeded_store();
    assert!(store.get_by_id("jobs", 999).is_none());
    assert!(store.get_by_id("jobs", "abc").is_none());
    assert!(store.get_by_id("jobs", 101.5_f64).is_none());
    assert!(store.get_by_id("orders", 1).is_none());
}

#[test]
fn test_get_by_id_返回唯一记录() {
    let store = seeded_store();
    let record = store.get_by_id("jobs", "101").unwrap();

    assert_eq!(record.id(), RecordId(101));
    assert!(matches!(record, Record::Job(_)));
    assert_eq!(record.name(), None);
}

#[test]
fn test_record_序列化为实体形态() {
    let store = seeded_store();
    let value = serde_json::to_value(store.get_by_id("machines", 1).unwrap()).unwrap();

    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "Heidelberg XL");
    assert_eq!(value["type"], "Printer");
    assert_eq!(value["areaId"], 1);
}

// ==========================================
// 关联查询
// ==========================================

#[test]
fn test_jobs_with_details_长度与名称() {
    let store = seeded_store();
    let jobs = store.jobs_with_details();

    assert_eq!(jobs.len(), store.list_table("jobs").len());
    let names: Vec<(&str, &str)> = jobs
        .iter()
        .map(|j| (j.customer_name.as_str(), j.item_name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Acme Corp", "Glossy Label 5x5"),
            ("Global Prints", "Burger Wrapper"),
            ("Local Café", "Vinyl Banner"),
        ]
    );
}

#[test]
fn test_jobs_with_details_客户无法解析() {
    printy_shop::logging::init_test();
    let store = store_with(
        vec![
            JobBuilder::new(1).customer(1).build(),
            JobBuilder::new(2).customer(42).item(99).build(),
        ],
        vec![],
    );

    let jobs = store.jobs_with_details();
    assert_eq!(jobs[0].customer_name, "Acme Corp");
    assert_eq!(jobs[1].customer_name, "Unknown");
    assert_eq!(jobs[1].item_name, "Unknown");
    assert_eq!(jobs[1].job.customer_id, RecordId(42));
}

#[test]
fn test_jobs_with_details_序列化平铺() {
    let store = seeded_store();
    let value = serde_json::to_value(&store.jobs_with_details()[0]).unwrap();

    assert_eq!(value["id"], 101);
    assert_eq!(value["customerId"], 1);
    assert_eq!(value["customerName"], "Acme Corp");
    assert_eq!(value["itemName"], "Glossy Label 5x5");
}

#[test]
fn test_transactions_with_details_按工序过滤() {
    let store = seeded_store();
    let printing = store.transactions_with_details(Some("Printing"));

    let ids: Vec<i64> = printing.iter().map(|t| t.transaction.id.value()).collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert!(printing
        .iter()
        .all(|t| t.transaction.trans_type == TransactionType::Printing));
}

#[test]
fn test_transactions_with_details_过滤区分大小写() {
    let store = seeded_store();
    assert!(store.transactions_with_details(Some("printing")).is_empty());
    assert!(store.transactions_with_details(Some("Folding")).is_empty());
}

#[test]
fn test_transactions_with_details_不过滤() {
    let store = seeded_store();
    let all = store.transactions_with_details(None);

    assert_eq!(all.len(), store.transactions().len());
    assert_eq!(all[0].job_no, "JO-101");
    assert_eq!(all[0].machine_name, "Heidelberg XL");
    assert_eq!(all[0].operator_name, "Mike Ross");
}

#[test]
fn test_transactions_with_details_兜底文案() {
    let store = store_with(
        vec![JobBuilder::new(1).build()],
        vec![TransactionBuilder::new(1, 77, TransactionType::Printing)
            .machine(9)
            .operator(9)
            .build()],
    );

    let rows = store.transactions_with_details(None);
    assert_eq!(rows[0].job_no, "N/A");
    assert_eq!(rows[0].machine_name, "Unknown");
    assert_eq!(rows[0].operator_name, "Unknown");
}

#[test]
fn test_detail_joiner_自定义兜底文案() {
    let store = store_with(
        vec![JobBuilder::new(5).customer(42).build()],
        vec![TransactionBuilder::new(1, 77, TransactionType::Slitting).build()],
    );
    let joiner = DetailJoiner::new(FallbackLabels {
        unknown: "未知".to_string(),
        job_placeholder: "-".to_string(),
        job_no_prefix: "WO".to_string(),
    });

    assert_eq!(joiner.jobs_with_details(&store)[0].customer_name, "未知");
    assert_eq!(joiner.transactions_with_details(&store, None)[0].job_no, "-");
}

// ==========================================
// 数据完整性
// ==========================================

#[test]
fn test_new_主键重复拒绝() {
    let result = DataStore::new(tables_with(
        vec![JobBuilder::new(7).build(), JobBuilder::new(7).build()],
        vec![],
    ));

    assert_eq!(
        result.unwrap_err(),
        RepositoryError::DuplicateId {
            table: "jobs".to_string(),
            id: 7,
        }
    );
}

#[test]
fn test_dangling_references_报告悬空外键() {
    let mut tables = tables_with(vec![JobBuilder::new(1).customer(42).build()], vec![]);
    tables.customers.push(customer(9, "Orphan Ltd", 8));
    let store = DataStore::new(tables).unwrap();

    let dangling = store.dangling_references();
    assert!(dangling
        .iter()
        .any(|d| d.table == TableName::Jobs && d.field == "customerId" && d.target_id == RecordId(42)));
    assert!(dangling
        .iter()
        .any(|d| d.table == TableName::Customers && d.target == TableName::Areas));
}

#[test]
fn test_dangling_references_演示数据无悬空() {
    assert!(seeded_store().dangling_references().is_empty());
}
