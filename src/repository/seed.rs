// ==========================================
// 印刷车间管理 - 种子数据
// ==========================================
// 进程启动时一次性构建,之后只读
// ==========================================

use crate::domain::{
    Area, Category, Customer, Item, Job, JobPriority, JobStatus, Machine, Operator, RecordId,
    Transaction, TransactionType,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveTime};

/// 全部实体表的原始数据
#[derive(Debug, Clone, Default)]
pub struct SeedTables {
    pub areas: Vec<Area>,
    pub customers: Vec<Customer>,
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
    pub machines: Vec<Machine>,
    pub operators: Vec<Operator>,
    pub jobs: Vec<Job>,
    pub transactions: Vec<Transaction>,
}

fn date(y: i32, m: u32, d: u32) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| RepositoryError::InvalidSeed {
        field: "date".to_string(),
        value: format!("{}-{:02}-{:02}", y, m, d),
    })
}

fn time(h: u32, m: u32) -> RepositoryResult<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| RepositoryError::InvalidSeed {
        field: "time".to_string(),
        value: format!("{:02}:{:02}", h, m),
    })
}

fn area(id: i64, name: &str, description: &str) -> Area {
    Area {
        id: RecordId(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn customer(id: i64, name: &str, contact: &str, area_id: i64) -> Customer {
    Customer {
        id: RecordId(id),
        name: name.to_string(),
        contact: contact.to_string(),
        area_id: RecordId(area_id),
    }
}

fn category(id: i64, name: &str, description: &str) -> Category {
    Category {
        id: RecordId(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn item(id: i64, name: &str, category_id: i64, price: f64, specs: &str) -> Item {
    Item {
        id: RecordId(id),
        name: name.to_string(),
        category_id: RecordId(category_id),
        price,
        specs: specs.to_string(),
    }
}

fn machine(id: i64, name: &str, area_id: i64, machine_type: &str) -> Machine {
    Machine {
        id: RecordId(id),
        name: name.to_string(),
        area_id: RecordId(area_id),
        machine_type: machine_type.to_string(),
    }
}

fn operator(id: i64, name: &str, role: &str, shift: &str) -> Operator {
    Operator {
        id: RecordId(id),
        name: name.to_string(),
        role: role.to_string(),
        shift: shift.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: i64,
    customer_id: i64,
    item_id: i64,
    qty: u32,
    status: JobStatus,
    order_date: NaiveDate,
    due_date: NaiveDate,
    priority: JobPriority,
) -> Job {
    Job {
        id: RecordId(id),
        customer_id: RecordId(customer_id),
        item_id: RecordId(item_id),
        qty,
        status,
        order_date,
        due_date,
        priority,
    }
}

/// 重量按 (投入, 产出) 给定, 损耗 = 投入 - 产出
#[allow(clippy::too_many_arguments)]
fn transaction(
    id: i64,
    job_id: i64,
    trans_type: TransactionType,
    on: NaiveDate,
    machine_id: i64,
    operator_id: i64,
    weights: (f64, f64),
    shift: (NaiveTime, NaiveTime),
) -> Transaction {
    let (input_weight, output_weight) = weights;
    Transaction {
        id: RecordId(id),
        job_id: RecordId(job_id),
        trans_type,
        date: on,
        machine_id: RecordId(machine_id),
        operator_id: RecordId(operator_id),
        input_weight,
        output_weight,
        waste: input_weight - output_weight,
        start_time: shift.0,
        end_time: shift.1,
        slit_width: None,
        produced_qty: None,
    }
}

/// 内置种子数据
pub fn seed_tables() -> RepositoryResult<SeedTables> {
    let mut slitting = transaction(
        6,
        101,
        TransactionType::Slitting,
        date(2024, 12, 5)?,
        2,
        2,
        (455.0, 440.0),
        (time(20, 0)?, time(23, 30)?),
    );
    slitting.slit_width = Some(50.0);
    slitting.produced_qty = Some(5000);

    Ok(SeedTables {
        areas: vec![
            area(1, "Press Room", "Main printing area"),
            area(2, "Finishing", "Slitting and rewinding"),
            area(3, "Lamination", "Lamination station"),
        ],
        customers: vec![
            customer(1, "Acme Corp", "john@acme.com", 1),
            customer(2, "Global Prints", "sarah@global.com", 1),
            customer(3, "Local Café", "manager@cafe.com", 2),
        ],
        categories: vec![
            category(1, "Labels", "Adhesive labels"),
            category(2, "Wrappers", "Food wrappers"),
            category(3, "Banners", "Large format properties"),
        ],
        items: vec![
            item(1, "Glossy Label 5x5", 1, 0.05, "5x5cm, Glossy"),
            item(2, "Burger Wrapper", 2, 0.02, "Greaseproof"),
            item(3, "Vinyl Banner", 3, 15.00, "Heavy duty vinyl"),
        ],
        machines: vec![
            machine(1, "Heidelberg XL", 1, "Printer"),
            machine(2, "Rotoflex VLI", 2, "Slitter"),
            machine(3, "Comexi", 3, "Laminator"),
        ],
        operators: vec![
            operator(1, "Mike Ross", "Printer", "Day"),
            operator(2, "Rachel Zane", "Finisher", "Night"),
            operator(3, "Louis Litt", "Manager", "Day"),
        ],
        jobs: vec![
            job(
                101,
                1,
                1,
                5000,
                JobStatus::Completed,
                date(2024, 11, 28)?,
                date(2024, 12, 6)?,
                JobPriority::High,
            ),
            job(
                102,
                2,
                2,
                10000,
                JobStatus::InProgress,
                date(2024, 12, 1)?,
                date(2024, 12, 15)?,
                JobPriority::Medium,
            ),
            job(
                103,
                3,
                3,
                200,
                JobStatus::Pending,
                date(2024, 12, 4)?,
                date(2024, 12, 20)?,
                JobPriority::Low,
            ),
        ],
        transactions: vec![
            transaction(
                1,
                101,
                TransactionType::Printing,
                date(2024, 12, 2)?,
                1,
                1,
                (500.0, 480.0),
                (time(8, 0)?, time(12, 0)?),
            ),
            transaction(
                2,
                101,
                TransactionType::Rewinding,
                date(2024, 12, 3)?,
                2,
                2,
                (480.0, 470.0),
                (time(20, 0)?, time(22, 0)?),
            ),
            transaction(
                3,
                102,
                TransactionType::Printing,
                date(2024, 12, 3)?,
                1,
                1,
                (900.0, 860.0),
                (time(8, 0)?, time(14, 0)?),
            ),
            transaction(
                4,
                101,
                TransactionType::Laminating,
                date(2024, 12, 4)?,
                3,
                3,
                (470.0, 455.0),
                (time(9, 0)?, time(11, 30)?),
            ),
            transaction(
                5,
                102,
                TransactionType::Printing,
                date(2024, 12, 4)?,
                1,
                1,
                (600.0, 575.0),
                (time(8, 0)?, time(12, 0)?),
            ),
            slitting,
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tables_完整() {
        let tables = seed_tables().unwrap();
        assert_eq!(tables.jobs.len(), 3);
        assert_eq!(tables.transactions.len(), 6);
        assert!(tables
            .transactions
            .iter()
            .all(|t| t.date >= tables.jobs[0].order_date));
    }

    #[test]
    fn test_seed_date_非法日期报错() {
        assert_eq!(
            date(2024, 2, 30),
            Err(RepositoryError::InvalidSeed {
                field: "date".to_string(),
                value: "2024-02-30".to_string(),
            })
        );
        assert!(time(24, 0).is_err());
        assert_eq!(time(23, 30), Ok(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
    }
}
