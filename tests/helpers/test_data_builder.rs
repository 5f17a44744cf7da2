// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use printy_shop::domain::{
    Customer, Job, JobPriority, JobStatus, Machine, RecordId, Transaction, TransactionType,
};
use printy_shop::repository::{seed_tables, DataStore, SeedTables};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 内置演示数据
pub fn seeded_store() -> DataStore {
    DataStore::seeded().expect("演示数据加载失败")
}

// ==========================================
// Job 构建器
// ==========================================

pub struct JobBuilder {
    id: i64,
    customer_id: i64,
    item_id: i64,
    qty: u32,
    status: JobStatus,
    due_date: NaiveDate,
}

impl JobBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            customer_id: 1,
            item_id: 1,
            qty: 1000,
            status: JobStatus::Pending,
            due_date: date(2024, 12, 31),
        }
    }

    pub fn customer(mut self, customer_id: i64) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn item(mut self, item_id: i64) -> Self {
        self.item_id = item_id;
        self
    }

    pub fn qty(mut self, qty: u32) -> Self {
        self.qty = qty;
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Job {
        Job {
            id: RecordId(self.id),
            customer_id: RecordId(self.customer_id),
            item_id: RecordId(self.item_id),
            qty: self.qty,
            status: self.status,
            order_date: date(2024, 12, 1),
            due_date: self.due_date,
            priority: JobPriority::Medium,
        }
    }
}

// ==========================================
// Transaction 构建器
// ==========================================

pub struct TransactionBuilder {
    id: i64,
    job_id: i64,
    trans_type: TransactionType,
    date: NaiveDate,
    machine_id: i64,
    operator_id: i64,
    input_weight: f64,
    output_weight: f64,
    start_time: NaiveTime,
    end_time: NaiveTime,
    produced_qty: Option<u32>,
}

impl TransactionBuilder {
    pub fn new(id: i64, job_id: i64, trans_type: TransactionType) -> Self {
        Self {
            id,
            job_id,
            trans_type,
            date: date(2024, 12, 10),
            machine_id: 1,
            operator_id: 1,
            input_weight: 100.0,
            output_weight: 90.0,
            start_time: time(8, 0),
            end_time: time(9, 0),
            produced_qty: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn machine(mut self, machine_id: i64) -> Self {
        self.machine_id = machine_id;
        self
    }

    pub fn operator(mut self, operator_id: i64) -> Self {
        self.operator_id = operator_id;
        self
    }

    pub fn weights(mut self, input: f64, output: f64) -> Self {
        self.input_weight = input;
        self.output_weight = output;
        self
    }

    pub fn shift(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    pub fn produced(mut self, qty: u32) -> Self {
        self.produced_qty = Some(qty);
        self
    }

    pub fn build(self) -> Transaction {
        Transaction {
            id: RecordId(self.id),
            job_id: RecordId(self.job_id),
            trans_type: self.trans_type,
            date: self.date,
            machine_id: RecordId(self.machine_id),
            operator_id: RecordId(self.operator_id),
            input_weight: self.input_weight,
            output_weight: self.output_weight,
            waste: self.input_weight - self.output_weight,
            start_time: self.start_time,
            end_time: self.end_time,
            slit_width: None,
            produced_qty: self.produced_qty,
        }
    }
}

// ==========================================
// 主数据快捷构建
// ==========================================

pub fn customer(id: i64, name: &str, area_id: i64) -> Customer {
    Customer {
        id: RecordId(id),
        name: name.to_string(),
        contact: String::new(),
        area_id: RecordId(area_id),
    }
}

pub fn machine(id: i64, name: &str) -> Machine {
    Machine {
        id: RecordId(id),
        name: name.to_string(),
        area_id: RecordId(1),
        machine_type: "Printer".to_string(),
    }
}

/// 以演示主数据为基础,替换工单与生产记录
pub fn tables_with(jobs: Vec<Job>, transactions: Vec<Transaction>) -> SeedTables {
    SeedTables {
        jobs,
        transactions,
        ..seed_tables().expect("种子数据加载失败")
    }
}

pub fn store_with(jobs: Vec<Job>, transactions: Vec<Transaction>) -> DataStore {
    DataStore::new(tables_with(jobs, transactions)).expect("测试数据加载失败")
}
