// ==========================================
// 印刷车间管理 - 关联查询 (外键 → 可读名称)
// ==========================================
// 每次调用即时计算并完整物化,不缓存
// 外键无法解析时使用兜底文案,不报错
// 输出顺序与底层表顺序一致
// ==========================================

use crate::config::FallbackLabels;
use crate::domain::{EnrichedJob, EnrichedTransaction};
use crate::repository::data_store::DataStore;
use tracing::instrument;

// ==========================================
// DetailJoiner - 关联查询器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DetailJoiner {
    labels: FallbackLabels,
}

impl DetailJoiner {
    /// 使用自定义兜底文案创建
    pub fn new(labels: FallbackLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &FallbackLabels {
        &self.labels
    }

    /// 工单 + customerName + itemName
    #[instrument(skip(self, store), fields(jobs = store.jobs().len()))]
    pub fn jobs_with_details(&self, store: &DataStore) -> Vec<EnrichedJob> {
        store
            .jobs()
            .iter()
            .map(|job| {
                let customer_name = match store.find_customer(job.customer_id) {
                    Some(c) => c.name.clone(),
                    None => {
                        tracing::debug!("工单{}的客户{}无法解析", job.id, job.customer_id);
                        self.labels.unknown.clone()
                    }
                };
                let item_name = match store.find_item(job.item_id) {
                    Some(i) => i.name.clone(),
                    None => {
                        tracing::debug!("工单{}的物料{}无法解析", job.id, job.item_id);
                        self.labels.unknown.clone()
                    }
                };

                EnrichedJob {
                    job: job.clone(),
                    customer_name,
                    item_name,
                }
            })
            .collect()
    }

    /// 生产记录 + jobNo + machineName + operatorName
    ///
    /// # 参数
    /// - type_filter: 工序类型; 与 type 精确比较（大小写敏感,不归一化）,
    ///   None 表示不过滤
    #[instrument(skip(self, store), fields(transactions = store.transactions().len()))]
    pub fn transactions_with_details(
        &self,
        store: &DataStore,
        type_filter: Option<&str>,
    ) -> Vec<EnrichedTransaction> {
        store
            .transactions()
            .iter()
            .filter(|t| type_filter.map_or(true, |f| t.trans_type.as_str() == f))
            .map(|t| {
                let job_no = match store.find_job(t.job_id) {
                    Some(job) => self.labels.job_no(job.id),
                    None => {
                        tracing::debug!("生产记录{}的工单{}无法解析", t.id, t.job_id);
                        self.labels.job_placeholder.clone()
                    }
                };
                let machine_name = store
                    .find_machine(t.machine_id)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| self.labels.unknown.clone());
                let operator_name = store
                    .find_operator(t.operator_id)
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| self.labels.unknown.clone());

                EnrichedTransaction {
                    transaction: t.clone(),
                    job_no,
                    machine_name,
                    operator_name,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;
    use crate::repository::seed::seed_tables;

    #[test]
    fn test_jobs_with_details_名称解析() {
        let store = DataStore::seeded().unwrap();
        let jobs = store.jobs_with_details();

        assert_eq!(jobs.len(), store.jobs().len());
        assert_eq!(jobs[0].customer_name, "Acme Corp");
        assert_eq!(jobs[0].item_name, "Glossy Label 5x5");
        assert_eq!(jobs[0].job, store.jobs()[0]);
    }

    #[test]
    fn test_transactions_with_details_自定义兜底文案() {
        let mut tables = seed_tables().unwrap();
        tables.transactions[0].job_id = RecordId(999);
        tables.transactions[0].operator_id = RecordId(999);
        let store = DataStore::new(tables).unwrap();

        let joiner = DetailJoiner::new(FallbackLabels {
            unknown: "?".to_string(),
            job_placeholder: "-".to_string(),
            job_no_prefix: "JOB#".to_string(),
        });
        let rows = joiner.transactions_with_details(&store, None);

        assert_eq!(rows[0].job_no, "-");
        assert_eq!(rows[0].operator_name, "?");
        assert_eq!(rows[0].machine_name, "Heidelberg XL");
        assert_eq!(rows[1].job_no, "JOB#101");
    }
}
