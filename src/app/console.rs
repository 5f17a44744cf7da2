// ==========================================
// 印刷车间管理 - 控制台会话
// ==========================================
// 职责: 逐行解析命令,驱动 API 与选择器,输出文本结果
// 演示页面: 工单表单 (客户/产品) + 生产记录表单 (工单/机台/操作员)
// ==========================================

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, ApiResult, CatalogApi, ReportApi};
use crate::app::host::{bootstrap, BootstrapReport, PageElement, StaticPage, MAIN_CONTENT_ID};
use crate::app::state::AppState;
use crate::picker::{FieldSink, FormState, PickerBody, PickerController, PickerView, TriggerId};
use crate::repository::DataStore;

const HELP: &str = "\
命令:
  tables                         列出数据表
  list <table>                   列出表中记录
  get <table> <id>               按ID查询记录
  jobs                           工单（含客户/产品名称）
  transactions [type]            生产记录（可按工序过滤）
  progress [job_no]              工单进度
  pending                        未完成工单
  output <process>               工序产出汇总
  report <from> <to> [process..] [job=<no>]
                                 生产明细报表
  job <id>                       工单明细
  dashboard                      生产看板
  triggers                       页面上的选择器触发元素
  trigger <n>                    激活第 n 个触发元素
  open <table> [id_field] [name_field]
  filter [text]                  过滤选择器结果
  select <id>                    选中记录并写入表单
  close                          关闭选择器
  show                           显示选择器
  form                           显示表单字段
  quit                           退出";

/// 单条命令的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOutcome {
    Continue(String),
    Quit,
}

/// 演示页面: 主内容容器 + 选择器触发按钮
pub fn demo_page() -> StaticPage {
    StaticPage::new()
        .element(PageElement::with_id(MAIN_CONTENT_ID))
        .lookup_button("customers", "customer_id", "customer_name")
        .lookup_button("items", "item_id", "item_name")
        .lookup_button("jobs", "job_id", "job_no")
        .lookup_button("machines", "machine_id", "machine_name")
        .lookup_button("operators", "operator_id", "operator_name")
}

/// 演示表单字段（job_no 未声明,写入时记录警告）
pub fn demo_form() -> FormState {
    FormState::with_fields([
        "customer_id",
        "customer_name",
        "item_id",
        "item_name",
        "job_id",
        "machine_id",
        "machine_name",
        "operator_id",
        "operator_name",
    ])
}

// ==========================================
// ConsoleSession - 控制台会话
// ==========================================
pub struct ConsoleSession {
    store: Arc<DataStore>,
    catalog: Arc<CatalogApi>,
    reports: Arc<ReportApi>,
    picker: PickerController,
    form: FormState,
    triggers: Vec<TriggerId>,
    bootstrap: BootstrapReport,
}

impl ConsoleSession {
    pub fn new(state: &AppState) -> Self {
        Self::with_page(state, &demo_page(), demo_form())
    }

    pub fn with_page(state: &AppState, page: &StaticPage, form: FormState) -> Self {
        let mut picker = PickerController::new();
        let report = bootstrap(page, &mut picker);

        Self {
            store: state.store.clone(),
            catalog: state.catalog_api.clone(),
            reports: state.report_api.clone(),
            picker,
            form,
            triggers: report.triggers.clone(),
            bootstrap: report,
        }
    }

    pub fn bootstrap_report(&self) -> &BootstrapReport {
        &self.bootstrap
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn picker(&self) -> &PickerController {
        &self.picker
    }

    /// 执行一行命令
    pub fn execute(&mut self, line: &str) -> ConsoleOutcome {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        tracing::debug!("控制台命令: {}", line);

        let result = match command {
            "" => Ok(String::new()),
            "help" => Ok(HELP.to_string()),
            "quit" | "exit" => return ConsoleOutcome::Quit,
            "tables" => Ok(self.catalog.tables().join("\n")),
            "list" => self.list(&args),
            "get" => self.get(&args),
            "jobs" => to_json(&self.catalog.jobs_with_details()),
            "transactions" => to_json(&self.catalog.transactions_with_details(args.first().copied())),
            "progress" => self
                .reports
                .job_progress(args.first().map(|s| s.to_string()), None, None)
                .and_then(|rows| to_json(&rows)),
            "pending" => to_json(&self.reports.pending_orders()),
            "output" => self.output(&args),
            "report" => self.report(&args),
            "job" => required(&args, 0, "id")
                .and_then(|id| self.reports.job_detail(id))
                .and_then(|detail| to_json(&detail)),
            "dashboard" => to_json(&self.reports.dashboard()),
            "triggers" => Ok(self.render_triggers()),
            "trigger" => self.trigger(&args),
            "open" => self.open(&args),
            // 过滤文本取整行剩余部分（可含空格,可为空）
            "filter" => Ok(render_view(&self.picker.filter(rest))),
            "select" => self.select(&args),
            "close" => {
                self.picker.close();
                Ok(render_view(&self.picker.view()))
            }
            "show" => Ok(render_view(&self.picker.view())),
            "form" => Ok(self.render_form()),
            other => Err(ApiError::InvalidInput(format!(
                "未知命令: {} (输入 help 查看命令)",
                other
            ))),
        };

        ConsoleOutcome::Continue(match result {
            Ok(text) => text,
            Err(e) => format!("错误: {}", e),
        })
    }

    fn list(&self, args: &[&str]) -> ApiResult<String> {
        let table = required(args, 0, "table")?;
        to_json(&self.catalog.list_table(table))
    }

    fn get(&self, args: &[&str]) -> ApiResult<String> {
        let table = required(args, 0, "table")?;
        let id = required(args, 1, "id")?;
        match self.catalog.get_record(table, id) {
            Some(record) => to_json(&record),
            None => Ok("null".to_string()),
        }
    }

    fn output(&self, args: &[&str]) -> ApiResult<String> {
        let process = required(args, 0, "process")?;
        to_json(&self.reports.process_output(process)?)
    }

    fn report(&self, args: &[&str]) -> ApiResult<String> {
        let from = required(args, 0, "from")?;
        let to = required(args, 1, "to")?;
        let mut job_no = None;
        let mut processes = Vec::new();
        for arg in &args[2..] {
            match arg.strip_prefix("job=") {
                Some(no) => job_no = Some(no),
                None => processes.push(arg.to_string()),
            }
        }
        to_json(&self.reports.production_report(from, to, &processes, job_no)?)
    }

    fn trigger(&mut self, args: &[&str]) -> ApiResult<String> {
        let index: usize = required(args, 0, "n")?
            .parse()
            .map_err(|e| ApiError::InvalidInput(format!("序号格式错误: {}", e)))?;
        let id = index
            .checked_sub(1)
            .and_then(|i| self.triggers.get(i))
            .copied()
            .ok_or_else(|| ApiError::NotFound(format!("触发元素 {} 不存在", index)))?;

        self.picker
            .activate(id, self.store.as_ref())
            .map(|view| render_view(&view))
            .ok_or_else(|| ApiError::NotFound(format!("触发元素(id={})未注册", id)))
    }

    fn open(&mut self, args: &[&str]) -> ApiResult<String> {
        let table = required(args, 0, "table")?;
        let id_field = args.get(1).copied().unwrap_or("");
        let name_field = args.get(2).copied().unwrap_or("");
        let view = self
            .picker
            .open(self.store.as_ref(), table, id_field, name_field);
        Ok(render_view(&view))
    }

    fn select(&mut self, args: &[&str]) -> ApiResult<String> {
        let id = required(args, 0, "id")?;
        let sink: &mut dyn FieldSink = &mut self.form;
        match self.picker.select_by_id(id, sink) {
            Some(outcome) => Ok(format!(
                "已选中 #{} (id写入={}, 名称写入={})\n{}",
                outcome.record_id,
                outcome.id_written,
                outcome.name_written,
                self.render_form()
            )),
            None => Ok("未选中: 选择器未打开或记录不在当前结果中".to_string()),
        }
    }

    fn render_triggers(&self) -> String {
        let lines: Vec<String> = self
            .picker
            .triggers()
            .iter()
            .enumerate()
            .map(|(i, (_, d))| {
                format!("{}. {} → {} / {}", i + 1, d.table, d.id_field, d.name_field)
            })
            .collect();
        lines.join("\n")
    }

    fn render_form(&self) -> String {
        let lines: Vec<String> = self
            .form
            .fields()
            .iter()
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        lines.join("\n")
    }
}

fn required<'a>(args: &[&'a str], index: usize, name: &str) -> ApiResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| ApiError::InvalidInput(format!("缺少参数: {}", name)))
}

fn to_json<T: Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::InternalError(format!("序列化失败: {}", e)))
}

/// 选择器画面的文本渲染
pub fn render_view(view: &PickerView) -> String {
    if !view.visible {
        return "(选择器已关闭)".to_string();
    }

    let mut out = format!(
        "== {} ==\n[{}] {}\n",
        view.title, view.search_placeholder, view.search_text
    );
    match &view.body {
        PickerBody::Rows { rows } => {
            for row in rows {
                out.push_str(&format!("  {:<30} {}\n", row.label, row.badge));
            }
        }
        PickerBody::Empty { message } => {
            out.push_str(&format!("  ({})\n", message));
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn session() -> ConsoleSession {
        let state = AppState::new(AppConfig::default()).unwrap();
        ConsoleSession::new(&state)
    }

    fn text(outcome: ConsoleOutcome) -> String {
        match outcome {
            ConsoleOutcome::Continue(text) => text,
            ConsoleOutcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_execute_演示页面启动() {
        let session = session();
        assert!(session.bootstrap_report().layout_mounted);
        assert_eq!(session.bootstrap_report().triggers.len(), 5);
    }

    #[test]
    fn test_execute_触发选择写入表单() {
        let mut session = session();
        text(session.execute("trigger 1"));
        assert!(session.picker().is_open());

        text(session.execute("filter acme"));
        text(session.execute("select 1"));

        assert!(!session.picker().is_open());
        assert_eq!(session.form().value("customer_id"), Some("1"));
        assert_eq!(session.form().value("customer_name"), Some("Acme Corp"));
    }

    #[test]
    fn test_execute_选择不在结果中的记录() {
        let mut session = session();
        text(session.execute("trigger 4"));
        text(session.execute("filter heidelberg"));
        let out = text(session.execute("select 2"));

        assert!(out.starts_with("未选中"));
        assert!(session.picker().is_open());
        assert_eq!(session.form().value("machine_id"), Some(""));
    }

    #[test]
    fn test_execute_错误命令() {
        let mut session = session();
        assert!(text(session.execute("bogus")).starts_with("错误"));
        assert!(text(session.execute("trigger 9")).starts_with("错误"));
        assert!(text(session.execute("trigger 0")).starts_with("错误"));
        assert!(text(session.execute("get customers")).starts_with("错误"));
        assert_eq!(session.execute("quit"), ConsoleOutcome::Quit);
    }

    #[test]
    fn test_execute_查询命令() {
        let mut session = session();
        assert_eq!(text(session.execute("get jobs 999")), "null");
        assert!(text(session.execute("get customers 1")).contains("Acme Corp"));
        assert!(text(session.execute("output printing")).contains("\"transactionCount\": 3"));
        assert!(text(session.execute("job 103")).contains("\"customerName\": \"Local Café\""));
        assert!(text(session.execute("job 999")).starts_with("错误"));
        assert!(text(session.execute("dashboard")).contains("\"completedJobs\": 1"));

        let report = text(session.execute("report 2024-12-01 2024-12-31 job=jo-102"));
        assert!(report.contains("\"productName\": \"Burger Wrapper\""));
        assert!(!report.contains("JO-101"));
    }
}
