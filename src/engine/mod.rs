// ==========================================
// 印刷车间管理 - 报表引擎层
// ==========================================
// 职责: 基于只读数据集计算生产报表
// ==========================================

pub mod report;

pub use report::{
    DateNode, JobDetail, JobProgress, JobProgressFilter, MachineNode, MachineWaste, ProcessNode,
    ProcessOutput, ProductionDashboard, ProductionReport, ProductionRow, ProductionTotals,
    ProgressStage, ReportEngine, TrendPoint,
};
