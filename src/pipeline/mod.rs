pub mod stage1_enumerate;
pub mod stage2_score;
pub mod stage3_aggregate;
pub mod stage4_report;
