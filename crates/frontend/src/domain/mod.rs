pub mod a001_data_source;
pub mod a002_data_set;
pub mod a003_report;
pub mod a004_question;
pub mod a005_dashboard;
pub mod a006_subscription;
