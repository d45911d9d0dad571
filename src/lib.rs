pub mod configuration;
pub mod domain;
pub mod forms;
pub mod notify;
pub mod page;
pub mod startup;
pub mod storage;
pub mod store;
pub mod subscription;
pub mod surface;
pub mod telemetry;
pub mod widgets;
