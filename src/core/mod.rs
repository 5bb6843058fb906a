pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod safety;

pub use crate::domain::model::{Report, ReportVerdict, SafetySummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ReportSource};
pub use crate::utils::error::Result;
