//! # Candela View
//!
//! 刷新周期：用户输入 -> 抓取 -> 规整 -> 渲染 -> 展示面。

pub mod refresh;

pub use refresh::{ChartView, NO_DATA_STATUS, RefreshOutcome, ViewError, ViewState};
