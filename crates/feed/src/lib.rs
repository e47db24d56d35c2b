//! # Candela Feed
//!
//! 历史行情数据源实现。

pub mod yahoo;
