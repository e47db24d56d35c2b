//! # Candela Core
//!
//! 行情图表查看器的领域层：实体、错误枚举与端口 (Trait)。
//! 具体实现（数据源、渲染、展示面）位于各自的 crate 中，通过这里的端口注入。

pub mod chart;
pub mod common;
pub mod config;
pub mod market;

#[cfg(feature = "test-utils")]
pub mod testing;
