use crate::common::{Interval, Period};
use crate::market::entity::PriceSeries;
use crate::market::error::MarketError;
use async_trait::async_trait;

/// # Summary
/// 历史行情数据源接口。
///
/// # Invariants
/// - 代码可达但无数据时返回空序列，而非错误。
/// - 传输层故障（网络、HTTP 状态、响应格式）以 `MarketError` 返回。
/// - 不做重试与缓存，每次调用都重新抓取。
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// # Summary
    /// 抓取指定证券在给定区间与粒度下的 K 线序列。
    ///
    /// # Logic
    /// 1. 将区间与粒度映射为数据源协议参数。
    /// 2. 执行请求并解析响应。
    /// 3. 按到达顺序组装 PriceSeries。
    ///
    /// # Arguments
    /// * `symbol`: 证券代码，不做校验。
    /// * `period`: 回溯区间。
    /// * `interval`: K 线粒度。
    ///
    /// # Returns
    /// 成功返回（可能为空的）PriceSeries，失败返回 MarketError。
    async fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<PriceSeries, MarketError>;
}
