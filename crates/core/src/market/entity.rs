use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// # Summary
/// 单根 K 线数据实体，记录特定时段内的行情波动。
///
/// # Invariants
/// - 期望 `low <= min(open, close) <= max(open, close) <= high`，但上游数据不保证，
///   下游渲染不得依赖该约束。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    // K 线开始时间
    pub time: DateTime<Utc>,
    // 开盘价
    pub open: f64,
    // 最高价
    pub high: f64,
    // 最低价
    pub low: f64,
    // 收盘价
    pub close: f64,
}

impl PriceBar {
    /// # Summary
    /// 判断该 K 线是否为上涨（阳线）。
    ///
    /// # Logic
    /// 收盘价大于或等于开盘价即视为上涨；平盘归为上涨。
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// # Summary
/// 按到达顺序排列的 K 线序列。
///
/// # Invariants
/// - 位置索引 0..N-1 即到达顺序，与时间戳数值无关。
/// - 允许为空（数据源找不到数据时）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn into_bars(self) -> Vec<PriceBar> {
        self.bars
    }
}

impl From<Vec<PriceBar>> for PriceSeries {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::new(bars)
    }
}

impl FromIterator<PriceBar> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceBar>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
