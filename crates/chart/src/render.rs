use crate::candlestick::CandlestickRenderer;
use crate::line::LineRenderer;
use crate::normalize::IndexedSeries;
use crate::ohlc::OhlcRenderer;
use candela_core::chart::entity::{DrawPrimitive, Rendering};
use candela_core::common::ChartStyle;
use tracing::debug;

/// # Summary
/// 单一图表样式的几何规则。
///
/// # Invariants
/// - 纯函数：同一输入总是产出相同的图元列表，不持有跨调用状态。
/// - 第 i 根 K 线占据 x = i，价格不做缩放。
/// - 不得因 `high < low` 等异常数据失败，按原值绘制。
pub trait StyleRenderer: Send + Sync {
    /// 图表标题。
    fn title(&self) -> &'static str;

    /// 按样式规则生成有序图元。
    fn primitives(&self, series: &IndexedSeries) -> Vec<DrawPrimitive>;
}

/// # Summary
/// 根据样式选择渲染器。
pub fn renderer_for(style: ChartStyle) -> &'static dyn StyleRenderer {
    match style {
        ChartStyle::Candlestick => &CandlestickRenderer,
        ChartStyle::Line => &LineRenderer,
        ChartStyle::Ohlc => &OhlcRenderer,
    }
}

/// # Summary
/// 将规整后的序列渲染为指定样式的图元与标题。
///
/// # Logic
/// 1. 按样式分派到对应的 StyleRenderer。
/// 2. 收集图元并附上标题。
///
/// # Arguments
/// * `series`: 非空的已索引序列。
/// * `style`: 图表样式。
///
/// # Returns
/// 渲染结果 Rendering。
pub fn render(series: &IndexedSeries, style: ChartStyle) -> Rendering {
    let renderer = renderer_for(style);
    let primitives = renderer.primitives(series);
    debug!(%style, bars = series.len(), primitives = primitives.len(), "render");
    Rendering {
        title: renderer.title().to_string(),
        primitives,
    }
}
