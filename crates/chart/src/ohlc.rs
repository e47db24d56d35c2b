use crate::normalize::IndexedSeries;
use crate::render::StyleRenderer;
use candela_core::chart::entity::{DrawPrimitive, Point, Tone};

/// 开收盘竖线的线宽。
pub const BODY_WIDTH: u32 = 4;

/// # Summary
/// OHLC 图：每根 K 线一条区间线加一条开盘到收盘的粗竖线。
///
/// # Invariants
/// - 实体是位于同一 x 的单条竖线，而非蜡烛图的两条横线。
pub struct OhlcRenderer;

impl StyleRenderer for OhlcRenderer {
    fn title(&self) -> &'static str {
        "OHLC Chart"
    }

    fn primitives(&self, series: &IndexedSeries) -> Vec<DrawPrimitive> {
        series
            .points()
            .flat_map(|(x, bar)| {
                [
                    DrawPrimitive::thin(Point::new(x, bar.low), Point::new(x, bar.high), Tone::Neutral),
                    DrawPrimitive::thick(
                        Point::new(x, bar.open),
                        Point::new(x, bar.close),
                        BODY_WIDTH,
                        Tone::of(bar),
                    ),
                ]
            })
            .collect()
    }
}
