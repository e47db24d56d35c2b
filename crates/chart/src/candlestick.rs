use crate::normalize::IndexedSeries;
use crate::render::StyleRenderer;
use candela_core::chart::entity::{DrawPrimitive, Point, Tone};

/// 开收盘横线相对 x 的半宽。
pub const TICK_HALF_WIDTH: f64 = 0.3;
/// 开收盘横线的线宽。
pub const BODY_WIDTH: u32 = 6;

/// # Summary
/// 蜡烛图：每根 K 线一条影线加开、收盘两条粗横线。
///
/// # Logic
/// 对第 i 根 K 线依次产出：
/// 1. 中性色细线 (i, low) -> (i, high)。
/// 2. 涨跌色粗线 y = open，x 从 i-0.3 到 i+0.3。
/// 3. 涨跌色粗线 y = close，x 同上。
pub struct CandlestickRenderer;

impl StyleRenderer for CandlestickRenderer {
    fn title(&self) -> &'static str {
        "Candlestick Chart"
    }

    fn primitives(&self, series: &IndexedSeries) -> Vec<DrawPrimitive> {
        let mut out = Vec::with_capacity(series.len() * 3);
        for (x, bar) in series.points() {
            let tone = Tone::of(bar);
            out.push(DrawPrimitive::thin(
                Point::new(x, bar.low),
                Point::new(x, bar.high),
                Tone::Neutral,
            ));
            for y in [bar.open, bar.close] {
                out.push(DrawPrimitive::thick(
                    Point::new(x - TICK_HALF_WIDTH, y),
                    Point::new(x + TICK_HALF_WIDTH, y),
                    BODY_WIDTH,
                    tone,
                ));
            }
        }
        out
    }
}
