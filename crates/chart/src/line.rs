use crate::normalize::IndexedSeries;
use crate::render::StyleRenderer;
use candela_core::chart::entity::{DrawPrimitive, Point, Tone};

/// # Summary
/// 折线图：收盘价连成的一条折线，不区分涨跌。
///
/// # Logic
/// 1. 相邻两点 (i, close_i) -> (i+1, close_i+1) 各产出一条细线，共 N-1 条。
/// 2. 仅一根 K 线时产出一条零长度线段，使该点仍可见。
pub struct LineRenderer;

impl StyleRenderer for LineRenderer {
    fn title(&self) -> &'static str {
        "Line Chart"
    }

    fn primitives(&self, series: &IndexedSeries) -> Vec<DrawPrimitive> {
        let points: Vec<Point> = series
            .points()
            .map(|(x, bar)| Point::new(x, bar.close))
            .collect();

        if let [only] = points.as_slice() {
            return vec![DrawPrimitive::thin(*only, *only, Tone::Series)];
        }

        points
            .windows(2)
            .map(|pair| DrawPrimitive::thin(pair[0], pair[1], Tone::Series))
            .collect()
    }
}
