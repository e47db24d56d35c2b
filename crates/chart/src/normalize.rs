use candela_core::chart::entity::AxisLabels;
use candela_core::market::entity::{PriceBar, PriceSeries};
use tracing::debug;

/// X 轴标签的日期格式。
pub const LABEL_FORMAT: &str = "%Y-%m-%d";

/// # Summary
/// 规整结果：空序列，或带位置索引的非空序列。
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Empty,
    Indexed(IndexedSeries),
}

impl Normalized {
    pub fn into_indexed(self) -> Option<IndexedSeries> {
        match self {
            Normalized::Empty => None,
            Normalized::Indexed(series) => Some(series),
        }
    }
}

/// # Summary
/// 以位置索引 0..N-1 作为 X 轴的非空 K 线序列。
///
/// # Invariants
/// - 至少包含一根 K 线。
/// - `labels.texts[i]` 是第 i 根 K 线时间的 `YYYY-MM-DD` 形式。
/// - 价格原样保留，不做任何修正。
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedSeries {
    bars: Vec<PriceBar>,
    labels: AxisLabels,
}

impl IndexedSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// 恒为 false，保留以满足 `len` 的惯例。
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    /// 按顺序产出 (x 坐标, K 线)。
    pub fn points(&self) -> impl Iterator<Item = (f64, &PriceBar)> + '_ {
        self.bars
            .iter()
            .enumerate()
            .map(|(i, bar)| (position(i), bar))
    }
}

/// # Summary
/// 把位置索引换算为 X 坐标。
///
/// # Logic
/// 经由 u32 无损转换为 f64；超出 u32 的索引（实际不可能出现）钳制到 u32::MAX。
pub fn position(index: usize) -> f64 {
    u32::try_from(index).map_or(f64::from(u32::MAX), f64::from)
}

/// # Summary
/// 将数据源返回的原始序列规整为可渲染形式。
///
/// # Logic
/// 1. 空序列直接返回 `Empty`，调用方据此展示“无数据”状态。
/// 2. 否则按到达顺序分配位置索引，并为每根 K 线生成日期标签。
///
/// # Arguments
/// * `series`: 原始 K 线序列，可能为空或包含违反 OHLC 约束的数据。
///
/// # Returns
/// `Normalized::Empty` 或 `Normalized::Indexed`。
pub fn normalize(series: PriceSeries) -> Normalized {
    if series.is_empty() {
        debug!("normalize: empty series");
        return Normalized::Empty;
    }

    let bars = series.into_bars();
    let texts = bars
        .iter()
        .map(|bar| bar.time.format(LABEL_FORMAT).to_string())
        .collect();
    debug!(bars = bars.len(), "normalize: indexed series");

    Normalized::Indexed(IndexedSeries {
        bars,
        labels: AxisLabels::new(texts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use candela_core::chart::entity::LabelAnchor;
    use candela_core::testing::daily_bar;

    #[test]
    fn test_empty_series_normalizes_to_empty() {
        assert_eq!(normalize(PriceSeries::default()), Normalized::Empty);
        assert!(normalize(PriceSeries::default()).into_indexed().is_none());
    }

    #[test]
    fn test_labels_follow_arrival_order() {
        // 到达顺序与时间顺序不一致时，仍按到达顺序编号
        let series = PriceSeries::new(vec![
            daily_bar(2, 1.0, 2.0, 0.5, 1.5),
            daily_bar(0, 1.0, 2.0, 0.5, 1.5),
        ]);
        let indexed = normalize(series).into_indexed().unwrap();
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed.labels().texts, vec!["2024-01-03", "2024-01-01"]);
        assert_eq!(indexed.labels().rotation_deg, 45.0);
        assert_eq!(indexed.labels().anchor, LabelAnchor::Right);

        let xs: Vec<f64> = indexed.points().map(|(x, _)| x).collect();
        assert_eq!(xs, vec![0.0, 1.0]);
    }

    #[test]
    fn test_malformed_bar_is_kept_verbatim() {
        let bad = daily_bar(0, 10.0, 8.0, 12.0, 11.0);
        let indexed = normalize(PriceSeries::new(vec![bad])).into_indexed().unwrap();
        assert_eq!(indexed.bars()[0], bad);
    }
}
