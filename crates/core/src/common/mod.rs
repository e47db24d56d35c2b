use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// 历史数据回溯区间，决定向数据源请求多长时间跨度的 K 线。
///
/// # Invariants
/// - 字符串形式与 Yahoo `range` 参数一致（`1d`, `5d`, `1mo` ...）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Period {
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "5d")]
    Day5,
    #[serde(rename = "1mo")]
    Month1,
    #[serde(rename = "3mo")]
    Month3,
    #[serde(rename = "6mo")]
    Month6,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "2y")]
    Year2,
    #[serde(rename = "5y")]
    Year5,
}

impl Period {
    /// 表单下拉框中可选的全部区间，按跨度升序。
    pub const ALL: [Period; 8] = [
        Period::Day1,
        Period::Day5,
        Period::Month1,
        Period::Month3,
        Period::Month6,
        Period::Year1,
        Period::Year2,
        Period::Year5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day1 => "1d",
            Period::Day5 => "5d",
            Period::Month1 => "1mo",
            Period::Month3 => "3mo",
            Period::Month6 => "6mo",
            Period::Year1 => "1y",
            Period::Year2 => "2y",
            Period::Year5 => "5y",
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("Unknown Period: {}", s))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Summary
/// 单根 K 线的时间粒度。
///
/// # Invariants
/// - 字符串形式即表单中展示的取值；与数据源协议的映射由具体数据源负责。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "2m")]
    Minute2,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1wk")]
    Week1,
    #[serde(rename = "1mo")]
    Month1,
}

impl Interval {
    /// 表单下拉框中可选的全部粒度，按跨度升序。
    pub const ALL: [Interval; 9] = [
        Interval::Minute1,
        Interval::Minute2,
        Interval::Minute5,
        Interval::Minute15,
        Interval::Minute30,
        Interval::Hour1,
        Interval::Day1,
        Interval::Week1,
        Interval::Month1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1m",
            Interval::Minute2 => "2m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Hour1 => "1h",
            Interval::Day1 => "1d",
            Interval::Week1 => "1wk",
            Interval::Month1 => "1mo",
        }
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| format!("Unknown Interval: {}", s))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Summary
/// 图表样式，仅用于选择渲染器采用的几何规则。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChartStyle {
    Candlestick,
    Line,
    #[serde(rename = "OHLC")]
    Ohlc,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 3] = [ChartStyle::Candlestick, ChartStyle::Line, ChartStyle::Ohlc];
}

impl FromStr for ChartStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "candlestick" => Ok(ChartStyle::Candlestick),
            "line" => Ok(ChartStyle::Line),
            "ohlc" => Ok(ChartStyle::Ohlc),
            _ => Err(format!("Unknown ChartStyle: {}", s)),
        }
    }
}

impl std::fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartStyle::Candlestick => write!(f, "Candlestick"),
            ChartStyle::Line => write!(f, "Line"),
            ChartStyle::Ohlc => write!(f, "OHLC"),
        }
    }
}

/// # Summary
/// 一次刷新所需的全部用户输入：标的、区间、粒度与图表样式。
///
/// # Invariants
/// - 每次刷新触发时新建，之后不可变，按值穿过整条流水线。
/// - 不校验 `symbol`，空代码或非法代码由数据源处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    // 证券代码 (例如: AAPL, BTC-USD)
    pub symbol: String,
    // 回溯区间
    pub period: Period,
    // K 线粒度
    pub interval: Interval,
    // 图表样式
    pub style: ChartStyle,
}

impl ViewRequest {
    pub fn new(
        symbol: impl Into<String>,
        period: Period,
        interval: Interval,
        style: ChartStyle,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            period,
            interval,
            style,
        }
    }
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self::new("AAPL", Period::Month1, Interval::Day1, ChartStyle::Candlestick)
    }
}
