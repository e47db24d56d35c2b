use crate::common::{ChartStyle, Interval, Period, ViewRequest};
use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub view: ViewConfig,
    pub feed: FeedConfig,
    pub surface: SurfaceConfig,
    pub log: LogConfig,
}

/// 表单初始值与代码建议列表
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub symbol: String,
    pub period: Period,
    pub interval: Interval,
    pub style: ChartStyle,
    pub suggested_symbols: Vec<String>,
}

impl ViewConfig {
    /// 由配置的默认值构造首个刷新请求。
    pub fn initial_request(&self) -> ViewRequest {
        ViewRequest::new(self.symbol.clone(), self.period, self.interval, self.style)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        let request = ViewRequest::default();
        Self {
            symbol: request.symbol,
            period: request.period,
            interval: request.interval,
            style: request.style,
            suggested_symbols: ["AAPL", "GOOGL", "AMZN", "TSLA", "BTC-USD", "ETH-USD", "DOGE-USD"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub palette: PaletteConfig,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            output: "chart.svg".to_string(),
            width: 800,
            height: 500,
            palette: PaletteConfig::default(),
        }
    }
}

/// 色调到颜色的映射，接受颜色名或 `#rrggbb`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub up: String,
    pub down: String,
    pub neutral: String,
    pub series: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            up: "green".to_string(),
            down: "red".to_string(),
            neutral: "black".to_string(),
            series: "#1f77b4".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    // 为空时日志写到 stderr
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}
