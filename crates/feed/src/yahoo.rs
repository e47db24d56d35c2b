use async_trait::async_trait;
use candela_core::common::{Interval, Period};
use candela_core::config::FeedConfig;
use candela_core::market::entity::{PriceBar, PriceSeries};
use candela_core::market::error::MarketError;
use candela_core::market::port::PriceSource;
use chrono::{TimeZone, Utc};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// # Summary
/// Yahoo Finance 行情提供者实现。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯。
/// - 代码不存在（HTTP 404 或 `Not Found` 错误码）时返回空序列。
#[derive(Clone)]
pub struct YahooProvider {
    /// 内部使用的 HTTP 客户端
    client: Client,
    /// API 根地址，例如 `https://query1.finance.yahoo.com`
    base_url: String,
}

impl YahooProvider {
    /// # Summary
    /// 创建一个新的 YahooProvider 实例。
    ///
    /// # Logic
    /// 1. 安装 rustls 的 ring 加密后端（已安装则跳过）。
    /// 2. 按配置设置超时与伪装浏览器 User-Agent，以减少被拦截风险。
    /// 3. 初始化 reqwest 客户端。
    ///
    /// # Arguments
    /// * `config`: 数据源配置。
    ///
    /// # Returns
    /// 成功返回 YahooProvider，客户端构建失败返回 MarketError::Network。
    pub fn new(config: &FeedConfig) -> Result<Self, MarketError> {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider already installed");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| MarketError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// # Summary
/// 将粒度映射为 Yahoo 识别的 interval 参数。
fn yahoo_interval(interval: Interval) -> &'static str {
    match interval {
        Interval::Hour1 => "60m",
        other => other.as_str(),
    }
}

/// # Summary
/// Yahoo API 响应顶层结构。
///
/// # Invariants
/// - 映射自 Yahoo v8 chart 接口。
#[derive(Deserialize, Debug)]
struct YahooResponse {
    chart: YahooChart,
}

/// # Summary
/// Yahoo API 图表数据部分。
#[derive(Deserialize, Debug)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

/// # Summary
/// Yahoo API 错误详情。
#[derive(Deserialize, Debug)]
struct YahooError {
    code: Option<String>,
    description: String,
}

/// # Summary
/// Yahoo API 单个时间序列结果。
///
/// # Invariants
/// - 区间内无成交时 `timestamp` 字段整体缺失。
#[derive(Deserialize, Debug)]
struct YahooResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooIndicators,
}

/// # Summary
/// Yahoo API 指标容器。
#[derive(Deserialize, Debug)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

/// # Summary
/// Yahoo API 原始报价数据，缺失值为 null。
#[derive(Deserialize, Debug)]
struct YahooQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// # Summary
/// 将 chart 响应转换为 PriceSeries。
///
/// # Logic
/// 1. 错误码为 `Not Found` 视为空结果，其它错误为 `Rejected`。
/// 2. 无结果或无时间戳返回空序列。
/// 3. 逐个时间戳组装 PriceBar，OHLC 任一缺失或时间戳非法的行跳过。
fn into_series(response: YahooResponse) -> Result<PriceSeries, MarketError> {
    if let Some(err) = response.chart.error {
        return match err.code.as_deref() {
            Some("Not Found") => Ok(PriceSeries::default()),
            _ => Err(MarketError::Rejected(err.description)),
        };
    }

    let Some(result) = response.chart.result.and_then(|mut r| r.pop()) else {
        return Ok(PriceSeries::default());
    };
    if result.timestamp.is_empty() {
        return Ok(PriceSeries::default());
    }

    let quote = result
        .indicators
        .quote
        .first()
        .ok_or(MarketError::Parse("No quote data".into()))?;

    let field = |column: &[Option<f64>], i: usize| column.get(i).copied().flatten();

    let mut skipped = 0usize;
    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        match (
            Utc.timestamp_opt(ts, 0).single(),
            field(&quote.open, i),
            field(&quote.high, i),
            field(&quote.low, i),
            field(&quote.close, i),
        ) {
            (Some(time), Some(open), Some(high), Some(low), Some(close)) => bars.push(PriceBar {
                time,
                open,
                high,
                low,
                close,
            }),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "yahoo: dropped rows with missing prices");
    }

    Ok(PriceSeries::new(bars))
}

/// # Summary
/// 构建 v8 chart 接口地址。
///
/// # Logic
/// 代码作为单个路径段追加并按路径规则转义，`#`、`?`、`/` 不会改变请求的资源。
fn chart_url(base_url: &str, symbol: &str) -> Result<Url, MarketError> {
    let mut url = Url::parse(base_url).map_err(|e| MarketError::Unknown(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| MarketError::Unknown(format!("Invalid base url: {}", base_url)))?
        .pop_if_empty()
        .extend(["v8", "finance", "chart", symbol]);
    Ok(url)
}

/// # Summary
/// 解析原始 JSON 文本。
fn parse_chart(body: &str) -> Result<PriceSeries, MarketError> {
    let response: YahooResponse =
        serde_json::from_str(body).map_err(|e| MarketError::Parse(e.to_string()))?;
    into_series(response)
}

#[async_trait]
impl PriceSource for YahooProvider {
    /// # Summary
    /// 从 Yahoo Finance 抓取 K 线历史数据。
    ///
    /// # Logic
    /// 1. 以 `range` + `interval` 参数构建 v8 chart 请求。
    /// 2. HTTP 404 视为代码不存在，返回空序列。
    /// 3. 其它非 2xx 状态尽量提取响应中的错误描述。
    /// 4. 解析嵌套 JSON 并组装 PriceSeries。
    ///
    /// # Arguments
    /// * `symbol`: 证券代码。
    /// * `period`: 回溯区间。
    /// * `interval`: K 线粒度。
    ///
    /// # Returns
    /// 成功返回 K 线序列（可能为空），失败返回 MarketError。
    async fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<PriceSeries, MarketError> {
        let url = chart_url(&self.base_url, symbol)?;
        debug!(%url, %period, %interval, "yahoo: requesting chart");

        let resp = self
            .client
            .get(url)
            .query(&[
                ("range", period.as_str()),
                ("interval", yahoo_interval(interval)),
            ])
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            info!(symbol, "yahoo: symbol not found, returning empty series");
            return Ok(PriceSeries::default());
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(symbol, %status, "yahoo: request failed");
            return Err(match parse_chart(&body) {
                Err(MarketError::Rejected(description)) => MarketError::Rejected(description),
                _ => MarketError::Network(format!("HTTP {}", status)),
            });
        }

        let json: YahooResponse = resp
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        let series = into_series(json)?;
        info!(symbol, bars = series.len(), "yahoo: chart fetched");
        Ok(series)
    }
}
