use candela_core::common::{Interval, Period};
use candela_core::config::FeedConfig;
use candela_core::market::error::MarketError;
use candela_core::market::port::PriceSource;
use candela_feed::yahoo::YahooProvider;

/// # Summary
/// 雅虎财经行情获取的集成测试（依赖外网，默认忽略）。
///
/// # Logic
/// 1. 初始化 YahooProvider。
/// 2. 抓取 AAPL 最近一个月的日线数据。
/// 3. 断言数据非空且时间严格递增。
#[tokio::test]
#[ignore = "requires network access to query1.finance.yahoo.com"]
async fn test_yahoo_real_fetch() -> anyhow::Result<()> {
    let provider = YahooProvider::new(&FeedConfig::default())?;

    let series = provider
        .fetch("AAPL", Period::Month1, Interval::Day1)
        .await?;

    assert!(!series.is_empty(), "Series should not be empty");
    for pair in series.bars().windows(2) {
        assert!(pair[0].time < pair[1].time);
    }
    println!("Successfully fetched {} bars for AAPL", series.len());
    Ok(())
}

/// # Summary
/// 雅虎财经未知代码返回空序列（依赖外网，默认忽略）。
#[tokio::test]
#[ignore = "requires network access to query1.finance.yahoo.com"]
async fn test_yahoo_unknown_symbol_is_empty() -> anyhow::Result<()> {
    let provider = YahooProvider::new(&FeedConfig::default())?;
    let series = provider
        .fetch("NO-SUCH-TICKER-XYZ", Period::Month1, Interval::Day1)
        .await?;
    assert!(series.is_empty());
    Ok(())
}

/// # Summary
/// 无法连接时以网络错误返回，而不是空序列。
///
/// # Logic
/// 1. 将根地址指向本机未监听的端口。
/// 2. 断言返回 MarketError::Network。
#[tokio::test]
async fn test_unreachable_host_is_a_network_error() -> anyhow::Result<()> {
    let config = FeedConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..FeedConfig::default()
    };
    let provider = YahooProvider::new(&config)?;

    let result = provider.fetch("AAPL", Period::Day5, Interval::Hour1).await;
    assert!(
        matches!(result, Err(MarketError::Network(_))),
        "unexpected: {:?}",
        result
    );
    Ok(())
}
