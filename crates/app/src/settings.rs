use candela_core::config::AppConfig;
use config::{Config, ConfigError, Environment, File};

/// 指定配置文件路径的环境变量。
pub const CONFIG_PATH_ENV: &str = "CANDELA_CONFIG";
/// 默认配置文件名（不含扩展名，支持 toml/json/yaml 等）。
pub const DEFAULT_CONFIG_NAME: &str = "candela";

/// # Summary
/// 加载应用配置。
///
/// # Logic
/// 1. 读取 `CANDELA_CONFIG` 指定的文件路径，缺省为当前目录下的 `candela.*`。
/// 2. 委托 `load_from` 合并各层来源。
pub fn load() -> Result<AppConfig, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string());
    load_from(&path)
}

/// # Summary
/// 从指定文件加载配置，按优先级由低到高合并。
///
/// # Logic
/// 1. `AppConfig::default()` 作为底层默认值。
/// 2. 可选的配置文件（不存在时跳过）。
/// 3. `CANDELA__` 前缀的环境变量，例如 `CANDELA__VIEW__SYMBOL=TSLA`。
///
/// # Arguments
/// * `path`: 配置文件路径或不含扩展名的文件名。
///
/// # Returns
/// 成功返回 AppConfig，格式或取值非法返回 ConfigError。
pub fn load_from(path: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix("CANDELA")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use candela_core::common::{ChartStyle, Interval, Period};

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_from("/nonexistent/candela-test-config").unwrap();
        assert_eq!(config.view.symbol, "AAPL");
        assert_eq!(config.view.period, Period::Month1);
        assert_eq!(config.surface.output, "chart.svg");
        assert!(config.log.dir.is_none());
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candela.toml");
        std::fs::write(
            &path,
            r##"
[view]
symbol = "BTC-USD"
period = "1y"
interval = "1wk"
style = "OHLC"

[surface]
output = "btc.svg"

[surface.palette]
up = "#00aa00"
"##,
        )
        .unwrap();

        let config = load_from(&path.to_string_lossy()).unwrap();
        assert_eq!(config.view.symbol, "BTC-USD");
        assert_eq!(config.view.period, Period::Year1);
        assert_eq!(config.view.interval, Interval::Week1);
        assert_eq!(config.view.style, ChartStyle::Ohlc);
        assert_eq!(config.surface.output, "btc.svg");
        assert_eq!(config.surface.palette.up, "#00aa00");
        assert_eq!(config.surface.palette.down, "red");
        assert_eq!(config.feed.timeout_secs, 10);
    }
}
