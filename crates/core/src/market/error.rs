use thiserror::Error;

/// # Summary
/// 市场数据域错误枚举，处理网络、解析及数据源拒绝等问题。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - “找不到数据”不属于错误：数据源应返回空序列。
#[derive(Error, Debug)]
pub enum MarketError {
    // 网络层错误，包含底层 HTTP 客户端错误信息
    #[error("Network error: {0}")]
    Network(String),
    // 数据解析错误，如 JSON 格式不匹配
    #[error("Parse error: {0}")]
    Parse(String),
    // 数据源拒绝了请求参数（例如区间与粒度组合不受支持）
    #[error("Rejected by data source: {0}")]
    Rejected(String),
    // 未知或未分类的错误
    #[error("Unknown error: {0}")]
    Unknown(String),
}
