use thiserror::Error;

/// # Summary
/// 展示面错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum SurfaceError {
    // 绘制后端失败
    #[error("Render error: {0}")]
    Render(String),
    // 输出介质读写失败
    #[error("I/O error: {0}")]
    Io(String),
}
