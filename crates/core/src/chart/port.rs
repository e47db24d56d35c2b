use crate::chart::entity::ChartFrame;
use crate::chart::error::SurfaceError;

/// # Summary
/// 展示面接口（画布 / 容器）。
///
/// # Invariants
/// - 每次刷新先 `clear` 再 `draw`，全量替换，不做增量合并。
/// - 坐标轴自动缩放由实现者负责。
pub trait Surface: Send {
    /// # Summary
    /// 清除当前展示的全部图元。
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// # Summary
    /// 展示一帧完整图表。
    ///
    /// # Arguments
    /// * `frame`: 标题、图元与 X 轴标签。
    ///
    /// # Returns
    /// 成功返回 Ok，绘制或输出失败返回 SurfaceError。
    fn draw(&mut self, frame: ChartFrame<'_>) -> Result<(), SurfaceError>;

    /// # Summary
    /// 设置或清除状态栏文字。
    fn set_status(&mut self, status: Option<&str>);
}
