use candela_chart::{Normalized, normalize, render};
use candela_core::chart::entity::ChartFrame;
use candela_core::chart::error::SurfaceError;
use candela_core::chart::port::Surface;
use candela_core::common::ViewRequest;
use candela_core::market::error::MarketError;
use candela_core::market::port::PriceSource;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// 数据源返回空序列时展示的状态文字。
pub const NO_DATA_STATUS: &str = "No data found. Check the symbol and try again.";

/// # Summary
/// View 层的统一错误类型。
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Market error: {0}")]
    Market(#[from] MarketError),
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// # Summary
/// 刷新周期状态。
///
/// # Invariants
/// - `refresh` 持有 `&mut self`，同一时刻至多一个刷新在执行。
/// - Rendering 只存在于 `refresh` 内部，外部调用方在刷新返回后总是看到 Idle。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Rendering,
}

/// # Summary
/// 一次刷新的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    // 已将图表交给展示面
    Rendered {
        title: String,
        bars: usize,
        primitives: usize,
    },
    // 数据源无数据，仅展示状态文字
    Empty,
}

/// # Summary
/// 图表视图，系统的应用服务层门面 (Facade)。
/// 仅依赖 `candela-core` 中的端口，数据源与展示面均由构造函数注入。
///
/// # Invariants
/// - 每次刷新都从头开始：重新抓取、全量清除、重新绘制。
/// - 规整结果为空时绝不调用渲染器，也不向展示面提交图元。
/// - 抓取失败时保留上一次的图表，只更新状态文字。
pub struct ChartView<S> {
    // 历史行情数据源
    source: Arc<dyn PriceSource>,
    // 展示面
    surface: S,
    // 当前刷新状态
    state: ViewState,
    // 当前状态栏文字
    status: Option<String>,
}

impl<S: Surface> ChartView<S> {
    pub fn new(source: Arc<dyn PriceSource>, surface: S) -> Self {
        Self {
            source,
            surface,
            state: ViewState::Idle,
            status: None,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// # Summary
    /// 执行一次完整的刷新周期。
    ///
    /// # Logic
    /// 1. 进入 Rendering 状态。
    /// 2. 抓取、清除、规整、渲染并提交（见 `run_cycle`）。
    /// 3. 失败时把错误转换为用户可见的状态文字。
    /// 4. 无论成败都回到 Idle。
    ///
    /// # Arguments
    /// * `request`: 本次刷新的用户输入。
    ///
    /// # Returns
    /// 成功返回 RefreshOutcome；抓取或展示失败返回 ViewError（状态文字已更新）。
    pub async fn refresh(&mut self, request: ViewRequest) -> Result<RefreshOutcome, ViewError> {
        self.state = ViewState::Rendering;
        let result = self.run_cycle(&request).await;

        if let Err(err) = &result {
            warn!(symbol = %request.symbol, error = %err, "refresh failed");
            let message = match err {
                ViewError::Market(e) => format!("Failed to fetch data for {}: {}", request.symbol, e),
                ViewError::Surface(e) => format!("Failed to display chart: {}", e),
            };
            self.set_status(Some(message));
        }

        self.state = ViewState::Idle;
        result
    }

    async fn run_cycle(&mut self, request: &ViewRequest) -> Result<RefreshOutcome, ViewError> {
        info!(
            symbol = %request.symbol,
            period = %request.period,
            interval = %request.interval,
            style = %request.style,
            "refresh: fetching"
        );
        let series = self
            .source
            .fetch(&request.symbol, request.period, request.interval)
            .await?;

        self.surface.clear()?;

        let indexed = match normalize(series) {
            Normalized::Empty => {
                info!(symbol = %request.symbol, "refresh: no data");
                self.set_status(Some(NO_DATA_STATUS.to_string()));
                return Ok(RefreshOutcome::Empty);
            }
            Normalized::Indexed(indexed) => indexed,
        };

        let rendering = render(&indexed, request.style);
        self.surface.draw(ChartFrame {
            title: &rendering.title,
            primitives: &rendering.primitives,
            labels: indexed.labels(),
        })?;
        self.set_status(None);

        info!(
            title = %rendering.title,
            bars = indexed.len(),
            primitives = rendering.primitives.len(),
            "refresh: rendered"
        );
        Ok(RefreshOutcome::Rendered {
            title: rendering.title,
            bars: indexed.len(),
            primitives: rendering.primitives.len(),
        })
    }

    fn set_status(&mut self, status: Option<String>) {
        self.surface.set_status(status.as_deref());
        self.status = status;
    }
}
