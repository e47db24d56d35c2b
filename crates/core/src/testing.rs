//! 测试替身：固定返回的数据源与记录调用的展示面。

use crate::chart::entity::{ChartFrame, DrawPrimitive};
use crate::chart::error::SurfaceError;
use crate::chart::port::Surface;
use crate::common::{Interval, Period};
use crate::market::entity::{PriceBar, PriceSeries};
use crate::market::error::MarketError;
use crate::market::port::PriceSource;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;

/// # Summary
/// 构造一根日线，时间为 2024-01-01 起第 `day` 天。
pub fn daily_bar(day: i64, open: f64, high: f64, low: f64, close: f64) -> PriceBar {
    let base: DateTime<Utc> = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    PriceBar {
        time: base + Duration::days(day),
        open,
        high,
        low,
        close,
    }
}

/// # Summary
/// 按预设脚本依次返回结果的数据源，并记录每次调用参数。
///
/// # Logic
/// 第 n 次调用返回第 n 个预设结果；脚本用尽后重复最后一个。
pub struct StaticSource {
    // Err 中的文本会包装为 MarketError::Network
    responses: Vec<Result<PriceSeries, String>>,
    calls: Mutex<Vec<(String, Period, Interval)>>,
}

impl StaticSource {
    pub fn with_bars(bars: Vec<PriceBar>) -> Self {
        Self {
            responses: vec![Ok(PriceSeries::new(bars))],
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with_bars(Vec::new())
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            responses: vec![Err(message.into())],
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 追加下一次调用的返回结果。
    pub fn then_bars(mut self, bars: Vec<PriceBar>) -> Self {
        self.responses.push(Ok(PriceSeries::new(bars)));
        self
    }

    /// 追加下一次调用的失败结果。
    pub fn then_failing(mut self, message: impl Into<String>) -> Self {
        self.responses.push(Err(message.into()));
        self
    }

    /// 已收到的抓取请求 (symbol, period, interval)。
    pub fn calls(&self) -> Vec<(String, Period, Interval)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl PriceSource for StaticSource {
    async fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<PriceSeries, MarketError> {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        let index = calls.len().min(self.responses.len().saturating_sub(1));
        calls.push((symbol.to_string(), period, interval));
        match self.responses.get(index) {
            Some(response) => response.clone().map_err(MarketError::Network),
            None => Ok(PriceSeries::default()),
        }
    }
}

/// 展示面收到的一次调用。
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Clear,
    Draw {
        title: String,
        primitives: Vec<DrawPrimitive>,
        labels: Vec<String>,
    },
    Status(Option<String>),
}

/// # Summary
/// 按顺序记录全部调用的展示面。
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    // 为 true 时 draw 返回 SurfaceError::Render
    fail_draw: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次 draw 都失败的展示面，clear 与 set_status 照常记录。
    pub fn failing_draw() -> Self {
        Self {
            events: Vec::new(),
            fail_draw: true,
        }
    }

    /// 所有 draw 调用，按发生顺序。
    pub fn draws(&self) -> Vec<&SurfaceEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Draw { .. }))
            .collect()
    }

    /// 最近一次设置的状态文字。
    pub fn last_status(&self) -> Option<Option<String>> {
        self.events.iter().rev().find_map(|e| match e {
            SurfaceEvent::Status(s) => Some(s.clone()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.events.push(SurfaceEvent::Clear);
        Ok(())
    }

    fn draw(&mut self, frame: ChartFrame<'_>) -> Result<(), SurfaceError> {
        if self.fail_draw {
            return Err(SurfaceError::Render("disk full".to_string()));
        }
        self.events.push(SurfaceEvent::Draw {
            title: frame.title.to_string(),
            primitives: frame.primitives.to_vec(),
            labels: frame.labels.texts.clone(),
        });
        Ok(())
    }

    fn set_status(&mut self, status: Option<&str>) {
        self.events.push(SurfaceEvent::Status(status.map(String::from)));
    }
}
