use candela_core::chart::entity::Tone;
use candela_core::common::{ChartStyle, Interval, Period, ViewRequest};
use candela_core::testing::{RecordingSurface, StaticSource, SurfaceEvent, daily_bar};
use candela_view::{ChartView, NO_DATA_STATUS, RefreshOutcome, ViewError, ViewState};
use std::sync::Arc;

fn request(style: ChartStyle) -> ViewRequest {
    ViewRequest::new("AAPL", Period::Month1, Interval::Day1, style)
}

/// # Summary
/// 空结果：展示“无数据”状态，先清除旧图元，且不提交任何新图元。
#[tokio::test]
async fn test_empty_series_sets_status_without_drawing() {
    let source = Arc::new(StaticSource::empty());
    let mut view = ChartView::new(source.clone(), RecordingSurface::new());

    let outcome = view.refresh(request(ChartStyle::Line)).await.unwrap();

    assert_eq!(outcome, RefreshOutcome::Empty);
    assert_eq!(view.status(), Some(NO_DATA_STATUS));
    assert_eq!(view.state(), ViewState::Idle);
    assert_eq!(
        view.surface().events,
        vec![
            SurfaceEvent::Clear,
            SurfaceEvent::Status(Some(NO_DATA_STATUS.to_string())),
        ]
    );
    assert!(view.surface().draws().is_empty());
    assert_eq!(
        source.calls(),
        vec![("AAPL".to_string(), Period::Month1, Interval::Day1)]
    );
}

/// # Summary
/// 正常刷新：清除 -> 绘制 -> 清除状态文字，顺序固定。
#[tokio::test]
async fn test_rendered_refresh_clears_then_draws() {
    let source = Arc::new(StaticSource::with_bars(vec![
        daily_bar(0, 10.0, 12.0, 9.0, 11.0),
        daily_bar(1, 11.0, 11.5, 9.5, 10.0),
    ]));
    let mut view = ChartView::new(source, RecordingSurface::new());

    let outcome = view.refresh(request(ChartStyle::Candlestick)).await.unwrap();

    assert_eq!(
        outcome,
        RefreshOutcome::Rendered {
            title: "Candlestick Chart".to_string(),
            bars: 2,
            primitives: 6,
        }
    );
    assert_eq!(view.status(), None);

    let events = &view.surface().events;
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], SurfaceEvent::Clear);
    match &events[1] {
        SurfaceEvent::Draw {
            title,
            primitives,
            labels,
        } => {
            assert_eq!(title, "Candlestick Chart");
            assert_eq!(primitives.len(), 6);
            assert_eq!(primitives[4].tone, Tone::Down);
            assert_eq!(labels, &vec!["2024-01-01".to_string(), "2024-01-02".to_string()]);
        }
        other => panic!("expected a draw, got {:?}", other),
    }
    assert_eq!(events[2], SurfaceEvent::Status(None));
}

/// # Summary
/// 抓取失败：错误向上传递，状态文字可见，旧图表不被清除，视图回到 Idle。
#[tokio::test]
async fn test_fetch_failure_surfaces_as_status() {
    let source = Arc::new(StaticSource::failing("connection reset"));
    let mut view = ChartView::new(source, RecordingSurface::new());

    let result = view.refresh(request(ChartStyle::Ohlc)).await;

    assert!(matches!(result, Err(ViewError::Market(_))));
    assert_eq!(view.state(), ViewState::Idle);
    let status = view.status().unwrap();
    assert!(status.starts_with("Failed to fetch data for AAPL"));
    assert!(status.contains("connection reset"));
    assert!(!view.surface().events.contains(&SurfaceEvent::Clear));
}

/// # Summary
/// 空结果之后的成功刷新会清除“无数据”状态，且每次刷新都先全量清除。
#[tokio::test]
async fn test_successful_refresh_clears_previous_status() -> anyhow::Result<()> {
    let source = StaticSource::empty().then_bars(vec![daily_bar(0, 10.0, 10.0, 10.0, 10.0)]);
    let mut view = ChartView::new(Arc::new(source), RecordingSurface::new());

    assert_eq!(view.refresh(request(ChartStyle::Ohlc)).await?, RefreshOutcome::Empty);
    assert_eq!(view.status(), Some(NO_DATA_STATUS));

    let outcome = view.refresh(request(ChartStyle::Ohlc)).await?;
    assert!(matches!(outcome, RefreshOutcome::Rendered { bars: 1, primitives: 2, .. }));
    assert_eq!(view.status(), None);
    assert_eq!(view.surface().last_status(), Some(None));

    let clears = view
        .surface()
        .events
        .iter()
        .filter(|e| **e == SurfaceEvent::Clear)
        .count();
    assert_eq!(clears, 2);
    Ok(())
}

/// # Summary
/// 成功绘制后再次抓取失败：已展示的图表保持不变，不追加 clear。
#[tokio::test]
async fn test_failure_after_render_keeps_chart() {
    let source = StaticSource::with_bars(vec![daily_bar(0, 10.0, 12.0, 9.0, 11.0)])
        .then_failing("HTTP 500");
    let mut view = ChartView::new(Arc::new(source), RecordingSurface::new());

    view.refresh(request(ChartStyle::Line)).await.unwrap();
    let events_after_render = view.surface().events.len();

    assert!(view.refresh(request(ChartStyle::Line)).await.is_err());

    let new_events = &view.surface().events[events_after_render..];
    assert_eq!(new_events.len(), 1);
    assert!(matches!(&new_events[0], SurfaceEvent::Status(Some(s)) if s.contains("HTTP 500")));
    assert_eq!(view.surface().draws().len(), 1);
}

/// # Summary
/// 展示面绘制失败：错误向上传递，状态文字说明展示失败，视图回到 Idle 并可继续刷新。
#[tokio::test]
async fn test_draw_failure_sets_display_status() {
    let source = Arc::new(StaticSource::with_bars(vec![daily_bar(0, 10.0, 12.0, 9.0, 11.0)]));
    let mut view = ChartView::new(source.clone(), RecordingSurface::failing_draw());

    let result = view.refresh(request(ChartStyle::Candlestick)).await;

    assert!(matches!(result, Err(ViewError::Surface(_))));
    assert_eq!(view.state(), ViewState::Idle);
    assert_eq!(
        view.status(),
        Some("Failed to display chart: Render error: disk full")
    );
    assert!(view.surface().draws().is_empty());
    assert_eq!(
        view.surface().events,
        vec![
            SurfaceEvent::Clear,
            SurfaceEvent::Status(Some(
                "Failed to display chart: Render error: disk full".to_string()
            )),
        ]
    );

    // 失败不影响后续刷新
    assert!(view.refresh(request(ChartStyle::Line)).await.is_err());
    assert_eq!(source.calls().len(), 2);
}
