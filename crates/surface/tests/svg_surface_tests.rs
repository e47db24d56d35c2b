use candela_chart::{normalize, render};
use candela_core::chart::entity::ChartFrame;
use candela_core::chart::port::Surface;
use candela_core::common::ChartStyle;
use candela_core::config::SurfaceConfig;
use candela_core::market::entity::PriceSeries;
use candela_core::testing::daily_bar;
use candela_surface::svg::SvgSurface;

fn surface_in(dir: &tempfile::TempDir) -> anyhow::Result<SvgSurface> {
    let config = SurfaceConfig {
        output: dir.path().join("chart.svg").to_string_lossy().into_owned(),
        ..SurfaceConfig::default()
    };
    Ok(SvgSurface::new(&config)?)
}

/// # Summary
/// 绘制蜡烛图后文件存在，包含标题与涨跌配色。
#[test]
fn test_draw_writes_svg_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut surface = surface_in(&dir)?;

    let series = normalize(PriceSeries::new(vec![
        daily_bar(0, 10.0, 12.0, 9.0, 11.0),
        daily_bar(1, 11.0, 11.5, 9.5, 10.0),
        daily_bar(2, 10.0, 13.0, 9.8, 12.5),
    ]))
    .into_indexed()
    .ok_or_else(|| anyhow::anyhow!("series should not be empty"))?;
    let rendering = render(&series, ChartStyle::Candlestick);

    surface.clear()?;
    surface.draw(ChartFrame {
        title: &rendering.title,
        primitives: &rendering.primitives,
        labels: series.labels(),
    })?;

    let written = std::fs::read_to_string(surface.path())?;
    assert!(written.contains("<svg"));
    assert!(written.contains("Candlestick Chart"));
    let lower = written.to_lowercase();
    assert!(lower.contains("#008000"), "up color missing");
    assert!(lower.contains("#ff0000"), "down color missing");
    assert_eq!(surface.document(), Some(written.as_str()));
    Ok(())
}

/// # Summary
/// 单根 K 线的折线图（零长度线段）仍能正常输出。
#[test]
fn test_single_point_line_chart_renders() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut surface = surface_in(&dir)?;

    let series = normalize(PriceSeries::new(vec![daily_bar(0, 10.0, 10.0, 10.0, 10.0)]))
        .into_indexed()
        .ok_or_else(|| anyhow::anyhow!("series should not be empty"))?;
    let rendering = render(&series, ChartStyle::Line);

    surface.draw(ChartFrame {
        title: &rendering.title,
        primitives: &rendering.primitives,
        labels: series.labels(),
    })?;
    assert!(std::fs::read_to_string(surface.path())?.contains("Line Chart"));
    Ok(())
}

/// # Summary
/// clear 删除上一张图，重复 clear 不报错。
#[test]
fn test_clear_removes_previous_chart() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut surface = surface_in(&dir)?;
    std::fs::write(surface.path(), "<svg/>")?;

    surface.clear()?;
    assert!(!surface.path().exists());
    assert!(surface.document().is_none());

    surface.clear()?;
    Ok(())
}

#[test]
fn test_status_is_tracked() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut surface = surface_in(&dir)?;

    surface.set_status(Some("No data found. Check the symbol and try again."));
    assert_eq!(
        surface.status(),
        Some("No data found. Check the symbol and try again.")
    );
    surface.set_status(None);
    assert_eq!(surface.status(), None);
    Ok(())
}

#[test]
fn test_unknown_palette_color_is_rejected() {
    let mut config = SurfaceConfig::default();
    config.palette.up = "not-a-color".to_string();
    assert!(SvgSurface::new(&config).is_err());
}
