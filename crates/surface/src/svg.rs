use candela_core::chart::entity::{AxisLabels, ChartFrame, DrawPrimitive, Tone};
use candela_core::chart::error::SurfaceError;
use candela_core::chart::port::Surface;
use candela_core::config::{PaletteConfig, SurfaceConfig};
use plotters::prelude::*;
use std::io::ErrorKind;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// X 轴两端的留白（以 K 线位置计）。
const X_PADDING: f64 = 0.5;
/// Y 轴上下留白占价格跨度的比例。
const Y_PADDING_RATIO: f64 = 0.05;

/// # Summary
/// X 轴标签的字体变换。
///
/// # Logic
/// plotters 只支持 90 度整数倍的文字旋转，且刻度标签的对齐由网格自行决定：
/// 任何非零旋转角都近似为竖排 (`Rotate90`)，锚点元数据在 SVG 输出中不生效。
fn label_transform(labels: &AxisLabels) -> FontTransform {
    if labels.rotation_deg.abs() > f64::EPSILON {
        FontTransform::Rotate90
    } else {
        FontTransform::None
    }
}

/// # Summary
/// 色调到具体颜色的映射。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub up: RGBColor,
    pub down: RGBColor,
    pub neutral: RGBColor,
    pub series: RGBColor,
}

impl Palette {
    /// # Summary
    /// 由配置中的颜色文本构造调色板。
    ///
    /// # Returns
    /// 任一颜色无法识别时返回 SurfaceError::Render。
    pub fn from_config(config: &PaletteConfig) -> Result<Self, SurfaceError> {
        Ok(Self {
            up: parse_color(&config.up)?,
            down: parse_color(&config.down)?,
            neutral: parse_color(&config.neutral)?,
            series: parse_color(&config.series)?,
        })
    }

    pub fn color(&self, tone: Tone) -> RGBColor {
        match tone {
            Tone::Up => self.up,
            Tone::Down => self.down,
            Tone::Neutral => self.neutral,
            Tone::Series => self.series,
        }
    }
}

/// # Summary
/// 解析颜色名或 `#rrggbb`。
///
/// # Logic
/// 1. 以 `#` 开头时按 6 位十六进制解析。
/// 2. 否则在常用颜色名中查找（与 matplotlib 的基础颜色一致）。
pub fn parse_color(text: &str) -> Result<RGBColor, SurfaceError> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        let channel = |range: Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        return match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
            (6, Some(r), Some(g), Some(b)) => Ok(RGBColor(r, g, b)),
            _ => Err(SurfaceError::Render(format!("Invalid color: {}", text))),
        };
    }

    match text.to_lowercase().as_str() {
        "black" => Ok(RGBColor(0, 0, 0)),
        "white" => Ok(RGBColor(255, 255, 255)),
        "red" => Ok(RGBColor(255, 0, 0)),
        "green" => Ok(RGBColor(0, 128, 0)),
        "blue" => Ok(RGBColor(0, 0, 255)),
        "gray" | "grey" => Ok(RGBColor(128, 128, 128)),
        "orange" => Ok(RGBColor(255, 165, 0)),
        _ => Err(SurfaceError::Render(format!("Unknown color: {}", text))),
    }
}

/// # Summary
/// 根据全部图元端点自动计算坐标轴范围。
///
/// # Logic
/// 1. X 轴取端点最小/最大值，两端各留 0.5；单根 K 线同样处理。
/// 2. Y 轴取端点最小/最大值，上下各留跨度的 5%；跨度为 0 时上下各留 1。
/// 3. 无图元时返回 0..1 的默认范围。
pub fn axis_ranges(primitives: &[DrawPrimitive]) -> (Range<f64>, Range<f64>) {
    let points = primitives.iter().flat_map(|p| [p.from, p.to]);
    let bounds = points.fold(None, |acc: Option<(f64, f64, f64, f64)>, pt| {
        Some(match acc {
            None => (pt.x, pt.x, pt.y, pt.y),
            Some((x0, x1, y0, y1)) => (x0.min(pt.x), x1.max(pt.x), y0.min(pt.y), y1.max(pt.y)),
        })
    });

    let Some((x_min, x_max, y_min, y_max)) = bounds else {
        return (0.0..1.0, 0.0..1.0);
    };

    let y_pad = if y_max > y_min {
        (y_max - y_min) * Y_PADDING_RATIO
    } else {
        1.0
    };
    (
        (x_min - X_PADDING)..(x_max + X_PADDING),
        (y_min - y_pad)..(y_max + y_pad),
    )
}

/// # Summary
/// 取坐标 `x` 处的刻度文本；非整数位置或越界时为空。
pub fn label_at(labels: &AxisLabels, x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    labels
        .texts
        .iter()
        .zip(0u32..)
        .find(|(_, i)| f64::from(*i) == nearest)
        .map(|(text, _)| text.clone())
        .unwrap_or_default()
}

fn render_err<E: std::fmt::Display>(err: E) -> SurfaceError {
    SurfaceError::Render(err.to_string())
}

/// # Summary
/// 将图表写入 SVG 文件的展示面。
///
/// # Invariants
/// - `clear` 之后磁盘上不残留上一张图。
/// - 每次 `draw` 都完整重写文件。
pub struct SvgSurface {
    // 输出文件路径
    path: PathBuf,
    // 画布尺寸 (宽, 高)
    size: (u32, u32),
    // 调色板
    palette: Palette,
    // 最近一次绘制的 SVG 文本
    document: Option<String>,
    // 当前状态栏文字
    status: Option<String>,
}

impl SvgSurface {
    /// # Summary
    /// 按配置创建 SVG 展示面。
    ///
    /// # Returns
    /// 调色板无法解析时返回 SurfaceError。
    pub fn new(config: &SurfaceConfig) -> Result<Self, SurfaceError> {
        Ok(Self {
            path: PathBuf::from(&config.output),
            size: (config.width, config.height),
            palette: Palette::from_config(&config.palette)?,
            document: None,
            status: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// # Summary
    /// 把一帧图表绘制为 SVG 文本。
    ///
    /// # Logic
    /// 1. 按图元端点自动缩放坐标轴。
    /// 2. 绘制标题、网格与 X 轴日期标签（按元数据旋转）。
    /// 3. 非零长度图元绘制为线段，零长度图元绘制为实心点。
    pub fn render_svg(&self, frame: ChartFrame<'_>) -> Result<String, SurfaceError> {
        let (x_range, y_range) = axis_ranges(frame.primitives);
        let labels = frame.labels;
        let label_count = labels.len().max(1);
        let label_font = ("sans-serif", 11)
            .into_font()
            .transform(label_transform(labels));
        let formatter = |x: &f64| label_at(labels, *x);

        let (segments, dots): (Vec<&DrawPrimitive>, Vec<&DrawPrimitive>) =
            frame.primitives.iter().partition(|p| p.from != p.to);

        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(frame.title, ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(80)
                .y_label_area_size(60)
                .build_cartesian_2d(x_range, y_range)
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(label_count)
                .x_label_formatter(&formatter)
                .x_label_style(label_font)
                .draw()
                .map_err(render_err)?;

            let palette = self.palette;
            chart
                .draw_series(segments.iter().map(|p| {
                    PathElement::new(
                        vec![(p.from.x, p.from.y), (p.to.x, p.to.y)],
                        palette.color(p.tone).stroke_width(p.stroke.width()),
                    )
                }))
                .map_err(render_err)?;
            chart
                .draw_series(dots.iter().map(|p| {
                    Circle::new(
                        (p.from.x, p.from.y),
                        p.stroke.width().max(2),
                        palette.color(p.tone).filled(),
                    )
                }))
                .map_err(render_err)?;

            root.present().map_err(render_err)?;
        }
        Ok(buffer)
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.document = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "svg: removed previous chart");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SurfaceError::Io(e.to_string())),
        }
    }

    fn draw(&mut self, frame: ChartFrame<'_>) -> Result<(), SurfaceError> {
        let svg = self.render_svg(frame)?;
        std::fs::write(&self.path, &svg).map_err(|e| SurfaceError::Io(e.to_string()))?;
        info!(
            path = %self.path.display(),
            primitives = frame.primitives.len(),
            "svg: chart written"
        );
        self.document = Some(svg);
        Ok(())
    }

    fn set_status(&mut self, status: Option<&str>) {
        if let Some(text) = status {
            warn!(status = text, "svg: status");
        }
        self.status = status.map(String::from);
    }
}
