use crate::market::entity::PriceBar;
use serde::{Deserialize, Serialize};

/// # Summary
/// 图表坐标系中的一个点：`x` 为 K 线位置索引，`y` 为价格。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// # Summary
/// 图元色调，由展示面的调色板解析为具体颜色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    // 上涨（收盘 >= 开盘）
    Up,
    // 下跌
    Down,
    // 影线 / 区间线的中性色，与涨跌无关
    Neutral,
    // 折线图的序列色，不区分涨跌
    Series,
}

impl Tone {
    /// # Summary
    /// 按涨跌为单根 K 线着色。
    ///
    /// # Logic
    /// `close >= open` 为 Up，否则为 Down；平盘归为 Up。
    pub fn of(bar: &PriceBar) -> Self {
        if bar.is_up() { Tone::Up } else { Tone::Down }
    }
}

/// # Summary
/// 线宽：细线用于影线与连线，粗线用于实体。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stroke {
    Thin,
    Thick(u32),
}

impl Stroke {
    /// 以像素计的线宽。
    pub fn width(self) -> u32 {
        match self {
            Stroke::Thin => 1,
            Stroke::Thick(width) => width,
        }
    }
}

/// # Summary
/// 渲染输出的最小单元：一条带线宽与色调的线段。
///
/// # Invariants
/// - 不携带任何业务含义，展示面只需按位置与颜色光栅化。
/// - 起止点可以重合（零长度线段）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawPrimitive {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
    pub tone: Tone,
}

impl DrawPrimitive {
    pub fn thin(from: Point, to: Point, tone: Tone) -> Self {
        Self {
            from,
            to,
            stroke: Stroke::Thin,
            tone,
        }
    }

    pub fn thick(from: Point, to: Point, width: u32, tone: Tone) -> Self {
        Self {
            from,
            to,
            stroke: Stroke::Thick(width),
            tone,
        }
    }
}

/// # Summary
/// 一次渲染的结果：标题与有序图元列表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendering {
    pub title: String,
    pub primitives: Vec<DrawPrimitive>,
}

/// X 轴标签的水平锚点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    Left,
    Center,
    Right,
}

/// # Summary
/// X 轴刻度标签，每个位置索引一条。
///
/// # Invariants
/// - `texts[i]` 对应 x = i。
/// - 旋转角度与锚点只是展示元数据，核心逻辑原样透传。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub texts: Vec<String>,
    pub rotation_deg: f64,
    pub anchor: LabelAnchor,
}

impl AxisLabels {
    /// 默认旋转 45 度、右对齐。
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            rotation_deg: 45.0,
            anchor: LabelAnchor::Right,
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// # Summary
/// 交给展示面的一帧完整内容。
#[derive(Debug, Clone, Copy)]
pub struct ChartFrame<'a> {
    pub title: &'a str,
    pub primitives: &'a [DrawPrimitive],
    pub labels: &'a AxisLabels,
}
