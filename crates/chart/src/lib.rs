//! # Candela Chart
//!
//! 渲染流水线：序列规整 (`normalize`) 与按样式生成图元 (`render`)。

pub mod candlestick;
pub mod line;
pub mod normalize;
pub mod ohlc;
pub mod render;

pub use normalize::{IndexedSeries, Normalized, normalize};
pub use render::{StyleRenderer, render, renderer_for};
