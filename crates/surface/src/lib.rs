//! # Candela Surface
//!
//! 展示面实现：把图元光栅化为 SVG 文件。

pub mod svg;
