//! # bwt-rust
//!
//! 前缀倍增（prefix doubling）后缀数组构建与 Burrows-Wheeler 变换的 Rust 实现。
//!
//! 本 crate 提供了 BWT 正反变换的算法核心，包括：
//!
//! - **后缀数组构建**：O(n log n) 前缀倍增，每轮用 8 位基数排序保持线性
//! - **BWT 构建**：由后缀数组导出变换串（含哨兵，长度 n+1）
//! - **秩表**：C 表（严格更小字符的累计数）与 O 表（前缀内出现次数）
//! - **BWT 反变换**：基于 C 表 / O 表的 LF 映射回走，精确还原原文本
//!
//! 输入是任意字节串，唯一的限制是不得包含 0 字节——0 保留给哨兵
//! （概念上补在文本末尾、小于一切真实字符的终止符）。
//!
//! ## 快速示例
//!
//! ```rust
//! use bwt_rust::index::{bwt, sa};
//!
//! let text = b"mississippi";
//!
//! let sa_arr = sa::build_sa(text);
//! assert_eq!(sa_arr[0] as usize, text.len()); // 哨兵后缀最小
//!
//! let y = bwt::build_bwt(text);
//! assert_eq!(y, b"ipssm\0pissii");
//! assert_eq!(bwt::invert_bwt(&y), text);
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 后缀数组、BWT、秩表与反变换

pub mod index;
