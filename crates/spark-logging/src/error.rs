//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义日志外观层可在本地识别的全部错误：构造参数校验、级别名称解析与复合格式化失败；
//! - 其它失败（后端 I/O、导出异常等）不在此处翻译，由后端自行处理或原样交还调用方。
//!
//! ## 设计要求（What）
//! - 全部错误派生 [`thiserror::Error`]，可直接交给 `anyhow`/`eyre` 等上层框架；
//! - [`FormatError`] 携带出错位置或参数索引，便于定位格式串问题。

use thiserror::Error;

/// 日志外观层的错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：适配器唯一的本地校验发生在构造阶段，其余路径均为纯转发；
///   该枚举把这些少量失败路径归拢为统一类型，供工厂与宿主入口复用。
/// - **契约 (What)**：
///   - `InvalidArgument`：构造参数非法，`argument` 为参数名；
///   - `UnknownLevel`：级别名称无法识别，携带原始文本；
///   - `Format`：复合格式化失败，包装 [`FormatError`]。
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// 构造参数校验失败。
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },

    /// 无法识别的日志级别名称。
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),

    /// 复合格式串渲染失败。
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl LoggingError {
    pub(crate) fn empty_name() -> Self {
        LoggingError::InvalidArgument {
            argument: "name",
            reason: "logger name must not be empty",
        }
    }
}

/// 复合格式串（`{index[,alignment][:spec]}`）渲染阶段的错误。
///
/// - `position` 均为格式串中的字节偏移；
/// - `MissingArgument` 表示占位符引用的索引超出了实参数量。
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("placeholder opened at byte {position} is never closed")]
    UnclosedPlaceholder { position: usize },

    #[error("unexpected `}}` at byte {position}")]
    UnexpectedClosingBrace { position: usize },

    #[error("malformed placeholder at byte {position}")]
    InvalidPlaceholder { position: usize },

    #[error("placeholder references argument {index} but only {provided} were supplied")]
    MissingArgument { index: usize, provided: usize },

    /// 格式提供者在写入参数时返回了 [`core::fmt::Error`]。
    #[error("format provider failed to render an argument")]
    Provider,
}

impl From<core::fmt::Error> for FormatError {
    fn from(_: core::fmt::Error) -> Self {
        FormatError::Provider
    }
}
