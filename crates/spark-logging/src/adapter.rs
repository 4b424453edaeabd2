//! 通用日志接口到后端日志器的适配器。
//!
//! # 教案式说明
//! - **意图（Why）**：组件面向 [`Log`] 编程，宿主决定后端；两者之间只差级别与调用形态的翻译，
//!   本模块即承担这一翻译。
//! - **逻辑（How）**：
//!   1. [`backend_level`] 把 [`LogLevel`] 全量映射到 [`BackendLevel`]，未识别的编码落到 `Off`；
//!   2. [`to_generator`] 把 [`MessageProvider`] 包装为后端的 [`MessageGenerator`]，在求值时才转为字符串；
//!   3. [`LogAdapter`] 对每个 [`Log`] 方法做一行转发，空值统一渲染为空串。
//! - **契约（What）**：适配器构造后不可变，不持锁、不缓冲、不异步派发，所有调用在调用方线程同步完成；
//!   线程安全完全由后端保证。

use core::fmt;
use std::error::Error as StdError;

use crate::{
    backend::{BackendLevel, BackendLogger, MessageGenerator},
    error::{FormatError, LoggingError},
    format::FormatProvider,
    level::LogLevel,
    log::Log,
    provider::{MessageProvider, OrEmpty},
};

/// 通用级别到后端级别的全量映射。
///
/// | 通用级别 | 后端级别 |
/// |---|---|
/// | `FATAL` | `Fatal` |
/// | `ERROR` | `Error` |
/// | `WARN` | `Warn` |
/// | `INFO` | `Info` |
/// | `DEBUG` | `Debug` |
/// | `ALL` | `Trace` |
/// | 其它（含 `OFF` 与未识别编码） | `Off` |
pub const fn backend_level(level: LogLevel) -> BackendLevel {
    match level {
        LogLevel::FATAL => BackendLevel::Fatal,
        LogLevel::ERROR => BackendLevel::Error,
        LogLevel::WARN => BackendLevel::Warn,
        LogLevel::INFO => BackendLevel::Info,
        LogLevel::DEBUG => BackendLevel::Debug,
        LogLevel::ALL => BackendLevel::Trace,
        _ => BackendLevel::Off,
    }
}

impl From<LogLevel> for BackendLevel {
    fn from(level: LogLevel) -> Self {
        backend_level(level)
    }
}

/// 把通用消息提供者转换为后端期望的生成器。
///
/// 提供者在生成器被调用时才执行，空值得到空串。
pub fn to_generator(provider: MessageProvider<'_>) -> MessageGenerator<'_> {
    Box::new(move || provider.render())
}

/// 把 [`Log`] 调用翻译到单个后端日志器的适配器。
///
/// # 契约说明（What）
/// - 持有一个后端与一个展示名称，构造后均不可变；
/// - 名称为空时构造失败，且失败发生在任何后端交互之前；
/// - 构造成功后立即执行一次空串的延迟调试写入，作为后端链路的初始化探针，
///   仅当后端启用 Debug 时才真正产生输出。
#[derive(Debug)]
pub struct LogAdapter<B> {
    backend: B,
    name: String,
}

impl<B: BackendLogger> LogAdapter<B> {
    pub fn new(backend: B, name: impl Into<String>) -> Result<Self, LoggingError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoggingError::empty_name());
        }

        let adapter = Self { backend, name };
        adapter.debug_lazy(MessageProvider::new(|| ""));
        Ok(adapter)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: BackendLogger> Log for LogAdapter<B> {
    fn is_debug_enabled(&self) -> bool {
        self.backend.is_debug_enabled()
    }

    fn is_info_enabled(&self) -> bool {
        self.backend.is_info_enabled()
    }

    fn is_warn_enabled(&self) -> bool {
        self.backend.is_warn_enabled()
    }

    fn is_error_enabled(&self) -> bool {
        self.backend.is_error_enabled()
    }

    fn is_fatal_enabled(&self) -> bool {
        self.backend.is_fatal_enabled()
    }

    fn log(&self, level: LogLevel, value: Option<&dyn fmt::Display>) {
        self.backend.log(backend_level(level), &OrEmpty(value));
    }

    fn log_with_error(
        &self,
        level: LogLevel,
        value: Option<&dyn fmt::Display>,
        error: &(dyn StdError + 'static),
    ) {
        let message = OrEmpty(value).to_string();
        self.backend
            .log_with_error(backend_level(level), &message, error);
    }

    fn log_lazy(&self, level: LogLevel, provider: MessageProvider<'_>) {
        let level = backend_level(level);
        // 后端只收到已通过启用判定的生成器，提供者的惰性不依赖后端实现。
        if self.backend.is_enabled(level) {
            self.backend.log_lazy(level, to_generator(provider));
        }
    }

    fn log_format(
        &self,
        level: LogLevel,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.backend
            .log_format(backend_level(level), None, format, args)
    }

    fn log_format_with(
        &self,
        level: LogLevel,
        provider: &dyn FormatProvider,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.backend
            .log_format(backend_level(level), Some(provider), format, args)
    }
}
