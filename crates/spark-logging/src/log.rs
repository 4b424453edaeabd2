use core::fmt;
use std::error::Error as StdError;

use crate::{error::FormatError, format::FormatProvider, level::LogLevel, provider::MessageProvider};

/// 与具体后端无关的通用日志接口。
///
/// # 设计背景（Why）
/// - 组件只依赖此接口写日志，宿主可以在启动阶段决定由哪个后端承接输出；
/// - 级别以 [`LogLevel`] 表达，翻译为后端级别由实现方负责。
///
/// # 逻辑解析（How）
/// - 必需方法只有五个启用查询与五个以级别为参数的写入方法；
/// - `debug`/`info`/`warn`/`error`/`fatal` 系列便捷方法均为默认实现，固定级别后转调通用方法，
///   保证所有路径共享同一套翻译逻辑。
///
/// # 契约说明（What）
/// - `value` 为 `None` 时视为空值，输出空串，不会失败；
/// - `*_lazy` 方法只在级别启用时执行提供者，且至多执行一次；
/// - `*_format*` 方法的格式化失败以 [`FormatError`] 原样返回。
pub trait Log: Send + Sync {
    fn is_debug_enabled(&self) -> bool;

    fn is_info_enabled(&self) -> bool;

    fn is_warn_enabled(&self) -> bool;

    fn is_error_enabled(&self) -> bool;

    fn is_fatal_enabled(&self) -> bool;

    /// 以指定级别写入一个值。
    fn log(&self, level: LogLevel, value: Option<&dyn fmt::Display>);

    /// 以指定级别写入一个值与关联错误。
    fn log_with_error(
        &self,
        level: LogLevel,
        value: Option<&dyn fmt::Display>,
        error: &(dyn StdError + 'static),
    );

    /// 以指定级别写入延迟生成的消息。
    fn log_lazy(&self, level: LogLevel, provider: MessageProvider<'_>);

    /// 以指定级别写入复合格式串。
    fn log_format(
        &self,
        level: LogLevel,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError>;

    /// 以指定级别和格式提供者写入复合格式串。
    fn log_format_with(
        &self,
        level: LogLevel,
        provider: &dyn FormatProvider,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError>;

    fn debug(&self, value: Option<&dyn fmt::Display>) {
        self.log(LogLevel::DEBUG, value);
    }

    fn debug_with_error(&self, value: Option<&dyn fmt::Display>, error: &(dyn StdError + 'static)) {
        self.log_with_error(LogLevel::DEBUG, value, error);
    }

    fn debug_lazy(&self, provider: MessageProvider<'_>) {
        self.log_lazy(LogLevel::DEBUG, provider);
    }

    fn debug_format(&self, format: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.log_format(LogLevel::DEBUG, format, args)
    }

    fn debug_format_with(
        &self,
        provider: &dyn FormatProvider,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.log_format_with(LogLevel::DEBUG, provider, format, args)
    }

    fn info(&self, value: Option<&dyn fmt::Display>) {
        self.log(LogLevel::INFO, value);
    }

    fn info_with_error(&self, value: Option<&dyn fmt::Display>, error: &(dyn StdError + 'static)) {
        self.log_with_error(LogLevel::INFO, value, error);
    }

    fn info_lazy(&self, provider: MessageProvider<'_>) {
        self.log_lazy(LogLevel::INFO, provider);
    }

    fn info_format(&self, format: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.log_format(LogLevel::INFO, format, args)
    }

    fn info_format_with(
        &self,
        provider: &dyn FormatProvider,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.log_format_with(LogLevel::INFO, provider, format, args)
    }

    fn warn(&self, value: Option<&dyn fmt::Display>) {
        self.log(LogLevel::WARN, value);
    }

    fn warn_with_error(&self, value: Option<&dyn fmt::Display>, error: &(dyn StdError + 'static)) {
        self.log_with_error(LogLevel::WARN, value, error);
    }

    fn warn_lazy(&self, provider: MessageProvider<'_>) {
        self.log_lazy(LogLevel::WARN, provider);
    }

    fn warn_format(&self, format: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.log_format(LogLevel::WARN, format, args)
    }

    fn warn_format_with(
        &self,
        provider: &dyn FormatProvider,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.log_format_with(LogLevel::WARN, provider, format, args)
    }

    fn error(&self, value: Option<&dyn fmt::Display>) {
        self.log(LogLevel::ERROR, value);
    }

    fn error_with_error(&self, value: Option<&dyn fmt::Display>, error: &(dyn StdError + 'static)) {
        self.log_with_error(LogLevel::ERROR, value, error);
    }

    fn error_lazy(&self, provider: MessageProvider<'_>) {
        self.log_lazy(LogLevel::ERROR, provider);
    }

    fn error_format(&self, format: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.log_format(LogLevel::ERROR, format, args)
    }

    fn error_format_with(
        &self,
        provider: &dyn FormatProvider,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.log_format_with(LogLevel::ERROR, provider, format, args)
    }

    fn fatal(&self, value: Option<&dyn fmt::Display>) {
        self.log(LogLevel::FATAL, value);
    }

    fn fatal_with_error(&self, value: Option<&dyn fmt::Display>, error: &(dyn StdError + 'static)) {
        self.log_with_error(LogLevel::FATAL, value, error);
    }

    fn fatal_lazy(&self, provider: MessageProvider<'_>) {
        self.log_lazy(LogLevel::FATAL, provider);
    }

    fn fatal_format(&self, format: &str, args: &[&dyn fmt::Display]) -> Result<(), FormatError> {
        self.log_format(LogLevel::FATAL, format, args)
    }

    fn fatal_format_with(
        &self,
        provider: &dyn FormatProvider,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        self.log_format_with(LogLevel::FATAL, provider, format, args)
    }
}
