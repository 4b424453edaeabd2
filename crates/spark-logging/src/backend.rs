//! 后端日志器契约。
//!
//! # 教案式说明
//! - **意图（Why）**：适配器只依赖这一组能力，而不绑定任何具体日志库；具体后端（`tracing`、
//!   测试用的记录器等）实现 [`BackendLogger`] 即可接入，也便于在测试中替换为探针。
//! - **逻辑（How）**：后端暴露自身的级别枚举 [`BackendLevel`]、启用判定以及四种写入形态：
//!   字面值、值 + 错误、延迟生成器、复合格式串。
//! - **契约（What）**：
//!   - 实现必须满足 `Send + Sync`，同一实例可被多个线程并发调用；
//!   - `BackendLevel::Off` 永远视为未启用；
//!   - 写入失败之外的错误（例如格式串错误）原样返回给调用方，不在后端内部吞掉。

use core::fmt;
use std::{error::Error as StdError, sync::Arc};

use crate::{error::FormatError, format::FormatProvider};

/// 后端自有的日志级别，按严重程度升序排列。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BackendLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl BackendLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            BackendLevel::Trace => "TRACE",
            BackendLevel::Debug => "DEBUG",
            BackendLevel::Info => "INFO",
            BackendLevel::Warn => "WARN",
            BackendLevel::Error => "ERROR",
            BackendLevel::Fatal => "FATAL",
            BackendLevel::Off => "OFF",
        }
    }
}

impl fmt::Display for BackendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 后端期望的延迟消息回调形态：执行一次，产出最终字符串。
pub type MessageGenerator<'a> = Box<dyn FnOnce() -> String + 'a>;

/// 被适配的后端日志器。
///
/// # 契约说明（What）
/// - `is_enabled` 必须反映调用时刻的实时配置，不得缓存；
/// - `log_lazy` 只在级别启用时执行 `generator`；
/// - `log_format` 在级别未启用时可以跳过渲染并返回 `Ok(())`。
pub trait BackendLogger: Send + Sync {
    /// 查询某级别当前是否启用。
    fn is_enabled(&self, level: BackendLevel) -> bool;

    /// 以字面值写入一条日志。
    fn log(&self, level: BackendLevel, value: &dyn fmt::Display);

    /// 写入一条附带错误对象的日志。
    fn log_with_error(&self, level: BackendLevel, message: &str, error: &(dyn StdError + 'static));

    /// 写入一条延迟生成的日志。
    fn log_lazy(&self, level: BackendLevel, generator: MessageGenerator<'_>);

    /// 以复合格式串写入日志，`provider` 为 `None` 时使用区域性无关的默认渲染。
    fn log_format(
        &self,
        level: BackendLevel,
        provider: Option<&dyn FormatProvider>,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError>;

    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Trace)
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Info)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Warn)
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Error)
    }

    fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Fatal)
    }
}

macro_rules! forward_backend {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<T: BackendLogger + ?Sized> BackendLogger for $ptr {
            fn is_enabled(&self, level: BackendLevel) -> bool {
                (**self).is_enabled(level)
            }

            fn log(&self, level: BackendLevel, value: &dyn fmt::Display) {
                (**self).log(level, value)
            }

            fn log_with_error(
                &self,
                level: BackendLevel,
                message: &str,
                error: &(dyn StdError + 'static),
            ) {
                (**self).log_with_error(level, message, error)
            }

            fn log_lazy(&self, level: BackendLevel, generator: MessageGenerator<'_>) {
                (**self).log_lazy(level, generator)
            }

            fn log_format(
                &self,
                level: BackendLevel,
                provider: Option<&dyn FormatProvider>,
                format: &str,
                args: &[&dyn fmt::Display],
            ) -> Result<(), FormatError> {
                (**self).log_format(level, provider, format, args)
            }

            fn is_trace_enabled(&self) -> bool {
                (**self).is_trace_enabled()
            }

            fn is_debug_enabled(&self) -> bool {
                (**self).is_debug_enabled()
            }

            fn is_info_enabled(&self) -> bool {
                (**self).is_info_enabled()
            }

            fn is_warn_enabled(&self) -> bool {
                (**self).is_warn_enabled()
            }

            fn is_error_enabled(&self) -> bool {
                (**self).is_error_enabled()
            }

            fn is_fatal_enabled(&self) -> bool {
                (**self).is_fatal_enabled()
            }
        }
    )+};
}

forward_backend!(&T, Arc<T>, Box<T>);

/// 全部级别关闭的空后端，宿主未配置日志工厂时的默认值。
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBackend;

impl BackendLogger for NullBackend {
    fn is_enabled(&self, _level: BackendLevel) -> bool {
        false
    }

    fn log(&self, _level: BackendLevel, _value: &dyn fmt::Display) {}

    fn log_with_error(
        &self,
        _level: BackendLevel,
        _message: &str,
        _error: &(dyn StdError + 'static),
    ) {
    }

    fn log_lazy(&self, _level: BackendLevel, _generator: MessageGenerator<'_>) {}

    fn log_format(
        &self,
        _level: BackendLevel,
        _provider: Option<&dyn FormatProvider>,
        _format: &str,
        _args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        Ok(())
    }
}
