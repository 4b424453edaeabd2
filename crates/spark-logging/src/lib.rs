#![deny(unsafe_code)]
#![doc = "spark-logging: 与后端无关的通用日志外观，以及把它翻译到具体后端日志器的适配器。"]
#![doc = ""]
#![doc = "组件面向 [`Log`] 写日志；宿主通过 [`LogAdapter`] 把调用翻译到实现了 [`BackendLogger`] 的后端，"]
#![doc = "或经由 [`host`] 插槽按名称统一分发。"]

//! # 模块概览（How）
//! - [`level`]：通用日志级别 [`LogLevel`]；
//! - [`log`]：通用日志接口 [`Log`] 与全部便捷方法；
//! - [`provider`]：延迟消息提供者 [`MessageProvider`]；
//! - [`format`]：复合格式串渲染与 [`FormatProvider`]；
//! - [`backend`]：后端契约 [`BackendLogger`]、[`BackendLevel`] 与空后端；
//! - [`adapter`]：级别翻译与 [`LogAdapter`]；
//! - [`factory`] / [`host`]：按名称构造、缓存与进程级分发。

pub mod adapter;
pub mod backend;
pub mod error;
pub mod factory;
pub mod format;
pub mod host;
pub mod level;
pub mod log;
pub mod provider;

pub use adapter::{LogAdapter, backend_level, to_generator};
pub use backend::{BackendLevel, BackendLogger, MessageGenerator, NullBackend};
pub use error::{FormatError, LoggingError};
pub use factory::{AdapterFactory, LogFactory, null_factory};
pub use format::{FormatProvider, InvariantFormat};
pub use level::LogLevel;
pub use log::Log;
pub use provider::MessageProvider;
