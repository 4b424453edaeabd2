#![deny(unsafe_code)]
//! spark-logging-tracing：以 `tracing` 生态承接 `spark-logging` 通用日志外观。
//!
//! # 教案式说明
//! - **意图（Why）**：组件只依赖 [`spark_logging::Log`]；宿主调用一次 [`install`]，即可让全部日志器
//!   经由 `tracing-subscriber` 输出，并与框架其它 `tracing` 事件共享过滤与格式。
//! - **逻辑（How）**：
//!   1. [`TracingBackend`] 实现 [`spark_logging::BackendLogger`]，把后端调用翻译为 `tracing` 事件；
//!   2. [`tracing_factory`] 为每个名称构造 `LogAdapter<TracingBackend>`；
//!   3. [`install`] 组装 `EnvFilter + fmt` 订阅者、设为全局默认，并把工厂注册到
//!      [`spark_logging::host`] 插槽。
//! - **契约（What）**：`install` 每个进程只能成功一次；外部已设置全局订阅者时拒绝覆盖。

use std::sync::atomic::{AtomicBool, Ordering};

use spark_logging::{AdapterFactory, host};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer, filter::ParseError, layer::SubscriberExt};

pub mod backend;
pub mod config;

pub use backend::TracingBackend;
pub use config::{LoggingConfig, OutputFormat, level_filter};

/// 安装状态：安装进行中或已完成时为 `true`，确保 [`install`] 仅成功一次。
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// 安装与配置阶段可能出现的错误。
///
/// # 教案式说明
/// - **意图（Why）**：归纳启动阶段的全部失败路径，便于宿主在启动流程中统一处理；
/// - **契约（What）**：全部变体实现 [`std::error::Error`]，保留底层错误作为 `source`。
#[derive(Debug, Error)]
pub enum Error {
    /// [`install`] 被重复调用。
    #[error("spark-logging-tracing is already installed")]
    AlreadyInstalled,

    /// 外部提前设置了全局 `tracing` 订阅者。
    #[error("a global tracing subscriber has already been set")]
    SubscriberAlreadySet,

    /// 配置中的过滤指令无法解析。
    #[error("invalid filter directive `{directive}`")]
    InvalidDirective {
        directive: String,
        #[source]
        source: ParseError,
    },

    /// TOML 配置解析失败。
    #[error("invalid logging configuration")]
    Config(#[from] toml::de::Error),
}

/// 以 [`TracingBackend`] 构造日志器的工厂。
pub type TracingLogFactory = AdapterFactory<TracingBackend, fn(&str) -> TracingBackend>;

/// 构造新的 [`TracingLogFactory`]。
pub fn tracing_factory() -> TracingLogFactory {
    TracingLogFactory::new(backend_for)
}

fn backend_for(name: &str) -> TracingBackend {
    TracingBackend::new(name)
}

/// 把 [`TracingLogFactory`] 注册为进程级日志工厂，不改动 `tracing` 订阅者。
///
/// 适用于宿主已自行装配订阅者的场景。
pub fn use_tracing() {
    host::use_factory(tracing_factory());
}

/// 装配全局 `tracing` 订阅者并注册 [`TracingLogFactory`]。
///
/// # 教案式说明
/// - **逻辑（How）**：
///   1. 检查重复安装与外部订阅者；
///   2. 过滤器优先取 `RUST_LOG`，缺失或非法时回退到 [`LoggingConfig::env_filter`]；
///   3. 按 [`OutputFormat`] 组装 `fmt` 层并设为全局默认；
///   4. 调用 [`use_tracing`] 切换 [`spark_logging::host`] 插槽。
/// - **契约（What）**：
///   - 重复或并发调用中，除成功者外均返回 [`Error::AlreadyInstalled`]；
///   - 外部已设置订阅者返回 [`Error::SubscriberAlreadySet`]；
///   - 配置指令非法返回 [`Error::InvalidDirective`]；
///   - 安装失败不占用安装资格，可修正后重试。
pub fn install(config: &LoggingConfig) -> Result<(), Error> {
    if INSTALLED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return Err(Error::AlreadyInstalled);
    }
    // 失败时释放占位，允许修正配置后重试。
    install_claimed(config).inspect_err(|_| INSTALLED.store(false, Ordering::Release))
}

fn install_claimed(config: &LoggingConfig) -> Result<(), Error> {
    if tracing::dispatcher::has_been_set() {
        return Err(Error::SubscriberAlreadySet);
    }

    let (filter, source) =
        select_filter(EnvFilter::try_from_default_env().ok(), config)?;
    let directives = filter.to_string();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_thread_names(config.with_thread_names);
    let fmt_layer = match config.format {
        OutputFormat::Full => fmt_layer.boxed(),
        OutputFormat::Compact => fmt_layer.compact().boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| Error::SubscriberAlreadySet)?;

    use_tracing();
    tracing::debug!(
        source = source.as_str(),
        filter = %directives,
        "spark-logging tracing backend installed"
    );
    Ok(())
}

/// 环境变量给出的过滤器优先，否则由配置构造。
fn select_filter(
    from_env: Option<EnvFilter>,
    config: &LoggingConfig,
) -> Result<(EnvFilter, FilterSource), Error> {
    match from_env {
        Some(filter) => Ok((filter, FilterSource::Environment)),
        None => Ok((config.env_filter()?, FilterSource::Config)),
    }
}

/// 过滤器的实际来源。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterSource {
    Environment,
    Config,
}

impl FilterSource {
    const fn as_str(self) -> &'static str {
        match self {
            FilterSource::Environment => "RUST_LOG",
            FilterSource::Config => "config",
        }
    }
}
