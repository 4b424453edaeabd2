use serde::Deserialize;
use spark_logging::LogLevel;
use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter},
};

use crate::Error;

/// 输出格式。
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `tracing-subscriber` 的默认完整格式。
    #[default]
    Full,
    /// 单行紧凑格式。
    Compact,
}

/// 日志管线配置。
///
/// # 教案式说明
/// - **意图（Why）**：宿主可从 TOML 配置文件声明默认级别与按目标细分的过滤指令，而非硬编码在启动代码中。
/// - **逻辑（How）**：`level` 作为兜底指令，`directives` 逐条追加为 `EnvFilter` 指令；
///   若进程设置了 `RUST_LOG`，[`install`](crate::install) 优先使用环境变量。
/// - **契约（What）**：所有字段均有默认值，空文档即得到 [`LoggingConfig::default`]；未知字段会被拒绝。
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// 兜底级别，默认 `Info`。
    pub level: LogLevel,
    /// 额外的 `EnvFilter` 指令，例如 `"spark_logging_tracing=debug"`。
    pub directives: Vec<String>,
    pub format: OutputFormat,
    pub ansi: bool,
    pub with_target: bool,
    pub with_thread_names: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::INFO,
            directives: Vec::new(),
            format: OutputFormat::Full,
            ansi: true,
            with_target: true,
            with_thread_names: false,
        }
    }
}

impl LoggingConfig {
    /// 从 TOML 文本解析配置。
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }

    /// 仅依据配置构造过滤器，不读取环境变量。
    pub fn env_filter(&self) -> Result<EnvFilter, Error> {
        self.directives.iter().try_fold(
            EnvFilter::default().add_directive(level_filter(self.level).into()),
            |filter, raw| {
                let directive = raw
                    .parse::<Directive>()
                    .map_err(|source| Error::InvalidDirective {
                        directive: raw.clone(),
                        source,
                    })?;
                Ok(filter.add_directive(directive))
            },
        )
    }
}

/// 通用级别到 `tracing` 级别过滤器的映射；`Fatal` 与 `Error` 同为 ERROR，未识别编码视为关闭。
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::ALL => LevelFilter::TRACE,
        LogLevel::DEBUG => LevelFilter::DEBUG,
        LogLevel::INFO => LevelFilter::INFO,
        LogLevel::WARN => LevelFilter::WARN,
        LogLevel::ERROR | LogLevel::FATAL => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}
