use std::{error::Error as StdError, fmt, sync::Arc};

use spark_logging::{
    BackendLevel, BackendLogger, FormatError, FormatProvider, MessageGenerator, format,
};
use tracing::Level;

/// 按后端级别分派到对应的 `tracing::event!` 调用点。
///
/// `tracing` 的级别必须在调用点静态确定，因此每个级别展开一个独立的事件宏；
/// `Fatal` 复用 ERROR 并附加 `fatal = true` 字段，`Off` 不产生事件。
macro_rules! dispatch_event {
    ($level:expr, $($rest:tt)+) => {
        match $level {
            BackendLevel::Trace => tracing::event!(Level::TRACE, $($rest)+),
            BackendLevel::Debug => tracing::event!(Level::DEBUG, $($rest)+),
            BackendLevel::Info => tracing::event!(Level::INFO, $($rest)+),
            BackendLevel::Warn => tracing::event!(Level::WARN, $($rest)+),
            BackendLevel::Error => tracing::event!(Level::ERROR, $($rest)+),
            BackendLevel::Fatal => tracing::event!(Level::ERROR, fatal = true, $($rest)+),
            BackendLevel::Off => {}
        }
    };
}

/// 以 `tracing` 为输出通道的后端日志器。
///
/// # 教案式说明
/// - **意图（Why）**：让 [`spark_logging::Log`] 的调用落到宿主已经装配好的 `tracing` 订阅者上，
///   与框架其它 `tracing` 输出共享过滤、格式与导出配置。
/// - **逻辑（How）**：
///   1. 启用判定使用 `tracing::enabled!`，每次调用都询问当前分发器，不做缓存；
///   2. 写入时按级别展开事件宏，统一附带 `logger` 字段标识日志器名称；
///   3. 延迟消息与格式串仅在级别启用时才求值或渲染。
/// - **契约（What）**：
///   - 事件目标（target）固定为本模块路径，日志器名称只出现在 `logger` 字段中；
///   - 错误对象以 `error` 字段的 `Display` 形式输出；
///   - 格式串错误以 [`FormatError`] 返回，不产生事件。
#[derive(Clone, Debug)]
pub struct TracingBackend {
    name: Arc<str>,
}

impl TracingBackend {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BackendLogger for TracingBackend {
    fn is_enabled(&self, level: BackendLevel) -> bool {
        match level {
            BackendLevel::Trace => tracing::enabled!(Level::TRACE),
            BackendLevel::Debug => tracing::enabled!(Level::DEBUG),
            BackendLevel::Info => tracing::enabled!(Level::INFO),
            BackendLevel::Warn => tracing::enabled!(Level::WARN),
            BackendLevel::Error | BackendLevel::Fatal => tracing::enabled!(Level::ERROR),
            BackendLevel::Off => false,
        }
    }

    fn log(&self, level: BackendLevel, value: &dyn fmt::Display) {
        let logger = &*self.name;
        dispatch_event!(level, logger = %logger, "{}", value);
    }

    fn log_with_error(&self, level: BackendLevel, message: &str, error: &(dyn StdError + 'static)) {
        let logger = &*self.name;
        dispatch_event!(level, logger = %logger, error = %error, "{}", message);
    }

    fn log_lazy(&self, level: BackendLevel, generator: MessageGenerator<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        let message = generator();
        let logger = &*self.name;
        dispatch_event!(level, logger = %logger, "{}", message);
    }

    fn log_format(
        &self,
        level: BackendLevel,
        provider: Option<&dyn FormatProvider>,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), FormatError> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let message = format::render(provider, format, args)?;
        let logger = &*self.name;
        dispatch_event!(level, logger = %logger, "{}", message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io};

    use parking_lot::Mutex;
    use spark_logging::{Log, LogAdapter, LogLevel, MessageProvider};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_test::traced_test;

    use super::*;

    /// 把格式化输出收集到内存中的 `MakeWriter`。
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock())
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_max_level<R>(max: Level, f: impl FnOnce() -> R) -> (R, Vec<String>) {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_max_level(max)
            .with_ansi(false)
            .without_time()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, capture.lines())
    }

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection refused")
        }
    }

    impl StdError for Refused {}

    #[test]
    fn enablement_follows_the_current_subscriber() {
        let backend = TracingBackend::new("Probe");

        let (levels, _) = with_max_level(Level::WARN, || {
            [
                backend.is_trace_enabled(),
                backend.is_debug_enabled(),
                backend.is_info_enabled(),
                backend.is_warn_enabled(),
                backend.is_error_enabled(),
                backend.is_fatal_enabled(),
                backend.is_enabled(BackendLevel::Off),
            ]
        });
        assert_eq!(levels, [false, false, false, true, true, true, false]);

        let (trace, _) = with_max_level(Level::TRACE, || backend.is_trace_enabled());
        assert!(trace);
    }

    #[test]
    fn events_carry_level_logger_and_message() {
        let backend = TracingBackend::new("Orders");

        let (_, lines) = with_max_level(Level::TRACE, || {
            backend.log(BackendLevel::Info, &"accepted");
            backend.log(BackendLevel::Trace, &42);
            backend.log(BackendLevel::Off, &"never");
        });

        assert_eq!(lines.len(), 2, "{lines:?}");
        assert!(lines[0].starts_with(" INFO") || lines[0].starts_with("INFO"));
        assert!(lines[0].contains("accepted"));
        assert!(lines[0].contains("logger=Orders"));
        assert!(lines[1].contains("TRACE"));
        assert!(lines[1].contains("42"));
    }

    #[test]
    fn fatal_is_marked_on_error_events() {
        let backend = TracingBackend::new("Core");

        let (_, lines) = with_max_level(Level::ERROR, || {
            backend.log_with_error(BackendLevel::Fatal, "shutting down", &Refused);
            backend.log(BackendLevel::Error, &"recoverable");
        });

        assert_eq!(lines.len(), 2, "{lines:?}");
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("fatal=true"));
        assert!(lines[0].contains("error=connection refused"));
        assert!(lines[0].contains("shutting down"));
        assert!(!lines[1].contains("fatal"));
    }

    #[test]
    fn disabled_levels_skip_generators_and_formatting() {
        let backend = TracingBackend::new("Lazy");
        let calls = Cell::new(0);

        let (result, lines) = with_max_level(Level::INFO, || {
            backend.log_lazy(
                BackendLevel::Debug,
                Box::new(|| {
                    calls.set(calls.get() + 1);
                    "hidden".to_owned()
                }),
            );
            // 未启用时不渲染，格式错误也不会暴露。
            backend.log_format(BackendLevel::Debug, None, "{9}", &[])
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(result, Ok(()));
        assert!(lines.is_empty(), "{lines:?}");
    }

    #[test]
    fn enabled_format_errors_are_returned() {
        let backend = TracingBackend::new("Format");

        let (result, lines) = with_max_level(Level::INFO, || {
            backend.log_format(BackendLevel::Warn, None, "{0} and {1}", &[&"one"])
        });

        assert_eq!(
            result,
            Err(FormatError::MissingArgument {
                index: 1,
                provided: 1
            })
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn adapter_routes_generic_calls_through_tracing() {
        let (_, lines) = with_max_level(Level::INFO, || {
            let log = LogAdapter::new(TracingBackend::new("Worker"), "Worker").unwrap();
            log.debug_lazy(MessageProvider::new(|| "expensive"));
            log.info_lazy(MessageProvider::new(|| "ready"));
            log.log(LogLevel::WARN, None);
            log.info_format("{0,-6}|", &[&"ok"]).unwrap();
        });

        assert_eq!(lines.len(), 3, "{lines:?}");
        assert!(lines[0].contains("ready"));
        assert!(lines[1].contains("WARN"));
        assert!(lines[2].contains("ok    |"));
        assert!(lines.iter().all(|line| line.contains("logger=Worker")));
    }

    #[traced_test]
    #[test]
    fn traced_events_are_visible_to_the_test_subscriber() {
        let log = LogAdapter::new(TracingBackend::new("Traced"), "Traced").unwrap();

        log.warn_with_error(Some(&"retrying"), &Refused);

        assert!(logs_contain("retrying"));
        assert!(logs_contain("logger=Traced"));
        assert!(logs_contain("error=connection refused"));
    }
}
