use std::{sync::Barrier, thread};

use spark_logging::{Log, LogLevel, host};
use spark_logging_tracing::{Error, LoggingConfig, TracingBackend, install};

/// 全局订阅者只能设置一次，整个安装流程在单个用例中验证。
#[test]
fn install_wires_host_logger_once() {
    // 配置错误只在未设置 RUST_LOG 时生效；失败后仍可重新安装。
    if std::env::var_os("RUST_LOG").is_none() {
        let broken = LoggingConfig {
            directives: vec!["spark=loud".to_owned()],
            ..LoggingConfig::default()
        };
        assert!(matches!(
            install(&broken),
            Err(Error::InvalidDirective { .. })
        ));
        assert!(!tracing::dispatcher::has_been_set());
    }

    let config = LoggingConfig::from_toml_str(
        r#"
        level = "debug"
        ansi = false
        format = "compact"
        "#,
    )
    .unwrap();

    let racers = 4;
    let barrier = Barrier::new(racers);
    let results: Vec<Result<(), Error>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..racers)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    install(&config)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .all(|err| matches!(err, Error::AlreadyInstalled)),
        "{results:?}"
    );

    let log = host::get("Installed").unwrap();
    assert!(log.is_error_enabled());
    assert!(log.is_fatal_enabled());
    log.log(LogLevel::INFO, Some(&"host logger routed through tracing"));

    assert!(matches!(install(&config), Err(Error::AlreadyInstalled)));

    let direct = spark_logging::LogAdapter::new(TracingBackend::new("Direct"), "Direct").unwrap();
    assert_eq!(direct.backend().name(), "Direct");
    assert_eq!(direct.is_error_enabled(), log.is_error_enabled());
}
