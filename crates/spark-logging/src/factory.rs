use std::{fmt, sync::Arc};

use dashmap::DashMap;

use crate::{
    adapter::LogAdapter,
    backend::{BackendLogger, NullBackend},
    error::LoggingError,
    log::Log,
};

/// 按名称提供 [`Log`] 实例的工厂。
///
/// # 契约说明（What）
/// - `get` 对同一名称应返回语义一致的日志器；名称为空时返回 [`LoggingError::InvalidArgument`]；
/// - `shutdown` 释放工厂持有的日志器，之后的 `get` 会重新构造。
pub trait LogFactory: Send + Sync {
    fn get(&self, name: &str) -> Result<Arc<dyn Log>, LoggingError>;

    fn shutdown(&self) {}
}

/// 基于后端构造器的适配器工厂，每个名称缓存一个 [`LogAdapter`]。
///
/// # 教案式说明
/// - **逻辑（How）**：首次请求某名称时调用 `build(name)` 得到后端并构造适配器，写入 `DashMap`；
///   之后同名请求直接返回缓存的 `Arc`。
/// - **契约（What）**：
///   - 构造失败（空名称）不会写入缓存；
///   - 构造在缓存锁之外进行，构造器可以回调同一工厂或宿主插槽；
///   - 并发的同名首次请求可能各自构造，但只有先写入缓存的实例会被返回。
pub struct AdapterFactory<B, F> {
    build: F,
    adapters: DashMap<String, Arc<LogAdapter<B>>>,
}

impl<B, F> AdapterFactory<B, F>
where
    B: BackendLogger + 'static,
    F: Fn(&str) -> B + Send + Sync,
{
    pub fn new(build: F) -> Self {
        Self {
            build,
            adapters: DashMap::new(),
        }
    }

    /// 获取指定名称的具体适配器。
    pub fn adapter(&self, name: &str) -> Result<Arc<LogAdapter<B>>, LoggingError> {
        if let Some(existing) = self.adapters.get(name) {
            return Ok(Arc::clone(existing.value()));
        }
        if name.is_empty() {
            return Err(LoggingError::empty_name());
        }

        // 构造器与初始化探针可能回调工厂，必须在持有分片锁之前完成。
        let built = Arc::new(LogAdapter::new((self.build)(name), name)?);
        let cached = Arc::clone(
            self.adapters
                .entry(name.to_owned())
                .or_insert_with(|| Arc::clone(&built))
                .value(),
        );
        if Arc::ptr_eq(&cached, &built) {
            tracing::debug!(logger = name, "log adapter created");
        }
        Ok(cached)
    }

    /// 当前缓存的适配器数量。
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl<B, F> LogFactory for AdapterFactory<B, F>
where
    B: BackendLogger + 'static,
    F: Fn(&str) -> B + Send + Sync,
{
    fn get(&self, name: &str) -> Result<Arc<dyn Log>, LoggingError> {
        let adapter: Arc<dyn Log> = self.adapter(name)?;
        Ok(adapter)
    }

    fn shutdown(&self) {
        self.adapters.clear();
    }
}

impl<B, F> fmt::Debug for AdapterFactory<B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterFactory")
            .field("adapters", &self.adapters.len())
            .finish_non_exhaustive()
    }
}

/// 构造基于 [`NullBackend`] 的工厂：所有日志器均不输出。
pub fn null_factory() -> AdapterFactory<NullBackend, fn(&str) -> NullBackend> {
    AdapterFactory::<NullBackend, fn(&str) -> NullBackend>::new(null_backend)
}

fn null_backend(_name: &str) -> NullBackend {
    NullBackend
}
