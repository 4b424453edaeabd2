//! 进程级日志工厂插槽。
//!
//! # 教案式说明
//! - **意图（Why）**：组件在任意位置通过名称取得日志器，而无需把工厂一路传参下去；宿主在启动时
//!   调用 [`use_factory`] 选定后端即可。
//! - **逻辑（How）**：以 `ArcSwap` 保存当前工厂，读路径无锁；未配置时使用
//!   [`null_factory`](crate::factory::null_factory)，所有日志器静默。
//! - **契约（What）**：
//!   - 切换工厂只影响之后的 [`get`] 调用，已取得的日志器继续指向旧工厂的后端；
//!   - [`shutdown`] 关闭当前工厂并恢复为空工厂。

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::{
    error::LoggingError,
    factory::{LogFactory, null_factory},
    log::Log,
};

type FactorySlot = Box<dyn LogFactory>;

static CURRENT: LazyLock<ArcSwap<FactorySlot>> =
    LazyLock::new(|| ArcSwap::from_pointee(default_slot()));

fn default_slot() -> FactorySlot {
    Box::new(null_factory())
}

/// 设置进程级日志工厂，返回被替换的旧工厂。
pub fn use_factory(factory: impl LogFactory + 'static) -> Arc<FactorySlot> {
    let previous = CURRENT.swap(Arc::new(Box::new(factory) as FactorySlot));
    tracing::debug!("host log factory replaced");
    previous
}

/// 从当前工厂获取指定名称的日志器。
pub fn get(name: &str) -> Result<Arc<dyn Log>, LoggingError> {
    CURRENT.load().get(name)
}

/// 当前工厂的共享快照。
pub fn current() -> Arc<FactorySlot> {
    CURRENT.load_full()
}

/// 关闭当前工厂并恢复为空工厂。
pub fn shutdown() {
    let previous = CURRENT.swap(Arc::new(default_slot()));
    previous.shutdown();
    tracing::debug!("host log factory shut down");
}
