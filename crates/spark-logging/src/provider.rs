use core::fmt;

/// 延迟求值的日志消息提供者。
///
/// # 教案式说明
/// - **意图（Why）**：构造代价高昂的消息（序列化大对象、拼接诊断快照）只应在目标级别启用时发生。
/// - **逻辑（How）**：内部持有一次性闭包，产出可选的可显示值；`None` 对应“空值”，
///   在转成字符串时统一视作空串。
/// - **契约（What）**：
///   - 闭包以 `FnOnce` 持有，类型层面保证每次日志调用至多执行一次；
///   - 只在调用方线程同步求值，不做排队或超时控制。
pub struct MessageProvider<'a> {
    produce: Box<dyn FnOnce() -> Option<Box<dyn fmt::Display + 'a>> + 'a>,
}

impl<'a> MessageProvider<'a> {
    /// 以总是产出值的闭包构造提供者。
    pub fn new<F, T>(produce: F) -> Self
    where
        F: FnOnce() -> T + 'a,
        T: fmt::Display + 'a,
    {
        Self {
            produce: Box::new(move || Some(Box::new(produce()) as Box<dyn fmt::Display + 'a>)),
        }
    }

    /// 以可能产出空值的闭包构造提供者。
    pub fn nullable<F, T>(produce: F) -> Self
    where
        F: FnOnce() -> Option<T> + 'a,
        T: fmt::Display + 'a,
    {
        Self {
            produce: Box::new(move || {
                produce().map(|value| Box::new(value) as Box<dyn fmt::Display + 'a>)
            }),
        }
    }

    /// 执行闭包并取得原始值。
    pub fn invoke(self) -> Option<Box<dyn fmt::Display + 'a>> {
        (self.produce)()
    }

    /// 执行闭包并渲染为字符串，空值得到空串。
    pub fn render(self) -> String {
        self.invoke()
            .map(|value| value.to_string())
            .unwrap_or_default()
    }
}

impl<'a, F, T> From<F> for MessageProvider<'a>
where
    F: FnOnce() -> T + 'a,
    T: fmt::Display + 'a,
{
    fn from(produce: F) -> Self {
        MessageProvider::new(produce)
    }
}

impl fmt::Debug for MessageProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageProvider").finish_non_exhaustive()
    }
}

/// 把可选值包装为 `Display`，空值渲染为空串。
#[derive(Clone, Copy)]
pub(crate) struct OrEmpty<'a>(pub(crate) Option<&'a dyn fmt::Display>);

impl fmt::Display for OrEmpty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}
