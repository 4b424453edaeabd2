//! 复合格式串渲染。
//!
//! # 教案式说明
//! - **意图（Why）**：格式化类日志调用（`log_format` 等）把格式串与位置参数原样交给后端，
//!   由后端决定占位符语法与区域性相关的转换；本模块提供后端共用的默认实现。
//! - **逻辑（How）**：单遍扫描格式串，识别 `{index[,alignment][:spec]}` 占位符与 `{{`/`}}` 转义，
//!   参数渲染委托给 [`FormatProvider`]，对齐按字符数补空格。
//! - **契约（What）**：
//!   - 正对齐值右对齐、负对齐值左对齐，渲染结果长于对齐宽度时不截断；
//!   - 对齐宽度的绝对值必须小于 1_000_000；
//!   - 任意语法错误或越界索引返回 [`FormatError`]，不产生部分输出。

use core::fmt::{self, Write as _};

use crate::error::FormatError;

/// 格式提供者：决定单个参数如何渲染，相当于区域性（culture）设置。
///
/// 实现需线程安全，后端可能在任意调用线程上使用同一实例。
pub trait FormatProvider: Send + Sync {
    /// 把 `arg` 写入 `out`；`spec` 为占位符冒号之后的格式说明（若有）。
    fn format_arg(
        &self,
        arg: &dyn fmt::Display,
        spec: Option<&str>,
        out: &mut String,
    ) -> fmt::Result;
}

/// 区域性无关的默认提供者，直接使用 `Display`，忽略格式说明。
#[derive(Clone, Copy, Debug, Default)]
pub struct InvariantFormat;

impl FormatProvider for InvariantFormat {
    fn format_arg(
        &self,
        arg: &dyn fmt::Display,
        _spec: Option<&str>,
        out: &mut String,
    ) -> fmt::Result {
        write!(out, "{arg}")
    }
}

/// 以给定提供者渲染复合格式串。
///
/// `provider` 为 `None` 时使用 [`InvariantFormat`]。
pub fn render(
    provider: Option<&dyn FormatProvider>,
    format: &str,
    args: &[&dyn fmt::Display],
) -> Result<String, FormatError> {
    let provider = provider.unwrap_or(&InvariantFormat);
    let mut out = String::with_capacity(format.len());
    let mut chars = format.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let body_start = position + 1;
                let body_end = loop {
                    match chars.next() {
                        Some((end, '}')) => break end,
                        Some((_, '{')) => return Err(FormatError::InvalidPlaceholder { position }),
                        Some(_) => {}
                        None => return Err(FormatError::UnclosedPlaceholder { position }),
                    }
                };
                let placeholder = Placeholder::parse(&format[body_start..body_end], position)?;
                let arg = args
                    .get(placeholder.index)
                    .ok_or(FormatError::MissingArgument {
                        index: placeholder.index,
                        provided: args.len(),
                    })?;
                placeholder.write(provider, *arg, &mut out)?;
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnexpectedClosingBrace { position });
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// 对齐宽度的上限（不含），超出视为非法占位符。
const MAX_ALIGNMENT: usize = 1_000_000;

/// 解析后的单个占位符。
#[derive(Debug, PartialEq, Eq)]
struct Placeholder<'f> {
    index: usize,
    alignment: isize,
    spec: Option<&'f str>,
}

impl<'f> Placeholder<'f> {
    fn parse(body: &'f str, position: usize) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidPlaceholder { position };

        let (head, spec) = match body.split_once(':') {
            Some((head, spec)) => (head, Some(spec)),
            None => (body, None),
        };
        let (index, alignment) = match head.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (head, None),
        };

        let index = index.trim();
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = index.parse::<usize>().map_err(|_| invalid())?;
        let alignment = match alignment {
            Some(raw) => raw.trim().parse::<isize>().map_err(|_| invalid())?,
            None => 0,
        };
        if alignment.unsigned_abs() >= MAX_ALIGNMENT {
            return Err(invalid());
        }

        Ok(Self {
            index,
            alignment,
            spec,
        })
    }

    fn write(
        &self,
        provider: &dyn FormatProvider,
        arg: &dyn fmt::Display,
        out: &mut String,
    ) -> Result<(), FormatError> {
        if self.alignment == 0 {
            provider.format_arg(arg, self.spec, out)?;
            return Ok(());
        }

        let mut rendered = String::new();
        provider.format_arg(arg, self.spec, &mut rendered)?;
        let width = self.alignment.unsigned_abs();
        let padding = width.saturating_sub(rendered.chars().count());
        if self.alignment > 0 {
            out.extend(core::iter::repeat_n(' ', padding));
            out.push_str(&rendered);
        } else {
            out.push_str(&rendered);
            out.extend(core::iter::repeat_n(' ', padding));
        }
        Ok(())
    }
}
