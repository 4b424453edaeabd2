use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::LoggingError;

/// 通用日志级别。
///
/// # 教案式说明
/// - **意图（Why）**：调用方只面向这一组与后端无关的级别编程，由适配器负责翻译为具体后端的级别。
/// - **逻辑（How）**：以 `u8` 编码的开放新类型承载级别，已识别的七个级别以关联常量暴露，
///   顺序为 `ALL < DEBUG < INFO < WARN < ERROR < FATAL < OFF`；[`LogLevel::from_code`]
///   允许构造未识别的编码（例如来自外部配置的旧值），翻译时一律落到后端的 `Off`。
/// - **契约（What）**：
///   - 比较运算按编码排序；
///   - 序列化为级别名称字符串，反序列化时名称大小写不敏感，未识别名称返回错误。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(u8);

impl LogLevel {
    /// 所有消息，含最细粒度的跟踪输出。
    pub const ALL: LogLevel = LogLevel(0);
    pub const DEBUG: LogLevel = LogLevel(1);
    pub const INFO: LogLevel = LogLevel(2);
    pub const WARN: LogLevel = LogLevel(3);
    pub const ERROR: LogLevel = LogLevel(4);
    pub const FATAL: LogLevel = LogLevel(5);
    /// 关闭输出。
    pub const OFF: LogLevel = LogLevel(6);

    /// 已识别的级别，按严重程度升序排列。
    pub const KNOWN: [LogLevel; 7] = [
        LogLevel::ALL,
        LogLevel::DEBUG,
        LogLevel::INFO,
        LogLevel::WARN,
        LogLevel::ERROR,
        LogLevel::FATAL,
        LogLevel::OFF,
    ];

    /// 以原始编码构造级别，不做范围校验。
    pub const fn from_code(code: u8) -> Self {
        LogLevel(code)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    /// 返回级别名称；未识别的编码返回 `None`。
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("All"),
            1 => Some("Debug"),
            2 => Some("Info"),
            3 => Some("Warn"),
            4 => Some("Error"),
            5 => Some("Fatal"),
            6 => Some("Off"),
            _ => None,
        }
    }

    pub const fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Level({})", self.code()),
        }
    }
}

impl fmt::Debug for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LogLevel::KNOWN
            .into_iter()
            .find(|level| {
                level
                    .name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| LoggingError::UnknownLevel(s.to_owned()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_are_strictly_ordered() {
        for pair in LogLevel::KNOWN.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_rejects_unknown_names() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::WARN));
        assert_eq!(" FATAL ".parse::<LogLevel>(), Ok(LogLevel::FATAL));
        assert_eq!(
            "verbose".parse::<LogLevel>(),
            Err(LoggingError::UnknownLevel("verbose".to_owned()))
        );
    }

    #[test]
    fn unknown_codes_render_with_their_code() {
        let level = LogLevel::from_code(42);
        assert!(!level.is_known());
        assert_eq!(level.to_string(), "Level(42)");
        assert_eq!(level.code(), 42);
        assert_eq!(LogLevel::INFO.to_string(), "Info");
    }

    #[test]
    fn serde_uses_level_names() {
        assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "\"Warn\"");
        assert_eq!(
            serde_json::from_str::<LogLevel>("\"debug\"").unwrap(),
            LogLevel::DEBUG
        );
        assert!(serde_json::from_str::<LogLevel>("\"loud\"").is_err());
    }
}
