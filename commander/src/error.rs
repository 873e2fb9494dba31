//! 命令分发错误定义
//!
//! 核心只产生少量错误（参数、类型、配置、取消），
//! 其余由 Handler/Decorator 产生的业务错误原样透传。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    // --- 调用约定 ---
    #[error("invalid argument: {param}")]
    InvalidArgument { param: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // --- 注册/配置 ---
    #[error("adapter not registered: command={command}, result={result}")]
    AdapterNotRegistered {
        command: &'static str,
        result: &'static str,
    },

    #[error("handler already registered: command={command}")]
    AlreadyRegistered { command: &'static str },

    // --- 取消 ---
    #[error("command cancelled")]
    Cancelled,

    // --- 业务 ---
    #[error(transparent)]
    Application(#[from] anyhow::Error),
}

impl CommandError {
    /// 是否为取消结果（区别于业务失败）
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// 是否为装配缺陷：重试无法修复
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::AdapterNotRegistered { .. } | Self::AlreadyRegistered { .. }
        )
    }
}

/// 统一 Result 类型别名
pub type CommandResult<T> = Result<T, CommandError>;
