//! 协作式取消
//!
//! 每次顶层分发由调用方创建一个 [`CancellationToken`]，沿整条管道以引用传递，
//! 各阶段在入口处检查；超时由调用方在截止时间后取消令牌来表达。
//!
use crate::error::{CommandError, CommandResult};
use tokio_util::sync::CancellationToken;

/// 令牌已触发时返回 [`CommandError::Cancelled`]
pub fn ensure_active(token: &CancellationToken) -> CommandResult<()> {
    if token.is_cancelled() {
        return Err(CommandError::Cancelled);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_token_is_rejected() {
        let token = CancellationToken::new();
        assert!(ensure_active(&token).is_ok());

        token.cancel();
        assert!(ensure_active(&token).unwrap_err().is_cancelled());
    }

    #[test]
    fn child_tokens_observe_parent() {
        let parent = CancellationToken::new();
        let child = parent.child_token();
        parent.cancel();
        assert!(ensure_active(&child).is_err());
    }
}
