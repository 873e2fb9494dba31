use crate::{command::Command, error::CommandResult};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// 命令总线（Command Bus）
///
/// - 调用方唯一需要直接使用的入口，按命令的具体类型路由到对应的处理器；
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用。
#[async_trait]
pub trait CommandBus: Send + Sync {
    /// 分发命令并返回其结果
    ///
    /// - `cmd`：具体命令实例（只读）
    /// - `cancel`：本次分发的取消令牌，贯穿整条管道
    async fn dispatch<C>(&self, cmd: &C, cancel: &CancellationToken) -> CommandResult<C::Output>
    where
        C: Command;

    /// 不可取消地分发命令
    async fn send<C>(&self, cmd: &C) -> CommandResult<C::Output>
    where
        C: Command,
    {
        let never = CancellationToken::new();
        self.dispatch(cmd, &never).await
    }
}
