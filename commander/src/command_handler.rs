use crate::{cancellation::ensure_active, command::Command, error::CommandResult, unit::Unit};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// 命令处理器：每个具体命令类型恰好一个
///
/// - 每次调用只执行一次，不做重试；
/// - 返回的错误由核心原样透传给调用方。
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, cmd: &C, cancel: &CancellationToken) -> CommandResult<C::Output>;
}

/// 无返回值的命令处理器，经 [`UnitHandler`] 接入管道后结果归一为 [`Unit`]
#[async_trait]
pub trait UnitCommandHandler<C>: Send + Sync
where
    C: Command<Output = Unit>,
{
    async fn execute(&self, cmd: &C, cancel: &CancellationToken) -> CommandResult<()>;
}

/// 将 [`UnitCommandHandler`] 接入管道；令牌已触发时不调用内部处理器
#[derive(Clone, Debug, Default)]
pub struct UnitHandler<H>(pub H);

#[async_trait]
impl<C, H> CommandHandler<C> for UnitHandler<H>
where
    C: Command<Output = Unit>,
    H: UnitCommandHandler<C>,
{
    async fn handle(&self, cmd: &C, cancel: &CancellationToken) -> CommandResult<Unit> {
        ensure_active(cancel)?;
        self.0.execute(cmd, cancel).await?;
        Ok(Unit::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Flush;

    impl Command for Flush {
        const NAME: &'static str = "flush";
        type Output = Unit;
    }

    #[derive(Default)]
    struct FlushHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UnitCommandHandler<Flush> for FlushHandler {
        async fn execute(&self, _cmd: &Flush, _cancel: &CancellationToken) -> CommandResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn unit_handler_yields_unit() {
        let handler = UnitHandler(FlushHandler::default());

        let out = handler.handle(&Flush, &CancellationToken::new()).await.unwrap();

        assert_eq!(out, Unit::DEFAULT);
        assert_eq!(handler.0.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unit_handler_checks_cancellation_first() {
        let handler = UnitHandler(FlushHandler::default());
        let token = CancellationToken::new();
        token.cancel();

        let err = handler.handle(&Flush, &token).await.unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(handler.0.calls.load(Ordering::SeqCst), 0);
    }
}
