use crate::{command::Command, delegate::CommandDelegate, error::CommandResult, unit::Unit};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// 命令装饰器（中间件）
///
/// 以 `next` 表示管道中的下一阶段（下一个装饰器，或最内层的处理器）。
/// - 可调用 `next` 零次、一次或多次；
/// - 可替换转发的命令，也可在 `next` 返回后改写结果；
/// - 不得吞掉取消信号。
///
/// 取消检查由管道（[`crate::delegate::decorate`]）负责：令牌已触发时不会进入 `decorate`。
#[async_trait]
pub trait CommandDecorator<C>: Send + Sync
where
    C: Command,
{
    async fn decorate(
        &self,
        cmd: &C,
        cancel: &CancellationToken,
        next: CommandDelegate<C>,
    ) -> CommandResult<C::Output>;
}

/// 无返回值命令的装饰器，结果由 [`UnitDecorator`] 归一为 [`Unit`]
#[async_trait]
pub trait UnitCommandDecorator<C>: Send + Sync
where
    C: Command<Output = Unit>,
{
    async fn decorate(
        &self,
        cmd: &C,
        cancel: &CancellationToken,
        next: CommandDelegate<C>,
    ) -> CommandResult<()>;
}

/// 将 [`UnitCommandDecorator`] 接入管道
#[derive(Clone, Debug, Default)]
pub struct UnitDecorator<D>(pub D);

#[async_trait]
impl<C, D> CommandDecorator<C> for UnitDecorator<D>
where
    C: Command<Output = Unit>,
    D: UnitCommandDecorator<C>,
{
    async fn decorate(
        &self,
        cmd: &C,
        cancel: &CancellationToken,
        next: CommandDelegate<C>,
    ) -> CommandResult<Unit> {
        self.0.decorate(cmd, cancel, next).await?;
        Ok(Unit::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Touch;

    impl Command for Touch {
        const NAME: &'static str = "touch";
        type Output = Unit;
    }

    struct Twice;

    #[async_trait]
    impl UnitCommandDecorator<Touch> for Twice {
        async fn decorate(
            &self,
            cmd: &Touch,
            cancel: &CancellationToken,
            next: CommandDelegate<Touch>,
        ) -> CommandResult<()> {
            next(cmd, cancel).await?;
            next(cmd, cancel).await?;
            Ok(())
        }
    }

    fn counting_next(calls: Arc<AtomicUsize>) -> CommandDelegate<Touch> {
        Arc::new(move |_cmd, _cancel| {
            let calls = calls.clone();
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Unit)
            })
        })
    }

    fn failing_next() -> CommandDelegate<Touch> {
        Arc::new(|_cmd, _cancel| {
            Box::pin(async { Err::<Unit, _>(CommandError::from(anyhow::anyhow!("disk full"))) })
        })
    }

    #[tokio::test]
    async fn unit_decorator_yields_unit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let decorator = UnitDecorator(Twice);

        let out = CommandDecorator::<Touch>::decorate(
            &decorator,
            &Touch,
            &CancellationToken::new(),
            counting_next(calls.clone()),
        )
        .await
        .unwrap();

        assert_eq!(out, Unit::DEFAULT);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unit_decorator_propagates_errors() {
        let err = CommandDecorator::<Touch>::decorate(
            &UnitDecorator(Twice),
            &Touch,
            &CancellationToken::new(),
            failing_next(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "disk full");
    }
}
