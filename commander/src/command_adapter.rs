//! 命令适配器（CommandAdapter）
//!
//! 将一个具体命令类型的处理器与有序装饰器绑定为一条管道，
//! 并对外暴露只依赖结果类型 `R` 的类型擦除入口。
//!
use crate::{
    cancellation::ensure_active,
    command::{AnyCommand, Command},
    command_decorator::CommandDecorator,
    command_handler::CommandHandler,
    delegate::{CommandDelegate, compose},
    error::{CommandError, CommandResult},
};
use async_trait::async_trait;
use std::any::type_name;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 类型擦除的适配器入口
///
/// `command` 为 `None` 时视为调用约定被破坏，立即失败。
#[async_trait]
pub trait CommandAdapter<R>: Send + Sync
where
    R: Send + 'static,
{
    async fn execute(
        &self,
        command: Option<&dyn AnyCommand<R>>,
        cancel: &CancellationToken,
    ) -> CommandResult<R>;
}

/// 基于“处理器 + 装饰器”管道的适配器
///
/// 装饰器集合在构造时即固定，因此管道只组合一次并在各次调用间复用；
/// 除此之外不持有任何状态，可在并发调用间共享。
pub struct PipelineAdapter<C>
where
    C: Command,
{
    pipeline: CommandDelegate<C>,
    decorators: usize,
}

impl<C> PipelineAdapter<C>
where
    C: Command,
{
    pub fn new(
        handler: Arc<dyn CommandHandler<C>>,
        decorators: Vec<Arc<dyn CommandDecorator<C>>>,
    ) -> Self {
        Self {
            pipeline: compose(handler, &decorators),
            decorators: decorators.len(),
        }
    }

    /// 管道中装饰器的数量
    pub fn decorator_count(&self) -> usize {
        self.decorators
    }
}

#[async_trait]
impl<C> CommandAdapter<C::Output> for PipelineAdapter<C>
where
    C: Command,
{
    async fn execute(
        &self,
        command: Option<&dyn AnyCommand<C::Output>>,
        cancel: &CancellationToken,
    ) -> CommandResult<C::Output> {
        let command = command.ok_or(CommandError::InvalidArgument { param: "command" })?;

        let Some(concrete) = command.as_any().downcast_ref::<C>() else {
            tracing::warn!(
                expected = type_name::<C>(),
                found = command.type_name(),
                "adapter invoked with foreign command type"
            );
            return Err(CommandError::TypeMismatch {
                expected: type_name::<C>(),
                found: command.type_name(),
            });
        };

        if let Err(err) = ensure_active(cancel) {
            tracing::debug!(command = C::NAME, "cancelled before pipeline start");
            return Err(err);
        }

        (self.pipeline)(concrete, cancel).await
    }
}
