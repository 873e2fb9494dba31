//! 命令分发器（CommandDispatcher）
//!
//! 纯编排：校验参数、检查取消、向工厂索取适配器并执行，
//! 结果与错误原样返回，不含任何业务逻辑与可变状态。
//!
use crate::{
    adapter_factory::{CommandAdapterFactory, ResolvingAdapterFactory},
    adapter_resolver::AdapterResolver,
    cancellation::ensure_active,
    command::{AnyCommand, Command, erase},
    command_bus::CommandBus,
    error::{CommandError, CommandResult},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct CommandDispatcher<F = ResolvingAdapterFactory> {
    factory: F,
}

impl CommandDispatcher<ResolvingAdapterFactory> {
    pub fn from_resolver(resolver: Arc<dyn AdapterResolver>) -> Self {
        Self::new(ResolvingAdapterFactory::new(resolver))
    }
}

impl<F> CommandDispatcher<F>
where
    F: CommandAdapterFactory,
{
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// 类型擦除的分发入口
    pub async fn execute<R>(
        &self,
        command: Option<&dyn AnyCommand<R>>,
        cancel: &CancellationToken,
    ) -> CommandResult<R>
    where
        R: Send + 'static,
    {
        let command = command.ok_or(CommandError::InvalidArgument { param: "command" })?;
        ensure_active(cancel)?;

        tracing::debug!(command = command.command_name(), "dispatching command");

        let adapter = match self.factory.adapter_for(Some(command)) {
            Ok(adapter) => adapter,
            Err(err) => {
                tracing::warn!(
                    command = command.command_name(),
                    error = %err,
                    "no adapter for command"
                );
                return Err(err);
            }
        };

        adapter.execute(Some(command), cancel).await
    }
}

#[async_trait]
impl<F> CommandBus for CommandDispatcher<F>
where
    F: CommandAdapterFactory,
{
    async fn dispatch<C>(&self, cmd: &C, cancel: &CancellationToken) -> CommandResult<C::Output>
    where
        C: Command,
    {
        self.execute(Some(erase(cmd)), cancel).await
    }
}
