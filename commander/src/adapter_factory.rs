//! 命令适配器工厂
//!
//! 根据命令的运行时类型与结果类型，向解析器索取对应的适配器。
//!
use crate::{
    adapter_resolver::{AdapterKey, AdapterResolver},
    command::AnyCommand,
    command_adapter::CommandAdapter,
    error::{CommandError, CommandResult},
};
use std::any::type_name;
use std::sync::Arc;

pub trait CommandAdapterFactory: Send + Sync {
    /// 返回命令对应的适配器；解析不到时为配置错误，不应重试
    fn adapter_for<R>(
        &self,
        command: Option<&dyn AnyCommand<R>>,
    ) -> CommandResult<Arc<dyn CommandAdapter<R>>>
    where
        R: Send + 'static;
}

/// 通过 [`AdapterResolver`] 查找适配器的工厂，自身不做缓存
#[derive(Clone)]
pub struct ResolvingAdapterFactory {
    resolver: Arc<dyn AdapterResolver>,
}

impl ResolvingAdapterFactory {
    pub fn new(resolver: Arc<dyn AdapterResolver>) -> Self {
        Self { resolver }
    }
}

impl CommandAdapterFactory for ResolvingAdapterFactory {
    fn adapter_for<R>(
        &self,
        command: Option<&dyn AnyCommand<R>>,
    ) -> CommandResult<Arc<dyn CommandAdapter<R>>>
    where
        R: Send + 'static,
    {
        let command = command.ok_or(CommandError::InvalidArgument { param: "command" })?;
        let key = AdapterKey::for_command(command);

        tracing::trace!(
            command = key.command_name(),
            result = key.result_name(),
            "resolving command adapter"
        );

        let Some(resolved) = self.resolver.resolve(&key) else {
            return Err(CommandError::AdapterNotRegistered {
                command: key.command_name(),
                result: key.result_name(),
            });
        };

        match resolved.downcast::<Arc<dyn CommandAdapter<R>>>() {
            Ok(adapter) => Ok(*adapter),
            Err(_) => Err(CommandError::TypeMismatch {
                expected: type_name::<Arc<dyn CommandAdapter<R>>>(),
                found: key.command_name(),
            }),
        }
    }
}
