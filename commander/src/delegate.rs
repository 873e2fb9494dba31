//! 命令委托（CommandDelegate）与管道组合
//!
//! 委托代表“执行的下一步”：给定命令与取消令牌，异步返回结果。
//! 装饰器按注册顺序由外到内包裹处理器：`[D1, D2, D3]` + `H` => `D1(D2(D3(H)))`，
//! 实现方式是从处理器委托出发，逆序折叠装饰器序列。
//!
use crate::{
    cancellation::ensure_active, command::Command, command_decorator::CommandDecorator,
    command_handler::CommandHandler, error::CommandResult,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub type CommandFuture<'a, T> = Pin<Box<dyn Future<Output = CommandResult<T>> + Send + 'a>>;

pub type CommandDelegate<C> = Arc<
    dyn for<'a> Fn(&'a C, &'a CancellationToken) -> CommandFuture<'a, <C as Command>::Output>
        + Send
        + Sync,
>;

/// 以处理器作为最内层委托
pub fn handler_delegate<C>(handler: Arc<dyn CommandHandler<C>>) -> CommandDelegate<C>
where
    C: Command,
{
    Arc::new(move |cmd, cancel| {
        let handler = handler.clone();
        Box::pin(async move { handler.handle(cmd, cancel).await })
    })
}

/// 用一个装饰器包裹 `next`；令牌已触发时不进入装饰器
pub fn decorate<C>(
    decorator: Arc<dyn CommandDecorator<C>>,
    next: CommandDelegate<C>,
) -> CommandDelegate<C>
where
    C: Command,
{
    Arc::new(move |cmd, cancel| {
        let decorator = decorator.clone();
        let next = next.clone();
        Box::pin(async move {
            ensure_active(cancel)?;
            decorator.decorate(cmd, cancel, next).await
        })
    })
}

/// 组合完整管道；无装饰器时等价于直接调用处理器
pub fn compose<C>(
    handler: Arc<dyn CommandHandler<C>>,
    decorators: &[Arc<dyn CommandDecorator<C>>],
) -> CommandDelegate<C>
where
    C: Command,
{
    decorators
        .iter()
        .rev()
        .fold(handler_delegate(handler), |next, decorator| {
            decorate(decorator.clone(), next)
        })
}
