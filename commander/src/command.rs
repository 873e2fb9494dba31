use std::any::{Any, TypeId, type_name};

/// 应用层命令（Command）
///
/// 表达一次“意图”，由唯一的 [`CommandHandler`](crate::command_handler::CommandHandler) 执行。
/// - 对核心而言命令是只读输入，由调用方持有；
/// - 每个命令类型在定义时绑定唯一的结果类型 `Output`，无结果时使用 [`Unit`](crate::Unit)；
/// - 建议保持语义化的“动宾结构”命名，如 `CreateUser`、`CloseOrder`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 命令的结果类型
    type Output: Send + 'static;
}

/// 类型擦除后的命令视图
///
/// 仅保留结果类型 `R`，具体命令类型在运行时由适配器还原（`as_any` + `downcast_ref`）。
/// 对所有 `Command` 自动实现。
pub trait AnyCommand<R>: Any + Send + Sync {
    fn command_name(&self) -> &'static str;

    fn type_name(&self) -> &'static str;

    fn command_type_id(&self) -> TypeId;

    fn as_any(&self) -> &dyn Any;
}

impl<C> AnyCommand<C::Output> for C
where
    C: Command,
{
    fn command_name(&self) -> &'static str {
        C::NAME
    }

    fn type_name(&self) -> &'static str {
        type_name::<C>()
    }

    fn command_type_id(&self) -> TypeId {
        TypeId::of::<C>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 将具体命令视为类型擦除的 [`AnyCommand`]
pub fn erase<C>(cmd: &C) -> &dyn AnyCommand<C::Output>
where
    C: Command,
{
    cmd
}
