use crate::{
    adapter_resolver::{AdapterKey, AdapterResolver, ResolvedAdapter},
    command::Command,
    command_adapter::{CommandAdapter, PipelineAdapter},
    command_decorator::{CommandDecorator, UnitCommandDecorator, UnitDecorator},
    command_handler::{CommandHandler, UnitCommandHandler, UnitHandler},
    error::{CommandError, CommandResult},
    unit::Unit,
};
use dashmap::DashMap;
use std::any::{Any, type_name};
use std::sync::Arc;

type BoxAnySync = Box<dyn Any + Send + Sync>;

type ResolveFn = fn(&(dyn Any + Send + Sync)) -> Option<ResolvedAdapter>;

/// 单个命令类型的注册信息
struct Registration<C>
where
    C: Command,
{
    handler: Option<Arc<dyn CommandHandler<C>>>,
    decorators: Vec<Arc<dyn CommandDecorator<C>>>,
}

impl<C> Registration<C>
where
    C: Command,
{
    fn empty() -> Self {
        Self {
            handler: None,
            decorators: Vec::new(),
        }
    }
}

struct Entry {
    name: &'static str,
    handled: bool,
    registration: BoxAnySync,
    resolve: ResolveFn,
}

impl Entry {
    fn new<C>() -> Self
    where
        C: Command,
    {
        Self {
            name: C::NAME,
            handled: false,
            registration: Box::new(Registration::<C>::empty()),
            resolve: resolve_registration::<C>,
        }
    }

    fn registration_mut<C>(&mut self) -> CommandResult<&mut Registration<C>>
    where
        C: Command,
    {
        self.registration
            .downcast_mut::<Registration<C>>()
            .ok_or(CommandError::TypeMismatch {
                expected: type_name::<Registration<C>>(),
                found: "unknown",
            })
    }
}

// 每次解析都构造新的适配器，键与函数指针同一泛型 C，downcast 不会失败
fn resolve_registration<C>(registration: &(dyn Any + Send + Sync)) -> Option<ResolvedAdapter>
where
    C: Command,
{
    let registration = registration.downcast_ref::<Registration<C>>()?;
    let handler = registration.handler.clone()?;
    let adapter: Arc<dyn CommandAdapter<C::Output>> = Arc::new(PipelineAdapter::new(
        handler,
        registration.decorators.clone(),
    ));
    Some(Box::new(adapter))
}

/// 基于内存的命令注册表
/// - 以 (CommandTypeId, ResultTypeId) 为键登记处理器与有序装饰器
/// - 作为 [`AdapterResolver`] 供工厂按需构造适配器
pub struct InMemoryCommandRegistry {
    entries: DashMap<AdapterKey, Entry>,
}

impl Default for InMemoryCommandRegistry {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl InMemoryCommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器；同一命令类型只允许一个
    pub fn register_handler<C, H>(&self, handler: Arc<H>) -> CommandResult<()>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let mut entry = self
            .entries
            .entry(AdapterKey::of::<C>())
            .or_insert_with(Entry::new::<C>);
        let registration = entry.registration_mut::<C>()?;

        if registration.handler.is_some() {
            return Err(CommandError::AlreadyRegistered {
                command: type_name::<C>(),
            });
        }
        let handler: Arc<dyn CommandHandler<C>> = handler;
        registration.handler = Some(handler);
        entry.handled = true;

        tracing::debug!(command = C::NAME, "command handler registered");
        Ok(())
    }

    /// 追加命令装饰器；先注册者位于管道外层
    pub fn register_decorator<C, D>(&self, decorator: Arc<D>) -> CommandResult<()>
    where
        C: Command,
        D: CommandDecorator<C> + 'static,
    {
        let mut entry = self
            .entries
            .entry(AdapterKey::of::<C>())
            .or_insert_with(Entry::new::<C>);
        let registration = entry.registration_mut::<C>()?;
        registration.decorators.push(decorator);

        tracing::debug!(
            command = C::NAME,
            position = registration.decorators.len(),
            "command decorator registered"
        );
        Ok(())
    }

    /// 注册无返回值处理器，结果归一为 `Unit`
    pub fn register_unit_handler<C, H>(&self, handler: H) -> CommandResult<()>
    where
        C: Command<Output = Unit>,
        H: UnitCommandHandler<C> + 'static,
    {
        self.register_handler::<C, _>(Arc::new(UnitHandler(handler)))
    }

    /// 追加无返回值命令的装饰器
    pub fn register_unit_decorator<C, D>(&self, decorator: D) -> CommandResult<()>
    where
        C: Command<Output = Unit>,
        D: UnitCommandDecorator<C> + 'static,
    {
        self.register_decorator::<C, _>(Arc::new(UnitDecorator(decorator)))
    }

    /// 已注册处理器的命令名列表（只读视图）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.value().handled)
            .map(|e| e.value().name)
            .collect()
    }
}

impl AdapterResolver for InMemoryCommandRegistry {
    fn resolve(&self, key: &AdapterKey) -> Option<ResolvedAdapter> {
        let entry = self.entries.get(key)?;
        (entry.resolve)(&*entry.registration)
    }
}
