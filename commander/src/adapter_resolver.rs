//! 适配器解析能力（由装配层提供）
//!
//! 以 `(命令类型, 结果类型)` 作为复合键，返回对应的适配器或 `None`。
//! 核心将 `None` 视为致命的装配缺陷，从不静默跳过分发。
//!
use crate::command::{AnyCommand, Command};
use std::any::{Any, TypeId, type_name};
use std::hash::{Hash, Hasher};

/// 解析结果：内部为 `Arc<dyn CommandAdapter<R>>`，由工厂按 `R` 还原
pub type ResolvedAdapter = Box<dyn Any + Send + Sync>;

/// 适配器查找键
///
/// 相等与哈希只取决于两个 `TypeId`，类型名仅用于诊断信息。
#[derive(Clone, Copy, Debug)]
pub struct AdapterKey {
    command: TypeId,
    result: TypeId,
    command_name: &'static str,
    result_name: &'static str,
}

impl AdapterKey {
    pub fn of<C>() -> Self
    where
        C: Command,
    {
        Self {
            command: TypeId::of::<C>(),
            result: TypeId::of::<C::Output>(),
            command_name: type_name::<C>(),
            result_name: type_name::<C::Output>(),
        }
    }

    /// 依据命令的运行时类型与声明的结果类型构造
    pub fn for_command<R>(command: &dyn AnyCommand<R>) -> Self
    where
        R: 'static,
    {
        Self {
            command: command.command_type_id(),
            result: TypeId::of::<R>(),
            command_name: command.type_name(),
            result_name: type_name::<R>(),
        }
    }

    pub fn command_name(&self) -> &'static str {
        self.command_name
    }

    pub fn result_name(&self) -> &'static str {
        self.result_name
    }
}

impl PartialEq for AdapterKey {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command && self.result == other.result
    }
}

impl Eq for AdapterKey {}

impl Hash for AdapterKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.command.hash(state);
        self.result.hash(state);
    }
}

pub trait AdapterResolver: Send + Sync {
    fn resolve(&self, key: &AdapterKey) -> Option<ResolvedAdapter>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::erase;

    struct Greet;

    impl Command for Greet {
        const NAME: &'static str = "greet";
        type Output = String;
    }

    #[test]
    fn static_and_runtime_keys_agree() {
        let by_type = AdapterKey::of::<Greet>();
        let by_value = AdapterKey::for_command(erase(&Greet));

        assert_eq!(by_type, by_value);
        assert!(by_value.command_name().ends_with("Greet"));
        assert_eq!(by_value.result_name(), type_name::<String>());
    }
}
