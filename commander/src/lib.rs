//! 进程内命令分发库（commander）
//!
//! 调用方提交一个带类型的命令，得到带类型的结果，而无需知道由哪个处理器执行：
//! - 命令（`command`）声明唯一的结果类型，无结果时使用 [`Unit`]
//! - 处理器（`command_handler`）执行实际工作，每个命令类型恰好一个
//! - 装饰器（`command_decorator`）以中间件方式包裹处理器，按注册顺序由外到内
//! - 无返回值的命令可实现 [`UnitCommandHandler`] / [`UnitCommandDecorator`]，结果归一为 [`Unit`]
//! - 适配器（`command_adapter`）绑定处理器与装饰器，提供类型擦除的执行入口
//! - 工厂（`adapter_factory`）通过解析器（`adapter_resolver`）查找适配器
//! - 分发器（`dispatcher`）是唯一的公共入口，实现 [`CommandBus`]
//!
//! 典型用法：
//! 1. 定义命令（或使用 `#[command(output = ...)]`）与处理器；
//! 2. 在 [`InMemoryCommandRegistry`] 中注册处理器与装饰器；
//! 3. 用注册表构造 [`CommandDispatcher`]，通过 `dispatch`/`send` 分发命令。
//!
pub mod adapter_factory;
pub mod adapter_resolver;
pub mod cancellation;
pub mod command;
pub mod command_adapter;
pub mod command_bus;
pub mod command_decorator;
pub mod command_handler;
pub mod delegate;
pub mod dispatcher;
pub mod error;
pub mod inmemory_registry;
pub mod logging;
pub mod unit;

pub use command_bus::CommandBus;
pub use command_decorator::{CommandDecorator, UnitCommandDecorator, UnitDecorator};
pub use command_handler::{CommandHandler, UnitCommandHandler, UnitHandler};
pub use commander_macros::command;
pub use dispatcher::CommandDispatcher;
pub use error::{CommandError, CommandResult};
pub use inmemory_registry::InMemoryCommandRegistry;
pub use logging::LoggingDecorator;
pub use tokio_util::sync::CancellationToken;
pub use unit::Unit;

// 允许在本 crate 内部通过 ::commander 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::commander 路径。
extern crate self as commander;
