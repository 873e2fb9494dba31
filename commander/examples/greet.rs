use async_trait::async_trait;
use commander::command_decorator::CommandDecorator;
use commander::command_handler::CommandHandler;
use commander::delegate::CommandDelegate;
use commander::{
    CancellationToken, CommandBus, CommandDispatcher, CommandError, CommandResult,
    InMemoryCommandRegistry, command,
};
use std::sync::Arc;

#[command(output = String, name = "greet")]
#[derive(Default)]
struct Greet {
    name: Option<String>,
}

struct GreetHandler;

#[async_trait]
impl CommandHandler<Greet> for GreetHandler {
    async fn handle(&self, cmd: &Greet, _cancel: &CancellationToken) -> CommandResult<String> {
        let name = cmd
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("World");
        Ok(format!("Hello, {name}!"))
    }
}

struct Commanded;

#[async_trait]
impl CommandDecorator<Greet> for Commanded {
    async fn decorate(
        &self,
        cmd: &Greet,
        cancel: &CancellationToken,
        next: CommandDelegate<Greet>,
    ) -> CommandResult<String> {
        Ok(format!("I've been commanded to say '{}'!", next(cmd, cancel).await?))
    }
}

#[command(output = u32)]
struct Unregistered;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(InMemoryCommandRegistry::new());
    registry.register_handler::<Greet, _>(Arc::new(GreetHandler))?;
    registry.register_decorator::<Greet, _>(Arc::new(Commanded))?;

    let bus = CommandDispatcher::from_resolver(registry);

    println!("{}", bus.send(&Greet::default()).await?);
    println!(
        "{}",
        bus.send(&Greet {
            name: Some("Alice".into())
        })
        .await?
    );

    // 未注册的命令 -> 返回配置错误
    if let Err(err @ CommandError::AdapterNotRegistered { .. }) = bus.send(&Unregistered).await {
        eprintln!("not registered as expected: {err}");
    }
    Ok(())
}
