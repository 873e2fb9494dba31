use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use commander::command_decorator::CommandDecorator;
use commander::command_handler::CommandHandler;
use commander::delegate::CommandDelegate;
use commander::{
    CancellationToken, CommandBus, CommandDispatcher, CommandError, CommandResult,
    InMemoryCommandRegistry, LoggingDecorator,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Method {
    #[default]
    Get,
    Delete,
}

/// 问候命令
#[commander::command(output = String, name = "greet")]
struct Greet {
    name: Option<String>,
    method: Method,
}

struct GreetHandler;

#[async_trait]
impl CommandHandler<Greet> for GreetHandler {
    async fn handle(&self, cmd: &Greet, _cancel: &CancellationToken) -> CommandResult<String> {
        let greeting = match cmd.method {
            Method::Delete => "Goodbye",
            Method::Get => "Hello",
        };
        let name = cmd
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("World");
        Ok(format!("{greeting}, {name}!"))
    }
}

struct GreetDecorator;

#[async_trait]
impl CommandDecorator<Greet> for GreetDecorator {
    async fn decorate(
        &self,
        cmd: &Greet,
        cancel: &CancellationToken,
        next: CommandDelegate<Greet>,
    ) -> CommandResult<String> {
        Ok(format!("I've been commanded to say '{}'!", next(cmd, cancel).await?))
    }
}

/// 慢命令：用于演示以取消表达超时
#[commander::command(output = u64, name = "slow")]
struct Slow {
    work: Duration,
}

struct SlowHandler;

#[async_trait]
impl CommandHandler<Slow> for SlowHandler {
    async fn handle(&self, cmd: &Slow, cancel: &CancellationToken) -> CommandResult<u64> {
        tokio::select! {
            _ = cancel.cancelled() => Err(CommandError::Cancelled),
            _ = tokio::time::sleep(cmd.work) => Ok(cmd.work.as_millis() as u64),
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Dispatches the greet command through a decorated pipeline")]
struct Args {
    /// Name to greet; defaults to "World"
    #[arg(long)]
    name: Option<String>,
    /// Request method the greeting answers
    #[arg(long, value_enum, default_value_t = Method::Get)]
    method: Method,
    /// Deadline for the slow command, in milliseconds
    #[arg(long, default_value_t = 50)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,commander=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let logging = LoggingDecorator::builder()
        .slow_threshold(Duration::from_millis(100))
        .build();

    let registry = Arc::new(InMemoryCommandRegistry::new());
    registry.register_handler::<Greet, _>(Arc::new(GreetHandler))?;
    registry.register_decorator::<Greet, _>(Arc::new(logging))?;
    registry.register_decorator::<Greet, _>(Arc::new(GreetDecorator))?;
    registry.register_handler::<Slow, _>(Arc::new(SlowHandler))?;
    registry.register_decorator::<Slow, _>(Arc::new(logging))?;
    tracing::info!(commands = ?registry.registered_commands(), "registry ready");

    let bus = CommandDispatcher::from_resolver(registry);

    let greeting = bus
        .send(&Greet {
            name: args.name,
            method: args.method,
        })
        .await?;
    println!("{greeting}");

    // 超时即在截止时间后取消令牌
    let token = CancellationToken::new();
    let deadline = token.clone();
    let timeout = Duration::from_millis(args.timeout_ms);
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        deadline.cancel();
    });

    match bus
        .dispatch(
            &Slow {
                work: Duration::from_millis(200),
            },
            &token,
        )
        .await
    {
        Ok(ms) => println!("slow command finished after {ms} ms"),
        Err(err) if err.is_cancelled() => println!("slow command cancelled after {timeout:?}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
