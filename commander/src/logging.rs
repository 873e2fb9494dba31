//! 日志装饰器（LoggingDecorator）
//!
//! 适用于任意命令类型的横切装饰器：记录开始、耗时、慢执行与失败，
//! 结果与错误均原样透传。
//!
use crate::{
    command::Command, command_decorator::CommandDecorator, delegate::CommandDelegate,
    error::CommandResult,
};
use async_trait::async_trait;
use bon::Builder;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// 日志装饰器配置
///
/// ```rust
/// use commander::LoggingDecorator;
/// use std::time::Duration;
///
/// let logging = LoggingDecorator::builder()
///     .slow_threshold(Duration::from_millis(200))
///     .log_errors(false)
///     .build();
/// assert_eq!(logging.slow_threshold(), Duration::from_millis(200));
/// ```
#[derive(Builder, Clone, Copy, Debug)]
pub struct LoggingDecorator {
    /// 超过该耗时以 `warn` 级别记录
    #[builder(default = Duration::from_millis(500))]
    slow_threshold: Duration,
    /// 是否记录失败（取消始终以 `debug` 记录）
    #[builder(default = true)]
    log_errors: bool,
}

impl Default for LoggingDecorator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LoggingDecorator {
    pub fn slow_threshold(&self) -> Duration {
        self.slow_threshold
    }

    pub fn log_errors(&self) -> bool {
        self.log_errors
    }
}

#[async_trait]
impl<C> CommandDecorator<C> for LoggingDecorator
where
    C: Command,
{
    async fn decorate(
        &self,
        cmd: &C,
        cancel: &CancellationToken,
        next: CommandDelegate<C>,
    ) -> CommandResult<C::Output> {
        let started = Instant::now();
        tracing::debug!(command = C::NAME, "command started");

        let result = next(cmd, cancel).await;
        let elapsed = started.elapsed();

        match &result {
            Ok(_) if elapsed > self.slow_threshold => {
                tracing::warn!(command = C::NAME, ?elapsed, "slow command");
            }
            Ok(_) => {
                tracing::debug!(command = C::NAME, ?elapsed, "command completed");
            }
            Err(err) if err.is_cancelled() => {
                tracing::debug!(command = C::NAME, ?elapsed, "command cancelled");
            }
            Err(err) if self.log_errors => {
                tracing::warn!(command = C::NAME, ?elapsed, error = %err, "command failed");
            }
            Err(_) => {}
        }

        result
    }
}
