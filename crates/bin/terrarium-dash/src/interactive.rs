//! Key commands read from stdin while the dashboard is being watched.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use terrarium_app::ports::{ControllerApi, DisplaySurface, Notifier};
use terrarium_app::services::dashboard_poller::DashboardPoller;

const HELP: &str = "r = refresh, m = toggle mock mode, t = test sensor, q = quit";

/// A user action typed on one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Refresh,
    ToggleMock,
    TestSensor,
    Quit,
}

impl KeyCommand {
    /// Parse one input line; `None` for blank or unknown input.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "refresh" => Some(Self::Refresh),
            "m" | "mock" => Some(Self::ToggleMock),
            "t" | "test" => Some(Self::TestSensor),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Why [`run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Shutdown,
}

/// Execute key commands from `input` until `q` or until `shutdown`
/// resolves.
///
/// Once `input` is exhausted only `shutdown` can end the session, so a
/// dashboard started with a closed stdin keeps polling until interrupted.
/// Failed actions are logged and the session continues.
pub async fn run<A, S, N, R>(
    poller: &DashboardPoller<A, S, N>,
    input: R,
    shutdown: impl Future<Output = ()>,
) -> Exit
where
    A: ControllerApi,
    S: DisplaySurface,
    N: Notifier,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut input_open = true;
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            () = &mut shutdown => return Exit::Shutdown,
            line = lines.next_line(), if input_open => line,
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::debug!("input closed, waiting for shutdown");
                input_open = false;
                continue;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read input");
                input_open = false;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = KeyCommand::parse(&line) else {
            tracing::warn!(input = %line.trim(), "unknown command ({HELP})");
            continue;
        };
        if command == KeyCommand::Quit {
            return Exit::Quit;
        }
        execute(poller, command).await;
    }
}

async fn execute<A, S, N>(poller: &DashboardPoller<A, S, N>, command: KeyCommand)
where
    A: ControllerApi,
    S: DisplaySurface,
    N: Notifier,
{
    match command {
        KeyCommand::Refresh => {
            poller.refresh().await;
        }
        KeyCommand::ToggleMock => {
            if let Err(err) = poller.toggle_mock().await {
                tracing::error!(error = ?err, "failed to toggle mock mode");
            }
        }
        KeyCommand::TestSensor => {
            if let Err(err) = poller.test_sensor().await {
                tracing::error!(error = ?err, "failed to run sensor test");
            }
        }
        KeyCommand::Quit => {}
    }
}
