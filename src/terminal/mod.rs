// ============================================================================
// Terminal front end
// ============================================================================
//
// Reads one line at a time, turns it into a `Command`, dispatches it and
// prints the re-rendered screen. Errors are reported and the loop goes on.
//
// ============================================================================

mod input;
mod render;

use std::io::{self, BufRead, BufReader};
use std::ops::ControlFlow;
use std::thread;

use anyhow::Result;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use crate::domain::order::{OrderError, OrderStore};
use crate::metrics::Metrics;
use crate::navigation::{Action, NavigationError, Screen, Session};

pub use input::{parse_line, Command, InputError};
pub use render::{render_history, render_screen};

pub struct App<'a> {
    store: &'a mut OrderStore,
    metrics: &'a Metrics,
    session: Session,
}

impl<'a> App<'a> {
    pub fn new(store: &'a mut OrderStore, metrics: &'a Metrics, start: Screen) -> Self {
        Self {
            store,
            metrics,
            session: Session::new(start),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen_text(&self) -> String {
        render_screen(&self.session, self.store)
    }

    /// Handle one input line. `Break` ends the session.
    pub fn handle_line(&mut self, line: &str) -> ControlFlow<(), String> {
        let command = match parse_line(self.session.screen(), line) {
            Ok(command) => command,
            Err(InputError::Empty) => return ControlFlow::Continue(self.screen_text()),
            Err(e) => {
                self.metrics.record_rejection("input");
                return ControlFlow::Continue(format!("! {e}"));
            }
        };

        let reply = match command {
            Command::Quit => return ControlFlow::Break(()),
            Command::Dispatch(action) => self.dispatch(action),
            Command::Help => format!("Commands: {}\nAlways: help | metrics | quit", render::hints(self.session.screen())),
            Command::History(order_id) => match order_id.or(self.session.editing()) {
                Some(order_id) => render_history(order_id, self.store.history(order_id)),
                None => "! Open an order first, or give its number: history <id>".to_string(),
            },
            Command::Json => match serde_json::to_string_pretty(self.store.list_orders()) {
                Ok(json) => json,
                Err(e) => format!("! {e}"),
            },
            Command::Metrics => match self.metrics.render() {
                Ok(text) => text,
                Err(e) => format!("! {e}"),
            },
        };

        ControlFlow::Continue(reply)
    }

    fn dispatch(&mut self, action: Action) -> String {
        let status = match &action {
            Action::SetStatus(status) => Some(status.clone()),
            _ => None,
        };
        let submitted = action == Action::SubmitOrder;

        match self.session.dispatch(self.store, action) {
            Ok(transition) => {
                self.metrics.record_transition(&transition);
                if submitted {
                    self.metrics.record_order_created();
                }
                // Re-selecting the current status records no event
                if let Some(status) = status.filter(|_| transition.recorded_events > 0) {
                    self.metrics.record_status_change(&status);
                }
                self.screen_text()
            }
            Err(e) => {
                tracing::debug!(screen = %self.session.screen(), error = %e, "Action rejected");
                self.metrics.record_rejection(rejection_reason(&e));
                format!("! {e}")
            }
        }
    }
}

fn rejection_reason(error: &NavigationError) -> &'static str {
    match error {
        NavigationError::ActionNotAvailable { .. } => "action_not_available",
        NavigationError::NoOrderSelected => "no_order_selected",
        NavigationError::Order(OrderError::NotFound(_)) => "not_found",
        NavigationError::Order(OrderError::InvalidStatus(_)) => "invalid_status",
        NavigationError::Order(_) => "order",
    }
}

/// Drive the app from stdin until `quit`, end of input or Ctrl-C.
pub async fn run(app: &mut App<'_>) -> Result<()> {
    let mut lines = spawn_line_reader(BufReader::new(io::stdin()))?;
    let mut stdout = tokio::io::stdout();

    write_block(&mut stdout, &app.screen_text()).await?;

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line.transpose()? else {
                    tracing::debug!("End of input");
                    break;
                };
                match app.handle_line(&line) {
                    ControlFlow::Continue(reply) => write_block(&mut stdout, &reply).await?,
                    ControlFlow::Break(()) => break,
                }
            }

            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    Ok(())
}

/// Read lines on a detached OS thread and forward them over a channel.
///
/// A read parked on stdin must not hold up runtime shutdown, so it cannot
/// live on the tokio blocking pool. The channel closes at end of input.
fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;

    Ok(rx)
}

async fn write_block(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n\n").await?;
    stdout.flush().await?;
    Ok(())
}
