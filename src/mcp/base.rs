use std::io;

use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::animation::Animator;
use crate::config::Settings;
use crate::core::state::{lock, AgentState, SharedState};
use crate::core::{tools, ChillError, Dice, Gauges, RngDice};
use crate::mcp::response::{self, ToolResponse};
use crate::scheduler;
use crate::status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Shutdown,
    ListTools,
    Call(String),
}

impl Request {
    pub fn parse(line: &str) -> crate::core::Result<Request> {
        let request: Value = serde_json::from_str(line)
            .map_err(|_| ChillError::InvalidJson(line.trim().to_string()))?;

        match request["method"].as_str() {
            Some("shutdown") => Ok(Request::Shutdown),
            Some("tools/list") => Ok(Request::ListTools),
            Some("tools/call") => match request["params"]["name"].as_str() {
                Some(name) if !name.is_empty() => Ok(Request::Call(name.to_string())),
                _ => Err(ChillError::MissingMethod),
            },
            Some(name) if !name.is_empty() => Ok(Request::Call(name.to_string())),
            _ => Err(ChillError::MissingMethod),
        }
    }
}

/// Why the request loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Shutdown,
    EndOfInput,
    BrokenPipe,
    Interrupted,
}

pub struct ChillServer {
    state: SharedState,
    settings: Settings,
    animator: Animator,
    session_id: Uuid,
}

impl ChillServer {
    pub fn new(settings: Settings) -> Self {
        let dice: Box<dyn Dice> = match settings.seed {
            Some(seed) => Box::new(RngDice::seeded(seed)),
            None => Box::new(RngDice::from_entropy()),
        };
        let state = AgentState::from_settings(&settings, dice).shared();
        Self::with_state(settings, state)
    }

    pub fn with_state(settings: Settings, state: SharedState) -> Self {
        ChillServer {
            state,
            animator: Animator::new(settings.animate),
            settings,
            session_id: Uuid::new_v4(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn gauges(&self) -> Gauges {
        lock(&self.state).gauges()
    }

    /// Banner, intro panel and the opening status.
    pub async fn introduce(&self) {
        self.animator.startup_banner().await;
        self.animator.print_intro(&self.settings, self.session_id);
        status::display_status(self.gauges());
    }

    pub fn start_background_tasks(&self) -> Vec<JoinHandle<()>> {
        scheduler::spawn_background_tasks(&self.state, true)
    }

    /// Answer one input line. `None` means shutdown was requested.
    pub async fn handle_line(&self, line: &str) -> Option<ToolResponse> {
        match Request::parse(line) {
            Ok(Request::Shutdown) => None,
            Ok(Request::ListTools) => Some(ToolResponse::text(response::tool_listing())),
            Ok(Request::Call(name)) => Some(self.execute_tool(&name).await),
            Err(err) => {
                warn!(error = %err, "rejected request");
                Some(ToolResponse::error(&err))
            }
        }
    }

    pub async fn execute_tool(&self, name: &str) -> ToolResponse {
        let Some(tool) = tools::find(name) else {
            let err = ChillError::UnknownTool(name.to_string());
            warn!(error = %err, "rejected request");
            return ToolResponse::error(&err);
        };

        let outcome = lock(&self.state).apply_tool(tool);
        debug!(
            tool = tool.name,
            succeeded = outcome.succeeded,
            reduction = outcome.stress_reduction,
            stress = outcome.gauges.stress,
            boss_alert = outcome.gauges.boss_alert,
            event = ?outcome.event,
            penalty = outcome.penalty,
            "break taken"
        );

        if outcome.penalty {
            warn!(
                delay_secs = self.settings.penalty_delay.as_secs(),
                "boss alert maxed out, applying penalty"
            );
            self.animator.boss_watch(self.settings.penalty_delay).await;
        } else {
            self.animator
                .play_tool(tool, outcome.flavor, self.settings.tool_animation)
                .await;
        }

        status::report_outcome(tool, &outcome, self.settings.penalty_delay);
        status::display_status(outcome.gauges);

        ToolResponse::text(response::break_report(&outcome, self.settings.penalty_delay))
    }

    /// Line-delimited JSON in, one JSON object per line out.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<StopReason>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                info!("end of input");
                return Ok(StopReason::EndOfInput);
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(response) = self.handle_line(line).await else {
                info!("shutdown requested");
                return Ok(StopReason::Shutdown);
            };

            match write_response(&mut writer, &response).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    warn!("stdout closed (broken pipe)");
                    return Ok(StopReason::BrokenPipe);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Serve stdin/stdout until shutdown, end of input or Ctrl+C.
    pub async fn run_stdio(&self) -> Result<StopReason> {
        let span = info_span!("session", id = %self.session_id);
        async {
            let reader = BufReader::new(tokio::io::stdin());
            let writer = tokio::io::stdout();

            let stopped: Result<StopReason> = tokio::select! {
                result = self.serve(reader, writer) => result,
                signal = tokio::signal::ctrl_c() => match signal {
                    Ok(()) => {
                        info!("interrupted");
                        Ok(StopReason::Interrupted)
                    }
                    Err(e) => Err(e.into()),
                },
            };
            stopped
        }
        .instrument(span)
        .await
    }
}

async fn write_response<W>(writer: &mut W, response: &ToolResponse) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(response)?;
    line.push(b'\n');
    writer.write_all(&line).await?;
    writer.flush().await
}
