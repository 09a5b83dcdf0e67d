use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use evaluation::EvaluationError;
use log::debug;

use super::commands::{EngineCommand, EngineReply, Score};
use super::decoder::Decoder;
use super::encoder::Encoder;

const QUIT_POLLS: u32 = 10;
const QUIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A running engine, alive for as long as this value is.
///
/// Every read shares one deadline fixed at spawn time. Dropping the process
/// asks the engine to quit and kills it if it lingers.
pub struct EngineProcess {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    replies: Receiver<String>,
    budget: Duration,
    deadline: Instant,
}

impl EngineProcess {
    pub fn spawn(program: &Path, args: &[String], budget: Duration) -> Result<Self, EvaluationError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EvaluationError::Spawn {
                path: program.display().to_string(),
                source,
            })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            reap(&mut child);
            return Err(EvaluationError::EngineExited);
        };

        // Blocking reads happen on their own thread so the deadline can be enforced
        let (reply_tx, replies) = channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if reply_tx.send(line).is_err() {
                    break;
                }
            }
        });

        debug!("Started engine {} with budget {:?}", program.display(), budget);

        Ok(Self {
            child,
            stdin: BufWriter::new(stdin),
            replies,
            budget,
            deadline: Instant::now() + budget,
        })
    }

    pub fn send(&mut self, command: &EngineCommand) -> Result<(), EvaluationError> {
        let line = Encoder.encode(command);
        debug!("Engine <- {:?}", line);

        writeln!(self.stdin, "{}", line)?;
        self.stdin.flush()?;
        Ok(())
    }

    pub fn recv(&mut self) -> Result<EngineReply, EvaluationError> {
        let remaining = self.deadline.saturating_duration_since(Instant::now());

        match self.replies.recv_timeout(remaining) {
            Ok(line) => {
                debug!("Engine -> {:?}", line);
                Ok(Decoder.decode(&line))
            }
            Err(RecvTimeoutError::Timeout) => Err(EvaluationError::Timeout(self.budget)),
            Err(RecvTimeoutError::Disconnected) => Err(EvaluationError::EngineExited),
        }
    }

    /// `uci` / `uciok` then `isready` / `readyok`.
    pub fn handshake(&mut self) -> Result<(), EvaluationError> {
        self.send(&EngineCommand::Uci)?;
        self.wait_for(EngineReply::UciOk)?;
        self.send(&EngineCommand::IsReady)?;
        self.wait_for(EngineReply::ReadyOk)
    }

    /// Searches `fen` for `move_time` and returns the last score reported before
    /// `bestmove`, relative to the side to move.
    pub fn analyse(&mut self, fen: &str, move_time: Duration) -> Result<Score, EvaluationError> {
        self.send(&EngineCommand::Position {
            fen: fen.to_string(),
        })?;
        self.send(&EngineCommand::Go {
            move_time: move_time.as_millis() as u64,
        })?;

        let mut last_score = None;
        let mut last_depth = None;
        loop {
            match self.recv()? {
                EngineReply::Info(info) => {
                    if let Some(score) = info.score {
                        last_score = Some(score);
                        last_depth = info.depth;
                    }
                }
                EngineReply::BestMove(mv) => {
                    debug!(
                        "Engine best move {} with score {:?} at depth {:?}",
                        mv, last_score, last_depth
                    );
                    break;
                }
                EngineReply::Malformed(line) => return Err(EvaluationError::InvalidReply(line)),
                _ => {}
            }
        }

        last_score.ok_or(EvaluationError::MissingScore)
    }

    fn wait_for(&mut self, expected: EngineReply) -> Result<(), EvaluationError> {
        loop {
            if self.recv()? == expected {
                return Ok(());
            }
        }
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        if self.send(&EngineCommand::Quit).is_err() {
            reap(&mut self.child);
            return;
        }

        for _ in 0..QUIT_POLLS {
            match self.child.try_wait() {
                Ok(Some(_)) => return,
                Ok(None) => thread::sleep(QUIT_POLL_INTERVAL),
                Err(_) => break,
            }
        }

        debug!("Engine ignored quit, killing it");
        reap(&mut self.child);
    }
}

/// Kill and wait, so no zombie is left behind.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
