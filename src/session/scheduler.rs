use std::future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Sleep, sleep};

use super::controller::Schedule;

/// Single cancellable tick deadline.
///
/// There is never more than one deadline: arming replaces the pending one.
/// A fired deadline is not re-armed automatically; the caller re-arms once
/// the tick has been applied and drawn.
pub struct TickScheduler {
    period: Duration,
    deadline: Option<Pin<Box<Sleep>>>,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Schedule the next tick one period from now, dropping any pending one
    pub fn arm(&mut self) {
        self.deadline = Some(Box::pin(sleep(self.period)));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn apply(&mut self, schedule: Schedule) {
        match schedule {
            Schedule::Arm => self.arm(),
            Schedule::Cancel => self.cancel(),
            Schedule::Keep => {}
        }
    }

    /// Wait for the pending deadline. Never resolves while disarmed.
    pub async fn wait(&mut self) {
        match self.deadline.as_mut() {
            Some(deadline) => {
                deadline.as_mut().await;
                self.deadline = None;
            }
            None => future::pending().await,
        }
    }
}
