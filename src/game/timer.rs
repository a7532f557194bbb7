use super::scheduler::TaskId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    NotStarted,
    Running(TaskId),
    Stopped,
}

/// Elapsed-seconds counter for one level. Runs at most once: after
/// [`ElapsedTimer::stop`] it stays frozen until replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElapsedTimer {
    seconds: u32,
    state: TimerState,
}

impl ElapsedTimer {
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running(_))
    }

    pub fn can_start(&self) -> bool {
        self.state == TimerState::NotStarted
    }

    pub fn start(&mut self, tick: TaskId) {
        if self.can_start() {
            self.state = TimerState::Running(tick);
        }
    }

    pub fn tick(&mut self) -> u32 {
        if self.is_running() {
            self.seconds = self.seconds.saturating_add(1);
        }
        self.seconds
    }

    /// Freezes the counter. Returns the tick task to cancel, if one was armed.
    pub fn stop(&mut self) -> Option<TaskId> {
        match std::mem::replace(&mut self.state, TimerState::Stopped) {
            TimerState::Running(tick) => Some(tick),
            TimerState::NotStarted | TimerState::Stopped => None,
        }
    }

    pub fn formatted(&self) -> String {
        format_mm_ss(self.seconds)
    }
}

pub fn format_mm_ss(total_secs: u32) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
