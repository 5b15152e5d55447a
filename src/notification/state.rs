use std::time::{Duration, Instant};

use crate::host::{Notice, NoticeLevel};

/// How long a notification stays visible
const INFO_DURATION: Duration = Duration::from_secs(4);
/// Warnings and errors linger longer so they are not missed mid-review
const ALERT_DURATION: Duration = Duration::from_secs(8);

/// Holds the currently displayed transient notification
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<(Notice, Instant)>,
}

impl NotificationState {
    pub fn new() -> Self {
        NotificationState { current: None }
    }

    /// Display a notice, replacing whatever is currently shown
    pub fn show(&mut self, notice: Notice) {
        self.current = Some((notice, Instant::now()));
    }

    /// The notice to render, if one is still within its display window
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    /// Drop the notice once its display window has passed
    pub fn tick(&mut self) {
        if let Some((notice, shown_at)) = &self.current {
            let duration = match notice.level {
                NoticeLevel::Info => INFO_DURATION,
                NoticeLevel::Warning | NoticeLevel::Error => ALERT_DURATION,
            };
            if shown_at.elapsed() >= duration {
                self.current = None;
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
