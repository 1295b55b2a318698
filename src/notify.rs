//! 사용자 알림(토스트) 도우미.
//!
//! 주변 글루(설정 저장, 보고서 내보내기 등)의 실패는 모두 여기서 하나의
//! 알림으로 축약한다. 계산 코어는 알림을 만들지 않는다.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{error, info, warn};

/// 알림 표시 시간.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 4;

/// 알림 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(level: NotifyLevel, message: impl Into<String>, now: Instant) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= TOAST_LIFETIME
    }
}

/// 화면에 떠 있는 알림 목록. 오래된 것부터 밀려난다.
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Notification>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// 알림을 추가하고 같은 내용을 로그로도 남긴다.
    pub fn push(&mut self, level: NotifyLevel, message: impl Into<String>, now: Instant) {
        let note = Notification::new(level, message, now);
        log_notification(&note);
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(note);
    }

    /// 만료된 알림을 제거한다.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| !n.is_expired(now))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn log_notification(note: &Notification) {
    match note.level {
        NotifyLevel::Error => error!("{}", note.message),
        NotifyLevel::Warning => warn!("{}", note.message),
        NotifyLevel::Info | NotifyLevel::Success => info!("{}", note.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_lifetime() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.push(NotifyLevel::Info, "hello", t0);
        assert_eq!(toasts.active(t0 + Duration::from_secs(4)).count(), 1);
        toasts.prune(t0 + TOAST_LIFETIME);
        assert!(toasts.is_empty());
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        for i in 0..6 {
            toasts.push(NotifyLevel::Warning, format!("n{i}"), t0);
        }
        let msgs: Vec<_> = toasts.active(t0).map(|n| n.message.clone()).collect();
        assert_eq!(msgs, vec!["n2", "n3", "n4", "n5"]);
    }
}
