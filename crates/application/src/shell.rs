//! One-shot visibility gates for the entry shell.

use std::time::{Duration, Instant};

/// `Hidden -> Visible`, never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotGate {
    Hidden { reveal_at: Option<Instant> },
    Visible,
}

impl Default for OneShotGate {
    fn default() -> Self {
        Self::Hidden { reveal_at: None }
    }
}

impl OneShotGate {
    pub fn armed(now: Instant, delay: Duration) -> Self {
        Self::Hidden {
            reveal_at: Some(now + delay),
        }
    }

    /// Schedules the reveal. Re-arming an armed or visible gate does nothing.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        if let Self::Hidden { reveal_at: None } = self {
            *self = Self::armed(now, delay);
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        match *self {
            Self::Hidden {
                reveal_at: Some(at),
            } if now >= at => {
                *self = Self::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Self::Hidden { reveal_at } => *reveal_at,
            Self::Visible => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Welcome {
    pub gate: OneShotGate,
    pub dismissed: bool,
}

/// App fade-in plus the optional welcome overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    app: OneShotGate,
    welcome: Option<Welcome>,
    reveal_delay: Duration,
}

impl Shell {
    pub fn mount(now: Instant, show_welcome: bool, reveal_delay: Duration) -> Self {
        if show_welcome {
            Self {
                app: OneShotGate::default(),
                welcome: Some(Welcome {
                    gate: OneShotGate::armed(now, reveal_delay),
                    dismissed: false,
                }),
                reveal_delay,
            }
        } else {
            Self {
                app: OneShotGate::armed(now, reveal_delay),
                welcome: None,
                reveal_delay,
            }
        }
    }

    pub fn welcome_active(&self) -> bool {
        self.welcome.is_some_and(|w| !w.dismissed)
    }

    pub fn welcome_visible(&self) -> bool {
        self.welcome.is_some_and(|w| !w.dismissed && w.gate.is_visible())
    }

    pub fn app_visible(&self) -> bool {
        self.app.is_visible()
    }

    pub fn dismiss_welcome(&mut self, now: Instant) {
        let Some(welcome) = self.welcome.as_mut() else {
            return;
        };
        if welcome.dismissed {
            return;
        }
        welcome.dismissed = true;
        self.app.arm(now, self.reveal_delay);
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.app.tick(now);
        if let Some(welcome) = self.welcome.as_mut() {
            changed |= welcome.gate.tick(now);
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        let welcome = self
            .welcome
            .filter(|w| !w.dismissed)
            .and_then(|w| w.gate.deadline());
        match (self.app.deadline(), welcome) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(50);

    #[test]
    fn gate_reveals_once() {
        let t0 = Instant::now();
        let mut gate = OneShotGate::armed(t0, DELAY);
        assert!(!gate.tick(t0 + Duration::from_millis(49)));
        assert!(!gate.is_visible());
        assert!(gate.tick(t0 + DELAY));
        assert!(gate.is_visible());
        assert!(!gate.tick(t0 + Duration::from_secs(10)));
        gate.arm(t0, DELAY);
        assert!(gate.is_visible());
    }

    #[test]
    fn unarmed_gate_stays_hidden() {
        let mut gate = OneShotGate::default();
        assert!(!gate.tick(Instant::now() + Duration::from_secs(60)));
        assert_eq!(gate.deadline(), None);
    }

    #[test]
    fn without_welcome_app_fades_in_after_mount() {
        let t0 = Instant::now();
        let mut shell = Shell::mount(t0, false, DELAY);
        assert!(!shell.welcome_active());
        assert!(!shell.app_visible());
        assert_eq!(shell.next_deadline(), Some(t0 + DELAY));
        shell.tick(t0 + DELAY);
        assert!(shell.app_visible());
        assert_eq!(shell.next_deadline(), None);
    }

    #[test]
    fn welcome_blocks_app_until_dismissed() {
        let t0 = Instant::now();
        let mut shell = Shell::mount(t0, true, DELAY);
        assert!(shell.welcome_active());
        assert!(!shell.welcome_visible());
        shell.tick(t0 + DELAY);
        assert!(shell.welcome_visible());

        let late = t0 + Duration::from_secs(5);
        shell.tick(late);
        assert!(!shell.app_visible());

        shell.dismiss_welcome(late);
        assert!(!shell.welcome_active());
        assert!(!shell.welcome_visible());
        assert!(!shell.app_visible());
        shell.tick(late + DELAY);
        assert!(shell.app_visible());
    }

    #[test]
    fn dismiss_is_one_shot() {
        let t0 = Instant::now();
        let mut shell = Shell::mount(t0, true, DELAY);
        shell.dismiss_welcome(t0);
        shell.dismiss_welcome(t0 + Duration::from_secs(1));
        assert_eq!(shell.next_deadline(), Some(t0 + DELAY));
    }
}
