//! Admin gate and display-mode state machine
//!
//! The workshop is opened by comparing a candidate string against one
//! configured secret. This is deliberately not an authentication system:
//! no hashing, no rate limiting, no tokens, no lockout. A static portfolio
//! holds no real secret; the gate only keeps drafts out of the public view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GateError {
    #[error("Wrong workshop password")]
    BadPassword,

    #[error("Workshop is closed")]
    NotAdmin,
}

pub type Result<T> = std::result::Result<T, GateError>;

/// Workshop sub-view; freely switchable once inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Radar,
    Config,
}

/// Top-level display mode: entered at Public on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Public,
    Admin { tab: AdminTab },
}

impl Mode {
    pub fn is_admin(&self) -> bool {
        matches!(self, Mode::Admin { .. })
    }

    pub fn tab(&self) -> Option<AdminTab> {
        match self {
            Mode::Public => None,
            Mode::Admin { tab } => Some(*tab),
        }
    }
}

/// Plaintext comparator against the configured secret
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        AdminGate {
            secret: secret.into(),
        }
    }

    pub fn verify(&self, candidate: &str) -> bool {
        candidate == self.secret
    }
}

/// Owns the current mode and drives its transitions
///
/// Public -> Admin only through a successful gate check; Admin -> Public
/// through an explicit logout. The workshop tab resets to Radar on every
/// login; there is no persisted tab history.
pub struct ModeController {
    gate: AdminGate,
    mode: Mode,
    session_started: Option<DateTime<Utc>>,
}

impl ModeController {
    pub fn new(gate: AdminGate) -> Self {
        ModeController {
            gate,
            mode: Mode::Public,
            session_started: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_admin(&self) -> bool {
        self.mode.is_admin()
    }

    /// Attempt to open the workshop. A mismatch is a recoverable notice,
    /// not a fault; the caller may simply retry.
    pub fn login(&mut self, candidate: &str) -> Result<()> {
        if !self.gate.verify(candidate) {
            warn!("Workshop login refused");
            return Err(GateError::BadPassword);
        }

        self.mode = Mode::Admin {
            tab: AdminTab::default(),
        };
        self.session_started = Some(Utc::now());
        info!("Workshop opened");
        Ok(())
    }

    /// Return to the public view. Always succeeds.
    pub fn logout(&mut self) {
        if let Some(since) = self.session_started.take() {
            let seconds = (Utc::now() - since).num_seconds();
            info!("Workshop closed after {seconds}s");
        }
        self.mode = Mode::Public;
    }

    /// Switch between the Radar and Config sub-views
    pub fn switch_tab(&mut self, tab: AdminTab) -> Result<()> {
        match self.mode {
            Mode::Admin { .. } => {
                self.mode = Mode::Admin { tab };
                Ok(())
            }
            Mode::Public => Err(GateError::NotAdmin),
        }
    }
}
