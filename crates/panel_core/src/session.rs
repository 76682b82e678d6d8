//! Session lifecycle: configuring until the start action, then running.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::CoefficientPair;
use crate::simulation::{SimulationConfig, SimulationViewport};

pub const DATA_ROUTE_PREFIX: &str = "/data";

/// Opaque identifier reported by a running simulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `/data/<key>`
    pub fn data_route(&self) -> String {
        self.route_under(DATA_ROUTE_PREFIX)
    }

    pub fn route_under(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Configuring,
    Running {
        config: SimulationConfig,
        session_key: Option<SessionKey>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    Started(SimulationConfig),
    AlreadyRunning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyRecord {
    Stored,
    Replaced(SessionKey),
    /// Reported before the session started; adopted by the start transition.
    HeldUntilStart,
}

#[derive(Debug)]
pub struct SessionMachine {
    state: SessionState,
    early_key: Option<SessionKey>,
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMachine {
    pub fn new() -> Self {
        Self {
            state: SessionState::Configuring,
            early_key: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    pub fn config(&self) -> Option<&SimulationConfig> {
        match &self.state {
            SessionState::Running { config, .. } => Some(config),
            SessionState::Configuring => None,
        }
    }

    pub fn session_key(&self) -> Option<&SessionKey> {
        match &self.state {
            SessionState::Running { session_key, .. } => session_key.as_ref(),
            SessionState::Configuring => None,
        }
    }

    /// One-way transition. `pair` is copied into the frozen config; later
    /// calls leave the running session untouched.
    pub fn start(&mut self, pair: CoefficientPair, viewport: SimulationViewport) -> StartOutcome {
        if self.is_running() {
            return StartOutcome::AlreadyRunning;
        }
        let config = SimulationConfig::freeze(pair, viewport);
        self.state = SessionState::Running {
            config: config.clone(),
            session_key: self.early_key.take(),
        };
        StartOutcome::Started(config)
    }

    pub fn record_key(&mut self, key: SessionKey) -> KeyRecord {
        match &mut self.state {
            SessionState::Running { session_key, .. } => match session_key.replace(key) {
                Some(previous) => KeyRecord::Replaced(previous),
                None => KeyRecord::Stored,
            },
            SessionState::Configuring => {
                self.early_key = Some(key);
                KeyRecord::HeldUntilStart
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
