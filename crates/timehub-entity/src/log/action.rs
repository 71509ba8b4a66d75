//! Stop action enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a timer session was terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "stop_action", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StopAction {
    /// The member stopped the timer themselves.
    ManualStop,
    /// Starting a timer on another card stopped this one.
    AutoStopByNewTimer,
    /// The sweep stopped the timer because its accumulated budget ran out.
    AutoStopLimitReached,
    /// The sweep stopped the timer because the wall-clock cutoff passed.
    AutoStopDeadline,
}

impl StopAction {
    /// Return the action as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManualStop => "manual_stop",
            Self::AutoStopByNewTimer => "auto_stop_by_new_timer",
            Self::AutoStopLimitReached => "auto_stop_limit_reached",
            Self::AutoStopDeadline => "auto_stop_deadline",
        }
    }
}

impl fmt::Display for StopAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StopAction {
    type Err = timehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual_stop" => Ok(Self::ManualStop),
            "auto_stop_by_new_timer" => Ok(Self::AutoStopByNewTimer),
            "auto_stop_limit_reached" => Ok(Self::AutoStopLimitReached),
            "auto_stop_deadline" => Ok(Self::AutoStopDeadline),
            _ => Err(timehub_core::AppError::validation(format!(
                "Unknown stop action: {s}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_round_trip() {
        for action in [
            StopAction::ManualStop,
            StopAction::AutoStopByNewTimer,
            StopAction::AutoStopLimitReached,
            StopAction::AutoStopDeadline,
        ] {
            assert_eq!(action.as_str().parse::<StopAction>().unwrap(), action);
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }
}
