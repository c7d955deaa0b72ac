//! Status codes and the human-readable messages built from them.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::error::CycleError;
use crate::source::WorkItem;

/// The review states the status API is documented to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// The fixed sentence shown to the student for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// The wire code for this status.
    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = CycleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(CycleError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Format the notification for a work item whose status is already known.
pub fn status_message(name: &str, status: HomeworkStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    )
}

/// Turn one raw element of `homeworks` into the message to send.
pub fn interpret(item: &Value) -> Result<String, CycleError> {
    let WorkItem { name, status } = WorkItem::from_value(item)?;
    let status: HomeworkStatus = status.parse()?;
    debug!(homework = %name, %status, "homework status interpreted");
    Ok(status_message(&name, status))
}
