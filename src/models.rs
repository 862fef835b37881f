use std::str::FromStr;

use serde::Deserialize;

use crate::error::StatusError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(StatusError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkResponse {
    /// Most recent first.
    pub homeworks: Vec<Homework>,
    pub current_date: Option<i64>,
}

impl HomeworkResponse {
    pub fn latest(&self) -> Option<&Homework> {
        self.homeworks.first()
    }
}
