// src/domain/action.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Kind of operation the host ORM is about to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    FindUnique,
    FindMany,
    FindFirst,
    Create,
    CreateMany,
    Update,
    UpdateMany,
    Upsert,
    Delete,
    DeleteMany,
    ExecuteRaw,
    QueryRaw,
    Aggregate,
    Count,
    RunCommandRaw,
}

impl Action {
    pub const ALL: [Self; 15] = [
        Self::FindUnique,
        Self::FindMany,
        Self::FindFirst,
        Self::Create,
        Self::CreateMany,
        Self::Update,
        Self::UpdateMany,
        Self::Upsert,
        Self::Delete,
        Self::DeleteMany,
        Self::ExecuteRaw,
        Self::QueryRaw,
        Self::Aggregate,
        Self::Count,
        Self::RunCommandRaw,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FindUnique => "findUnique",
            Self::FindMany => "findMany",
            Self::FindFirst => "findFirst",
            Self::Create => "create",
            Self::CreateMany => "createMany",
            Self::Update => "update",
            Self::UpdateMany => "updateMany",
            Self::Upsert => "upsert",
            Self::Delete => "delete",
            Self::DeleteMany => "deleteMany",
            Self::ExecuteRaw => "executeRaw",
            Self::QueryRaw => "queryRaw",
            Self::Aggregate => "aggregate",
            Self::Count => "count",
            Self::RunCommandRaw => "runCommandRaw",
        }
    }

    /// Whether the action writes rows (create, update, upsert or delete).
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(
            self,
            Self::Create
                | Self::CreateMany
                | Self::Update
                | Self::UpdateMany
                | Self::Upsert
                | Self::Delete
                | Self::DeleteMany
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownAction(wanted.to_string()))
    }
}
