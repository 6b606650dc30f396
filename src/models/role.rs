use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// School roles that get a calendar screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Admin,
    SuperAdmin,
    AdmissionStaff,
    Receptionist,
    Hr,
    Teacher,
    Parent,
    Student,
}

/// What a role may do on the shared calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_create: bool,
    pub can_edit: bool,
}

impl Capabilities {
    pub const EDITABLE: Capabilities = Capabilities {
        can_create: true,
        can_edit: true,
    };

    pub const READ_ONLY: Capabilities = Capabilities {
        can_create: false,
        can_edit: false,
    };
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "super-admin",
            Role::AdmissionStaff => "admission-staff",
            Role::Receptionist => "receptionist",
            Role::Hr => "hr",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
            Role::Student => "student",
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            Role::Parent | Role::Student => Capabilities::READ_ONLY,
            _ => Capabilities::EDITABLE,
        }
    }

    pub fn ensure_can_create(&self) -> AppResult<()> {
        if self.capabilities().can_create {
            Ok(())
        } else {
            Err(self.denied("create"))
        }
    }

    /// Edit and delete share the same capability.
    pub fn ensure_can_edit(&self, action: &str) -> AppResult<()> {
        if self.capabilities().can_edit {
            Ok(())
        } else {
            Err(self.denied(action))
        }
    }

    fn denied(&self, action: &str) -> AppError {
        AppError::PermissionDenied {
            role: self.as_str().to_string(),
            action: action.to_string(),
        }
    }
}
