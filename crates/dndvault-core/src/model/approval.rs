use serde::{Deserialize, Serialize};

/// Where a stored character record sits in the approval workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ApprovalState {
    /// Live record, approved by a guild staff member
    Approved { approved_by: Option<String> },
    /// Update waiting for approval; an approved record also exists
    UpdatePending,
    /// First registration waiting for approval
    RegistrationPending,
    /// Record flagged both approved and update (should not happen)
    Invalid,
}

impl ApprovalState {
    /// Derive the state from the stored `(approvalStatus, isUpdate)` flags.
    pub fn from_flags(approved: bool, is_update: bool, approved_by: Option<String>) -> Self {
        match (approved, is_update) {
            (true, true) => ApprovalState::Invalid,
            (false, true) => ApprovalState::UpdatePending,
            (true, false) => ApprovalState::Approved { approved_by },
            (false, false) => ApprovalState::RegistrationPending,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ApprovalState::Approved {
                approved_by: Some(user),
            } => format!("Approved by <@{}>", user),
            ApprovalState::Approved { approved_by: None } => "Approved".to_string(),
            ApprovalState::UpdatePending => "`Update Pending Approval`".to_string(),
            ApprovalState::RegistrationPending => "`Register Pending Approval`".to_string(),
            ApprovalState::Invalid => "`Invalid Status`".to_string(),
        }
    }
}
