use once_cell::sync::Lazy;

use crate::{PortalPermission, Role};

/// Operations a citizen may invoke
pub static CITIZEN_PERMISSIONS: Lazy<u32> = Lazy::new(|| {
    PortalPermission::SubmitReport
        + PortalPermission::UploadEvidence
        + PortalPermission::FetchOwnReports
});

/// Operations an investigator may invoke
pub static INVESTIGATOR_PERMISSIONS: Lazy<u32> = Lazy::new(|| {
    PortalPermission::FetchAllReports
        + PortalPermission::FetchReport
        + PortalPermission::EditReportStatus
        + PortalPermission::FetchStats
});

/// Calculate the permission set granted to a role
pub fn calculate_role_permissions(role: Role) -> u32 {
    match role {
        Role::Citizen => *CITIZEN_PERMISSIONS,
        Role::Investigator => *INVESTIGATOR_PERMISSIONS,
    }
}

/// Check whether a role may invoke the given operation
pub fn has_permission(role: Role, permission: PortalPermission) -> bool {
    (calculate_role_permissions(role) & permission as u32) != 0
}
