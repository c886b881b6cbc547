use crate::{calculate_role_permissions, has_permission, PortalPermission, Role};

#[test]
fn citizen_permissions_cover_submission_only() {
    assert!(has_permission(Role::Citizen, PortalPermission::SubmitReport));
    assert!(has_permission(Role::Citizen, PortalPermission::UploadEvidence));
    assert!(has_permission(Role::Citizen, PortalPermission::FetchOwnReports));

    assert!(!has_permission(Role::Citizen, PortalPermission::FetchAllReports));
    assert!(!has_permission(Role::Citizen, PortalPermission::FetchReport));
    assert!(!has_permission(Role::Citizen, PortalPermission::EditReportStatus));
    assert!(!has_permission(Role::Citizen, PortalPermission::FetchStats));
}

#[test]
fn investigator_permissions_cover_triage_only() {
    assert!(has_permission(Role::Investigator, PortalPermission::FetchAllReports));
    assert!(has_permission(Role::Investigator, PortalPermission::FetchReport));
    assert!(has_permission(Role::Investigator, PortalPermission::EditReportStatus));
    assert!(has_permission(Role::Investigator, PortalPermission::FetchStats));

    assert!(!has_permission(Role::Investigator, PortalPermission::SubmitReport));
    assert!(!has_permission(Role::Investigator, PortalPermission::UploadEvidence));
}

#[test]
fn role_permission_sets_are_disjoint() {
    assert_eq!(
        calculate_role_permissions(Role::Citizen) & calculate_role_permissions(Role::Investigator),
        0
    );
}

#[test]
fn roles_parse_from_configuration_strings() {
    assert_eq!("citizen".parse(), Ok(Role::Citizen));
    assert_eq!("Investigator".parse(), Ok(Role::Investigator));
    assert!("chief".parse::<Role>().is_err());
}
