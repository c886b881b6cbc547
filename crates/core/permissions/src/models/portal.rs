use std::fmt;

/// Portal operation permission definitions
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum PortalPermission {
    SubmitReport = 1 << 0,
    UploadEvidence = 1 << 1,
    FetchOwnReports = 1 << 2,

    FetchAllReports = 1 << 3,
    FetchReport = 1 << 4,
    EditReportStatus = 1 << 5,
    FetchStats = 1 << 6,
}

impl fmt::Display for PortalPermission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl_op_ex!(+ |a: &PortalPermission, b: &PortalPermission| -> u32 { *a as u32 | *b as u32 });
impl_op_ex_commutative!(+ |a: &u32, b: &PortalPermission| -> u32 { *a | *b as u32 });
