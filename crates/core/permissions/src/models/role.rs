/// Role a resolved identity acts under
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "schemas", derive(schemars::JsonSchema))]
pub enum Role {
    /// Member of the public submitting reports
    Citizen,
    /// Officer triaging the report collection
    Investigator,
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "citizen" => Ok(Role::Citizen),
            "investigator" => Ok(Role::Investigator),
            _ => Err(()),
        }
    }
}
