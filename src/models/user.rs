use serde::{Deserialize, Serialize};

/// Display name given to every citizen; the kiosk never asks for one.
pub const DEFAULT_CITIZEN_NAME: &str = "Citizen";

/// The citizen currently signed in at the kiosk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub mobile: String,
    pub name: String,
}

impl User {
    pub fn citizen(id: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mobile: mobile.into(),
            name: DEFAULT_CITIZEN_NAME.to_string(),
        }
    }

    /// Mobile number with all but the last four digits hidden
    pub fn masked_mobile(&self) -> String {
        let visible = self.mobile.len().saturating_sub(4);
        self.mobile
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { '•' } else { c })
            .collect()
    }
}
