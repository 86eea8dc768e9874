/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardConfig {
    /// Gates `save_draft` / `load_draft`. Off by default: draft storage is
    /// not provisioned on every backend yet, so the interface exists but
    /// stays dormant until explicitly switched on.
    pub drafts_enabled: bool,
}

impl WizardConfig {
    /// Configuration with draft persistence switched on.
    pub fn with_drafts() -> Self {
        Self {
            drafts_enabled: true,
        }
    }
}
