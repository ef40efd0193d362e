//! Deploy outcome

use crate::domain::value_objects::DeployStage;

/// What a successful site deploy did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Site identifier from the global config
    pub site: String,
    /// `site_name` from the site config
    pub site_name: String,
    /// Always `DeployStage::Done`
    pub stage: DeployStage,
    /// Remote paths written
    pub files: Vec<String>,
    pub bytes: u64,
}
