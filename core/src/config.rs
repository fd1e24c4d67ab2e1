//! Director subtype-code configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::game_data::director_subtype;
use crate::tracker::Outcome;

const APP_NAME: &str = "fflsplit";
const CONFIG_NAME: &str = "config";

/// Which director subtypes open and close an encounter.
///
/// The kill/wipe codes drifted across game client versions (some logs use
/// `10`/`11` for wipes, others `11`/`12`), so the sets are user
/// configuration rather than constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DirectorCodes {
    pub start: Vec<String>,
    pub kill: Vec<String>,
    pub wipe: Vec<String>,
}

impl Default for DirectorCodes {
    fn default() -> Self {
        Self {
            start: vec![
                director_subtype::INIT.to_string(),
                director_subtype::RESTART.to_string(),
            ],
            kill: vec![director_subtype::KILL.to_string()],
            wipe: vec![
                director_subtype::WIPE_A.to_string(),
                director_subtype::WIPE_B.to_string(),
            ],
        }
    }
}

impl DirectorCodes {
    /// Load from the user config file, falling back to the defaults when
    /// the file is missing or unreadable.
    pub fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME).unwrap_or_default()
    }

    pub fn store(self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }

    pub fn config_path() -> Option<PathBuf> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).ok()
    }

    pub fn is_start(&self, subtype: &str) -> bool {
        self.start.iter().any(|c| c == subtype)
    }

    /// Encounter outcome selected by a close marker, if this subtype is one.
    pub fn outcome(&self, subtype: &str) -> Option<Outcome> {
        if self.kill.iter().any(|c| c == subtype) {
            Some(Outcome::Kill)
        } else if self.wipe.iter().any(|c| c == subtype) {
            Some(Outcome::Wipe)
        } else {
            None
        }
    }
}
