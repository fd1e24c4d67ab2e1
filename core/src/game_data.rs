//! Static wire-format data: actor id namespaces, director command layout
//! and the localized status names counted as damage-down debuffs.

use phf::phf_set;

/// Actor id namespace prefixes (first character of the 8-char hex id).
pub const PLAYER_PREFIX: u8 = b'1';
pub const NPC_PREFIX: u8 = b'4';
pub const ENVIRONMENT_PREFIX: u8 = b'E';

/// Leading digit of the action-category field that marks an outgoing
/// offensive action. Coincides with the NPC id namespace.
pub const OFFENSIVE_CATEGORY: u8 = b'4';

/// Self-identity announces carry a fixed-width actor id.
pub const SELF_ID_LEN: usize = 8;

/// Fixed prefix of the director command field; the last two digits select
/// the lifecycle subtype.
pub const DIRECTOR_PREFIX: &str = "400000";

/// Director lifecycle subtypes observed across client versions. The
/// kill/wipe assignment drifted between versions, so these only seed the
/// configurable defaults.
pub mod director_subtype {
    pub const INIT: &str = "01";
    pub const RESTART: &str = "06";
    pub const KILL: &str = "03";
    pub const WIPE_A: &str = "10";
    pub const WIPE_B: &str = "11";
}

/// Localized names of the damage-down family of debuffs. Many distinct
/// status ids share the effect, so matching is by full display name.
pub static DAMAGE_DOWN_NAMES: phf::Set<&'static str> = phf_set! {
    "Damage Down",
    "伤害降低",
    "ダメージ低下",
    "Malus de dégâts",
    "Schaden -",
};
