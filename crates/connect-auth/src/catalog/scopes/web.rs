//! Platform-wide (web) scope permissions.
//!
//! Bit 1 is retired and intentionally left undefined.

use connect_core::ScopeType;

use super::ScopeTable;

pub const COMMUNITY_VIEW: u64 = 1 << 0;
pub const COMMUNITIES_ADD: u64 = 1 << 2;
pub const COMMUNITIES_EDIT: u64 = 1 << 3;
pub const COMMUNITIES_DELETE: u64 = 1 << 4;
pub const COMMUNITIES_TRANSFER_OWNERSHIP: u64 = 1 << 5;
pub const COMMUNITIES_SUSPEND: u64 = 1 << 6;
pub const TEAM_VIEW: u64 = 1 << 7;
pub const TEAMS_EDIT: u64 = 1 << 8;
pub const TEAMS_DELETE: u64 = 1 << 9;
pub const TEAMS_TRANSFER_OWNERSHIP: u64 = 1 << 10;
pub const TEAMS_SUSPEND: u64 = 1 << 11;
pub const MEMBERSHIP_VIEW: u64 = 1 << 12;
pub const MEMBERSHIP_INVITE: u64 = 1 << 13;
pub const MEMBERSHIP_DELETE: u64 = 1 << 14;
pub const SANCTIONS_VIEW: u64 = 1 << 15;
pub const SANCTIONS_ADD: u64 = 1 << 16;
pub const SANCTIONS_EDIT: u64 = 1 << 17;
pub const SANCTIONS_DELETE: u64 = 1 << 18;
pub const SANCTIONS_SUSPEND: u64 = 1 << 19;
pub const MISSION_VIEW: u64 = 1 << 20;
pub const MISSION_ADD: u64 = 1 << 21;
pub const MISSION_EDIT: u64 = 1 << 22;
pub const MISSION_DELETE: u64 = 1 << 23;
pub const MISSION_SUSPEND: u64 = 1 << 24;
pub const GAMEMODE_VIEW: u64 = 1 << 25;
pub const GAMEMODE_ADD: u64 = 1 << 26;
pub const GAMEMODE_EDIT: u64 = 1 << 27;
pub const GAMEMODE_DELETE: u64 = 1 << 28;
pub const GAMEMODE_SUSPEND: u64 = 1 << 29;
pub const LOBBY_VIEW: u64 = 1 << 30;
pub const LOBBY_CREATE_PUBLIC: u64 = 1 << 31;
pub const LOBBY_CREATE_PRIVATE: u64 = 1 << 32;
pub const LOBBY_JOIN: u64 = 1 << 33;
pub const LOBBY_SPECTATE: u64 = 1 << 34;
pub const VIEW_AUDIT_LOG: u64 = 1 << 35;
pub const VIEW_METRICS: u64 = 1 << 36;
pub const SETTINGS: u64 = 1 << 37;
pub const ROLES_VIEW: u64 = 1 << 38;
pub const ROLES_EDIT: u64 = 1 << 39;

pub const ROLE_OWNER: &str = "web_owner";
pub const ROLE_STAFF: &str = "web_staff";
pub const ROLE_USER: &str = "web_user";

pub const TABLE: ScopeTable = ScopeTable {
    scope: ScopeType::Web,
    permissions: &[
        (0, "WEB__COMMUNITY_VIEW", "View community listings and details"),
        (2, "WEB__COMMUNITIES_ADD", "Create communities"),
        (3, "WEB__COMMUNITIES_EDIT", "Edit community information"),
        (4, "WEB__COMMUNITIES_DELETE", "Delete communities"),
        (5, "WEB__COMMUNITIES_TRANSFER_OWNERSHIP", "Transfer community ownership"),
        (6, "WEB__COMMUNITIES_SUSPEND", "Suspend or unsuspend communities"),
        (7, "WEB__TEAM_VIEW", "View team listings and details"),
        (8, "WEB__TEAMS_EDIT", "Edit team information"),
        (9, "WEB__TEAMS_DELETE", "Delete teams"),
        (10, "WEB__TEAMS_TRANSFER_OWNERSHIP", "Transfer team ownership"),
        (11, "WEB__TEAMS_SUSPEND", "Suspend or unsuspend teams"),
        (12, "WEB__MEMBERSHIP_VIEW", "View membership details"),
        (13, "WEB__MEMBERSHIP_INVITE", "Invite users to communities, teams, or the platform"),
        (14, "WEB__MEMBERSHIP_DELETE", "Remove memberships"),
        (15, "WEB__SANCTIONS_VIEW", "View sanctions applied to users"),
        (16, "WEB__SANCTIONS_ADD", "Apply a sanction to a user"),
        (17, "WEB__SANCTIONS_EDIT", "Edit existing sanctions"),
        (18, "WEB__SANCTIONS_DELETE", "Remove sanctions from users"),
        (19, "WEB__SANCTIONS_SUSPEND", "Temporarily suspend users via sanctions"),
        (20, "WEB__MISSION_VIEW", "View mission listings and details"),
        (21, "WEB__MISSION_ADD", "Create missions"),
        (22, "WEB__MISSION_EDIT", "Edit existing missions"),
        (23, "WEB__MISSION_DELETE", "Delete missions"),
        (24, "WEB__MISSION_SUSPEND", "Suspend or unsuspend missions"),
        (25, "WEB__GAMEMODE_VIEW", "View gamemode listings and details"),
        (26, "WEB__GAMEMODE_ADD", "Create gamemodes"),
        (27, "WEB__GAMEMODE_EDIT", "Edit existing gamemodes"),
        (28, "WEB__GAMEMODE_DELETE", "Delete gamemodes"),
        (29, "WEB__GAMEMODE_SUSPEND", "Suspend or unsuspend gamemodes"),
        (30, "WEB__LOBBY_VIEW", "View lobby listings and details"),
        (31, "WEB__LOBBY_CREATE_PUBLIC", "Create public lobbies"),
        (32, "WEB__LOBBY_CREATE_PRIVATE", "Create private lobbies"),
        (33, "WEB__LOBBY_JOIN", "Join lobbies"),
        (34, "WEB__LOBBY_SPECTATE", "Spectate lobbies"),
        (35, "WEB__VIEW_AUDIT_LOG", "Access audit logs"),
        (36, "WEB__VIEW_METRICS", "Access platform metrics and statistics"),
        (37, "WEB__SETTINGS", "Modify platform settings"),
        (38, "WEB__ROLES_VIEW", "View roles and permissions"),
        (39, "WEB__ROLES_EDIT", "Edit roles and permissions"),
    ],
    groups: &[
        (
            "web_basic",
            &[
                "WEB__COMMUNITY_VIEW",
                "WEB__TEAM_VIEW",
                "WEB__SANCTIONS_VIEW",
                "WEB__MISSION_VIEW",
                "WEB__GAMEMODE_VIEW",
                "WEB__LOBBY_VIEW",
                "WEB__LOBBY_CREATE_PUBLIC",
                "WEB__LOBBY_CREATE_PRIVATE",
                "WEB__LOBBY_JOIN",
                "WEB__LOBBY_SPECTATE",
            ],
        ),
        (
            "web_staff",
            &[
                "WEB__TEAMS_EDIT",
                "WEB__TEAMS_DELETE",
                "WEB__SANCTIONS_ADD",
                "WEB__SANCTIONS_EDIT",
                "WEB__SANCTIONS_SUSPEND",
                "WEB__MEMBERSHIP_VIEW",
                "WEB__MEMBERSHIP_INVITE",
                "WEB__MISSION_ADD",
                "WEB__MISSION_EDIT",
                "WEB__MISSION_SUSPEND",
                "WEB__GAMEMODE_ADD",
                "WEB__GAMEMODE_EDIT",
                "WEB__GAMEMODE_SUSPEND",
                "WEB__ROLES_VIEW",
            ],
        ),
        (
            "web_owner",
            &[
                "WEB__COMMUNITIES_ADD",
                "WEB__COMMUNITIES_EDIT",
                "WEB__COMMUNITIES_DELETE",
                "WEB__COMMUNITIES_TRANSFER_OWNERSHIP",
                "WEB__COMMUNITIES_SUSPEND",
                "WEB__TEAMS_TRANSFER_OWNERSHIP",
                "WEB__TEAMS_SUSPEND",
                "WEB__MEMBERSHIP_DELETE",
                "WEB__SANCTIONS_DELETE",
                "WEB__MISSION_DELETE",
                "WEB__GAMEMODE_DELETE",
                "WEB__VIEW_AUDIT_LOG",
                "WEB__VIEW_METRICS",
                "WEB__SETTINGS",
                "WEB__ROLES_EDIT",
            ],
        ),
    ],
    roles: &[
        (ROLE_USER, "Web User", &["web_basic"]),
        (ROLE_STAFF, "Web Staff", &["web_basic", "web_staff"]),
        (
            ROLE_OWNER,
            "Web Owner",
            &["web_basic", "web_staff", "web_owner"],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, UNKNOWN_PERMISSION};

    #[test]
    fn test_retired_bit_is_unknown() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.lookup_bit_name(ScopeType::Web, 1 << 1), UNKNOWN_PERMISSION);
        assert_eq!(catalog.lookup_bit_name(ScopeType::Web, ROLES_EDIT), "WEB__ROLES_EDIT");
    }

    #[test]
    fn test_user_mask() {
        let catalog = Catalog::builtin().unwrap();
        let user = COMMUNITY_VIEW
            | TEAM_VIEW
            | SANCTIONS_VIEW
            | MISSION_VIEW
            | GAMEMODE_VIEW
            | LOBBY_VIEW
            | LOBBY_CREATE_PUBLIC
            | LOBBY_CREATE_PRIVATE
            | LOBBY_JOIN
            | LOBBY_SPECTATE;
        assert_eq!(catalog.role_permissions(ScopeType::Web, ROLE_USER), user);

        let staff = catalog.role_permissions(ScopeType::Web, ROLE_STAFF);
        assert_eq!(staff & SETTINGS, 0);
        assert_eq!(staff & ROLES_VIEW, ROLES_VIEW);
    }

    #[test]
    fn test_owner_mask_excludes_retired_bit() {
        let catalog = Catalog::builtin().unwrap();
        let owner = catalog.role_permissions(ScopeType::Web, ROLE_OWNER);
        assert_eq!(owner, ((1u64 << 40) - 1) & !(1 << 1));
    }
}
