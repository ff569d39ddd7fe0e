//! Team scope permissions.

use connect_core::ScopeType;

use super::ScopeTable;

pub const MEMBERSHIP_INVITE: u64 = 1 << 0;
pub const MEMBERSHIP_DELETE: u64 = 1 << 1;
pub const SERVER_ADD: u64 = 1 << 2;
pub const SERVER_EDIT: u64 = 1 << 3;
pub const SERVER_DELETE: u64 = 1 << 4;
pub const MISSIONLIST_ADD: u64 = 1 << 5;
pub const MISSIONLIST_EDIT: u64 = 1 << 6;
pub const GAMEMODELIST_ADD: u64 = 1 << 7;
pub const GAMEMODELIST_EDIT: u64 = 1 << 8;
pub const INFO_EDIT: u64 = 1 << 9;
pub const ANALYTICS: u64 = 1 << 10;
pub const TRANSFER_OWNERSHIP: u64 = 1 << 11;
pub const SUSPEND: u64 = 1 << 12;
pub const AUDIT_VIEW: u64 = 1 << 13;
pub const LOBBY_CREATE: u64 = 1 << 14;
pub const ROLES_VIEW: u64 = 1 << 15;
pub const ROLES_EDIT: u64 = 1 << 16;

pub const ROLE_OWNER: &str = "team_owner";
pub const ROLE_STAFF: &str = "team_staff";
pub const ROLE_USER: &str = "team_user";

pub const TABLE: ScopeTable = ScopeTable {
    scope: ScopeType::Team,
    permissions: &[
        (0, "TEAM__MEMBERSHIP_INVITE", "Invite users to the team"),
        (1, "TEAM__MEMBERSHIP_DELETE", "Remove memberships from the team"),
        (2, "TEAM__SERVER_ADD", "Add a server to the team's server list"),
        (3, "TEAM__SERVER_EDIT", "Edit a server in the team's server list"),
        (4, "TEAM__SERVER_DELETE", "Delete a server from the team's server list"),
        (5, "TEAM__MISSIONLIST_ADD", "Add a mission to the team's mission list"),
        (6, "TEAM__MISSIONLIST_EDIT", "Edit a mission in the team's mission list"),
        (7, "TEAM__GAMEMODELIST_ADD", "Add a gamemode to the team's gamemode list"),
        (8, "TEAM__GAMEMODELIST_EDIT", "Edit a gamemode in the team's gamemode list"),
        (9, "TEAM__INFO_EDIT", "Edit team information"),
        (10, "TEAM__ANALYTICS", "View team statistics and analytics"),
        (11, "TEAM__TRANSFER_OWNERSHIP", "Transfer team ownership"),
        (12, "TEAM__SUSPEND", "Suspend or unsuspend the team"),
        (13, "TEAM__AUDIT_VIEW", "View audit logs for the team"),
        (14, "TEAM__LOBBY_CREATE", "Create a lobby associated with the team"),
        (15, "TEAM__ROLES_VIEW", "View roles and permissions for the team"),
        (16, "TEAM__ROLES_EDIT", "Edit roles and permissions for the team"),
    ],
    groups: &[
        ("team_basic", &[]),
        (
            "team_staff",
            &[
                "TEAM__MEMBERSHIP_INVITE",
                "TEAM__SERVER_ADD",
                "TEAM__SERVER_EDIT",
                "TEAM__SERVER_DELETE",
                "TEAM__MISSIONLIST_ADD",
                "TEAM__MISSIONLIST_EDIT",
                "TEAM__GAMEMODELIST_ADD",
                "TEAM__GAMEMODELIST_EDIT",
                "TEAM__LOBBY_CREATE",
                "TEAM__ROLES_VIEW",
            ],
        ),
        (
            "team_owner",
            &[
                "TEAM__MEMBERSHIP_DELETE",
                "TEAM__INFO_EDIT",
                "TEAM__ANALYTICS",
                "TEAM__TRANSFER_OWNERSHIP",
                "TEAM__SUSPEND",
                "TEAM__AUDIT_VIEW",
                "TEAM__ROLES_EDIT",
            ],
        ),
    ],
    roles: &[
        (ROLE_USER, "Team User", &["team_basic"]),
        (ROLE_STAFF, "Team Staff", &["team_basic", "team_staff"]),
        (
            ROLE_OWNER,
            "Team Owner",
            &["team_basic", "team_staff", "team_owner"],
        ),
    ],
};
