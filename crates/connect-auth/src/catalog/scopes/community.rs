//! Community scope permissions.

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
pub const ROLES_VIEW: u64 = 1 << 14;
pub const ROLES_EDIT: u64 = 1 << 15;

pub const ROLE_OWNER: &str = "community_owner";
pub const ROLE_STAFF: &str = "community_staff";
pub const ROLE_USER: &str = "community_user";

pub const TABLE: ScopeTable = ScopeTable {
    scope: ScopeType::Community,
    permissions: &[
        (0, "COMMUNITY__MEMBERSHIP_INVITE", "Invite users to the community"),
        (1, "COMMUNITY__MEMBERSHIP_DELETE", "Remove memberships from the community"),
        (2, "COMMUNITY__SERVER_ADD", "Add a server to the community's server list"),
        (3, "COMMUNITY__SERVER_EDIT", "Edit a server in the community's server list"),
        (4, "COMMUNITY__SERVER_DELETE", "Delete a server from the community's server list"),
        (5, "COMMUNITY__MISSIONLIST_ADD", "Add a mission to the community's mission list"),
        (6, "COMMUNITY__MISSIONLIST_EDIT", "Edit a mission in the community's mission list"),
        (7, "COMMUNITY__GAMEMODELIST_ADD", "Add a gamemode to the community's gamemode list"),
        (8, "COMMUNITY__GAMEMODELIST_EDIT", "Edit a gamemode in the community's gamemode list"),
        (9, "COMMUNITY__INFO_EDIT", "Edit community information"),
        (10, "COMMUNITY__ANALYTICS", "View community statistics and analytics"),
        (11, "COMMUNITY__TRANSFER_OWNERSHIP", "Transfer community ownership"),
        (12, "COMMUNITY__SUSPEND", "Suspend or unsuspend the community"),
        (13, "COMMUNITY__AUDIT_VIEW", "View audit logs for the community"),
        (14, "COMMUNITY__ROLES_VIEW", "View roles and permissions for the community"),
        (15, "COMMUNITY__ROLES_EDIT", "Edit roles and permissions for the community"),
    ],
    groups: &[
        ("community_basic", &[]),
        (
            "community_staff",
            &[
                "COMMUNITY__SERVER_ADD",
                "COMMUNITY__SERVER_EDIT",
                "COMMUNITY__SERVER_DELETE",
                "COMMUNITY__MISSIONLIST_ADD",
                "COMMUNITY__MISSIONLIST_EDIT",
                "COMMUNITY__GAMEMODELIST_ADD",
                "COMMUNITY__GAMEMODELIST_EDIT",
                "COMMUNITY__ROLES_VIEW",
            ],
        ),
        (
            "community_owner",
            &[
                "COMMUNITY__MEMBERSHIP_INVITE",
                "COMMUNITY__MEMBERSHIP_DELETE",
                "COMMUNITY__INFO_EDIT",
                "COMMUNITY__ANALYTICS",
                "COMMUNITY__TRANSFER_OWNERSHIP",
                "COMMUNITY__SUSPEND",
                "COMMUNITY__AUDIT_VIEW",
                "COMMUNITY__ROLES_EDIT",
            ],
        ),
    ],
    roles: &[
        (ROLE_USER, "Community User", &["community_basic"]),
        (ROLE_STAFF, "Community Staff", &["community_basic", "community_staff"]),
        (
            ROLE_OWNER,
            "Community Owner",
            &["community_basic", "community_staff", "community_owner"],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_role_masks() {
        let catalog = Catalog::builtin().unwrap();
        let scope = ScopeType::Community;
        assert_eq!(catalog.role_permissions(scope, ROLE_USER), 0);

        let staff = SERVER_ADD
            | SERVER_EDIT
            | SERVER_DELETE
            | MISSIONLIST_ADD
            | MISSIONLIST_EDIT
            | GAMEMODELIST_ADD
            | GAMEMODELIST_EDIT
            | ROLES_VIEW;
        assert_eq!(catalog.role_permissions(scope, ROLE_STAFF), staff);
        assert_eq!(catalog.role_permissions(scope, ROLE_OWNER), 0xFFFF);
    }
}
