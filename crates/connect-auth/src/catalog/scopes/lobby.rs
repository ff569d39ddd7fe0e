//! Lobby scope permissions.

use connect_core::ScopeType;

use super::ScopeTable;

pub const MEMBERSHIP_VIEW: u64 = 1 << 0;
pub const MEMBERSHIP_INVITE: u64 = 1 << 1;
pub const MEMBERSHIP_DELETE: u64 = 1 << 2;
pub const KICK: u64 = 1 << 3;
pub const MANAGE: u64 = 1 << 4;
pub const DISBAND: u64 = 1 << 5;
pub const TRANSFER_OWNERSHIP: u64 = 1 << 6;

pub const ROLE_OWNER: &str = "lobby_owner";
pub const ROLE_STAFF: &str = "lobby_staff";
pub const ROLE_USER: &str = "lobby_user";

pub const TABLE: ScopeTable = ScopeTable {
    scope: ScopeType::Lobby,
    permissions: &[
        (0, "LOBBY__MEMBERSHIP_VIEW", "View lobby membership details"),
        (1, "LOBBY__MEMBERSHIP_INVITE", "Invite users to the lobby"),
        (2, "LOBBY__MEMBERSHIP_DELETE", "Delete lobby memberships"),
        (3, "LOBBY__KICK", "Remove users from the lobby"),
        (4, "LOBBY__MANAGE", "Manage lobby slots, mission and server"),
        (5, "LOBBY__DISBAND", "Disband the lobby"),
        (6, "LOBBY__TRANSFER_OWNERSHIP", "Transfer lobby ownership"),
    ],
    groups: &[
        (
            "lobby_basic",
            &["LOBBY__MEMBERSHIP_VIEW", "LOBBY__MEMBERSHIP_INVITE"],
        ),
        (
            "lobby_staff",
            &["LOBBY__KICK", "LOBBY__MANAGE", "LOBBY__MEMBERSHIP_DELETE"],
        ),
        (
            "lobby_owner",
            &["LOBBY__DISBAND", "LOBBY__TRANSFER_OWNERSHIP"],
        ),
    ],
    roles: &[
        (ROLE_USER, "Lobby User", &["lobby_basic"]),
        (ROLE_STAFF, "Lobby Staff", &["lobby_basic", "lobby_staff"]),
        (
            ROLE_OWNER,
            "Lobby Owner",
            &["lobby_basic", "lobby_staff", "lobby_owner"],
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
        let scope = ScopeType::Lobby;
        assert_eq!(
            catalog.role_permissions(scope, ROLE_USER),
            MEMBERSHIP_VIEW | MEMBERSHIP_INVITE
        );
        assert_eq!(
            catalog.role_permissions(scope, ROLE_STAFF),
            MEMBERSHIP_VIEW | MEMBERSHIP_INVITE | MEMBERSHIP_DELETE | KICK | MANAGE
        );
        assert_eq!(catalog.role_permissions(scope, ROLE_OWNER), 0b111_1111);
    }

    #[test]
    fn test_names_sorted_by_bit() {
        let catalog = Catalog::builtin().unwrap();
        let names = catalog.list_set_permission_names(ScopeType::Lobby, DISBAND | KICK | MEMBERSHIP_VIEW);
        assert_eq!(names, vec!["LOBBY__MEMBERSHIP_VIEW", "LOBBY__KICK", "LOBBY__DISBAND"]);
    }
}
