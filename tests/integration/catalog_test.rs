//! Integration tests for the built-in catalog.

use connect_auth::catalog::{Catalog, CatalogBuilder, CatalogError, RoleTier, UNKNOWN_PERMISSION};
use connect_core::ScopeType;
use connect_core::error::{AppError, ErrorKind};

#[test]
fn test_tiers_monotonic_for_every_scope() {
    let catalog = Catalog::builtin().unwrap();
    for scope in ScopeType::ALL {
        let user = catalog.role_permissions(scope, &RoleTier::User.role_key(scope));
        let staff = catalog.role_permissions(scope, &RoleTier::Staff.role_key(scope));
        let owner = catalog.role_permissions(scope, &RoleTier::Owner.role_key(scope));
        assert_eq!(user & staff, user, "{scope}");
        assert_eq!(staff & owner, staff, "{scope}");
    }
}

#[test]
fn test_ceiling_error_converts_to_configuration_error() {
    let mut builder = CatalogBuilder::new();
    let err = builder
        .define_permission(ScopeType::Team, 64, "TEAM__OVERFLOW", "")
        .unwrap_err();
    assert!(matches!(err, CatalogError::BitIndexOutOfRange { index: 64, .. }));

    let app: AppError = err.into();
    assert_eq!(app.kind, ErrorKind::Configuration);
}

#[test]
fn test_lookup_sentinels() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.lookup_bit_name(ScopeType::Team, 1 << 17), UNKNOWN_PERMISSION);
    assert_eq!(catalog.lookup_bit_name(ScopeType::Team, 1 << 14), "TEAM__LOBBY_CREATE");
    assert_eq!(catalog.role_name(ScopeType::Team, "team_janitor"), "Unknown");
    assert_eq!(catalog.role_permissions(ScopeType::Team, "team_janitor"), 0);
    assert!(!catalog.is_role_valid(ScopeType::Team, "team_janitor"));
}

#[test]
fn test_find_role_across_scopes() {
    let catalog = Catalog::builtin().unwrap();
    let role = catalog.find_role("lobby_staff").unwrap();
    assert_eq!(role.scope, ScopeType::Lobby);
    assert_eq!(role.display_name, "Lobby Staff");
    assert!(catalog.find_role("galaxy_owner").is_none());
}

#[test]
fn test_describe_lists_every_scope() {
    let description = Catalog::builtin().unwrap().describe();
    let json = serde_json::to_value(&description).unwrap();

    assert_eq!(json["scopes"]["WEB"]["permissions"].as_array().unwrap().len(), 39);
    assert_eq!(json["scopes"]["COMMUNITY"]["permissions"].as_array().unwrap().len(), 16);
    assert_eq!(json["scopes"]["TEAM"]["permissions"].as_array().unwrap().len(), 17);
    assert_eq!(json["scopes"]["LOBBY"]["permissions"].as_array().unwrap().len(), 7);
    assert_eq!(json["scopes"]["WEB"]["permissions"][1]["bit"], 2);
    assert_eq!(json["scopes"]["LOBBY"]["groups"][0]["key"], "lobby_basic");
}
