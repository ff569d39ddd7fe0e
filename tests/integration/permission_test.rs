//! Integration tests for permission decisions on validated tokens.

use connect_auth::AuthorizationContext;
use connect_auth::catalog::scopes::{community, web};
use connect_core::ScopeType;
use connect_core::error::ErrorKind;

use crate::helpers::{TestAuth, TokenBuilder};

fn context(auth: &TestAuth, builder: TokenBuilder) -> AuthorizationContext {
    let claims = auth.validator.validate(&builder.sign()).unwrap();
    AuthorizationContext::new(claims)
}

#[test]
fn test_deny_overrides_allow() {
    let auth = TestAuth::new(1);
    let allow = community::MEMBERSHIP_INVITE | community::SERVER_ADD | community::ROLES_VIEW;
    let ctx = context(
        &auth,
        TokenBuilder::new("76561198000000001").masks(allow, community::SERVER_ADD),
    );

    assert!(!ctx.permission(community::SERVER_ADD));
    assert!(ctx.permission(community::MEMBERSHIP_INVITE));
    assert!(ctx.permission(community::ROLES_VIEW));
    assert_eq!(
        auth.catalog
            .list_set_permission_names(ScopeType::Community, ctx.claims().effective_permissions()),
        vec!["COMMUNITY__MEMBERSHIP_INVITE", "COMMUNITY__ROLES_VIEW"]
    );
}

#[test]
fn test_role_preset_mask_round_trips_through_token() {
    let auth = TestAuth::new(1);
    let staff = auth.catalog.role_permissions(ScopeType::Web, web::ROLE_STAFF);
    let ctx = context(
        &auth,
        TokenBuilder::new("76561198000000001")
            .role(web::ROLE_STAFF)
            .masks(staff, 0),
    );

    assert!(ctx.permission(web::MISSION_ADD));
    assert!(!ctx.permission(web::SETTINGS));
    assert!(ctx.require_permission(web::ROLES_VIEW).is_ok());
    let err = ctx.require_permission(web::ROLES_EDIT).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_owner_role_classes() {
    let auth = TestAuth::new(1);
    let ctx = context(&auth, TokenBuilder::new("76561198000000001").role("web_owner"));
    assert!(ctx.is_owner() && ctx.is_admin() && ctx.is_moderator() && ctx.is_staff());
    assert!(ctx.require_role(&["web_owner"]).is_ok());
}

#[test]
fn test_default_role_has_no_classes() {
    let auth = TestAuth::new(1);
    let ctx = context(&auth, TokenBuilder::new("76561198000000001"));
    assert_eq!(ctx.role(), "web_user");
    assert!(!ctx.is_owner() && !ctx.is_admin() && !ctx.is_moderator() && !ctx.is_staff());
    assert!(ctx.require_role(&["web_staff", "web_admin"]).is_err());
}

#[test]
fn test_effective_names_use_web_scope() {
    let auth = TestAuth::new(1);
    let ctx = context(
        &auth,
        TokenBuilder::new("76561198000000001").masks(web::SETTINGS | web::COMMUNITY_VIEW, 0),
    );
    assert_eq!(
        ctx.effective_permission_names(&auth.catalog),
        vec!["WEB__COMMUNITY_VIEW", "WEB__SETTINGS"]
    );
}
