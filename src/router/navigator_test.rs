use super::*;
use crate::net::types::User;
use crate::router::policy::AccessPolicy;
use crate::router::props::ProfileFormProps;

fn authed() -> Session {
    let mut session = Session::new();
    session.set_token("abc");
    session.set_user(User { id: 1, email: "a@b.com".to_owned() });
    session
}

// =============================================================
// Allowed navigations
// =============================================================

#[test]
fn authenticated_children_form_gets_typed_props() {
    let mut nav = Navigator::new();
    let result = nav.navigate(&authed(), "/children?age=7&gender=female").unwrap();
    assert_eq!(result.route, RouteName::Children);
    assert!(result.redirects.is_empty());
    assert_eq!(
        result.props,
        ViewProps::ProfileForm(ProfileFormProps { age: 7.0, gender: "female".to_owned(), other_info: String::new() })
    );
}

#[test]
fn unparsable_age_still_commits() {
    let mut nav = Navigator::new();
    let result = nav.navigate(&authed(), "/children?age=notanumber").unwrap();
    assert_eq!(result.route, RouteName::Children);
    match result.props {
        ViewProps::ProfileForm(p) => assert!(p.age.is_nan()),
        other => panic!("unexpected props {other:?}"),
    }
}

#[test]
fn anonymous_guest_pages_are_allowed() {
    let mut nav = Navigator::new();
    assert_eq!(nav.navigate(&Session::new(), "/register").unwrap().route, RouteName::Register);
    assert_eq!(nav.navigate(&Session::new(), "/login").unwrap().route, RouteName::Login);
}

#[test]
fn path_params_are_reported() {
    let mut nav = Navigator::new();
    let result = nav.navigate(&authed(), "/survey/child/male").unwrap();
    assert_eq!(result.params.get("ageGroup").map(String::as_str), Some("child"));
    assert_eq!(result.params.get("gender").map(String::as_str), Some("male"));
}

// =============================================================
// Redirects
// =============================================================

#[test]
fn anonymous_protected_route_lands_on_login_with_full_path() {
    let mut nav = Navigator::new();
    let result = nav.navigate(&Session::new(), "/report?report=Hello%20World").unwrap();
    assert_eq!(result.route, RouteName::Login);
    assert_eq!(result.full_path, "/login?redirect=%2Freport%3Freport%3DHello%2520World");
    assert_eq!(result.redirects, vec!["/login?redirect=%2Freport%3Freport%3DHello%2520World".to_owned()]);
    assert_eq!(result.props, ViewProps::Login { redirect: "/report?report=Hello%20World".to_owned() });
}

#[test]
fn empty_token_is_treated_as_logged_out() {
    let mut session = Session::new();
    session.set_token("");
    let mut nav = Navigator::new();
    let result = nav.navigate(&session, "/chat").unwrap();
    assert_eq!(result.route, RouteName::Login);
    assert_eq!(result.props, ViewProps::Login { redirect: "/chat".to_owned() });
}

#[test]
fn authenticated_guest_route_lands_home_without_query() {
    let mut nav = Navigator::new();
    let result = nav.navigate(&authed(), "/login?redirect=%2Fchat").unwrap();
    assert_eq!(result.route, RouteName::Home);
    assert_eq!(result.full_path, "/");
    assert_eq!(result.redirects, vec!["/".to_owned()]);
}

#[test]
fn login_then_resume_returns_to_original_report() {
    let mut nav = Navigator::new();
    let mut session = Session::new();

    let first = nav.navigate(&session, "/report?report=Hello%20World").unwrap();
    assert_eq!(first.route, RouteName::Login);

    session.set_token("abc");
    let resumed = nav.resume_after_login(&session).unwrap();
    assert_eq!(resumed.route, RouteName::Report);
    assert_eq!(resumed.full_path, "/report?report=Hello%20World");
    assert_eq!(resumed.props, ViewProps::Report { report: "Hello World".to_owned() });
    assert_eq!(resumed.origin, Some(RouteName::Login));
}

#[test]
fn resume_without_login_view_goes_home() {
    let mut nav = Navigator::new();
    let resumed = nav.resume_after_login(&authed()).unwrap();
    assert_eq!(resumed.route, RouteName::Home);
    assert_eq!(resumed.origin, None);
}

#[test]
fn refresh_after_logout_bounces_to_login() {
    let mut nav = Navigator::new();
    let mut session = authed();
    nav.navigate(&session, "/chat").unwrap();

    session.logout();
    let refreshed = nav.refresh(&session).unwrap().unwrap();
    assert_eq!(refreshed.route, RouteName::Login);
    assert_eq!(refreshed.props, ViewProps::Login { redirect: "/chat".to_owned() });
    assert_eq!(refreshed.origin, Some(RouteName::Chat));
}

#[test]
fn refresh_before_any_navigation_is_noop() {
    let mut nav = Navigator::new();
    assert_eq!(nav.refresh(&Session::new()).unwrap(), None);
}

// =============================================================
// Origin tracking
// =============================================================

#[test]
fn origin_is_previous_committed_route() {
    let mut nav = Navigator::new();
    let session = authed();
    assert_eq!(nav.navigate(&session, "/").unwrap().origin, None);
    assert_eq!(nav.navigate(&session, "/chat").unwrap().origin, Some(RouteName::Home));
    assert_eq!(nav.current().map(RouteMatch::name), Some(RouteName::Chat));
}

#[test]
fn failed_navigation_keeps_current_route() {
    let mut nav = Navigator::new();
    let session = authed();
    nav.navigate(&session, "/image").unwrap();
    assert!(nav.navigate(&session, "/nowhere").is_err());
    assert_eq!(nav.current().map(RouteMatch::name), Some(RouteName::Image));
}

// =============================================================
// Errors
// =============================================================

#[test]
fn unmatched_path_is_not_found() {
    let mut nav = Navigator::new();
    assert_eq!(
        nav.navigate(&authed(), "/settings?x=1"),
        Err(NavigationError::NotFound { path: "/settings".to_owned() })
    );
}

#[test]
fn relative_url_is_invalid() {
    let mut nav = Navigator::new();
    assert_eq!(nav.navigate(&authed(), "chat"), Err(NavigationError::InvalidUrl("chat".to_owned())));
}

#[test]
fn self_redirecting_table_hits_redirect_limit() {
    static LOOPING: [RouteDescriptor; 2] = [
        RouteDescriptor { name: RouteName::Login, path: "/login", policy: AccessPolicy::RequiresAuth, props: None },
        RouteDescriptor { name: RouteName::Chat, path: "/chat", policy: AccessPolicy::RequiresAuth, props: None },
    ];
    let mut nav = Navigator::with_routes(&LOOPING);
    assert_eq!(
        nav.navigate(&Session::new(), "/chat"),
        Err(NavigationError::RedirectLoop { path: "/chat".to_owned(), limit: MAX_REDIRECTS })
    );
    assert!(nav.current().is_none());
}

#[test]
fn navigation_serializes_for_display() {
    let mut nav = Navigator::new();
    let result = nav.navigate(&authed(), "/evaluate/adult/female").unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["route"], "EvaluateWithParams");
    assert_eq!(value["props"]["kind"], "group_params");
    assert_eq!(value["props"]["ageGroup"], "adult");
}
