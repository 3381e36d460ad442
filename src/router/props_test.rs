use super::*;
use crate::router::location::Location;
use crate::router::table::resolve;

fn props_for(url: &str) -> ViewProps {
    let location = Location::parse(url).unwrap();
    resolve(&location).unwrap().props()
}

fn profile_for(url: &str) -> ProfileFormProps {
    match props_for(url) {
        ViewProps::ProfileForm(p) => p,
        other => panic!("expected profile form props, got {other:?}"),
    }
}

// =============================================================
// Profile forms (/children, /adult)
// =============================================================

#[test]
fn children_props_from_complete_query() {
    let p = profile_for("/children?age=7&gender=female");
    assert_eq!(p, ProfileFormProps { age: 7.0, gender: "female".to_owned(), other_info: String::new() });
    assert_eq!(p.age_years(), Some(7));
}

#[test]
fn adult_props_share_the_same_shape() {
    let p = profile_for("/adult?age=34&gender=male&otherInfo=night%20shifts");
    assert_eq!(p.age, 34.0);
    assert_eq!(p.gender, "male");
    assert_eq!(p.other_info, "night shifts");
}

#[test]
fn unparsable_age_is_nan_not_failure() {
    let p = profile_for("/children?age=notanumber");
    assert!(p.age.is_nan());
    assert_eq!(p.age_years(), None);
    assert_eq!(p.gender, "");
}

#[test]
fn missing_query_degrades_to_defaults() {
    let p = profile_for("/children");
    assert!(p.age.is_nan());
    assert_eq!(p.gender, "");
    assert_eq!(p.other_info, "");
}

#[test]
fn profile_props_serialize_with_view_field_names() {
    let value = serde_json::to_value(props_for("/children?age=7&gender=female")).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "kind": "profile_form", "age": 7.0, "gender": "female", "otherInfo": "" })
    );
}

// =============================================================
// parse_age
// =============================================================

#[test]
fn parse_age_blank_is_zero() {
    assert_eq!(parse_age(Some("")), 0.0);
    assert_eq!(parse_age(Some("   ")), 0.0);
}

#[test]
fn parse_age_trims_and_accepts_decimals() {
    assert_eq!(parse_age(Some(" 12 ")), 12.0);
    assert_eq!(parse_age(Some("6.5")), 6.5);
    assert_eq!(parse_age(Some("1e1")), 10.0);
}

#[test]
fn parse_age_rejects_rust_only_spellings() {
    assert!(parse_age(Some("nan")).is_nan());
    assert!(parse_age(Some("inf")).is_nan());
    assert!(parse_age(Some("7 years")).is_nan());
    assert_eq!(parse_age(Some("Infinity")), f64::INFINITY);
}

#[test]
fn parse_age_reads_radix_prefixes() {
    assert_eq!(parse_age(Some("0x10")), 16.0);
    assert_eq!(parse_age(Some("0XfF")), 255.0);
    assert_eq!(parse_age(Some("0b101")), 5.0);
    assert_eq!(parse_age(Some("0o17")), 15.0);
    assert_eq!(parse_age(Some(" 0x0A ")), 10.0);
}

#[test]
fn parse_age_rejects_malformed_radix_literals() {
    assert!(parse_age(Some("0x")).is_nan());
    assert!(parse_age(Some("0b102")).is_nan());
    assert!(parse_age(Some("-0x10")).is_nan());
    assert!(parse_age(Some("0x1_0")).is_nan());
}

#[test]
fn children_form_accepts_hex_age() {
    assert_eq!(profile_for("/children?age=0x10&gender=male").age_years(), Some(16));
}

#[test]
fn age_years_requires_whole_non_negative_number() {
    let mut p = ProfileFormProps { age: 6.5, gender: String::new(), other_info: String::new() };
    assert_eq!(p.age_years(), None);
    p.age = -1.0;
    assert_eq!(p.age_years(), None);
    p.age = 0.0;
    assert_eq!(p.age_years(), Some(0));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_redirect_defaults_to_root() {
    assert_eq!(props_for("/login"), ViewProps::Login { redirect: "/".to_owned() });
    assert_eq!(props_for("/login?redirect="), ViewProps::Login { redirect: "/".to_owned() });
}

#[test]
fn login_redirect_is_decoded_once() {
    assert_eq!(
        props_for("/login?redirect=%2Freport%3Freport%3DHello%2520World"),
        ViewProps::Login { redirect: "/report?report=Hello%20World".to_owned() }
    );
}

// =============================================================
// Path params (/survey, /evaluate)
// =============================================================

#[test]
fn survey_passes_path_params_through() {
    assert_eq!(
        props_for("/survey/child/female"),
        ViewProps::GroupParams(GroupParams { age_group: "child".to_owned(), gender: "female".to_owned() })
    );
}

#[test]
fn evaluate_decodes_path_params() {
    assert_eq!(
        props_for("/evaluate/young%20adult/male"),
        ViewProps::GroupParams(GroupParams { age_group: "young adult".to_owned(), gender: "male".to_owned() })
    );
}

// =============================================================
// Report
// =============================================================

#[test]
fn report_is_url_decoded() {
    assert_eq!(props_for("/report?report=Hello%20World"), ViewProps::Report { report: "Hello World".to_owned() });
}

#[test]
fn report_double_encoded_text_is_fully_decoded() {
    assert_eq!(props_for("/report?report=a%2520b"), ViewProps::Report { report: "a b".to_owned() });
}

#[test]
fn report_missing_or_malformed_degrades_gracefully() {
    assert_eq!(props_for("/report"), ViewProps::Report { report: String::new() });
    assert_eq!(props_for("/report?report=100%25"), ViewProps::Report { report: "100%".to_owned() });
}

#[test]
fn routes_without_extractor_have_no_props() {
    assert_eq!(props_for("/chat"), ViewProps::None);
    assert_eq!(props_for("/"), ViewProps::None);
}
