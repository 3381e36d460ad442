//! Typed view inputs derived from route params and query strings.
//!
//! ERROR HANDLING
//! ==============
//! Extraction never fails. Missing values fall back to empty strings and an
//! unparsable age becomes `NaN`, so a malformed link still lands on its view.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use serde::Serialize;

use super::location::decode_component;
use super::table::RouteMatch;

/// Inputs handed to the view of a committed route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewProps {
    None,
    Login {
        /// Where to go after a successful login.
        redirect: String,
    },
    ProfileForm(ProfileFormProps),
    GroupParams(GroupParams),
    Report {
        report: String,
    },
}

/// Inputs of the children/adult intake forms.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileFormProps {
    /// `NaN` when absent or unparsable. Serialized as `null` in that case.
    pub age: f64,
    pub gender: String,
    #[serde(rename = "otherInfo")]
    pub other_info: String,
}

impl ProfileFormProps {
    /// Age as whole years when it is a finite, non-negative integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn age_years(&self) -> Option<u32> {
        let valid = self.age.is_finite() && self.age >= 0.0 && self.age.fract() == 0.0 && self.age <= f64::from(u32::MAX);
        valid.then(|| self.age as u32)
    }
}

/// Path params of the survey and evaluate routes, passed through as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupParams {
    #[serde(rename = "ageGroup")]
    pub age_group: String,
    pub gender: String,
}

pub const DEFAULT_LOGIN_REDIRECT: &str = "/";

pub fn login_props(m: &RouteMatch) -> ViewProps {
    let redirect = m.query("redirect").filter(|r| !r.is_empty()).unwrap_or(DEFAULT_LOGIN_REDIRECT);
    ViewProps::Login { redirect: redirect.to_owned() }
}

pub fn profile_form_props(m: &RouteMatch) -> ViewProps {
    ViewProps::ProfileForm(ProfileFormProps {
        age: parse_age(m.query("age")),
        gender: m.query("gender").unwrap_or_default().to_owned(),
        other_info: m.query("otherInfo").unwrap_or_default().to_owned(),
    })
}

pub fn group_params_props(m: &RouteMatch) -> ViewProps {
    ViewProps::GroupParams(GroupParams {
        age_group: m.param("ageGroup").unwrap_or_default().to_owned(),
        gender: m.param("gender").unwrap_or_default().to_owned(),
    })
}

pub fn report_props(m: &RouteMatch) -> ViewProps {
    let report = m.query("report").filter(|r| !r.is_empty()).map(decode_component).unwrap_or_default();
    ViewProps::Report { report }
}

/// Numeric coercion for the `age` query value.
///
/// Missing → `NaN`, blank → `0`, `0x`/`0b`/`0o` prefixes read as hex,
/// binary and octal, otherwise the trimmed text parsed as a float (`NaN`
/// if that fails).
#[must_use]
pub fn parse_age(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_prefixed(trimmed) {
        return value;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts spellings like "inf" and "nan" that are not numbers here.
        _ if trimmed.chars().any(char::is_alphabetic) && !is_exponent_form(trimmed) => f64::NAN,
        _ => trimmed.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Unsigned `0x`/`0b`/`0o` literals. `None` when there is no such prefix;
/// `Some(NaN)` when the prefix is followed by no digits or by invalid ones.
fn parse_radix_prefixed(s: &str) -> Option<f64> {
    let mut chars = s.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next()?.to_ascii_lowercase() {
        'x' => 16,
        'b' => 2,
        'o' => 8,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits
        .chars()
        .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)));
    Some(value.unwrap_or(f64::NAN))
}

fn is_exponent_form(s: &str) -> bool {
    s.chars().filter(|c| c.is_alphabetic()).all(|c| c == 'e' || c == 'E')
}
