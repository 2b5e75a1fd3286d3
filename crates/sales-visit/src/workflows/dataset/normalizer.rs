use crate::workflows::visits::domain::{InterestLevel, UserRole};

/// Lowercases and collapses whitespace; strips BOM and zero-width spaces that
/// spreadsheet exports like to leave behind.
pub(crate) fn normalize_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Field teams log interest in either English or Indonesian.
pub(crate) fn parse_interest_level(raw: &str) -> Option<InterestLevel> {
    match normalize_label(raw).as_str() {
        "low" | "rendah" => Some(InterestLevel::Low),
        "medium" | "sedang" => Some(InterestLevel::Medium),
        "high" | "tinggi" => Some(InterestLevel::High),
        _ => None,
    }
}

pub(crate) fn parse_role(raw: &str) -> Option<UserRole> {
    match normalize_label(raw).as_str() {
        "sales" => Some(UserRole::Sales),
        "admin" => Some(UserRole::Admin),
        "super_admin" | "super-admin" | "super admin" | "superadmin" => Some(UserRole::SuperAdmin),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_label_removes_whitespace_and_case() {
        assert_eq!(normalize_label("\u{feff}  Super   ADMIN "), "super admin");
    }

    #[test]
    fn interest_levels_accept_both_vocabularies() {
        assert_eq!(parse_interest_level("Tinggi"), Some(InterestLevel::High));
        assert_eq!(parse_interest_level(" medium "), Some(InterestLevel::Medium));
        assert_eq!(parse_interest_level("RENDAH"), Some(InterestLevel::Low));
        assert_eq!(parse_interest_level("lukewarm"), None);
    }

    #[test]
    fn roles_accept_common_spellings() {
        assert_eq!(parse_role("super-admin"), Some(UserRole::SuperAdmin));
        assert_eq!(parse_role("Super_Admin"), Some(UserRole::SuperAdmin));
        assert_eq!(parse_role("Sales"), Some(UserRole::Sales));
        assert_eq!(parse_role("guest"), None);
    }
}
