//! Free-text filtering over the member collection.
//!
//! A stable, case-insensitive substring filter: no tokenization, no ranking.
//! The result order always equals the collection order.

use crate::models::MemberRecord;

/// Derive the filtered view for a query.
///
/// A record is included if any of name, email, role, status or teams contains
/// the lowercased query as a substring. The empty query is the identity.
pub fn filter_members<'a>(members: &'a [MemberRecord], query: &str) -> Vec<&'a MemberRecord> {
    if query.is_empty() {
        return members.iter().collect();
    }

    let needle = query.to_lowercase();
    members.iter().filter(|m| m.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberStatus;

    fn member(name: &str, email: &str, role: &str, status: MemberStatus, teams: &str) -> MemberRecord {
        MemberRecord {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
            teams: teams.to_string(),
            ..MemberRecord::blank()
        }
    }

    fn sample() -> Vec<MemberRecord> {
        vec![
            member("Ada Lovelace", "ada@x.io", "Engineer", MemberStatus::Active, "Platform"),
            member("Grace Hopper", "grace@x.io", "Admiral", MemberStatus::Inactive, "Compilers"),
            member("Alan Kay", "alan@x.io", "Researcher", MemberStatus::Active, "Design"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let members = sample();
        let filtered = filter_members(&members, "");
        assert_eq!(filtered.len(), members.len());
        for (got, want) in filtered.iter().zip(members.iter()) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let members = sample();
        assert_eq!(filter_members(&members, "GRACE").len(), 1);
        assert_eq!(filter_members(&members, "active").len(), 3); // "Inactive" contains "active"
        assert_eq!(filter_members(&members, "ADMIRAL").len(), 1);
    }

    #[test]
    fn test_match_covers_all_five_fields() {
        let members = sample();
        assert_eq!(filter_members(&members, "lovelace")[0].name, "Ada Lovelace"); // name
        assert_eq!(filter_members(&members, "alan@")[0].name, "Alan Kay"); // email
        assert_eq!(filter_members(&members, "engineer")[0].name, "Ada Lovelace"); // role
        assert_eq!(filter_members(&members, "inactive")[0].name, "Grace Hopper"); // status
        assert_eq!(filter_members(&members, "compilers")[0].name, "Grace Hopper"); // teams
    }

    #[test]
    fn test_result_preserves_collection_order() {
        let members = sample();
        let filtered = filter_members(&members, "a"); // matches everyone
        let names: Vec<&str> = filtered.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper", "Alan Kay"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let members = sample();
        assert!(filter_members(&members, "zzz").is_empty());
    }
}
