use crate::models::User;

/// Whether a search term should narrow the list at all
pub fn is_search_active(term: &str) -> bool {
    !term.trim().is_empty()
}

/// Records whose name or email contains `term`, ignoring case.
///
/// A blank term returns every record. The term itself is matched as typed
/// (only lower-cased), so surrounding spaces are significant once the term
/// has any other content. Company names are not searched.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    if !is_search_active(term) {
        return users.iter().collect();
    }

    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Summary shown above the cards while searching, e.g.
/// `Found 1 user matching "swa"`
pub fn match_summary(count: usize, term: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {} user{} matching \"{}\"", count, plural, term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_users;

    fn ids(users: &[&User]) -> Vec<String> {
        users.iter().map(|u| u.id.clone()).collect()
    }

    #[test]
    fn test_blank_term_returns_everything() {
        let users = sample_users();
        assert_eq!(filter_users(&users, "").len(), 2);
        assert_eq!(filter_users(&users, "   ").len(), 2);
        assert_eq!(filter_users(&users, "\t\n").len(), 2);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let users = sample_users();
        assert_eq!(ids(&filter_users(&users, "SWA")), vec!["f922"]);
    }

    #[test]
    fn test_matches_email() {
        let users = sample_users();
        // "alex" only appears in sourabh's email
        assert_eq!(ids(&filter_users(&users, "alex")), vec!["f923"]);
        assert_eq!(ids(&filter_users(&users, "gmail")), vec!["f922", "f923"]);
    }

    #[test]
    fn test_company_is_not_searched() {
        let users = sample_users();
        assert!(filter_users(&users, "xyz").is_empty());
    }

    #[test]
    fn test_padded_term_is_matched_as_typed() {
        let users = sample_users();
        assert!(filter_users(&users, " swaraj").is_empty());
    }

    #[test]
    fn test_repeated_term_is_stable() {
        let users = sample_users();
        let first = ids(&filter_users(&users, "s"));
        let second = ids(&filter_users(&users, "s"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_summary_pluralizes() {
        assert_eq!(match_summary(1, "swa"), "Found 1 user matching \"swa\"");
        assert_eq!(match_summary(0, "zz"), "Found 0 users matching \"zz\"");
        assert_eq!(match_summary(2, "s"), "Found 2 users matching \"s\"");
    }
}
