use super::*;

#[test]
fn admin_links_hidden_for_non_admin() {
    assert!(admin_links(false).is_empty());
    assert_eq!(admin_links(true).len(), ADMIN_LINKS.len());
}

#[test]
fn active_matches_exact_and_nested_paths() {
    assert!(is_active("/blog", "/blog"));
    assert!(is_active("/blog", "/blog/p1"));
    assert!(!is_active("/blog", "/blogger"));
    assert!(!is_active("/dashboard", "/admin/dashboard"));
}

#[test]
fn page_title_uses_link_labels() {
    assert_eq!(page_title("/career-matches"), "Career Matches");
    assert_eq!(page_title("/admin/users"), "Manage Users");
    assert_eq!(page_title("/admin/webinars"), "Manage Webinars");
    assert_eq!(page_title("/resource-library"), "Resource Library");
    assert_eq!(page_title("/colleges/c1"), "College Details");
    assert_eq!(page_title("/unknown"), "Learn-x-AI");
}

#[test]
fn link_paths_are_unique() {
    let mut paths: Vec<_> = MAIN_LINKS.iter().chain(ADMIN_LINKS.iter()).map(|l| l.path).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), MAIN_LINKS.len() + ADMIN_LINKS.len());
}
