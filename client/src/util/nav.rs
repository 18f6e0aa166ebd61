//! Navigation link tables for the sidebar and header.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

const fn link(path: &'static str, icon: &'static str, label: &'static str) -> NavLink {
    NavLink { path, icon, label }
}

/// Links every signed-in user sees.
pub const MAIN_LINKS: [NavLink; 13] = [
    link("/dashboard", "📊", "Dashboard"),
    link("/assessments", "📝", "Assessments"),
    link("/career-matches", "🎯", "Career Matches"),
    link("/ai-chatbot", "🤖", "AI Chatbot"),
    link("/ai-tools", "🧮", "AI Tools"),
    link("/explore-colleges", "🏛️", "Explore Colleges"),
    link("/saved-items", "⭐", "Saved Items"),
    link("/resource-library", "📚", "Resource Library"),
    link("/webinars", "📺", "Webinars"),
    link("/community", "👥", "Community"),
    link("/blog", "📰", "Blog"),
    link("/my-profile", "👤", "My Profile"),
    link("/settings", "⚙️", "Settings"),
];

/// Admin-only links.
pub const ADMIN_LINKS: [NavLink; 8] = [
    link("/admin/dashboard", "🛡️", "Admin Dashboard"),
    link("/admin/users", "👥", "Manage Users"),
    link("/admin/colleges", "🏛️", "Manage Colleges"),
    link("/admin/careers", "💼", "Manage Careers"),
    link("/admin/scholarships", "🎓", "Manage Scholarships"),
    link("/admin/blog", "📰", "Manage Blog"),
    link("/admin/webinars", "📺", "Manage Webinars"),
    link("/admin/submissions", "📨", "Submissions"),
];

/// Admin links visible to this user: all of them for admins, none otherwise.
pub fn admin_links(is_admin: bool) -> &'static [NavLink] {
    if is_admin { &ADMIN_LINKS } else { &[] }
}

/// Whether `link_path` should render as active for the current `path`.
pub fn is_active(link_path: &str, path: &str) -> bool {
    path == link_path || path.strip_prefix(link_path).is_some_and(|rest| rest.starts_with('/'))
}

/// Header title for the current path.
pub fn page_title(path: &str) -> &'static str {
    if path.starts_with("/colleges/") {
        return "College Details";
    }
    if path.starts_with("/blog/") {
        return "Blog";
    }
    MAIN_LINKS
        .iter()
        .chain(ADMIN_LINKS.iter())
        .find(|link| link.path == path)
        .map_or("Learn-x-AI", |link| link.label)
}
