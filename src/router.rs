//! Static page routing and the sidebar menu.
//!
//! Maps path strings to page titles. Only [`ARTICLES_PATH`] hosts the article
//! table; every other page is a placeholder.

/// Path of the page hosting the article table.
pub const ARTICLES_PATH: &str = "/articles/generated";

/// Title shown for unknown paths.
pub const NOT_FOUND_TITLE: &str = "Not Found";

const PLACEHOLDER_SUBTITLE: &str =
    "This is a placeholder view for this section. You can plug in the actual layout here later.";
const NOT_FOUND_SUBTITLE: &str = "This page does not exist yet.";

/// What a page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The article table dashboard.
    Articles,
    /// Title + subtitle only.
    Placeholder,
    NotFound,
}

/// A resolved page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: PageKind,
}

/// (path, title) for every known page.
const ROUTES: &[(&str, &str)] = &[
    ("/articles/create", "Create Article"),
    (ARTICLES_PATH, "Generated Articles"),
    ("/articles/keyword-projects", "Keyword Projects"),
    ("/articles/ai-keyword-to-article", "AI Keyword to Article"),
    ("/articles/steal-competitor-keyword", "Steal Competitor Keyword"),
    ("/articles/import-from-gsc", "Import Keyword from GSC"),
    ("/articles/manual-keyword-to-article", "Manual Keyword to Article"),
    ("/articles/bulk-keyword-to-article", "Bulk Keyword to Article"),
    ("/articles/longtail-keyword-to-article", "Longtail Keyword to Article"),
    ("/articles/settings", "Article Settings"),
    ("/auto-blog", "Auto Blog"),
    ("/internal-links", "Internal Links"),
    ("/free-backlinks", "Free Backlinks"),
    ("/integrations", "Integrations"),
    ("/subscription", "Subscription"),
    ("/affiliate-program", "Affiliate Program"),
    ("/help-center", "Help Center"),
    ("/updates", "Updates"),
    ("/live-chat-support", "Live Chat Support"),
    ("/profile", "Profile"),
];

/// Resolves a path. `/` redirects to the article table; unknown paths
/// resolve to a Not Found page that keeps the requested path.
pub fn resolve(path: &str) -> Page {
    let path = if path.is_empty() || path == "/" {
        ARTICLES_PATH
    } else {
        path
    };

    match ROUTES.iter().find(|(p, _)| *p == path) {
        Some(&(p, title)) => Page {
            path: p.to_string(),
            title,
            subtitle: if p == ARTICLES_PATH {
                ""
            } else {
                PLACEHOLDER_SUBTITLE
            },
            kind: if p == ARTICLES_PATH {
                PageKind::Articles
            } else {
                PageKind::Placeholder
            },
        },
        None => Page {
            path: path.to_string(),
            title: NOT_FOUND_TITLE,
            subtitle: NOT_FOUND_SUBTITLE,
            kind: PageKind::NotFound,
        },
    }
}

/// Path of a page title, if any.
pub fn path_for_title(title: &str) -> Option<&'static str> {
    ROUTES.iter().find(|(_, t)| *t == title).map(|(p, _)| *p)
}

/// A sidebar section; sections without items link directly to a page.
#[derive(Debug, Clone, Copy)]
pub struct MenuSection {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

pub const MENU: &[MenuSection] = &[
    MenuSection {
        label: "Articles",
        items: &[
            "Create Article",
            "Generated Articles",
            "Keyword Projects",
            "AI Keyword to Article",
            "Steal Competitor Keyword",
            "Import Keyword from GSC",
            "Manual Keyword to Article",
            "Bulk Keyword to Article",
            "Longtail Keyword to Article",
            "Article Settings",
        ],
    },
    MenuSection { label: "Auto Blog", items: &[] },
    MenuSection { label: "Internal Links", items: &[] },
    MenuSection { label: "Free Backlinks", items: &[] },
    MenuSection { label: "Integrations", items: &[] },
    MenuSection { label: "Subscription", items: &[] },
    MenuSection { label: "Affiliate Program", items: &[] },
    MenuSection { label: "Help Center", items: &[] },
    MenuSection { label: "Updates", items: &[] },
    MenuSection { label: "Live Chat Support", items: &[] },
    MenuSection { label: "Profile", items: &[] },
];

/// One selectable sidebar line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    /// Nested under a section header.
    pub nested: bool,
}

/// Flattens [`MENU`] into navigable entries. Section headers with items are
/// not themselves selectable.
pub fn menu_entries() -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    for section in MENU {
        if section.items.is_empty() {
            if let Some(path) = path_for_title(section.label) {
                entries.push(MenuEntry {
                    label: section.label,
                    path,
                    nested: false,
                });
            }
            continue;
        }
        for item in section.items {
            if let Some(path) = path_for_title(item) {
                entries.push(MenuEntry {
                    label: item,
                    path,
                    nested: true,
                });
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_articles() {
        let page = resolve("/");
        assert_eq!(page.path, ARTICLES_PATH);
        assert_eq!(page.kind, PageKind::Articles);
        assert_eq!(page.title, "Generated Articles");
    }

    #[test]
    fn known_paths_are_placeholders() {
        let page = resolve("/help-center");
        assert_eq!(page.title, "Help Center");
        assert_eq!(page.kind, PageKind::Placeholder);
        assert!(page.subtitle.starts_with("This is a placeholder"));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let page = resolve("/nope");
        assert_eq!(page.kind, PageKind::NotFound);
        assert_eq!(page.title, NOT_FOUND_TITLE);
        assert_eq!(page.subtitle, "This page does not exist yet.");
        assert_eq!(page.path, "/nope");
    }

    #[test]
    fn every_menu_label_has_a_route() {
        let entries = menu_entries();
        let labels: usize = MENU
            .iter()
            .map(|s| if s.items.is_empty() { 1 } else { s.items.len() })
            .sum();
        assert_eq!(entries.len(), labels);
        assert_eq!(entries.len(), ROUTES.len());
        assert!(entries.iter().any(|e| e.path == ARTICLES_PATH && e.nested));
        assert!(entries.iter().any(|e| e.path == "/profile" && !e.nested));
    }
}
