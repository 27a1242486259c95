//! Site chrome: header navigation, footer, sidebar and breadcrumbs.

/// A header navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl NavItem {
    #[must_use]
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            active: false,
        }
    }
}

/// Header links used when a page supplies none.
#[must_use]
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("/", "Home"),
        NavItem::new("/products", "Products"),
        NavItem::new("/about", "About Us"),
        NavItem::new("/contact", "Contact"),
    ]
}

/// Sticky site header.
#[derive(Debug, Clone)]
pub struct NavigationMenu {
    pub brand_name: String,
    pub items: Vec<NavItem>,
    pub cart_item_count: u32,
    /// Current header search text; the search box is shown when `Some`.
    pub search_query: Option<String>,
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self {
            brand_name: "StoreLogo".to_string(),
            items: default_nav_items(),
            cart_item_count: 0,
            search_query: None,
        }
    }
}

impl NavigationMenu {
    #[must_use]
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_cart_count(mut self, count: u32) -> Self {
        self.cart_item_count = count;
        self
    }

    /// Show the search box, pre-filled with `query`.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Mark the item whose href best matches `path` as active.
    #[must_use]
    pub fn with_active_path(mut self, path: &str) -> Self {
        let best = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                path == item.href
                    || (item.href != "/" && path.starts_with(&format!("{}/", item.href)))
            })
            .max_by_key(|(_, item)| item.href.len())
            .map(|(i, _)| i);

        for (i, item) in self.items.iter_mut().enumerate() {
            item.active = Some(i) == best;
        }
        self
    }

    #[must_use]
    pub const fn show_cart_badge(&self) -> bool {
        self.cart_item_count > 0
    }

    #[must_use]
    pub fn cart_label(&self) -> String {
        match self.cart_item_count {
            0 => "Shopping Cart".to_string(),
            1 => "Shopping Cart (1 item)".to_string(),
            n => format!("Shopping Cart ({n} items)"),
        }
    }
}

/// A footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// A social media icon link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Icon name in the sprite sheet.
    pub icon: String,
}

fn section(title: &str, links: &[(&str, &str)]) -> FooterSection {
    FooterSection {
        title: title.to_string(),
        links: links
            .iter()
            .map(|(label, href)| FooterLink {
                label: (*label).to_string(),
                href: (*href).to_string(),
            })
            .collect(),
    }
}

#[must_use]
pub fn default_footer_sections() -> Vec<FooterSection> {
    vec![
        section(
            "Shop",
            &[
                ("All Products", "/products"),
                ("New Arrivals", "/products?sort=newest"),
                ("Best Sellers", "/products?sort=popular"),
            ],
        ),
        section(
            "Customer Service",
            &[
                ("Contact Us", "/contact"),
                ("FAQ", "/faq"),
                ("Shipping & Returns", "/shipping-returns"),
            ],
        ),
        section(
            "Our Company",
            &[
                ("About Us", "/about"),
                ("Careers", "/careers"),
                ("Press", "/press"),
            ],
        ),
    ]
}

#[must_use]
pub fn default_social_links() -> Vec<SocialLink> {
    [
        ("Twitter", "#", "twitter"),
        ("LinkedIn", "#", "linkedin"),
        ("GitHub", "#", "github"),
        ("Email", "mailto:info@example.com", "mail"),
    ]
    .into_iter()
    .map(|(label, href, icon)| SocialLink {
        label: label.to_string(),
        href: href.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// Site footer.
#[derive(Debug, Clone)]
pub struct Footer {
    pub brand_name: String,
    pub tagline: String,
    pub sections: Vec<FooterSection>,
    pub social_links: Vec<SocialLink>,
    pub year: i32,
}

impl Footer {
    #[must_use]
    pub fn new(brand_name: impl Into<String>, year: i32) -> Self {
        Self {
            brand_name: brand_name.into(),
            tagline: "High-quality products delivered to your doorstep.".to_string(),
            sections: default_footer_sections(),
            social_links: default_social_links(),
            year,
        }
    }

    #[must_use]
    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, self.brand_name)
    }
}

/// Side panel with an optional title; templates supply the body.
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    pub title: Option<String>,
}

impl Sidebar {
    /// Body text shown when a page has nothing to put in the sidebar.
    pub const FALLBACK_TEXT: &'static str = "Sidebar content goes here.";

    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// One breadcrumb; the last crumb is the current page and has no link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

/// Breadcrumb trail builder.
#[derive(Debug, Clone, Default)]
pub struct Breadcrumbs {
    pub crumbs: Vec<Breadcrumb>,
}

impl Breadcrumbs {
    /// Start a trail at Home.
    #[must_use]
    pub fn home() -> Self {
        Self::default().link("Home", "/")
    }

    #[must_use]
    pub fn link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.crumbs.push(Breadcrumb {
            label: label.into(),
            href: Some(href.into()),
        });
        self
    }

    /// Finish the trail with the current page.
    #[must_use]
    pub fn page(mut self, label: impl Into<String>) -> Self {
        self.crumbs.push(Breadcrumb {
            label: label.into(),
            href: None,
        });
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let menu = NavigationMenu::default();
        assert_eq!(menu.brand_name, "StoreLogo");
        let labels: Vec<&str> = menu.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Products", "About Us", "Contact"]);
        assert!(!menu.show_cart_badge());
    }

    #[test]
    fn test_cart_badge() {
        let menu = NavigationMenu::new("ElectroMart").with_cart_count(3);
        assert!(menu.show_cart_badge());
        assert_eq!(menu.cart_label(), "Shopping Cart (3 items)");
    }

    #[test]
    fn test_active_path_prefers_longest_match() {
        let menu = NavigationMenu::new("ElectroMart").with_active_path("/products/p123");
        let active: Vec<&str> = menu
            .items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(active, ["Products"]);

        let home = NavigationMenu::new("ElectroMart").with_active_path("/");
        assert!(home.items.first().unwrap().active);

        let cart = NavigationMenu::new("ElectroMart").with_active_path("/cart");
        assert!(cart.items.iter().all(|i| !i.active));
    }

    #[test]
    fn test_footer() {
        let footer = Footer::new("ElectroMart", 2026);
        assert_eq!(footer.copyright(), "© 2026 ElectroMart. All rights reserved.");
        let titles: Vec<&str> = footer.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Shop", "Customer Service", "Our Company"]);
        assert_eq!(footer.social_links.len(), 4);
    }

    #[test]
    fn test_breadcrumbs() {
        let trail = Breadcrumbs::home().link("Products", "/products").page("Watch");
        assert_eq!(trail.crumbs.len(), 3);
        assert!(trail.crumbs.last().unwrap().href.is_none());
        assert_eq!(trail.crumbs.first().unwrap().href.as_deref(), Some("/"));
    }
}
