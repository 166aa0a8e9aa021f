// web_app/layout.rs - Page composition
//
// Every route renders a fixed, top-to-bottom list of child components.
// That list lives here as plain data so that the page components and
// the router share one definition, and so it can be inspected without
// a Leptos runtime.

/// CSS class of the element wrapping the product listing on /products
pub const PRODUCTS_CONTAINER_CLASS: &str = "products-page";

/// A route-level page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Orders,
    Products {
        /// Category slug forwarded to the listing, exactly as received
        selected_category: Option<String>,
    },
    Profile,
    Wishlist,
}

/// One node of a page tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Navbar,
    HeroSection,
    Products { selected_category: Option<String> },
    AboutUs,
    Orders,
    Wishlist,
    ProfileWrapper,
    Footer,
    /// Plain `<div>` wrapping nested sections
    Container {
        class: &'static str,
        children: Vec<Section>,
    },
}

impl Page {
    /// Pages reachable from the router (the products page unfiltered)
    pub const ROUTES: [Page; 5] = [
        Page::Home,
        Page::Products { selected_category: None },
        Page::Orders,
        Page::Profile,
        Page::Wishlist,
    ];

    pub fn products(selected_category: Option<String>) -> Self {
        Page::Products { selected_category }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Orders => "/orders",
            Page::Products { .. } => "/products",
            Page::Profile => "/profile",
            Page::Wishlist => "/wishlist",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Storefront",
            Page::Orders => "My Orders | Storefront",
            Page::Products { .. } => "Products | Storefront",
            Page::Profile => "My Profile | Storefront",
            Page::Wishlist => "My Wishlist | Storefront",
        }
    }

    /// Top-level children of the page, in render order
    pub fn sections(&self) -> Vec<Section> {
        match self {
            Page::Home => vec![
                Section::Navbar,
                Section::HeroSection,
                Section::Products { selected_category: None },
                Section::AboutUs,
                Section::Footer,
            ],
            Page::Orders => vec![Section::Navbar, Section::Orders, Section::Footer],
            Page::Products { selected_category } => vec![
                Section::Navbar,
                Section::Container {
                    class: PRODUCTS_CONTAINER_CLASS,
                    children: vec![Section::Products {
                        selected_category: selected_category.clone(),
                    }],
                },
                Section::Footer,
            ],
            Page::Profile => vec![Section::Navbar, Section::ProfileWrapper, Section::Footer],
            Page::Wishlist => vec![Section::Navbar, Section::Wishlist, Section::Footer],
        }
    }
}

impl Section {
    /// Name of the component this section renders
    pub fn name(&self) -> &'static str {
        match self {
            Section::Navbar => "Navbar",
            Section::HeroSection => "HeroSection",
            Section::Products { .. } => "Products",
            Section::AboutUs => "AboutUs",
            Section::Orders => "Orders",
            Section::Wishlist => "Wishlist",
            Section::ProfileWrapper => "ProfileWrapper",
            Section::Footer => "Footer",
            Section::Container { .. } => "Container",
        }
    }

    pub fn children(&self) -> &[Section] {
        match self {
            Section::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Category handed to a Products section; None for every other section
    pub fn selected_category(&self) -> Option<&str> {
        match self {
            Section::Products { selected_category } => selected_category.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sections: &[Section]) -> Vec<&'static str> {
        sections.iter().map(Section::name).collect()
    }

    #[test]
    fn test_home_sections() {
        assert_eq!(
            names(&Page::Home.sections()),
            ["Navbar", "HeroSection", "Products", "AboutUs", "Footer"]
        );
    }

    #[test]
    fn test_home_products_unfiltered() {
        let sections = Page::Home.sections();
        assert_eq!(sections[2], Section::Products { selected_category: None });
    }

    #[test]
    fn test_products_page_wraps_listing() {
        let sections = Page::products(Some("books".to_string())).sections();
        assert_eq!(names(&sections), ["Navbar", "Container", "Footer"]);
        match &sections[1] {
            Section::Container { class, children } => {
                assert_eq!(*class, "products-page");
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].selected_category(), Some("books"));
            }
            other => panic!("expected container, got {:?}", other),
        }
    }

    #[test]
    fn test_leaf_sections_have_no_children() {
        for section in Page::Home.sections() {
            assert!(section.children().is_empty(), "{} has children", section.name());
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Page::ROUTES.iter().map(Page::path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Page::ROUTES.len());
    }

    #[test]
    fn test_products_path_ignores_category() {
        assert_eq!(Page::products(Some("toys".into())).path(), "/products");
        assert_eq!(Page::products(None).path(), "/products");
    }
}
