// tests/page_layout_tests.rs
// Which components each page is made of, checked without a Leptos runtime

use storefront::web_app::layout::{Page, Section, PRODUCTS_CONTAINER_CLASS};

fn names(sections: &[Section]) -> Vec<&'static str> {
    sections.iter().map(Section::name).collect()
}

/// Every Products section anywhere in the tree, depth first
fn product_sections(sections: &[Section]) -> Vec<&Section> {
    let mut found = vec![];
    for section in sections {
        if let Section::Products { .. } = section {
            found.push(section);
        }
        found.extend(product_sections(section.children()));
    }
    found
}

#[test]
fn test_every_page_is_framed_by_navbar_and_footer() {
    for page in Page::ROUTES {
        let sections = page.sections();
        assert_eq!(sections.first(), Some(&Section::Navbar), "{:?}", page);
        assert_eq!(sections.last(), Some(&Section::Footer), "{:?}", page);
    }
}

#[test]
fn test_home_page() {
    let sections = Page::Home.sections();
    assert_eq!(
        names(&sections),
        ["Navbar", "HeroSection", "Products", "AboutUs", "Footer"]
    );

    let products = product_sections(&sections);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].selected_category(), None);
}

#[test]
fn test_account_pages() {
    assert_eq!(names(&Page::Orders.sections()), ["Navbar", "Orders", "Footer"]);
    assert_eq!(names(&Page::Wishlist.sections()), ["Navbar", "Wishlist", "Footer"]);
    assert_eq!(
        names(&Page::Profile.sections()),
        ["Navbar", "ProfileWrapper", "Footer"]
    );
}

#[test]
fn test_products_page_forwards_category() {
    let sections = Page::products(Some("electronics".to_string())).sections();
    assert_eq!(names(&sections), ["Navbar", "Container", "Footer"]);

    let Section::Container { class, children } = &sections[1] else {
        panic!("expected a container, got {:?}", sections[1]);
    };
    assert_eq!(*class, PRODUCTS_CONTAINER_CLASS);
    assert_eq!(names(children), ["Products"]);
    assert_eq!(children[0].selected_category(), Some("electronics"));
}

#[test]
fn test_products_page_without_category() {
    let sections = Page::products(None).sections();
    let products = product_sections(&sections);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].selected_category(), None);
}

#[test]
fn test_products_page_keeps_empty_category() {
    // The page forwards what it is given; the router drops empty values
    let sections = Page::products(Some(String::new())).sections();
    let products = product_sections(&sections);
    assert_eq!(
        products[0],
        &Section::Products { selected_category: Some(String::new()) }
    );
}

#[test]
fn test_composition_is_deterministic() {
    for page in Page::ROUTES {
        assert_eq!(page.sections(), page.sections());
    }
    let filtered = Page::products(Some("books".to_string()));
    assert_eq!(filtered.sections(), filtered.clone().sections());
}

#[test]
fn test_paths_and_titles() {
    let paths: Vec<&str> = Page::ROUTES.iter().map(Page::path).collect();
    assert_eq!(paths, ["/", "/products", "/orders", "/profile", "/wishlist"]);

    assert_eq!(Page::products(Some("books".to_string())).path(), "/products");
    for page in Page::ROUTES {
        assert!(page.title().ends_with("Storefront"), "{:?}", page);
    }
}

#[test]
fn test_leaf_sections_have_no_children() {
    for page in Page::ROUTES {
        for section in page.sections() {
            if !matches!(section, Section::Container { .. }) {
                assert!(section.children().is_empty(), "{:?}", section);
            }
        }
    }
}
