//! Route registration for the VAS pages

use crate::modules::vas::application::PAGE_TAG;

/// Page name in the URL mapped to the element that renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRegistration {
    pub tagname: &'static str,
    pub page: &'static str,
}

pub const ROUTES: &[RouteRegistration] = &[RouteRegistration {
    tagname: PAGE_TAG,
    page: "vas",
}];

/// Tag to render for `page`; query strings and trailing slashes are ignored
pub fn route(page: &str) -> Option<&'static str> {
    let page = page.split(['?', '#']).next().unwrap_or_default();
    let page = page.trim_matches('/');
    ROUTES
        .iter()
        .find(|registration| registration.page == page)
        .map(|registration| registration.tagname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vas_page_resolves_to_list_tag() {
        assert_eq!(route("vas"), Some("vas-list"));
        assert_eq!(route("/vas/"), Some("vas-list"));
        assert_eq!(route("vas?page=2"), Some("vas-list"));
    }

    #[test]
    fn unknown_pages_do_not_resolve() {
        assert_eq!(route("vas-list"), None);
        assert_eq!(route(""), None);
    }
}
