//! The page header shown above every dashboard page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the header.
///
/// It will change appearance if `is_current` is set to `true`. Only one link
/// should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white border-b-2 border-orange-400 lg:p-0"
        } else {
            "block py-2 px-3 text-white/70 hover:text-white lg:p-0"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct Header<'a> {
    links: Vec<Link<'a>>,
}

impl Header<'_> {
    /// Get the header.
    ///
    /// If a link matches `active_endpoint`, then that link will be marked as
    /// active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> Header<'_> {
        let links = vec![Link {
            url: endpoints::DASHBOARD_VIEW,
            title: "Listagem",
            is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
        }];

        Header { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            header class="bg-indigo-700 pb-32"
            {
                nav
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-6"
                {
                    a
                        href=(endpoints::ROOT)
                        class="self-center text-2xl font-semibold whitespace-nowrap text-white"
                    {
                        "GoFinances"
                    }

                    ul class="font-medium flex flex-row space-x-8"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::Header;

    #[test]
    fn marks_dashboard_link_as_current() {
        let header = Header::new(endpoints::DASHBOARD_VIEW);

        assert!(header.links.iter().all(|link| link.is_current));
    }

    #[test]
    fn other_endpoints_leave_links_inactive() {
        let header = Header::new(endpoints::INTERNAL_ERROR_VIEW);

        assert!(header.links.iter().all(|link| !link.is_current));
    }

    #[test]
    fn renders_current_link_with_aria_current() {
        let html = Header::new(endpoints::DASHBOARD_VIEW).into_html();
        let html = Html::parse_fragment(&html.into_string());

        let current = html
            .select(&Selector::parse("a[aria-current='page']").unwrap())
            .next()
            .expect("no link marked as the current page");

        assert_eq!(current.value().attr("href"), Some(endpoints::DASHBOARD_VIEW));
    }
}
