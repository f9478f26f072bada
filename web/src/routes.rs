//! The site's route table.
//!
//! Every page the site serves is declared here, once, as data: a literal
//! path, the target it dispatches to, and an opaque name used for
//! reverse lookup when another page needs to link to it. The table is
//! built into the binary and never changes at runtime; `router` turns it
//! into the live axum router at startup.

use log::*;

/// What a matched route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a fixed template with no computed context.
    Template(&'static str),
    /// Delegate to one of the named controller functions.
    Handler(NamedHandler),
}

/// The controller functions routable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedHandler {
    Home,
    Calculator,
    Guide,
    CreateCheckoutSession,
    Cancel,
    Success,
    TrialSignup,
    TrialSignupOxygenFinance,
}

/// One entry in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub target: RouteTarget,
    /// Opaque identifier for reverse lookup; not required to be unique.
    pub name: &'static str,
}

const fn template(path: &'static str, template: &'static str, name: &'static str) -> Route {
    Route {
        path,
        target: RouteTarget::Template(template),
        name,
    }
}

const fn handler(path: &'static str, handler: NamedHandler, name: &'static str) -> Route {
    Route {
        path,
        target: RouteTarget::Handler(handler),
        name,
    }
}

/// The route table. Paths are matched exactly, trailing slashes
/// included; the `landing_page*` pair at the bottom are two
/// campaign-specific aliases of the same signup flow.
pub const ROUTES: &[Route] = &[
    template("/ITservices", "ITServices.html", "ITservices"),
    template("/financialservices", "financialservices.html", "financialservices"),
    template("/facilitymanagement", "facilitymanagement.html", "facilitymanagement"),
    template("/healthcare", "healthcare.html", "healthcare"),
    template("/telecoms", "telecoms.html", "telecoms"),
    template("/publicsector", "publicsector.html", "publicsector"),
    template("/languageengine", "languageengine.html", "languageengine"),
    template("/security", "security.html", "security"),
    template("/futureai", "aiblog.html", "futureai"),
    template("/story", "story.html", "story"),
    template("/intro", "intro.html", "intro"),
    template("/about", "about.html", "about"),
    template("/pricing", "enrollmentTesting.html", "pricing"),
    handler("/calculator/", NamedHandler::Calculator, "calculator"),
    template("/thankyou", "thankyou.html", "thankyou"),
    handler("/guide/", NamedHandler::Guide, "guide"),
    handler("/", NamedHandler::Home, "home"),
    handler("/cancel/", NamedHandler::Cancel, "cancel"),
    handler("/success/", NamedHandler::Success, "success"),
    handler(
        "/create-checkout-session/",
        NamedHandler::CreateCheckoutSession,
        "create-checkout-session",
    ),
    template("/terms_and_conditions", "terms_and_conditions.html", "terms_and_conditions"),
    template(
        "/data_protection_overview",
        "data_protection_overview.html",
        "data_protection_overview",
    ),
    handler("/bidstats", NamedHandler::TrialSignup, "landing_page"),
    handler(
        "/oxygen-finance",
        NamedHandler::TrialSignupOxygenFinance,
        "landing_page_oxygen_finance",
    ),
];

/// Looks a path up against the table. Exact match only.
pub fn lookup(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Reverse lookup: the path registered under `name`.
///
/// Duplicate names are tolerated; the first route in table order wins,
/// so resolution stays deterministic.
pub fn reverse(name: &str) -> Option<&'static str> {
    reverse_in(ROUTES, name)
}

fn reverse_in(table: &[Route], name: &str) -> Option<&'static str> {
    table.iter().find(|route| route.name == name).map(|route| route.path)
}

/// Names registered by more than one route.
fn duplicate_names_in(table: &[Route]) -> Vec<&'static str> {
    let mut duplicates = Vec::new();
    for (i, route) in table.iter().enumerate() {
        let first_index = table.iter().position(|other| other.name == route.name);
        if first_index != Some(i) && !duplicates.contains(&route.name) {
            duplicates.push(route.name);
        }
    }
    duplicates
}

/// Warns about any reverse-lookup name registered twice. Duplicates are
/// not an error (reverse lookup resolves to the first entry), but a
/// genuine collision should be visible at startup.
pub(crate) fn report_duplicate_names() {
    for name in duplicate_names_in(ROUTES) {
        warn!("Route name '{name}' is registered more than once; reverse lookup uses the first entry");
    }
}
