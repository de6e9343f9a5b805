// View models: one struct per page/fragment, each assembling the exact
// variable list its template needs. Data assembly stays here; the
// templates stay loop-free.

use crate::config::SiteConfig;
use crate::types::DispatchStatusSnapshot;
use crate::view::html_escape;

const AREA_ICON: &str = "map-pin";

/// Shared identity variables every full page binds
fn identity_vars(site: &SiteConfig) -> Vec<(&'static str, String)> {
    vec![
        ("business_name", site.name.clone()),
        ("phone", site.phone.clone()),
        ("license", site.license.clone()),
        ("email", site.email.clone()),
        ("address", site.address.clone()),
    ]
}

/// Homepage: identity plus the service-area list
pub struct HomePage<'a> {
    pub site: &'a SiteConfig,
}

impl HomePage<'_> {
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = identity_vars(self.site);
        vars.push(("service_area_items", area_items(&self.site.service_areas)));
        vars
    }
}

/// Services, service-area, quote-form and not-found pages bind identity only
pub struct SimplePage<'a> {
    pub site: &'a SiteConfig,
}

impl SimplePage<'_> {
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        identity_vars(self.site)
    }
}

/// Lazy-loaded map fragment: one {name, icon} entry per service area
pub struct ServiceAreaMapFragment<'a> {
    pub areas: &'a [String],
}

impl ServiceAreaMapFragment<'_> {
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        vec![("service_area_items", area_items(self.areas))]
    }
}

/// Polled dispatch-status fragment
pub struct DispatchStatusFragment {
    pub status: DispatchStatusSnapshot,
}

impl DispatchStatusFragment {
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "technicians_available",
                self.status.technicians_available.to_string(),
            ),
            (
                "avg_response_time_hours",
                format!("{:.1}", self.status.avg_response_time_hours),
            ),
            ("current_calls", self.status.current_calls.to_string()),
        ]
    }
}

/// Confirmation fragment echoing the submitted name
pub struct QuoteSuccessFragment {
    pub name: String,
}

impl QuoteSuccessFragment {
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        vec![("name", html_escape(&self.name))]
    }
}

/// Validation-failure fragment naming the offending field
pub struct QuoteErrorFragment {
    pub field: String,
    pub message: String,
}

impl QuoteErrorFragment {
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("field", html_escape(&self.field)),
            ("message", html_escape(&self.message)),
        ]
    }
}

fn area_items(areas: &[String]) -> String {
    areas
        .iter()
        .map(|name| {
            format!(
                "<li class=\"area\"><span class=\"icon\" data-icon=\"{AREA_ICON}\"></span>{}</li>",
                html_escape(name)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            name: "Monaco Electric Construction Services".to_string(),
            phone: "(239) 237-2899".to_string(),
            email: "info@monacoelectric.com".to_string(),
            license: "EC13009733".to_string(),
            address: "Fort Myers, FL 33912".to_string(),
            service_areas: vec![
                "Fort Myers".to_string(),
                "Cape Coral".to_string(),
                "Bonita Springs".to_string(),
                "Estero".to_string(),
            ],
        }
    }

    #[test]
    fn test_home_vars_include_identity_and_areas() {
        let site = site();
        let vars = HomePage { site: &site }.vars();
        let areas = vars
            .iter()
            .find(|(k, _)| *k == "service_area_items")
            .map(|(_, v)| v)
            .unwrap();
        assert_eq!(areas.matches("<li").count(), 4);
        assert!(areas.contains("Bonita Springs"));
        assert!(vars.iter().any(|(k, v)| *k == "phone" && v.contains("239")));
    }

    #[test]
    fn test_dispatch_status_formats_decimal_hours() {
        let fragment = DispatchStatusFragment {
            status: DispatchStatusSnapshot {
                technicians_available: 2,
                avg_response_time_hours: 2.0,
                current_calls: 3,
            },
        };
        let vars = fragment.vars();
        assert!(vars
            .iter()
            .any(|(k, v)| *k == "avg_response_time_hours" && v == "2.0"));
    }

    #[test]
    fn test_quote_success_escapes_name() {
        let vars = QuoteSuccessFragment {
            name: "<b>Jane</b>".to_string(),
        }
        .vars();
        assert_eq!(vars[0].1, "&lt;b&gt;Jane&lt;/b&gt;");
    }
}
