//! Role dashboards.
//!
//! Each dashboard wraps its content in the page gate with the single role
//! allowed to view it. The shared shell renders the `.user-name`,
//! `.user-email`, and `.user-avatar` slots the gate fills in once the
//! visitor is admitted.

use api::Role;
use dioxus::prelude::*;
use ui::{format_date, format_price, LogoutButton, PageGate};

#[component]
fn DashboardShell(title: String, children: Element) -> Element {
    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                img { class: "user-avatar", alt: "Avatar" }
                div { class: "dashboard-identity",
                    h1 { "{title}" }
                    p { class: "dashboard-who",
                        span { class: "user-name" }
                        " · "
                        span { class: "user-email" }
                    }
                }
                LogoutButton { class: "btn logout-btn" }
            }
            main { class: "dashboard-content", {children} }
        }
    }
}

#[component]
pub fn ConsumerDashboard() -> Element {
    rsx! {
        PageGate { allowed_roles: vec![Role::Consumer],
            DashboardShell { title: "My orders",
                section { class: "panel",
                    h2 { "Recent orders" }
                    ul { class: "order-list",
                        li {
                            span { "Saffron risotto" }
                            span { {format_price(14.90)} }
                            span { {format_date("2026-08-03").unwrap_or_default()} }
                        }
                        li {
                            span { "Garden ramen" }
                            span { {format_price(12.50)} }
                            span { {format_date("2026-07-29").unwrap_or_default()} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ChefDashboard() -> Element {
    rsx! {
        PageGate { allowed_roles: vec![Role::Chef],
            DashboardShell { title: "Kitchen overview",
                section { class: "panel",
                    h2 { "Today's menu" }
                    ul { class: "order-list",
                        li {
                            span { "Wild mushroom tart" }
                            span { {format_price(11.80)} }
                            span { "4 portions left" }
                        }
                        li {
                            span { "Smoked lentil dahl" }
                            span { {format_price(10.90)} }
                            span { "sold out" }
                        }
                    }
                }
                section { class: "panel",
                    h2 { "This week" }
                    p { "Earnings so far: " strong { {format_price(236.40)} } }
                }
            }
        }
    }
}

#[component]
pub fn CourierDashboard() -> Element {
    rsx! {
        PageGate { allowed_roles: vec![Role::Courier],
            DashboardShell { title: "Deliveries",
                section { class: "panel",
                    h2 { "Next pickup" }
                    p {
                        "Chef Amara → Rue des Lilas, 2.4 km, due "
                        strong { {format_date("2026-08-06").unwrap_or_default()} }
                    }
                }
                section { class: "panel",
                    h2 { "Completed today" }
                    ul { class: "order-list",
                        li {
                            span { "Citrus ceviche" }
                            span { "delivered 12:40" }
                            span { {format_price(3.50)} }
                        }
                    }
                }
            }
        }
    }
}
