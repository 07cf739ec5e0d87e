//! Landing page: hero, how-it-works cards, and a menu preview with a
//! debounced search box.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use ui::{format_price, paths, use_scroll_reveal, AnchorLink, BackToTop, Navbar};

struct Dish {
    name: &'static str,
    chef: &'static str,
    price: f64,
}

const DISHES: [Dish; 6] = [
    Dish { name: "Saffron risotto", chef: "Chef Amara", price: 14.90 },
    Dish { name: "Garden ramen", chef: "Chef Hugo", price: 12.50 },
    Dish { name: "Harissa couscous", chef: "Chef Lina", price: 13.20 },
    Dish { name: "Wild mushroom tart", chef: "Chef Amara", price: 11.80 },
    Dish { name: "Citrus ceviche", chef: "Chef Mateo", price: 16.40 },
    Dish { name: "Smoked lentil dahl", chef: "Chef Lina", price: 10.90 },
];

#[component]
pub fn Home() -> Element {
    use_scroll_reveal();

    let mut query = use_signal(String::new);
    let mut filter = use_signal(String::new);

    // Search narrows the menu 300ms after the visitor stops typing.
    let debounced = use_hook(|| {
        Rc::new(RefCell::new(ui::debounce(
            Duration::from_millis(300),
            move || filter.set(query().to_lowercase()),
        )))
    });

    let on_search = {
        let debounced = debounced.clone();
        move |evt: FormEvent| {
            query.set(evt.value());
            (debounced.borrow_mut())();
        }
    };

    let needle = filter();
    let dishes: Vec<&Dish> = DISHES
        .iter()
        .filter(|dish| needle.is_empty() || dish.name.to_lowercase().contains(needle.as_str()))
        .collect();

    rsx! {
        Navbar {
            AnchorLink { to: "#how-it-works", "How it works" }
            AnchorLink { to: "#menu", "Menu" }
            a { href: paths::LOGIN, "Sign in" }
            a { class: "nav-cta", href: paths::REGISTER, "Join FreshPlate" }
        }

        section { class: "hero",
            div { class: "hero-content reveal",
                h1 { "Home-cooked meals, delivered." }
                p {
                    "Local chefs cook. Local couriers deliver. You eat well."
                }
                div { class: "hero-actions",
                    a { class: "btn btn-primary", href: paths::REGISTER, "Get started" }
                    AnchorLink { class: "btn btn-ghost", to: "#menu", "Browse the menu" }
                }
            }
        }

        section { id: "how-it-works", class: "features",
            h2 { class: "section-title reveal", "How it works" }
            div { class: "feature-grid",
                div { class: "feature-card reveal",
                    h3 { "Chefs cook" }
                    p { "Neighborhood chefs publish a daily menu from their own kitchens." }
                }
                div { class: "feature-card reveal",
                    h3 { "Couriers deliver" }
                    p { "Couriers pick up nearby and bring it over while it's hot." }
                }
                div { class: "feature-card reveal",
                    h3 { "You order" }
                    p { "Pick a dish, follow the delivery, rate the meal." }
                }
            }
        }

        section { id: "menu", class: "menu-preview",
            h2 { class: "section-title reveal", "Today's menu" }
            input {
                class: "menu-search",
                r#type: "search",
                placeholder: "Search dishes...",
                value: "{query}",
                oninput: on_search,
            }
            div { class: "card-grid",
                for dish in dishes {
                    div { class: "card",
                        h3 { "{dish.name}" }
                        p { class: "card-chef", "{dish.chef}" }
                        p { class: "card-price", {format_price(dish.price)} }
                    }
                }
            }
        }

        footer { class: "site-footer",
            p { "FreshPlate — cooked next door, delivered to yours." }
        }

        BackToTop {}
    }
}
