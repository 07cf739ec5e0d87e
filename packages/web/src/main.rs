use dioxus::prelude::*;

use api::{AuthClient, ProviderConfig};
use ui::{AuthProvider, ToastProvider};
use views::{ChefDashboard, ConsumerDashboard, CourierDashboard, Home, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/consumer-dashboard")]
    ConsumerDashboard {},
    #[route("/chef-dashboard")]
    ChefDashboard {},
    #[route("/courier-dashboard")]
    CourierDashboard {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    dioxus::launch(App);

    // The web bundle is the only shipping target; native builds exist so
    // `cargo test` can cover the whole workspace.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = App;
}

#[component]
fn App() -> Element {
    // One provider client for the whole app; everything below reaches it
    // through context.
    use_context_provider(|| AuthClient::new(ProviderConfig::from_env()));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
