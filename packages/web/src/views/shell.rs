use civic::Tab;
use dioxus::prelude::*;
use ui::{Navbar, TabIcon};

use crate::Route;

/// Tab bar above whichever page the router selected.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            for tab in Tab::ALL {
                Link {
                    key: "{tab.slug()}",
                    to: Route::from(tab),
                    active_class: "active",
                    TabIcon { tab }
                    span { "{tab.label()}" }
                }
            }
        }
        main {
            Outlet::<Route> {}
        }
        footer {
            class: "footer",
            "Civic Justice AI provides general information only. It is not legal advice."
        }
    }
}
