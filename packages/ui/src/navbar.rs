use civic::Tab;
use dioxus::prelude::*;

use crate::icons::{
    FaBookOpen, FaCamera, FaCircleExclamation, FaCircleInfo, FaHouse, FaScaleBalanced,
    FaShieldHalved, FaUsers,
};
use crate::{Icon, VIEWS_CSS};

/// Top bar with the brand; the platform crate supplies the tab links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaUsers, width: 22, height: 22 }
                span { "Civic Justice AI" }
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

#[component]
pub fn TabIcon(tab: Tab, #[props(default = 16)] size: u32) -> Element {
    match tab {
        Tab::Home => rsx! { Icon { icon: FaHouse, width: size, height: size } },
        Tab::Legal => rsx! { Icon { icon: FaScaleBalanced, width: size, height: size } },
        Tab::Civic => rsx! { Icon { icon: FaCircleExclamation, width: size, height: size } },
        Tab::Complaint => rsx! { Icon { icon: FaShieldHalved, width: size, height: size } },
        Tab::Awareness => rsx! { Icon { icon: FaBookOpen, width: size, height: size } },
        Tab::CivicLens => rsx! { Icon { icon: FaCamera, width: size, height: size } },
        Tab::About => rsx! { Icon { icon: FaCircleInfo, width: size, height: size } },
    }
}
