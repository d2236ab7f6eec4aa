use dioxus::prelude::*;

use crate::icons::FaShieldHalved;
use crate::Icon;

/// Top bar: brand on the left, navigation links (`children`) and the
/// account area on the right.
#[component]
pub fn Header(on_brand: EventHandler<()>, account: Element, children: Element) -> Element {
    rsx! {
        header {
            class: "app-header",
            button {
                class: "brand",
                onclick: move |_| on_brand.call(()),
                Icon { icon: FaShieldHalved, width: 20, height: 20 }
                span { "Safety Companion" }
            }
            nav {
                class: "app-nav",
                {children}
            }
            div {
                class: "account-area",
                {account}
            }
        }
    }
}
