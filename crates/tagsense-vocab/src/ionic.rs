//! Ionic components and their attributes.

use crate::provider::{Provider, ProviderTable, Subset};

pub fn provider() -> Provider {
    Provider::from_table(Subset::Ionic, &IONIC)
}

#[rustfmt::skip]
pub const IONIC: ProviderTable = ProviderTable {
    tags: &[
        (
            "ion-checkbox",
            "A checkbox with an Ionic look and feel.",
            &[
                "name",
                "checked:v",
                "disabled:v",
                "ng-change",
                "ng-model",
                "ng-checked",
                "ng-disabled",
                "ng-true-value",
                "ng-false-value",
            ],
        ),
        (
            "ion-content",
            "Scrollable content area.",
            &[
                "direction:scrolldir",
                "locking:b",
                "padding:b",
                "scroll:b",
                "overflow-scroll:b",
                "scrollbar-x:b",
                "scrollbar-y:b",
                "start-x",
                "start-y",
                "on-scroll",
                "on-scroll-complete",
                "has-bouncing:b",
                "delegate-handle",
            ],
        ),
        ("ion-delete-button", "A delete button for list items.", &["ng-click"]),
        ("ion-footer-bar", "A fixed footer bar.", &["align-title:align", "keyboard-attach:v"]),
        ("ion-header-bar", "A fixed header bar.", &["align-title:align", "no-tap-scroll:b"]),
        (
            "ion-infinite-scroll",
            "Loads more data near the end of a list.",
            &["on-infinite", "distance", "spinner:spinner", "icon", "immediate-check:b"],
        ),
        ("ion-item", "An item in an Ionic list.", &[]),
        (
            "ion-list",
            "A list of items.",
            &["can-swipe:b", "show-delete:b", "show-reorder:b", "type:listtype", "delegate-handle"],
        ),
        ("ion-nav-back-button", "Navigates back in history.", &[]),
        (
            "ion-nav-bar",
            "The navigation bar.",
            &["align-title:align", "delegate-handle", "no-tap-scroll:b"],
        ),
        ("ion-nav-buttons", "Buttons placed in the navigation bar.", &["side:navside"]),
        ("ion-nav-title", "A custom navigation bar title.", &[]),
        ("ion-nav-view", "The view rendered by the router.", &["name"]),
        ("ion-option-button", "A swipe option button for list items.", &[]),
        ("ion-pane", "A simple content container.", &[]),
        ("ion-popover-view", "The view of a popover.", &[]),
        (
            "ion-radio",
            "A radio button.",
            &[
                "disabled:b",
                "icon",
                "name",
                "ng-disabled",
                "ng-change",
                "ng-model",
                "ng-value",
                "value",
            ],
        ),
        (
            "ion-refresher",
            "Pull to refresh.",
            &[
                "disable-pulling-rotation:b",
                "on-pulling",
                "on-refresh",
                "pulling-icon",
                "pulling-text",
                "refreshing-icon",
                "spinner:spinner",
            ],
        ),
        ("ion-reorder-button", "A reorder handle for list items.", &["on-reorder"]),
        (
            "ion-scroll",
            "A scrollable area.",
            &[
                "delegate-handle",
                "direction:scrolldir",
                "locking:b",
                "paging:b",
                "on-refresh",
                "on-scroll",
                "scrollbar-x:b",
                "scrollbar-y:b",
                "zooming:b",
                "min-zoom",
                "max-zoom",
                "has-bouncing:b",
            ],
        ),
        (
            "ion-side-menu",
            "A side menu.",
            &["is-enabled:b", "expose-aside-when", "side:navside", "width"],
        ),
        (
            "ion-side-menu-content",
            "The main content beside a side menu.",
            &["drag-content:b", "edge-drag-threshold"],
        ),
        (
            "ion-side-menus",
            "A container for side menus.",
            &["delegate-handle", "enable-menu-with-back-views:b"],
        ),
        ("ion-slide", "A slide of a slide box.", &[]),
        (
            "ion-slide-box",
            "A swipeable slide container.",
            &[
                "active-slide",
                "auto-play:b",
                "delegate-handle",
                "does-continue:b",
                "on-slide-changed",
                "pager-click",
                "show-pager:b",
                "slide-interval",
            ],
        ),
        ("ion-spinner", "An animated loading indicator.", &["icon:spinner"]),
        (
            "ion-tab",
            "A tab of a tab bar.",
            &[
                "badge",
                "badge-style",
                "disabled",
                "hidden",
                "href",
                "icon",
                "icon-off",
                "icon-on",
                "ng-click",
                "on-deselect",
                "on-select",
                "title",
            ],
        ),
        ("ion-tabs", "A tab bar.", &["delegate-handle"]),
        ("ion-title", "A title inside a bar.", &[]),
        (
            "ion-toggle",
            "A toggle switch.",
            &[
                "name",
                "ng-true-value",
                "ng-false-value",
                "ng-model",
                "ng-checked",
                "ng-disabled",
                "ng-change",
                "toggle-class",
                "checked:v",
                "disabled:v",
            ],
        ),
        (
            "ion-view",
            "A view container.",
            &[
                "cache-view:b",
                "can-swipe-back:b",
                "hide-back-button:b",
                "hide-nav-bar:b",
                "view-title",
            ],
        ),
    ],
    globals: &[
        "collection-repeat",
        "collection-item-height",
        "collection-item-width",
        "expose-aside-when",
        "item-height",
        "item-width",
        "keyboard-attach:v",
        "menu-close:v",
        "menu-toggle:navside",
        "nav-clear:v",
        "nav-direction:navdir",
        "nav-transition:navtransition",
        "on-double-tap",
        "on-drag",
        "on-drag-down",
        "on-drag-left",
        "on-drag-right",
        "on-drag-up",
        "on-hold",
        "on-release",
        "on-swipe",
        "on-swipe-down",
        "on-swipe-left",
        "on-swipe-right",
        "on-swipe-up",
        "on-tap",
        "on-touch",
    ],
    value_sets: &[
        ("b", &["true", "false"]),
        ("align", &["center", "left", "right"]),
        ("listtype", &["list-inset", "card"]),
        ("navside", &["left", "right", "primary", "secondary"]),
        ("navdir", &["forward", "back", "enter", "exit", "swap"]),
        ("navtransition", &["android", "ios", "none"]),
        ("scrolldir", &["x", "y", "xy"]),
        (
            "spinner",
            &[
                "android",
                "ios",
                "ios-small",
                "bubbles",
                "circles",
                "crescent",
                "dots",
                "lines",
                "ripple",
                "spiral",
            ],
        ),
    ],
};
