//! AngularJS directives usable as attributes on any element.

use crate::provider::{Provider, ProviderTable, Subset};

pub fn provider() -> Provider {
    Provider::from_table(Subset::Angular, &ANGULAR)
}

pub const ANGULAR: ProviderTable = ProviderTable {
    tags: &[],
    globals: &[
        "ng-app",
        "ng-bind",
        "ng-bind-html",
        "ng-bind-template",
        "ng-blur",
        "ng-change",
        "ng-checked",
        "ng-class",
        "ng-class-even",
        "ng-class-odd",
        "ng-click",
        "ng-cloak:v",
        "ng-controller",
        "ng-copy",
        "ng-csp:v",
        "ng-cut",
        "ng-dblclick",
        "ng-disabled",
        "ng-focus",
        "ng-form",
        "ng-hide",
        "ng-href",
        "ng-if",
        "ng-include",
        "ng-init",
        "ng-jq",
        "ng-keydown",
        "ng-keypress",
        "ng-keyup",
        "ng-list",
        "ng-model",
        "ng-model-options",
        "ng-mousedown",
        "ng-mouseenter",
        "ng-mouseleave",
        "ng-mousemove",
        "ng-mouseover",
        "ng-mouseup",
        "ng-non-bindable:v",
        "ng-open",
        "ng-options",
        "ng-paste",
        "ng-pluralize",
        "ng-readonly",
        "ng-repeat",
        "ng-required",
        "ng-selected",
        "ng-show",
        "ng-src",
        "ng-srcset",
        "ng-strict-di:v",
        "ng-style",
        "ng-submit",
        "ng-switch",
        "ng-switch-when",
        "ng-switch-default:v",
        "ng-transclude",
        "ng-value",
    ],
    value_sets: &[],
};
