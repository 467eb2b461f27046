use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Thin rule between sections. Horizontal unless `vertical` is set.
#[component]
pub fn Separator(
    #[props(default = false)] vertical: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "separator", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        prim::Separator {
            horizontal: !vertical,
            decorative: true,
            attributes: merged,
        }
    }
}
