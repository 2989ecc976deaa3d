//! Resource card component

use dioxus::prelude::*;
use resources_client::Resource;

#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub resource: Resource,
}

/// Card displaying a single resource
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let resource = &props.resource;
    let phone_href = format!("tel:{}", resource.phone);
    let availability = resource.availability_label();

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Name + 24/7 badge
            div {
                class: "flex items-start justify-between gap-2 mb-2",
                h3 {
                    class: "text-lg font-semibold text-gray-900",
                    "{resource.name}"
                }
                if resource.available_24h {
                    span {
                        class: "px-2 py-0.5 rounded-full text-xs font-semibold bg-red-100 text-red-700 whitespace-nowrap",
                        "24/7"
                    }
                }
            }

            // Category + Location
            div {
                class: "flex flex-wrap items-center gap-2 mb-3",
                span {
                    class: "bg-blue-50 text-blue-700 px-2 py-0.5 rounded text-xs font-medium",
                    "{resource.category}"
                }
                span {
                    class: "bg-gray-100 text-gray-600 px-2 py-0.5 rounded text-xs",
                    "{resource.location}"
                }
            }

            if !resource.description.is_empty() {
                p {
                    class: "text-sm text-gray-600 mb-4 flex-1",
                    "{resource.description}"
                }
            }

            // Contact
            div {
                class: "space-y-1 text-sm mt-auto",
                a {
                    href: "{phone_href}",
                    class: "block text-blue-600 hover:text-blue-700 font-medium",
                    "\u{260E} {resource.phone}"
                }
                if let Some(website) = &resource.website {
                    a {
                        href: "{website}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "block text-blue-600 hover:text-blue-700 truncate",
                        "Visit website"
                    }
                }
                p {
                    class: "text-gray-500",
                    "{availability}"
                }
            }
        }
    }
}
