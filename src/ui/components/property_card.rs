use crate::api::Property;
use dioxus::prelude::*;

/// Summary card for one listing
#[component]
pub fn PropertyCard(property: Property) -> Element {
    let image = property.primary_image().map(|image| image.image.clone());
    let price = property
        .price
        .clone()
        .map(|price| format!("₹ {price}"))
        .unwrap_or_else(|| "Price on request".to_string());

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-4 hover:shadow-lg transition-shadow",
            if let Some(src) = image {
                img {
                    src: "{src}",
                    alt: "{property.title}",
                    class: "w-full h-48 object-cover rounded mb-3",
                }
            } else {
                div { class: "w-full h-48 bg-gray-200 rounded mb-3 flex items-center justify-center",
                    span { class: "text-gray-500", "No Image" }
                }
            }

            h3 { class: "font-bold text-lg mb-1", "{property.title}" }
            p { class: "text-gray-600 mb-2", "{property.location}" }
            p { class: "text-purple-600 font-semibold mb-2", "{price}" }

            div { class: "flex gap-4 text-sm text-gray-600",
                if let Some(bedrooms) = property.bedrooms {
                    span { "{bedrooms} BHK" }
                }
                if let Some(area) = property.area_sqft {
                    span { "{area} sqft" }
                }
                if property.rera_approved {
                    span { class: "text-green-600", "RERA" }
                }
            }
        }
    }
}
