use serde::{Deserialize, Deserializer, Serialize};

/// Read `null` as the field's default. The backend sends `null` for
/// blank text and flags instead of omitting them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Image attached to a property listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PropertyImage {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_primary: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub uploaded_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ai_tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PropertyAmenity {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amenity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
}

/// Ownership or compliance document uploaded for a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PropertyDocument {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(deserialize_with = "null_as_default")]
    pub document_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub document_file: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    pub verified_by: Option<String>,
    pub verified_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ai_extracted_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
}

/// A property listing as returned by the backend.
///
/// The backend owns validation; every field tolerates being absent so a
/// partial record still renders. Decimal values (price, coordinates) come
/// over the wire as strings and are kept that way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Property {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<PropertyImage>,
    #[serde(deserialize_with = "null_as_default")]
    pub amenities: Vec<PropertyAmenity>,
    #[serde(deserialize_with = "null_as_default")]
    pub documents: Vec<PropertyDocument>,
    // Contact shape is not fixed by the backend yet
    #[serde(deserialize_with = "null_as_default")]
    pub contacts: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub area_sqft: Option<f64>,
    pub price: Option<String>,
    pub price_per_sqft: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub balconies: Option<u32>,
    pub furnishing: Option<String>,
    pub floor_no: Option<i32>,
    pub total_floors: Option<u32>,
    pub availability_status: Option<String>,
    pub possession_date: Option<String>,
    pub age_of_property: Option<String>,
    pub ownership_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub rera_approved: bool,
    pub maintenance_cost: Option<String>,
    pub property_status: Option<String>,
    pub listed_on: Option<String>,
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_negotiable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub terms_and_conditions: bool,
    pub ai_price_estimate: Option<String>,
    pub ai_recommended_score: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub property_type: Option<u64>,
    pub address: Option<u64>,
}

impl Property {
    /// Image flagged as primary, or the first one uploaded
    pub fn primary_image(&self) -> Option<&PropertyImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
    }
}
