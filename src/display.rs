//! Presentation helpers shared by the event card and the detail page.

use crate::models::{category_name, Category, CategoryId};
use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

/// Shown for events without a usable image.
pub const PLACEHOLDER_IMAGE: &str =
    "https://as1.ftcdn.net/v2/jpg/08/29/76/50/1000_F_829765074_plHjFg6YrbWEj0cXdBBJUiNQBTpv4HHP.jpg";

/// `https://` + `.jpg`/`.jpeg` images are shown as-is; anything else is
/// silently swapped for the placeholder.
pub fn image_src(image: &str) -> &str {
    if is_displayable_image(image) {
        image
    } else {
        if !image.is_empty() {
            debug!("image {:?} not displayable, using placeholder", image);
        }
        PLACEHOLDER_IMAGE
    }
}

pub fn is_displayable_image(image: &str) -> bool {
    !image.is_empty()
        && image.starts_with("https://")
        && (image.ends_with(".jpg") || image.ends_with(".jpeg"))
}

pub fn category_label(categories: &[Category], id: CategoryId) -> String {
    category_name(categories, id)
        .map(String::from)
        .unwrap_or_else(|| format!("Category {}", id))
}

const INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// `2023-03-10T18:00` -> `2023-03-10 | 18:00`.
///
/// Timestamps keep their own offset (no conversion to local time).
/// Unparseable input falls back to slicing characters 0..10 and 11..16.
pub fn format_timestamp(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%Y-%m-%d | %H:%M").to_string(),
        None => {
            let date: String = value.chars().take(10).collect();
            let time: String = value.chars().skip(11).take(5).collect();
            format!("{} | {}", date, time)
        }
    }
}
