//! Human-readable titles and CSS class names for resource types.

use serde::Serialize;

use super::{singular_resource, ResourceType};

/// Singular and plural display titles for a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendlyTitle {
    pub singular: String,
    pub plural: String,
}

/// Title-cased singular and plural names for a (singular or plural) resource.
///
/// ```
/// use dashfmt::friendly_title;
///
/// let title = friendly_title("replicationcontrollers");
/// assert_eq!(title.singular, "Replication Controller");
/// assert_eq!(title.plural, "Replication Controllers");
/// ```
pub fn friendly_title(singular_or_plural: &str) -> FriendlyTitle {
    let resource = singular_resource(singular_or_plural);
    let known = resource.parse::<ResourceType>().ok();

    let singular = match known {
        Some(ResourceType::ReplicationController) => start_case("replication controller"),
        _ => start_case(resource),
    };
    let plural = match known {
        Some(ResourceType::Authority) => "Authorities".to_string(),
        _ => format!("{singular}s"),
    };

    FriendlyTitle { singular, plural }
}

/// Convert a display string to a valid CSS class name.
///
/// `"Replication Controller"` becomes `"replication_controller"`.
pub fn to_class_name(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Capitalize each word and join with single spaces.
fn start_case(input: &str) -> String {
    split_words(input)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split on separators and on case or letter/digit boundaries.
///
/// `"fooBar"`, `"foo_bar"` and `"foo bar"` all give `["foo", "bar"]`-shaped
/// words; `"XMLHttp"` gives `["XML", "Http"]`.
fn split_words(input: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&input[s..pos]);
            }
            continue;
        }

        let Some(s) = start else {
            start = Some(pos);
            continue;
        };

        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);
        let boundary = (prev.is_lowercase() && c.is_uppercase())
            || prev.is_alphabetic() != c.is_alphabetic()
            || (prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase));

        if boundary {
            words.push(&input[s..pos]);
            start = Some(pos);
        }
    }

    if let Some(s) = start {
        words.push(&input[s..]);
    }
    words
}
