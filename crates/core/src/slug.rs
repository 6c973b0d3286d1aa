use std::collections::HashMap;

/// Converts a PascalCase component name into a kebab-case route segment.
///
/// Acronym runs stay together: a boundary is placed before an uppercase
/// letter that follows a lowercase letter or digit, and before the last
/// capital of a run when a lowercase letter follows it.
///
/// # Examples
///
/// ```
/// use studio_core::slug::pascal_to_kebab;
///
/// assert_eq!(pascal_to_kebab("DragDrop"), "drag-drop");
/// assert_eq!(pascal_to_kebab("HTMLInput"), "html-input");
/// assert_eq!(pascal_to_kebab("Button"), "button");
/// ```
pub fn pascal_to_kebab(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == ' ' || ch == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }
        out.extend(ch.to_lowercase());
    }

    out.trim_end_matches('-').to_string()
}

/// Converts a kebab-case route segment into a PascalCase component name.
///
/// Acronyms are not recovered: `html-input` becomes `HtmlInput`.
///
/// ```
/// use studio_core::slug::kebab_to_pascal;
///
/// assert_eq!(kebab_to_pascal("drag-drop"), "DragDrop");
/// assert_eq!(kebab_to_pascal("button"), "Button");
/// ```
pub fn kebab_to_pascal(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates unique anchor ids for gallery entries on a single page.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Generates the next anchor id for the given label.
    pub fn next_slug(&mut self, text: &str) -> String {
        let mut slug = anchor_base(text);

        let entry = self.counts.entry(slug.clone()).or_insert(0);
        if *entry > 0 {
            slug.push_str(&format!("-{}", *entry));
        }
        *entry += 1;

        slug
    }

    /// Reserves an id so future generated ids won't collide with it.
    pub fn reserve(&mut self, slug: &str) {
        *self.counts.entry(slug.to_string()).or_insert(0) += 1;
    }
}

/// Lowercase alphanumerics, one hyphen per run of separators, no edge hyphens.
fn anchor_base(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
        // punctuation is dropped
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "example".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_between_pascal_and_kebab() {
        let names = [
            "Button",
            "Card",
            "DragDrop",
            "DatePicker",
            "ColorSwatch",
            "NavigationMenu",
            "FileUploadZone",
        ];
        for name in names {
            let kebab = pascal_to_kebab(name);
            assert_eq!(kebab_to_pascal(&kebab), name, "via {kebab:?}");
            assert_eq!(pascal_to_kebab(&kebab_to_pascal(&kebab)), kebab);
        }
    }

    #[test]
    fn acronyms_stay_together() {
        assert_eq!(pascal_to_kebab("HTMLInput"), "html-input");
        assert_eq!(pascal_to_kebab("OTPField"), "otp-field");
        assert_eq!(pascal_to_kebab("IconSVG"), "icon-svg");
    }

    #[test]
    fn digits_start_a_new_word_only_before_capitals() {
        assert_eq!(pascal_to_kebab("Heading2Xl"), "heading2-xl");
        assert_eq!(pascal_to_kebab("Grid12"), "grid12");
    }

    #[test]
    fn separators_collapse() {
        assert_eq!(pascal_to_kebab("Drag__Drop"), "drag-drop");
        assert_eq!(kebab_to_pascal("drag--drop"), "DragDrop");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("drag-drop"), "Drag-drop");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn slugger_deduplicates() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Primary Button"), "primary-button");
        assert_eq!(slugger.next_slug("Primary  Button"), "primary-button-1");
        assert_eq!(slugger.next_slug("Primary button!"), "primary-button-2");
    }

    #[test]
    fn slugger_reserve_prevents_collision() {
        let mut slugger = Slugger::new();
        slugger.reserve("live-preview");
        assert_eq!(slugger.next_slug("Live preview"), "live-preview-1");
    }

    #[test]
    fn empty_label_falls_back() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("!!!"), "example");
    }
}
