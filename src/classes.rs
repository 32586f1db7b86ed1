//! Utility-class merging with last-wins conflict resolution.
//!
//! Typography roles own a fixed base sequence of utility-class tokens, and
//! callers may append overrides. When both sequences style the same CSS
//! property (`text-sm` and `text-lg`, or `text-red-500` and `text-blue-500`),
//! keeping both would leave the result to stylesheet order. [`merge`]
//! resolves this deterministically: tokens are classified into conflict
//! groups, and within a group the last token wins.
//!
//! Tokens are otherwise opaque: they are never parsed as CSS, only
//! classified by their stem. Unrecognized tokens conflict only with exact
//! duplicates of themselves.

use std::collections::HashMap;

/// Merges class token sequences, later sources winning on conflicts.
///
/// Sources are split on whitespace and concatenated in order. When two
/// tokens resolve to the same conflict group (same property, same modifier
/// prefix), the earlier one is dropped and the later one keeps its later
/// position. Non-conflicting tokens keep their relative order.
///
/// The function is pure: same inputs always produce the same output.
///
/// # Example
///
/// ```rust
/// use folio::merge;
///
/// // The override's color wins; the size survives.
/// assert_eq!(merge(["text-sm text-red-500", "text-blue-500"]), "text-sm text-blue-500");
///
/// // Modifier prefixes keep groups apart.
/// assert_eq!(merge(["text-4xl lg:text-6xl", "lg:text-xl"]), "text-4xl lg:text-xl");
/// ```
pub fn merge<'a, I>(sources: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: Vec<Option<&'a str>> = Vec::new();
    let mut winners: HashMap<String, usize> = HashMap::new();

    for source in sources {
        for token in source.split_whitespace() {
            let key = conflict_key(token);
            if let Some(&prev) = winners.get(&key) {
                slots[prev] = None;
            }
            slots.push(Some(token));
            winners.insert(key, slots.len() - 1);
        }
    }

    let kept: Vec<&str> = slots.into_iter().flatten().collect();
    kept.join(" ")
}

/// Merges a base sequence with an optional caller override.
///
/// With no override (or an empty one) the base is returned unchanged, so a
/// role's golden base string survives byte-for-byte.
pub fn merge_with(base: &str, override_classes: Option<&str>) -> String {
    match override_classes {
        None | Some("") => base.to_string(),
        Some(extra) => merge([base, extra]),
    }
}

/// Computes the conflict group key for one token.
///
/// The key is the modifier prefix (if any) joined with the property group.
/// Tokens with no recognized property group key onto themselves, so only
/// exact duplicates conflict.
fn conflict_key(token: &str) -> String {
    let (modifiers, stem) = split_modifiers(token);
    match property_group(stem) {
        Some(group) => format!("{modifiers}{group}"),
        None => token.to_string(),
    }
}

/// Splits `lg:text-6xl` into `("lg:", "text-6xl")`.
///
/// The split happens at the last `:` outside brackets, so arbitrary
/// variants like `[&:not(:first-child)]:mt-6` keep their full prefix.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = None;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_at = Some(i),
            _ => {}
        }
    }
    match split_at {
        Some(i) => (&token[..=i], &token[i + 1..]),
        None => ("", token),
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const FONT_FAMILIES: &[&str] = &["sans", "serif", "mono"];

/// Spacing stems that each form their own conflict group.
const SPACING_STEMS: &[&str] = &[
    "m-", "mt-", "mb-", "ml-", "mr-", "mx-", "my-", "p-", "pt-", "pb-", "pl-", "pr-", "px-",
    "py-", "gap-", "space-x-", "space-y-", "w-", "h-",
];

/// Classifies a token stem into its CSS property group.
///
/// Covers the utilities the typography bases and page templates use; the
/// `text-*` and `font-*` stems are ambiguous in the utility vocabulary and
/// are disambiguated by their suffix (size scale vs color, weight vs
/// family). Anything unrecognized returns `None`.
fn property_group(stem: &str) -> Option<String> {
    // Negative spacing utilities carry a leading dash.
    let stem = stem.strip_prefix('-').unwrap_or(stem);

    if let Some(rest) = stem.strip_prefix("text-") {
        if FONT_SIZES.contains(&rest) {
            return Some("font-size".to_string());
        }
        if TEXT_ALIGNMENTS.contains(&rest) {
            return Some("text-align".to_string());
        }
        return Some("text-color".to_string());
    }

    if let Some(rest) = stem.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&rest) {
            return Some("font-weight".to_string());
        }
        if FONT_FAMILIES.contains(&rest) {
            return Some("font-family".to_string());
        }
        return None;
    }

    if stem.starts_with("tracking-") {
        return Some("letter-spacing".to_string());
    }
    if stem.starts_with("leading-") {
        return Some("line-height".to_string());
    }
    if stem.starts_with("scroll-m") {
        return Some("scroll-margin".to_string());
    }
    if stem.starts_with("bg-") {
        return Some("background-color".to_string());
    }
    if stem == "rounded" || stem.starts_with("rounded-") {
        return Some("border-radius".to_string());
    }

    if let Some(group) = border_group(stem) {
        return Some(group);
    }

    for spacing in SPACING_STEMS {
        if let Some(rest) = stem.strip_prefix(spacing) {
            if !rest.is_empty() {
                return Some(format!("spacing:{spacing}"));
            }
        }
    }

    match stem {
        "italic" | "not-italic" => Some("font-style".to_string()),
        "underline" | "overline" | "line-through" | "no-underline" => {
            Some("text-decoration".to_string())
        }
        "relative" | "absolute" | "fixed" | "sticky" | "static" => Some("position".to_string()),
        "block" | "inline" | "inline-block" | "flex" | "inline-flex" | "grid" | "hidden" => {
            Some("display".to_string())
        }
        _ => None,
    }
}

/// `border`, `border-2`, `border-b`, `border-l-2` group by side and width;
/// `border-red-500` and friends group as border color.
fn border_group(stem: &str) -> Option<String> {
    if stem == "border" {
        return Some("border-width".to_string());
    }
    let rest = stem.strip_prefix("border-")?;
    if rest.chars().all(|c| c.is_ascii_digit()) {
        return Some("border-width".to_string());
    }
    let mut parts = rest.splitn(2, '-');
    let side = parts.next()?;
    let width = parts.next();
    if matches!(side, "t" | "b" | "l" | "r" | "x" | "y")
        && width.map_or(true, |w| w.chars().all(|c| c.is_ascii_digit()))
    {
        return Some(format!("border-{side}-width"));
    }
    Some("border-color".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_single_source_unchanged() {
        assert_eq!(
            merge(["scroll-m-20 text-2xl font-semibold tracking-tight"]),
            "scroll-m-20 text-2xl font-semibold tracking-tight"
        );
    }

    #[test]
    fn test_merge_empty_override_is_identity() {
        assert_eq!(merge(["text-sm text-muted-foreground", ""]), "text-sm text-muted-foreground");
        assert_eq!(merge_with("text-sm", None), "text-sm");
        assert_eq!(merge_with("text-sm", Some("")), "text-sm");
    }

    #[test]
    fn test_merge_color_conflict_last_wins() {
        assert_eq!(merge(["text-sm text-red", "text-blue"]), "text-sm text-blue");
    }

    #[test]
    fn test_merge_size_does_not_conflict_with_color() {
        assert_eq!(
            merge(["text-sm text-muted-foreground", "text-gray-300"]),
            "text-sm text-gray-300"
        );
        // Size override leaves the color alone.
        assert_eq!(
            merge(["text-sm text-muted-foreground", "text-xs"]),
            "text-muted-foreground text-xs"
        );
    }

    #[test]
    fn test_merge_font_weight_vs_family() {
        assert_eq!(merge(["font-semibold", "font-black"]), "font-black");
        assert_eq!(merge(["font-mono font-semibold", "font-light"]), "font-mono font-light");
    }

    #[test]
    fn test_merge_modifiers_keep_groups_apart() {
        assert_eq!(
            merge(["text-4xl lg:text-6xl", "text-5xl"]),
            "lg:text-6xl text-5xl"
        );
        assert_eq!(
            merge(["text-4xl lg:text-6xl", "lg:text-2xl"]),
            "text-4xl lg:text-2xl"
        );
    }

    #[test]
    fn test_merge_bracket_variants_survive() {
        assert_eq!(
            merge(["leading-7 [&:not(:first-child)]:mt-6", "mt-2"]),
            "leading-7 [&:not(:first-child)]:mt-6 mt-2"
        );
        assert_eq!(
            merge(["[&:not(:first-child)]:mt-6", "[&:not(:first-child)]:mt-4"]),
            "[&:not(:first-child)]:mt-4"
        );
    }

    #[test]
    fn test_merge_spacing_stems_are_independent() {
        assert_eq!(merge(["mt-6 pb-2", "pb-4"]), "mt-6 pb-4");
        assert_eq!(merge(["px-[0.3rem] py-[0.2rem]", "px-2"]), "py-[0.2rem] px-2");
    }

    #[test]
    fn test_merge_border_sides() {
        assert_eq!(merge(["border-l-2", "border-l-4"]), "border-l-4");
        assert_eq!(merge(["border-b border-l-2", "border-b-2"]), "border-l-2 border-b-2");
        assert_eq!(merge(["border", "border-red-500"]), "border border-red-500");
    }

    #[test]
    fn test_merge_unknown_tokens_dedupe_exact_only() {
        assert_eq!(merge(["shadow-sm shadow-sm", "shadow-sm"]), "shadow-sm");
        assert_eq!(merge(["custom-a", "custom-b"]), "custom-a custom-b");
    }

    #[test]
    fn test_merge_display_and_position() {
        assert_eq!(merge(["hidden", "flex"]), "flex");
        assert_eq!(merge(["relative rounded", "absolute"]), "rounded absolute");
    }

    #[test]
    fn test_merge_deterministic() {
        let a = merge(["scroll-m-20 text-xl font-semibold", "text-sm font-bold"]);
        let b = merge(["scroll-m-20 text-xl font-semibold", "text-sm font-bold"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_modifiers() {
        assert_eq!(split_modifiers("text-sm"), ("", "text-sm"));
        assert_eq!(split_modifiers("lg:text-6xl"), ("lg:", "text-6xl"));
        assert_eq!(split_modifiers("md:first:mt-0"), ("md:first:", "mt-0"));
        assert_eq!(
            split_modifiers("[&:not(:first-child)]:mt-6"),
            ("[&:not(:first-child)]:", "mt-6")
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn token_soup() -> impl Strategy<Value = String> {
            proptest::collection::vec("[a-z]{1,6}(-[a-z0-9]{1,6}){0,2}", 0..8)
                .prop_map(|tokens| tokens.join(" "))
        }

        proptest! {
            #[test]
            fn merge_is_deterministic(a in token_soup(), b in token_soup()) {
                prop_assert_eq!(
                    merge([a.as_str(), b.as_str()]),
                    merge([a.as_str(), b.as_str()])
                );
            }

            // A merged sequence has no conflicts left, so merging it again
            // changes nothing.
            #[test]
            fn merge_is_idempotent(a in token_soup(), b in token_soup()) {
                let once = merge([a.as_str(), b.as_str()]);
                prop_assert_eq!(merge([once.as_str()]), once.clone());
            }

            #[test]
            fn merged_tokens_come_from_inputs(a in token_soup(), b in token_soup()) {
                for token in merge([a.as_str(), b.as_str()]).split_whitespace() {
                    prop_assert!(
                        a.split_whitespace().chain(b.split_whitespace()).any(|t| t == token)
                    );
                }
            }
        }
    }
}
