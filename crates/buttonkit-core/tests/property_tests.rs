//! Property-based tests for button composition
//!
//! Uses proptest to check sizing, icon-only inference and class ordering
//! over arbitrary prop combinations.

use buttonkit_core::{
    compose, icon_size, ButtonSize, ButtonSpec, ButtonTag, ChildSlot, ClassList, IconSize,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn button_size_strategy() -> impl Strategy<Value = ButtonSize> {
    prop::sample::select(ButtonSize::ALL.to_vec())
}

fn tag_strategy() -> impl Strategy<Value = Option<ButtonTag>> {
    prop_oneof![
        Just(None),
        Just(Some(ButtonTag::Button)),
        Just(Some(ButtonTag::Anchor)),
    ]
}

/// Caller classes made of distinct tokens that never collide with built-ins
fn caller_class_strategy() -> impl Strategy<Value = String> {
    prop::collection::btree_set("x-[a-z]{1,8}", 1..4)
        .prop_map(|tokens| tokens.into_iter().collect::<Vec<_>>().join(" "))
}

fn spec_strategy() -> impl Strategy<Value = ButtonSpec> {
    (
        button_size_strategy(),
        tag_strategy(),
        any::<(bool, bool, bool)>(),
        prop::option::of(any::<bool>()),
        any::<bool>(),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(caller_class_strategy()),
    )
        .prop_map(
            |(
                size,
                tag,
                (has_icon, has_children, has_right_icon),
                icon_only,
                read_only,
                loading,
                pressed,
                class_name,
            )| {
                ButtonSpec {
                    size,
                    tag,
                    has_icon,
                    has_children,
                    has_right_icon,
                    icon_only,
                    read_only,
                    loading,
                    pressed,
                    class_name,
                    ..ButtonSpec::default()
                }
            },
        )
}

/// Utility-ish tokens, some of which conflict with each other
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("flex".to_string()),
        Just("hidden".to_string()),
        Just("relative".to_string()),
        Just("absolute".to_string()),
        Just("justify-center".to_string()),
        Just("justify-start".to_string()),
        "[a-z]{1,6}",
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Bigger buttons never get smaller icons
    #[test]
    fn icon_size_monotonic(a in button_size_strategy(), b in button_size_strategy()) {
        prop_assert_eq!(a.cmp(&b), icon_size(a).cmp(&icon_size(b)));
    }

    /// Icons are never drawn at the smallest or largest end of the scale
    #[test]
    fn icon_size_within_button_range(size in button_size_strategy()) {
        let icon = icon_size(size);
        prop_assert!(icon > IconSize::XXSmall);
        prop_assert!(icon < IconSize::XXXLarge);
    }

    /// Icon-only is exactly the inference OR the explicit flag
    #[test]
    fn icon_only_rule(spec in spec_strategy()) {
        let composition = compose(&spec);
        let inferred = spec.has_icon && !spec.has_children && !spec.has_right_icon;
        prop_assert_eq!(
            composition.state.icon_only,
            inferred || spec.icon_only == Some(true)
        );
    }

    /// The size token is always present and the caller class always ends the string
    #[test]
    fn class_string_contract(spec in spec_strategy()) {
        let composition = compose(&spec);
        let tokens: Vec<&str> = composition.class_name.split(' ').collect();
        prop_assert!(tokens.contains(&spec.size.class()));
        if let Some(class_name) = &spec.class_name {
            prop_assert!(composition.class_name.ends_with(class_name.as_str()));
        }
    }

    /// Loader slot iff loading, and it is always last
    #[test]
    fn loader_slot(spec in spec_strategy()) {
        let composition = compose(&spec);
        prop_assert_eq!(composition.has_loader(), spec.loading == Some(true));
        if composition.has_loader() {
            prop_assert_eq!(composition.children.last(), Some(&ChildSlot::Loader));
        }
    }

    /// Unset tag selector always yields the control kind
    #[test]
    fn tag_resolution(spec in spec_strategy()) {
        prop_assert_eq!(compose(&spec).tag, spec.tag.unwrap_or(ButtonTag::Button));
    }

    /// Merging is idempotent and never invents tokens
    #[test]
    fn merge_idempotent(tokens in prop::collection::vec(token_strategy(), 0..12)) {
        let mut list = ClassList::new();
        for token in &tokens {
            list.push(token);
        }
        let merged = list.merge();
        prop_assert_eq!(merged.merge(), merged.clone());
        for token in merged.tokens() {
            prop_assert!(tokens.contains(token));
        }
        if let Some(last) = tokens.last() {
            prop_assert_eq!(merged.tokens().last(), Some(last));
        }
    }
}
