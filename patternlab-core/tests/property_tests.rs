//! Property tests for the pattern invariants.
//!
//! Uses proptest to verify:
//! 1. Sorting yields a non-decreasing permutation of its input
//! 2. Reversing inverts index order and is its own inverse
//! 3. A plain decorator is transparent over any chain
//! 4. Chain text nests in wrap order (and order matters)
//! 5. After a swap, the context only ever consults the new strategy

use proptest::prelude::*;
use patternlab_core::decorator::{build_chain, chain_stages, Component, Decorator, DecoratorKind};
use patternlab_core::factory::create_strategy;
use patternlab_core::strategy::{
    Context, ReverseStrategy, SortingStrategy, Strategy as TextStrategy, StrategyKind,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_layer() -> impl Strategy<Value = DecoratorKind> {
    prop_oneof![
        Just(DecoratorKind::Plain),
        Just(DecoratorKind::A),
        Just(DecoratorKind::B),
    ]
}

fn arb_layers() -> impl Strategy<Value = Vec<DecoratorKind>> {
    prop::collection::vec(arb_layer(), 0..8)
}

fn arb_kind() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![Just(StrategyKind::Sorting), Just(StrategyKind::Reverse)]
}

/// Reference rendering of a chain, built without any trait objects.
fn expected_chain_text(layers: &[DecoratorKind]) -> String {
    layers
        .iter()
        .fold("concrete component".to_string(), |inner, kind| match kind {
            DecoratorKind::Plain => inner,
            DecoratorKind::A => format!("ConcreteDecoratorA({inner})"),
            DecoratorKind::B => format!("ConcreteDecoratorB({inner})"),
        })
}

// ── 1. Sorting ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sorting_is_non_decreasing(text in any::<String>()) {
        let out = SortingStrategy.run(&text).unwrap();
        let chars: Vec<char> = out.chars().collect();
        prop_assert!(chars.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sorting_preserves_multiset(text in any::<String>()) {
        let out = SortingStrategy.run(&text).unwrap();
        let mut input_chars: Vec<char> = text.chars().collect();
        let mut output_chars: Vec<char> = out.chars().collect();
        prop_assert_eq!(input_chars.len(), output_chars.len());
        input_chars.sort_unstable();
        output_chars.sort_unstable();
        prop_assert_eq!(input_chars, output_chars);
    }

    #[test]
    fn sorting_is_idempotent(text in "[a-z ]{0,40}") {
        let once = SortingStrategy.run(&text).unwrap();
        let twice = SortingStrategy.run(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}

// ── 2. Reverse ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reverse_inverts_index_order(text in any::<String>()) {
        let out = ReverseStrategy.run(&text).unwrap();
        let input_chars: Vec<char> = text.chars().collect();
        let output_chars: Vec<char> = out.chars().collect();
        prop_assert_eq!(input_chars.len(), output_chars.len());
        for (i, c) in output_chars.iter().enumerate() {
            prop_assert_eq!(*c, input_chars[input_chars.len() - 1 - i]);
        }
    }

    #[test]
    fn reverse_twice_is_identity(text in any::<String>()) {
        let once = ReverseStrategy.run(&text).unwrap();
        let twice = ReverseStrategy.run(&once).unwrap();
        prop_assert_eq!(twice, text);
    }
}

// ── 3. Forwarding ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn plain_decorator_is_transparent(layers in arb_layers()) {
        let bare = build_chain(&layers).operation();
        let wrapped = Decorator::new(build_chain(&layers));
        prop_assert_eq!(wrapped.operation(), bare);
        prop_assert_eq!(wrapped.depth(), layers.len() + 1);
    }
}

// ── 4. Nesting order ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn chain_text_nests_in_wrap_order(layers in arb_layers()) {
        prop_assert_eq!(build_chain(&layers).operation(), expected_chain_text(&layers));
    }

    #[test]
    fn every_stage_matches_its_prefix(layers in arb_layers()) {
        let stages = chain_stages(&layers);
        prop_assert_eq!(stages.len(), layers.len() + 1);
        for (i, stage) in stages.iter().enumerate() {
            prop_assert_eq!(stage, &expected_chain_text(&layers[..i]));
        }
    }
}

#[test]
fn wrap_order_is_not_commutative() {
    let ab = build_chain(&[DecoratorKind::A, DecoratorKind::B]).operation();
    let ba = build_chain(&[DecoratorKind::B, DecoratorKind::A]).operation();
    assert_eq!(ab, "ConcreteDecoratorB(ConcreteDecoratorA(concrete component))");
    assert_eq!(ba, "ConcreteDecoratorA(ConcreteDecoratorB(concrete component))");
    assert_ne!(ab, ba);
}

// ── 5. Context swaps ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn context_follows_latest_swap(
        first in arb_kind(),
        swaps in prop::collection::vec(arb_kind(), 0..6),
        text in "[a-zA-Z ]{0,30}",
    ) {
        let mut ctx = Context::new(create_strategy(first));
        prop_assert_eq!(
            ctx.run_strategy(&text).unwrap(),
            create_strategy(first).run(&text).unwrap()
        );
        for kind in swaps {
            ctx.set_strategy(create_strategy(kind));
            prop_assert_eq!(ctx.strategy().name(), kind.as_str());
            prop_assert_eq!(
                ctx.run_strategy(&text).unwrap(),
                create_strategy(kind).run(&text).unwrap()
            );
        }
    }
}
