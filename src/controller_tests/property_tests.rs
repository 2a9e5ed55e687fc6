//! Property-based tests for fetch ordering

use super::*;
use proptest::prelude::*;

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .unwrap()
}

/// Query `i` resolves to a single marker row naming it
fn marker(i: usize) -> String {
    format!("result-{}", i)
}

// For any number of rapid query changes issued before any response returns,
// and any order in which the responses then arrive, only the last query's
// response ever becomes visible.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_last_issued_query_wins(
        order in (1usize..8).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
    ) {
        let runtime = paused_runtime();
        runtime.block_on(async {
            let n = order.len();
            let provider = ScriptedProvider::new();
            let mut ac = controller(&provider);

            for i in 0..n {
                ac.on_query_changed(&"q".repeat(i + 1));
            }

            for &i in &order {
                provider.resolve(i, Ok(vec![marker(i)]));
                pump(&mut ac).await;

                let latest = vec![marker(n - 1)];
                for call in &ac.renderer().calls {
                    if let RenderCall::Show(rows) = call {
                        prop_assert_eq!(rows, &latest);
                    }
                }
            }

            let expected = vec![marker(n - 1)];
            prop_assert_eq!(ac.suggestions(), expected.as_slice());
            prop_assert_eq!(ac.fetch_state(), FetchState::Idle);
            Ok(())
        })?;
    }
}

// Whatever sequence numbers arrive, a result is applied only when it carries
// the current sequence number.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_only_current_sequence_is_applied(
        issued in 1u64..6,
        arrivals in prop::collection::vec(0u64..8, 1..10)
    ) {
        let runtime = paused_runtime();
        let _guard = runtime.enter();
        let provider = ScriptedProvider::new();
        let mut ac = controller(&provider);

        for i in 0..issued {
            ac.on_query_changed(&format!("q{}", i));
        }

        let mut expected_visible = false;
        for sequence in arrivals {
            ac.handle_event(ControllerEvent::FetchResolved {
                sequence,
                result: Ok(vec![format!("seq-{}", sequence)]),
            });
            if sequence == issued {
                expected_visible = true;
                let expected = vec![format!("seq-{}", issued)];
                prop_assert_eq!(ac.suggestions(), expected.as_slice());
            }
            prop_assert_eq!(ac.is_visible(), expected_visible);
        }
    }
}

// Clearing the query after any number of changes always hides the surface,
// whatever responses come in afterwards.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_empty_query_always_hides(changes in 1usize..6) {
        let runtime = paused_runtime();
        runtime.block_on(async {
            let provider = ScriptedProvider::new();
            let mut ac = controller(&provider);

            for i in 0..changes {
                ac.on_query_changed(&"x".repeat(i + 1));
            }
            ac.on_query_changed("");

            for i in 0..changes {
                provider.resolve(i, Ok(vec![marker(i)]));
            }
            pump(&mut ac).await;

            prop_assert!(!ac.is_visible());
            prop_assert!(ac.suggestions().is_empty());
            prop_assert!(!ac.renderer().visible);
            Ok(())
        })?;
    }
}
