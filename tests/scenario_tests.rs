use sortsteps::prelude::*;

/// `(i * mult) % n` for `mult` coprime with `n`: a fixed permutation of `0..n`.
fn scrambled(n: u32, mult: u32) -> Vec<u32> {
    (0..n).map(|i| (i * mult) % n).collect()
}

#[test]
fn test_bubble_three_elements() {
    let mut data = [3, 1, 2];
    let mut steps = resolve("Bubble Sort").steps(&mut data);

    assert_eq!(steps.next(), Some(Step { a: 0, b: 1, mutated: false, cost: 2 }));
    assert_eq!(steps.next(), Some(Step { a: 0, b: 1, mutated: true, cost: 4 }));
    steps.for_each(drop);

    assert_eq!(data, [1, 2, 3]);
}

#[test]
fn test_empty_input_has_no_steps() {
    for algorithm in Algorithm::ALL {
        let mut data: Vec<u32> = vec![];
        let mut steps = algorithm.steps(&mut data);
        assert_eq!(steps.next(), None, "{algorithm}");
        assert!(data.is_empty());
    }
}

#[test]
fn test_singleton_has_no_steps() {
    for algorithm in Algorithm::ALL {
        let mut data = [5];
        assert_eq!(algorithm.steps(&mut data).count(), 0, "{algorithm}");
        assert_eq!(data, [5]);
    }
}

#[test]
fn test_bubble_stops_after_clean_pass() {
    let mut data = [1, 2, 3, 4, 5];
    let steps: Vec<Step> = Algorithm::Bubble.steps(&mut data).collect();

    let expected: Vec<Step> = (0..4).map(|j| Step::compare(j, j + 1)).collect();
    assert_eq!(steps, expected);
}

#[test]
fn test_quick_reverse_four_stays_in_range() {
    let mut data = [4, 3, 2, 1];
    let mut steps = Algorithm::Quick.steps(&mut data);

    // First partition: pivot 1 is compared against every other element of 0..=3.
    for j in 0..3 {
        assert_eq!(steps.next(), Some(Step::compare(j, 3)));
    }
    assert_eq!(steps.next(), Some(Step::swap(0, 3)));
    assert_eq!(steps.array()[0], 1);

    // Everything after that works inside 1..=3, and later inside 1..=2.
    let rest: Vec<Step> = steps.collect();
    assert!(rest.iter().all(|s| (1..=3).contains(&s.a) && (1..=3).contains(&s.b)));
    let last_partition = rest
        .iter()
        .position(|s| *s == Step::swap(3, 3))
        .expect("pivot 4 stays at the end");
    assert!(
        rest[last_partition + 1..]
            .iter()
            .all(|s| (1..=2).contains(&s.a) && (1..=2).contains(&s.b))
    );

    assert_eq!(data, [1, 2, 3, 4]);
}

#[test]
fn test_heap_steps_stay_inside_shrinking_heap() {
    let mut data = scrambled(50, 13);
    let mut heap_size = data.len();
    let steps = Algorithm::Heap.steps(&mut data);

    let mut extracting = false;
    for step in steps {
        // Only extraction swaps write to the root from below: `(end, 0)`.
        if step.mutated && step.b == 0 {
            assert_eq!(step.a + 1, heap_size);
            heap_size = step.a;
            extracting = true;
            continue;
        }
        if extracting {
            assert!(
                step.a < heap_size && step.b < heap_size,
                "{step:?} outside heap of {heap_size}"
            );
        }
    }
    assert_eq!(heap_size, 1);
}

#[test]
fn test_merge_thousand_is_n_log_n() {
    let n = 1000usize;
    let mut data = scrambled(n as u32, 7919);
    let stats = sort(Algorithm::Merge, &mut data);

    // Placements alone are n per merge level; comparisons never exceed placements.
    let levels = (n as f64).log2().ceil() as u64;
    let n = n as u64;
    assert!(stats.comparisons >= n * (levels - 1));
    assert!(stats.comparisons <= 2 * n * levels);
    assert_eq!(stats.mutations, 9976);
    assert_eq!(stats.comparisons, 18391);
    assert_eq!(data, (0..1000).collect::<Vec<u32>>());
}

#[test]
fn test_totals_match_reference_visualizer() {
    // (steps, accesses, mutations) for `scrambled(100, 37)`.
    let expected = [
        (Algorithm::Bubble, 7343, 19582, 2448),
        (Algorithm::Selection, 5050, 10276, 88),
        (Algorithm::Insertion, 5094, 7641, 2547),
        (Algorithm::Merge, 1234, 1796, 672),
        (Algorithm::Quick, 982, 2750, 393),
        (Algorithm::Heap, 1611, 4394, 586),
        (Algorithm::Shell, 1545, 2291, 799),
        (Algorithm::Cocktail, 6222, 17340, 2448),
    ];

    for (algorithm, steps, accesses, mutations) in expected {
        let mut data = scrambled(100, 37);
        let stats = sort(algorithm, &mut data);
        assert_eq!(
            stats,
            SortStats {
                comparisons: steps,
                accesses,
                mutations,
            },
            "{algorithm}"
        );
    }
}

#[test]
fn test_selection_emits_closing_step_every_iteration() {
    let mut data = [1, 2, 3, 4];
    let steps: Vec<Step> = Algorithm::Selection.steps(&mut data).collect();

    // 3 + 2 + 1 scan comparisons plus one closing step for each of the 4 positions.
    assert_eq!(steps.len(), 10);
    let closing: Vec<Step> = steps.iter().copied().filter(Step::is_single).collect();
    assert_eq!(
        closing,
        vec![
            Step::compare(0, 0),
            Step::compare(1, 1),
            Step::compare(2, 2),
            Step::compare(3, 3),
        ]
    );
}

#[test]
fn test_fallback_drives_bubble_sort() {
    let mut a = [4, 2, 3, 1];
    let mut b = [4, 2, 3, 1];
    let fallback: Vec<Step> = resolve("not a real algorithm").steps(&mut a).collect();
    let bubble: Vec<Step> = resolve("Bubble Sort").steps(&mut b).collect();
    assert_eq!(fallback, bubble);
}
