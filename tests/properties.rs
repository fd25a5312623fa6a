//! Property-based tests for the knapsack GA operators.

use proptest::prelude::*;
use u_knapsack::catalog::{parse_items, to_text, Catalog, Item};
use u_knapsack::ga::{
    crossover, evaluate_single, keep_count, mutate_single, select, total_price, total_weight,
    Candidate, EvolutionConfig, EvolutionRunner, Fitness,
};
use u_knapsack::random::create_rng;

fn catalog_and_candidate() -> impl Strategy<Value = (Catalog, Candidate)> {
    prop::collection::vec((0u32..1000, 0u32..1000), 0..40).prop_flat_map(|pairs| {
        let n = pairs.len();
        (
            Just(pairs.into_iter().collect::<Catalog>()),
            prop::collection::vec(any::<bool>(), n).prop_map(Candidate::new),
        )
    })
}

proptest! {
    #[test]
    fn feasible_fitness_is_total_price(
        (catalog, candidate) in catalog_and_candidate(),
        slack in 0i64..1000,
    ) {
        let max_weight = total_weight(&candidate, &catalog) as i64 + slack;
        prop_assert_eq!(
            evaluate_single(&candidate, &catalog, max_weight),
            total_price(&candidate, &catalog) as Fitness
        );
    }

    #[test]
    fn infeasible_fitness_is_penalty(
        (catalog, candidate) in catalog_and_candidate(),
        deficit in 1i64..2000,
    ) {
        // Capacity below the total weight, negative capacities included.
        let max_weight = total_weight(&candidate, &catalog) as i64 - deficit;

        let price = total_price(&candidate, &catalog) as Fitness;
        let expected = -(price * deficit);
        let fitness = evaluate_single(&candidate, &catalog, max_weight);

        prop_assert_eq!(fitness, expected);
        prop_assert!(fitness <= 0);
        prop_assert_eq!(fitness == 0, price == 0);
    }

    #[test]
    fn select_respects_keep_count(
        fitnesses in prop::collection::vec(-1000i64..1000, 1..60),
        percentage in 1u32..=100,
    ) {
        let n = fitnesses.len();
        let population: Vec<Candidate> = (0..n).map(|_| Candidate::excluded(4)).collect();
        let selected = select(population, &fitnesses, percentage);
        prop_assert_eq!(selected.len(), keep_count(n, percentage));
        prop_assert_eq!(keep_count(n, percentage), n * percentage as usize / 100);
    }

    #[test]
    fn select_keeps_the_best(
        fitnesses in prop::collection::vec(-1000i64..1000, 1..60),
        percentage in 1u32..=100,
    ) {
        let n = fitnesses.len();
        // Tag each candidate with its original index in binary.
        let population: Vec<Candidate> = (0..n)
            .map(|i| Candidate::new((0..8).map(|b| (i >> b) & 1 == 1).collect()))
            .collect();
        let selected = select(population, &fitnesses, percentage);
        let kept: Vec<Fitness> = selected
            .iter()
            .map(|c| {
                let idx = c.genes().iter().enumerate().fold(0usize, |acc, (b, &bit)| acc | ((bit as usize) << b));
                fitnesses[idx]
            })
            .collect();

        prop_assert!(kept.windows(2).all(|w| w[0] >= w[1]), "not sorted: {:?}", kept);

        let mut sorted = fitnesses.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(kept, sorted[..selected.len()].to_vec());
    }

    #[test]
    fn crossover_fills_target_size(
        len in 0usize..50,
        parents in 1usize..10,
        target in 0usize..100,
        seed in any::<u64>(),
    ) {
        let mut rng = create_rng(seed);
        let pool: Vec<Candidate> = (0..parents).map(|_| Candidate::random(len, &mut rng)).collect();
        let children = crossover(&pool, target, &mut rng);
        prop_assert_eq!(children.len(), target);
        prop_assert!(children.iter().all(|c| c.len() == len));
    }

    #[test]
    fn mutation_with_zero_intensity_is_identity(len in 0usize..200, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let original = Candidate::random(len, &mut rng);
        let mut candidate = original.clone();
        mutate_single(&mut candidate, 0, &mut rng);
        prop_assert_eq!(candidate, original);
    }

    #[test]
    fn best_record_never_decreases(seed in any::<u64>(), items in 1usize..25) {
        let mut rng = create_rng(seed);
        let catalog = Catalog::random(items, &mut rng);
        let config = EvolutionConfig::default()
            .with_max_weight(items as i64 * 3)
            .with_starting_population(20)
            .with_selection_percentage(40)
            .with_mutation_intensity(10)
            .with_generations(15)
            .with_seed(seed);
        let report = EvolutionRunner::run(&catalog, &config).unwrap();

        let mut running_best: Fitness = 0;
        for generation in &report.history {
            running_best = running_best.max(generation.max_fitness);
        }
        prop_assert_eq!(report.best_fitness(), running_best);
        prop_assert_eq!(
            evaluate_single(&report.best.candidate, &catalog, config.max_weight),
            report.best_fitness()
        );
    }

    #[test]
    fn item_text_round_trip(pairs in prop::collection::vec((any::<u32>(), any::<u32>()), 0..50)) {
        let catalog: Catalog = pairs.iter().copied().collect();
        let parsed = parse_items(&to_text(&catalog)).unwrap();
        let items: Vec<Item> = pairs.into_iter().map(Item::from).collect();
        prop_assert_eq!(parsed.items(), items.as_slice());
    }
}
