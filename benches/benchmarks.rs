use dilemma::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        playing_single_round,
        playing_round_robin_small,
        playing_round_robin_large,
        collecting_matchups,
}

fn field(n: usize) -> Vec<Agent> {
    let registry = Registry::default();
    let kinds = registry.kinds().collect::<Vec<_>>();
    (0..n)
        .map(|i| kinds[i % kinds.len()])
        .enumerate()
        .map(|(i, kind)| registry.create(kind, &format!("{}{}", kind, i), i as Seed))
        .collect::<Result<_, _>>()
        .expect("builtin kinds")
}

fn playing_single_round(c: &mut criterion::Criterion) {
    let scheduler = Scheduler::new(Payoffs::default(), 1);
    c.bench_function("play 1 round between 2 agents", |b| {
        b.iter_batched(
            || field(2),
            |mut agents| scheduler.run(&mut agents),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn playing_round_robin_small(c: &mut criterion::Criterion) {
    let scheduler = Scheduler::new(Payoffs::default(), 100);
    c.bench_function("play 100 rounds between 6 agents", |b| {
        b.iter_batched(
            || field(6),
            |mut agents| scheduler.run(&mut agents),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn playing_round_robin_large(c: &mut criterion::Criterion) {
    let scheduler = Scheduler::new(Payoffs::default(), 200);
    c.bench_function("play 200 rounds between 48 agents", |b| {
        b.iter_batched(
            || field(48),
            |mut agents| scheduler.run(&mut agents),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn collecting_matchups(c: &mut criterion::Criterion) {
    let config = Config {
        agents: field(24)
            .iter()
            .map(|agent| Entry {
                kind: agent.kind().to_string(),
                name: agent.name().to_string(),
            })
            .collect(),
        payoff_matrix: PayoffTable::from(&Payoffs::default()),
        rounds: 200,
        seed: Some(0),
    };
    let mut tournament = Tournament::new(&config, &Registry::default()).expect("valid config");
    tournament.run().expect("first run");
    c.bench_function("collect matchups between 24 agents", |b| {
        b.iter(|| tournament.matchups())
    });
}
