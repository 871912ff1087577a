use brunch::{Bench, Benches};
use tagmap_core::layout::{ApproxTextMetrics, CloudLayout, Word};

fn main() {
    let mut benches = Benches::default();

    let metrics = ApproxTextMetrics::default();
    let layout = CloudLayout::new(800.0, 500.0);
    let sparse = create_words(50, 3);
    let crowded = create_words(120, 6);

    benches.push(
        Bench::new("Place 50 words on a 800x500 canvas").run(|| layout.place(&sparse, &metrics)),
    );
    benches.push(
        Bench::new("Place 120 words on a 800x500 canvas").run(|| layout.place(&crowded, &metrics)),
    );
    benches.finish();
}

fn create_words(n: usize, max_weight: usize) -> Vec<Word> {
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let weight = (i % max_weight + 1) as f64;
            Word::new(format!("tag-{i}"), weight)
        })
        .collect()
}
