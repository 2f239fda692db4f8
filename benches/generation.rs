use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vizsearch_stimuli::logging::{LogEvent, LogSink};
use vizsearch_stimuli::{
    Color, ConditionEnumerator, DiagnosticsConfig, GridSize, HtmlRenderer, LayoutGenerator,
    LayoutRequest, Logger, LoggingResult, TrialSettings, build_trials,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn instrumented() -> DiagnosticsConfig {
    let mut diagnostics = DiagnosticsConfig::default().with_logger(Logger::new(NullSink));
    diagnostics.enable_metrics();
    diagnostics
}

fn layout_sparse(c: &mut Criterion) {
    let generator = LayoutGenerator::with_diagnostics(instrumented());
    let request = LayoutRequest::new(GridSize::square(36), 1, 31);
    c.bench_function("layout_36x36_set32", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            generator
                .generate(black_box(&request), &mut rng)
                .expect("layout")
        });
    });
}

fn layout_dense(c: &mut Criterion) {
    let generator = LayoutGenerator::new();
    let request = LayoutRequest::new(GridSize::square(10), 10, 90);
    c.bench_function("layout_10x10_full", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            generator
                .generate(black_box(&request), &mut rng)
                .expect("layout")
        });
    });
}

fn enumerate_all_colors(c: &mut Criterion) {
    let enumerator = ConditionEnumerator::default().with_diagnostics(instrumented());
    c.bench_function("enumerate_all_colors", |b| {
        b.iter(|| {
            for color in Color::ALL {
                black_box(enumerator.enumerate(color).expect("conditions"));
            }
        });
    });
}

fn trial_pipeline(c: &mut Criterion) {
    let conditions = ConditionEnumerator::default()
        .enumerate(Color::Blue)
        .expect("conditions");
    let settings = TrialSettings::default();
    let generator = LayoutGenerator::new();
    let renderer = HtmlRenderer::with_default();
    c.bench_function("trial_pipeline_blue", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| {
            for trial in build_trials(black_box(&conditions), &settings) {
                let request = trial.layout_request().expect("request");
                let layout = generator.generate(&request, &mut rng).expect("layout");
                black_box(renderer.render_to_string(&layout).expect("markup"));
            }
        });
    });
}

criterion_group!(
    benches,
    layout_sparse,
    layout_dense,
    enumerate_all_colors,
    trial_pipeline
);
criterion_main!(benches);
