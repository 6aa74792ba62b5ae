//! Benchmarks for per-frame drawing on 1024-bin spectra.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectroplot::{
    bin_frequencies, AxisLimits, Chart, DecibelRange, Rect, RecordingCanvas, SpectrumView,
    SvgCanvas,
};

const FFT_SIZE: usize = 2048;

fn spectrum() -> (Vec<f64>, Vec<f64>) {
    let hz = bin_frequencies(48_000.0, FFT_SIZE);
    let db = hz
        .iter()
        .enumerate()
        .map(|(i, _)| -140.0 + 90.0 * (-((i as f64 - 200.0) / 40.0).powi(2)).exp())
        .collect();
    (hz, db)
}

fn bench_plot(c: &mut Criterion) {
    let (hz, db) = spectrum();
    let rect = Rect::new(0.0, 0.0, 1024.0, 256.0);

    c.bench_function("plot_1024_bins", |b| {
        let mut chart = Chart::new(RecordingCanvas::new(), rect);
        b.iter(|| {
            chart.plot(black_box(&hz), black_box(&db)).ok();
            chart.canvas_mut().clear();
        });
    });

    c.bench_function("line_path_1024_bins_pinned", |b| {
        let chart = Chart::new(RecordingCanvas::new(), rect)
            .with_limits(AxisLimits::pinned(0.0, 24_000.0), AxisLimits::pinned(-150.0, -30.0));
        b.iter(|| chart.line_path(black_box(&hz), black_box(&db)));
    });
}

fn bench_fill_between(c: &mut Criterion) {
    let (hz, db) = spectrum();
    let floor = vec![DecibelRange::DEFAULT_MIN; hz.len()];
    let rect = Rect::new(0.0, 0.0, 1024.0, 256.0);

    c.bench_function("fill_between_1024_bins", |b| {
        let mut chart = Chart::new(RecordingCanvas::new(), rect);
        b.iter(|| {
            chart
                .fill_between(black_box(&hz), black_box(&db), black_box(&floor))
                .ok();
            chart.canvas_mut().clear();
        });
    });
}

fn bench_spectrum_frame(c: &mut Criterion) {
    let (hz, db) = spectrum();
    let rect = Rect::new(0.0, 0.0, 1024.0, 256.0);

    c.bench_function("spectrum_frame_recording", |b| {
        let mut view = SpectrumView::new(RecordingCanvas::new(), rect);
        b.iter(|| {
            view.render(black_box(&hz), black_box(&db)).ok();
            view.chart_mut().canvas_mut().clear();
        });
    });

    c.bench_function("spectrum_frame_svg", |b| {
        b.iter(|| {
            let mut view = SpectrumView::new(SvgCanvas::new(1024.0, 256.0), rect);
            view.render(black_box(&hz), black_box(&db)).ok();
            view.into_canvas().finish()
        });
    });
}

criterion_group!(benches, bench_plot, bench_fill_between, bench_spectrum_frame);
criterion_main!(benches);
