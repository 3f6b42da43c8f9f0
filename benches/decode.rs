use criterion::{black_box, criterion_group, criterion_main, Criterion};
use openweathermap::{CurrentWeatherData, Forecast5WeatherData, OneCallData};

const CURRENT: &str = include_str!("../tests/fixtures/current.json");
const FORECAST5: &str = include_str!("../tests/fixtures/forecast5.json");
const ONE_CALL: &str = include_str!("../tests/fixtures/onecall.json");

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_current", |b| {
        b.iter(|| serde_json::from_str::<CurrentWeatherData>(black_box(CURRENT)))
    });
    c.bench_function("decode_forecast5", |b| {
        b.iter(|| serde_json::from_str::<Forecast5WeatherData>(black_box(FORECAST5)))
    });
    c.bench_function("decode_one_call", |b| {
        b.iter(|| serde_json::from_str::<OneCallData>(black_box(ONE_CALL)))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
