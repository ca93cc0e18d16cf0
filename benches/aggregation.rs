use climatedash::{aggregate, grouped_mean, Partition, MEAN_COLUMN};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::df;
use polars::prelude::{DataFrame, IntoLazy};

/// A decade of synthetic monthly records for 1000 countries, with every
/// tenth measurement missing.
fn synthetic_country_frame() -> DataFrame {
    let rows = 1000 * 10 * 12;
    let mut countries = Vec::with_capacity(rows);
    let mut years = Vec::with_capacity(rows);
    let mut months = Vec::with_capacity(rows);
    let mut temps: Vec<Option<f64>> = Vec::with_capacity(rows);
    for country in 0..1000 {
        for year in 2000i32..2010 {
            for month in 1i32..=12 {
                countries.push(format!("Country {}", country));
                years.push(year);
                months.push(month);
                let i = countries.len();
                if i % 10 == 0 {
                    temps.push(None);
                } else {
                    temps.push(Some(10.0 + (month as f64) + (country % 7) as f64));
                }
            }
        }
    }
    df!(
        "country" => countries,
        "year" => years,
        "month" => months,
        "avg_temp" => temps,
    )
    .unwrap()
}

fn bench_aggregation(c: &mut Criterion) {
    let frame = synthetic_country_frame();

    c.bench_function("country_year_mean", |b| {
        b.iter(|| {
            aggregate(
                black_box(frame.clone().lazy()),
                Partition::CountryYear,
                "avg_temp",
            )
            .unwrap()
        })
    });

    c.bench_function("country_year_month_mean", |b| {
        b.iter(|| {
            aggregate(
                black_box(frame.clone().lazy()),
                Partition::CountryYearMonth,
                "avg_temp",
            )
            .unwrap()
        })
    });

    c.bench_function("yearly_mean_of_means", |b| {
        b.iter(|| {
            let per_country = aggregate(
                black_box(frame.clone().lazy()),
                Partition::CountryYear,
                "avg_temp",
            )
            .unwrap();
            grouped_mean(per_country.lazy(), &["year"], MEAN_COLUMN).unwrap()
        })
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
