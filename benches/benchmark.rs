// Performance benchmarks for dataset preparation and recommendation
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use unirec_data::{InstitutionRecord, InstitutionTable};
use unirec_engine::{Preferences, Recommender};
use unirec_catalog::MsiCategory;

const STATES: [&str; 8] = ["AL", "CA", "FL", "GA", "NY", "OH", "TX", "WA"];
const SECTORS: [&str; 3] = ["Public", "Private not-for-profit", "Private for-profit"];

fn generate_record(rng: &mut impl Rng, unit_id: u32) -> InstitutionRecord {
    let net_price = rng.random_range(6000.0..48000.0);
    let grad = rng.random_range(20.0..95.0);
    let retention = rng.random_range(50.0..98.0);

    InstitutionRecord {
        unit_id,
        name: format!("Institution {unit_id}"),
        city: Some(format!("City {}", unit_id % 50)),
        state: Some(STATES[rng.random_range(0..STATES.len())].to_string()),
        region: Some("Far West".to_string()),
        size_category: Some("Medium".to_string()),
        sector: Some(SECTORS[rng.random_range(0..SECTORS.len())].to_string()),
        highest_degree: Some("Doctor's degree".to_string()),
        msi_status: Some("No".to_string()),
        hsi: Some(if rng.random_bool(0.15) { 1.0 } else { 0.0 }),
        pbi: Some(if rng.random_bool(0.05) { 1.0 } else { 0.0 }),
        aanapii: Some(0.0),
        annhi: Some(0.0),
        hbcu: Some(if rng.random_bool(0.05) { 1.0 } else { 0.0 }),
        tribal: Some(0.0),
        nanti: Some(0.0),
        net_price: Some(net_price),
        net_price_after_grants_2020: Some(net_price * 0.95),
        net_price_after_grants_2019: Some(net_price * 0.97),
        net_price_after_grants_2018: Some(net_price),
        affordability_gap: Some(net_price - 6000.0),
        weekly_hours_to_close_gap: Some(rng.random_range(5.0..60.0)),
        state_minimum_wage: Some(rng.random_range(7.25..17.0)),
        ten_hour_week_wage_income: Some(rng.random_range(3700.0..8900.0)),
        monthly_center_child_care: Some(rng.random_range(500.0..1800.0)),
        adjusted_monthly_center_child_care: Some(rng.random_range(500.0..1700.0)),
        annual_center_child_care: Some(rng.random_range(6000.0..21000.0)),
        monthly_home_child_care: Some(rng.random_range(400.0..1400.0)),
        adjusted_monthly_home_child_care: Some(rng.random_range(400.0..1300.0)),
        annual_home_child_care: Some(rng.random_range(4800.0..16000.0)),
        retention_rate: Some(retention),
        grad_rate_6yr: Some(grad),
        grad_rate_4yr: Some((grad - 15.0).max(0.0)),
        grad_rate_5yr: Some((grad - 5.0).max(0.0)),
        pell_award_percent: Some(rng.random_range(10.0..80.0)),
        pell_grad_rate_6yr: Some((grad - 8.0).max(0.0)),
        median_earnings: Some(rng.random_range(25000.0..85000.0)),
        median_earnings_dependent: Some(rng.random_range(25000.0..90000.0)),
        median_earnings_independent: Some(rng.random_range(20000.0..70000.0)),
        instructional_expenses_per_fte: Some(rng.random_range(4000.0..40000.0)),
        instructional_expenses_fasb_per_fte: Some(rng.random_range(4000.0..45000.0)),
        endowment_assets_per_student: Some(rng.random_range(0.0..250000.0)),
    }
}

fn generate_table(size: u32) -> InstitutionTable {
    let mut rng = rand::rng();
    let records = (0..size).map(|i| generate_record(&mut rng, 100000 + i)).collect();
    InstitutionTable::from_records(records)
}

fn benchmark_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");

    for size in [500u32, 2000].iter() {
        let table = generate_table(*size);
        group.bench_function(format!("fit_{size}"), |b| {
            b.iter(|| Recommender::fit(black_box(table.clone())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let engine = Recommender::fit(generate_table(2000)).unwrap();
    let prefs = Preferences {
        max_net_price: Some(22000.0),
        min_grad_rate: Some(40.0),
        min_retention: Some(75.0),
        msi_preferences: vec![MsiCategory::Hsi, MsiCategory::Hbcu],
        preferred_state: Some("CA".to_string()),
        focus_pell: false,
    };

    group.bench_function("top_10_of_2000", |b| {
        b.iter(|| engine.recommend(black_box(&prefs), 10).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_prepare, benchmark_recommend);
criterion_main!(benches);
