use sdg_core::config::TrajectoryConfig;
use sdg_core::models::{Outcome, SectorAllocation};
use sdg_core::ModelConfig;
use sdg_projection::{impact, trajectory};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn mixed() -> SectorAllocation {
    SectorAllocation {
        education: 10.0,
        health: 25.0,
        water: 5.0,
        energy: 5.0,
        agriculture: 30.0,
        infrastructure: 25.0,
    }
}

#[test]
fn six_points_in_ascending_year_order() {
    let result = sdg_projection::project(&mixed()).unwrap();
    let years: Vec<i32> = result.yearly_progress.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2025, 2026, 2027, 2028, 2029, 2030]);
}

#[test]
fn final_year_equals_projection_exactly() {
    let result = sdg_projection::project(&mixed()).unwrap();
    let last = result.yearly_progress.last().unwrap();
    assert_eq!(last.metrics, result.projected_metrics);
}

#[test]
fn first_year_is_one_sixth_along_not_baseline() {
    let model = ModelConfig::standard();
    let end = impact::project(&mixed(), model);
    let points = trajectory::project_yearly(&mixed(), model, &TrajectoryConfig::default());

    for outcome in Outcome::ALL {
        let base = model.baseline.get(outcome);
        let expected = base + (end.get(outcome) - base) / 6.0;
        assert!(
            approx(points[0].metrics.get(outcome), expected),
            "{outcome}: {} != {expected}",
            points[0].metrics.get(outcome)
        );
        assert!(points[0].metrics.get(outcome) > base);
    }
}

#[test]
fn mid_trajectory_is_linear() {
    let model = ModelConfig::standard();
    let end = impact::project(&mixed(), model);
    let points = trajectory::interpolate(&model.baseline, &end, &TrajectoryConfig::default());

    // 2027 is halfway.
    let halfway = &points[2];
    assert_eq!(halfway.year, 2027);
    for outcome in Outcome::ALL {
        let base = model.baseline.get(outcome);
        assert!(approx(halfway.metrics.get(outcome), (base + end.get(outcome)) / 2.0));
    }

    // Equal steps between consecutive years.
    let step = points[1].metrics.literacy - points[0].metrics.literacy;
    for pair in points.windows(2) {
        assert!(approx(pair[1].metrics.literacy - pair[0].metrics.literacy, step));
    }
}

#[test]
fn flat_trajectory_when_nothing_improves() {
    let model = ModelConfig::standard();
    let points = trajectory::interpolate(
        &model.baseline,
        &model.baseline,
        &TrajectoryConfig::default(),
    );
    assert!(points.iter().all(|p| p.metrics == model.baseline));
}
