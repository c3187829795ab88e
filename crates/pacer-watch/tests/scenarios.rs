use pacer_core::{floor_milli, floor_whole, BodyLock, Edit, FormLock, RunLock};
use pacer_watch::{BodyWatch, FormWatch, RunWatch};

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

// A marathon in three hours, distance locked: dialing 3:20/km lands in time.
#[test]
fn marathon_pace_edit_with_distance_locked() {
    let watch = RunWatch::new(42195.0, 10800.0).unwrap();
    let next = watch.change_pace(RunLock::Distance, Edit::Set(0.2));

    assert_eq!(next.distance_m(), 42195.0);
    assert_close(next.time_s(), 8439.0);
    assert_close(next.pace_s_per_m(), 0.2);
}

// Cadence locked at 190: lengthening the stride to 1.25m speeds the pace.
#[test]
fn stride_edit_with_cadence_locked() {
    let watch = FormWatch::new(190.0, 120.0).unwrap();
    let next = watch.change_stride(FormLock::Cadence, Edit::Set(125.0));

    assert_eq!(next.cadence_spm(), 190.0);
    assert_eq!(next.stride_cm(), 125.0);
    assert_close(next.pace_s_per_m(), 60.0 / (190.0 * 125.0 / 100.0));
}

// BMI locked: growing from 170cm to 180cm scales the weight with height
// squared, keeping the BMI bit pattern through the recompute tolerance.
#[test]
fn height_edit_with_bmi_locked() {
    let watch = BodyWatch::new(170.0, 65000.0).unwrap();
    let bmi_before = watch.bmi();
    let next = watch.change_height(BodyLock::Bmi, Edit::Set(180.0));

    assert_eq!(next.height_cm(), 180.0);
    assert_close(next.bmi(), bmi_before);
    assert_close(next.weight_g(), bmi_before * 1.8 * 1.8 * 1000.0);
}

// End of a drag gesture: whole-unit quantities floor, pace floors to
// three decimals, and neither touches the locked quantity.
#[test]
fn commit_rounding_at_gesture_end() {
    let watch = RunWatch::new(42195.7, 10800.9).unwrap();

    let committed = watch.change_distance(RunLock::Time, Edit::Update(floor_whole));
    assert_eq!(committed.distance_m(), 42195.0);
    assert_eq!(committed.time_s(), 10800.9);

    let committed = watch.change_pace(RunLock::Distance, Edit::Update(floor_milli));
    assert_close(committed.pace_s_per_m(), floor_milli(watch.pace_s_per_m()));
    assert_eq!(committed.distance_m(), 42195.7);
}

// A zero denominator is not guarded in the reducers: the degenerate value
// flows through and is only observable via the degeneracy check.
#[test]
fn zero_distance_yields_degenerate_pace() {
    let watch = RunWatch::new(42195.0, 10800.0)
        .unwrap()
        .change_distance(RunLock::Time, Edit::Set(0.0));

    assert!(watch.pace_s_per_m().is_infinite());
    assert!(watch.is_degenerate());
}
