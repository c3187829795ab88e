use pacer_format::{
    format_bmi, format_bmi_precise, format_cadence, format_cadence_precise, format_distance,
    format_distance_precise, format_height, format_height_precise, format_hhmmss,
    format_hhmmss_milli, format_pace, format_pace_milli, format_stride, format_stride_precise,
    format_weight, format_weight_precise,
};

#[test]
fn clock_times_floor_every_field() {
    assert_eq!(format_hhmmss(10800.0), "3:00:00");
    assert_eq!(format_hhmmss(8439.0), "2:20:39");
    assert_eq!(format_hhmmss(59.999), "0:00:59");
    assert_eq!(format_hhmmss(3661.5), "1:01:01");
}

#[test]
fn clock_times_carry_milliseconds_on_the_sub_display() {
    assert_eq!(format_hhmmss_milli(3661.5), "1:01:01.500");
    assert_eq!(format_hhmmss_milli(10800.0), "3:00:00.000");
}

#[test]
fn pace_reads_per_kilometer() {
    assert_eq!(format_pace(0.2), "3:20/km");
    assert_eq!(format_pace(0.25263157894736843), "4:12/km");
    assert_eq!(format_pace_milli(0.2), "3:20.000/km");
}

#[test]
fn distances_switch_units_at_a_kilometer() {
    assert_eq!(format_distance(400.0), "400m");
    assert_eq!(format_distance(999.9), "999m");
    assert_eq!(format_distance(10000.0), "10.0km");
    assert_eq!(format_distance_precise(42195.0), "42195.0m");
}

#[test]
fn marathon_distances_keep_their_exact_labels() {
    assert_eq!(format_distance(42195.0), "42.195km");
    assert_eq!(format_distance(21097.5), "21.0975km");
    // A nearby value does not inherit the race label.
    assert_eq!(format_distance(42194.0), "42.2km");
}

#[test]
fn form_quantities_read_in_display_units() {
    assert_eq!(format_cadence(189.6), "190spm");
    assert_eq!(format_cadence_precise(189.6), "189.60spm");
    assert_eq!(format_stride(120.0), "1.20m");
    assert_eq!(format_stride_precise(120.0), "120.00cm");
}

#[test]
fn body_quantities_read_in_display_units() {
    assert_eq!(format_height(170.9), "170cm");
    assert_eq!(format_weight(65000.0), "65.0kg");
    assert_eq!(format_bmi(22.491349480968858), "22.5");
}

#[test]
fn body_sub_displays_carry_extra_precision() {
    // The meter form floors the centimeter value first, like the main
    // display, so 170.9cm reads 1.70m rather than 1.71m.
    assert_eq!(format_height_precise(170.9), "1.70m");
    assert_eq!(format_weight_precise(65432.0), "65.43kg");
    assert_eq!(format_bmi_precise(22.491349480968858), "22.49");
}
