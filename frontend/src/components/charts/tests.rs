use super::*;

#[test]
fn zero_maps_to_bottom_of_plot_area() {
    let y = y_pos(0.0, 100.0);
    assert!((y - (HEIGHT - PAD_Y)).abs() < f64::EPSILON);
}

#[test]
fn max_maps_to_top_of_plot_area() {
    let y = y_pos(100.0, 100.0);
    assert!((y - PAD_Y).abs() < f64::EPSILON);
}

#[test]
fn y_axis_is_inverted() {
    // SVG 坐标系 Y 轴向下：值越大，坐标越小
    assert!(y_pos(80.0, 100.0) < y_pos(20.0, 100.0));
}
