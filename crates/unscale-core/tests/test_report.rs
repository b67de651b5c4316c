use unscale_core::report::{format_general, render, Preset};
use unscale_core::unscale::UnscaleReport;

fn report() -> UnscaleReport {
    UnscaleReport::new(640, 448, 256, 224, 1)
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[test]
fn test_render_all_variables() {
    let out = render(
        "{width} {height} {scaled_width} {scaled_height} {x_scale} {y_scale} {par}",
        &report(),
    );
    assert_eq!(out, "256 224 640 448 2.5 2 1.25");
}

#[test]
fn test_render_escaped_braces() {
    assert_eq!(render("{{width}} is {width}", &report()), "{width} is 256");
    assert_eq!(render("a}}b}c", &report()), "a}b}c");
}

#[test]
fn test_render_newline_escape() {
    assert_eq!(render("{width}\\n{height}", &report()), "256\n224");
    assert_eq!(render("back\\slash", &report()), "back\\slash");
}

#[test]
fn test_render_unknown_variable_passthrough() {
    assert_eq!(render("{nope} {width}", &report()), "{nope} 256");
}

#[test]
fn test_render_unterminated_variable_passthrough() {
    assert_eq!(render("{width}x{height", &report()), "256x{height");
}

#[test]
fn test_render_plain_text() {
    assert_eq!(render("no variables here", &report()), "no variables here");
}

#[test]
fn test_presets() {
    assert_eq!(render(Preset::Resolution.template(), &report()), "256x224");
    assert_eq!(render(Preset::Scale.template(), &report()), "2.5x2");
    assert_eq!(render(Preset::PixelAspectRatio.template(), &report()), "1.25");
}

#[test]
fn test_preset_display() {
    assert_eq!(format!("{}", Preset::PixelAspectRatio), "Pixel aspect ratio");
}

// ---------------------------------------------------------------------------
// %g-style numbers
// ---------------------------------------------------------------------------

#[test]
fn test_format_general_integers_drop_fraction() {
    assert_eq!(format_general(1.0), "1");
    assert_eq!(format_general(3.0), "3");
    assert_eq!(format_general(123456.0), "123456");
    assert_eq!(format_general(0.0), "0");
}

#[test]
fn test_format_general_six_significant_digits() {
    assert_eq!(format_general(4.0 / 3.0), "1.33333");
    assert_eq!(format_general(2.5), "2.5");
    assert_eq!(format_general(0.875), "0.875");
    assert_eq!(format_general(-1.5), "-1.5");
}

#[test]
fn test_format_general_exponent_form() {
    assert_eq!(format_general(1234567.0), "1.23457e+06");
    assert_eq!(format_general(0.00001), "1e-05");
    assert_eq!(format_general(0.0001), "0.0001");
}

#[test]
fn test_report_derives_ratios() {
    let r = report();
    assert!((r.x_scale - 2.5).abs() < 1e-12);
    assert!((r.y_scale - 2.0).abs() < 1e-12);
    assert!((r.pixel_aspect_ratio - 1.25).abs() < 1e-12);
}
