use console::Style;
use unscale_core::report::format_general;
use unscale_core::unscale::UnscaleReport;

struct Styles {
    label: Style,
    value: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            label: Style::new().dim(),
            value: Style::new().bold().white(),
        }
    }
}

pub fn print_report(report: &UnscaleReport) {
    let s = Styles::new();

    println!(
        "{:<21}{}",
        s.label.apply_to("Original resolution:"),
        s.value.apply_to(format!(
            "{} x {}",
            report.determined_width, report.determined_height
        ))
    );
    println!(
        "{:<21}{}",
        s.label.apply_to("Scale:"),
        s.value.apply_to(format!(
            "{} x {}",
            format_general(report.x_scale),
            format_general(report.y_scale)
        ))
    );
    println!(
        "{:<21}{}",
        s.label.apply_to("Pixel aspect ratio:"),
        s.value.apply_to(format_general(report.pixel_aspect_ratio))
    );
}
