// SVG writer - turns a chart scene into markup
use crate::domain::scene::{Axis, ChartScene, ReferenceLine};

const RIGHT_TICK_LENGTH: f64 = 6.0;

/// Draw a scene as a standalone SVG document. The scene is already fully
/// positioned; this step only emits markup.
pub fn render_svg(scene: &ChartScene) -> String {
    let g = &scene.geometry;
    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" \
         preserveAspectRatio=\"xMinYMin meet\">\n",
        g.width, g.height
    ));
    svg.push_str(&format!(
        "<g transform=\"translate({},{})\">\n",
        g.margins.left, g.margins.top
    ));

    push_bottom_axis(&mut svg, &scene.axis_bottom, g.inner_height());
    push_left_axis(&mut svg, &scene.axis_left);
    push_right_axis(&mut svg, &scene.axis_right, g.inner_width());

    // Rotated y-axis caption, anchored to the top-left of the plot
    svg.push_str(&format!(
        "<text transform=\"rotate(-90)\" y=\"8\" x=\"-8\" dy=\"0.71em\" \
         text-anchor=\"end\">{}</text>\n",
        scene.caption
    ));

    push_line_path(&mut svg, &scene.line);
    push_reference_line(&mut svg, "midline", &scene.midline);
    push_reference_line(&mut svg, "avgline", &scene.average_line);

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn push_bottom_axis(svg: &mut String, axis: &Axis, inner_height: f64) {
    svg.push_str(&format!(
        "<g id=\"axis-bottom\" transform=\"translate(0,{inner_height})\">\n"
    ));
    for tick in &axis.ticks {
        svg.push_str(&format!(
            "<g transform=\"translate({},0)\"><line y2=\"{}\" class=\"grid\"/>\
             <text y=\"9\" dy=\"0.71em\" text-anchor=\"middle\">{}</text></g>\n",
            tick.position, -axis.grid_length, tick.label
        ));
    }
    svg.push_str("</g>\n");
}

fn push_left_axis(svg: &mut String, axis: &Axis) {
    svg.push_str("<g id=\"axis-left\">\n");
    for tick in &axis.ticks {
        svg.push_str(&format!(
            "<g transform=\"translate(0,{})\"><line x2=\"{}\" class=\"grid\"/>\
             <text x=\"-9\" dy=\"0.32em\" text-anchor=\"end\">{}</text></g>\n",
            tick.position, axis.grid_length, tick.label
        ));
    }
    svg.push_str("</g>\n");
}

fn push_right_axis(svg: &mut String, axis: &Axis, inner_width: f64) {
    svg.push_str(&format!(
        "<g id=\"axis-right\" transform=\"translate({inner_width},0)\">\n"
    ));
    for tick in &axis.ticks {
        svg.push_str(&format!(
            "<g transform=\"translate(0,{})\"><line x2=\"{RIGHT_TICK_LENGTH}\"/>\
             <text x=\"9\" dy=\"0.32em\" text-anchor=\"start\">{}</text></g>\n",
            tick.position, tick.label
        ));
    }
    svg.push_str("</g>\n");
}

fn push_line_path(svg: &mut String, points: &[(f64, f64)]) {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{command}{x},{y}"));
    }
    svg.push_str(&format!("<path class=\"line\" fill=\"none\" d=\"{d}\"/>\n"));
}

fn push_reference_line(svg: &mut String, class: &str, line: &ReferenceLine) {
    svg.push_str(&format!(
        "<line class=\"{class}\" x1=\"{}\" x2=\"{}\" y1=\"{}\" y2=\"{}\"/>\n",
        line.x1, line.x2, line.y, line.y
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{PolarityPoint, RangeSelector, SentimentReport};
    use crate::domain::scene::ChartGeometry;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn scene() -> ChartScene {
        let report = SentimentReport::new(
            vec![
                PolarityPoint::new(dt(1, 0), 42.5),
                PolarityPoint::new(dt(31, 0), 58.0),
            ],
            dt(1, 0),
            50.0,
            1000,
        );
        ChartScene::build(&report, RangeSelector::Month, ChartGeometry::default()).unwrap()
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_one_line_one_midline_one_avgline() {
        let svg = render_svg(&scene());

        assert_eq!(count(&svg, "class=\"line\""), 1);
        assert_eq!(count(&svg, "class=\"midline\""), 1);
        assert_eq!(count(&svg, "class=\"avgline\""), 1);
    }

    #[test]
    fn test_viewbox_and_plot_translate() {
        let svg = render_svg(&scene());

        assert!(svg.contains("viewBox=\"0 0 1200 720\""));
        assert!(svg.contains("<g transform=\"translate(48,24)\">"));
    }

    #[test]
    fn test_path_traces_points() {
        let svg = render_svg(&scene());

        // Two points spanning the full x-range; midline pinned at half height
        assert!(svg.contains("d=\"M0,382L1104,279\""));
        assert!(svg.contains("y1=\"332\""));
    }

    #[test]
    fn test_axis_groups_present() {
        let svg = render_svg(&scene());

        assert_eq!(count(&svg, "id=\"axis-bottom\""), 1);
        assert_eq!(count(&svg, "id=\"axis-left\""), 1);
        assert_eq!(count(&svg, "id=\"axis-right\""), 1);
        assert!(svg.contains(">Sentiment</text>"));
    }
}
