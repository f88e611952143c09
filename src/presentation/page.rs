// HTML page around the chart: summary blurb, range buttons, embedded SVG
use crate::domain::scene::{ButtonState, ChartScene};
use crate::infrastructure::svg::render_svg;

const ACTIVE_CLASS: &str = "active-button";

const STYLE: &str = "\
body{font-family:sans-serif;max-width:1200px;margin:0 auto;padding:16px}\
.button{display:inline-block;padding:6px 12px;margin-right:8px;\
border:1px solid #888;text-decoration:none;color:#333}\
.active-button{background:#333;color:#fff}\
.notice{color:#a00}\
.grid{stroke:#e5e5e5}\
.line{stroke:steelblue;stroke-width:2}\
.midline{stroke:#999;stroke-dasharray:4 4}\
.avgline{stroke:darkorange}\
svg text{font-size:11px;fill:#555}";

/// Render the full page. Without a scene (nothing fetched successfully yet)
/// the blurb and chart stay hidden and only the buttons and any notice show.
/// Buttons are passed separately so a failed selection can still move the
/// active marker while the chart keeps showing the prior scene.
pub fn render_page(
    scene: Option<&ChartScene>,
    buttons: &[ButtonState],
    notice: Option<&str>,
) -> String {
    let mut html = String::with_capacity(8192);

    html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Sentiment</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<h1>Sentiment</h1>\n");

    html.push_str("<nav id=\"range-buttons\">\n");
    for button in buttons {
        push_button(&mut html, button);
    }
    html.push_str("</nav>\n");

    if let Some(notice) = notice {
        html.push_str(&format!("<p class=\"notice\">{notice}</p>\n"));
    }

    if let Some(scene) = scene {
        let s = &scene.summary;
        html.push_str(&format!(
            "<section id=\"sentiment-blurb\">Sentiment over the last \
             <span id=\"time_delta\">{}</span>, aggregated from \
             <span id=\"tweet_count\">{}</span> observations. Average polarity \
             <span id=\"avg_polarity\">{}</span>, high \
             <span id=\"high_polarity\">{}</span>, low \
             <span id=\"low_polarity\">{}</span>.</section>\n",
            s.window_label, s.observation_count, s.average, s.high, s.low
        ));
        html.push_str("<div id=\"anchor\">\n");
        html.push_str(&render_svg(scene));
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_button(html: &mut String, button: &ButtonState) {
    let class = if button.active {
        format!("button {ACTIVE_CLASS}")
    } else {
        "button".to_string()
    };
    html.push_str(&format!(
        "<a class=\"{class}\" data-chart-delta=\"{}\" href=\"/?delta={}\">{}</a>\n",
        button.days, button.days, button.label
    ));
}
