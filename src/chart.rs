use serde::{Deserialize, Serialize};
use std::fmt;

pub const BAR_COLOR: &str = "lightskyblue";

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 80.0;
const GRID_STEPS: u32 = 4;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y_range: (f64, f64),
    pub color: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.value).collect()
    }

    /// Renders the chart as a standalone SVG document.
    ///
    /// The y axis is fixed to `y_range`; bars outside it are clamped to the
    /// plot edges, while the value label still shows the real number.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

/// SVG markup of the chart.
impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let (y_min, y_max) = self.y_range;
        let span = if y_max > y_min { y_max - y_min } else { 1.0 };
        let y_of = |v: f64| MARGIN_TOP + plot_h - (v.clamp(y_min, y_max) - y_min) / span * plot_h;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" font-family="Arial, sans-serif">"#
        )?;
        writeln!(
            f,
            r#"<text class="title" x="{}" y="28" text-anchor="middle" font-size="18">{}</text>"#,
            WIDTH / 2.0,
            escape_xml(&self.title)
        )?;

        for step in 0..=GRID_STEPS {
            let v = y_min + span * f64::from(step) / f64::from(GRID_STEPS);
            let y = y_of(v);
            writeln!(
                f,
                r##"<line class="grid" x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e5e5e5"/>"##,
                MARGIN_LEFT + plot_w
            )?;
            writeln!(
                f,
                r#"<text class="tick" x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{v:.0}</text>"#,
                MARGIN_LEFT - 8.0,
                y + 4.0
            )?;
        }

        let slot = if self.bars.is_empty() {
            plot_w
        } else {
            plot_w / self.bars.len() as f64
        };
        let bar_w = slot * 0.6;
        let color = escape_xml(&self.color);

        for (i, bar) in self.bars.iter().enumerate() {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let top = y_of(bar.value);
            let base = y_of(y_min);
            let center = x + bar_w / 2.0;
            writeln!(
                f,
                r#"<rect class="bar" x="{x:.1}" y="{top:.1}" width="{bar_w:.1}" height="{:.1}" fill="{color}"><title>{}: {:.2}</title></rect>"#,
                base - top,
                escape_xml(&bar.label),
                bar.value
            )?;
            writeln!(
                f,
                r#"<text class="value" x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="12">{:.2}</text>"#,
                top - 6.0,
                bar.value
            )?;
            writeln!(
                f,
                r#"<text class="label" x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
                base + 18.0,
                escape_xml(&bar.label)
            )?;
        }

        writeln!(
            f,
            r##"<line class="axis" x1="{MARGIN_LEFT}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#333"/>"##,
            MARGIN_TOP + plot_h,
            MARGIN_LEFT + plot_w,
            MARGIN_TOP + plot_h
        )?;
        writeln!(
            f,
            r#"<text class="x-title" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{}</text>"#,
            MARGIN_LEFT + plot_w / 2.0,
            HEIGHT - 20.0,
            escape_xml(&self.x_title)
        )?;
        writeln!(
            f,
            r#"<text class="y-title" x="20" y="{:.1}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {:.1})">{}</text>"#,
            MARGIN_TOP + plot_h / 2.0,
            MARGIN_TOP + plot_h / 2.0,
            escape_xml(&self.y_title)
        )?;
        writeln!(f, "</svg>")
    }
}

/// Escapes text for XML and HTML element content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
