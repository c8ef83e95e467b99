use crate::catalog::Catalog;
use crate::chart::escape_xml;
use crate::shell::{DAYS_ATTENDED_DEFAULT, DAYS_ATTENDED_MAX, DAYS_ATTENDED_MIN};

pub const PAGE_TITLE: &str = "Attendance Calculator";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{{TITLE}}</title>
    <style>
        body { font-family: Arial, sans-serif; max-width: 900px; margin: 40px auto; padding: 20px; }
        h1 { text-align: center; }
        .container { background: #f5f5f5; padding: 25px; border-radius: 10px; }
        .form-group { margin: 15px auto; width: 50%; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        select, input[type=range] { width: 100%; }
        .marks { display: flex; justify-content: space-between; font-size: 12px; color: #555; }
        #attendance-graph { text-align: center; margin: 20px 0; min-height: 420px; }
        #attendance-graph svg { max-width: 100%; height: auto; background: white; border-radius: 5px; }
        .error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; padding: 15px; border-radius: 5px; display: none; }
        .attendance-table { width: 80%; margin: auto; border-collapse: collapse; background: white; }
        .attendance-table th, .attendance-table td { padding: 10px; text-align: left; border-bottom: 1px solid #ddd; }
        .attendance-table th { background: #f8f9fa; }
    </style>
</head>
<body>
    <div class="container">
        <h1>{{TITLE}}</h1>

        <div class="form-group">
            <label for="subject-dropdown">Subject:</label>
            <select id="subject-dropdown">
{{SUBJECT_OPTIONS}}
            </select>
        </div>

        <div class="form-group">
            <label for="attend-slider">Days Attended: <span id="attend-value">{{DAYS_DEFAULT}}</span></label>
            <input type="range" id="attend-slider" min="{{DAYS_MIN}}" max="{{DAYS_MAX}}" step="1" value="{{DAYS_DEFAULT}}">
            <div class="marks">{{DAYS_MARKS}}</div>
        </div>

        <div id="attendance-error" class="error"></div>
        <div id="attendance-graph"></div>
        <div id="attendance-table"></div>
    </div>

    <script>
        const subjectInput = document.getElementById('subject-dropdown');
        const daysInput = document.getElementById('attend-slider');
        let latest = 0;

        function renderTable(table) {
            const el = document.createElement('table');
            el.className = 'attendance-table';
            const head = el.createTHead().insertRow();
            table.header.forEach(h => {
                const th = document.createElement('th');
                th.textContent = h;
                head.appendChild(th);
            });
            const body = el.createTBody();
            table.rows.forEach(cells => {
                const tr = body.insertRow();
                cells.forEach(c => { tr.insertCell().textContent = c; });
            });
            return el;
        }

        async function update() {
            const seq = ++latest;
            const subject = subjectInput.value;
            const days = daysInput.value;
            document.getElementById('attend-value').textContent = days;

            const errorDiv = document.getElementById('attendance-error');
            const graphDiv = document.getElementById('attendance-graph');
            const tableDiv = document.getElementById('attendance-table');

            try {
                const params = new URLSearchParams({ subject, days });
                const response = await fetch('/api/projection?' + params.toString());
                const data = await response.json();
                if (seq !== latest) return;

                if (!response.ok) {
                    throw new Error(data.error || response.statusText);
                }

                errorDiv.style.display = 'none';
                graphDiv.innerHTML = data.chart_svg;
                tableDiv.replaceChildren(renderTable(data.table));
            } catch (error) {
                if (seq !== latest) return;
                graphDiv.innerHTML = '';
                tableDiv.replaceChildren();
                errorDiv.textContent = 'Error: ' + error.message;
                errorDiv.style.display = 'block';
            }
        }

        subjectInput.addEventListener('change', update);
        daysInput.addEventListener('input', update);
        update();
    </script>
</body>
</html>
"#;

/// Renders the single page, with the subject selector filled from
/// `catalog` and its first subject selected.
pub fn render_homepage(catalog: &Catalog) -> String {
    let default = catalog.default_subject().name.as_str();
    let options = catalog
        .names()
        .map(|name| {
            let escaped = escape_xml(name);
            let selected = if name == default { " selected" } else { "" };
            format!(r#"                <option value="{escaped}"{selected}>{escaped}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let marks = (DAYS_ATTENDED_MIN..=DAYS_ATTENDED_MAX)
        .map(|i| format!("<span>{i}</span>"))
        .collect::<String>();

    TEMPLATE
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{SUBJECT_OPTIONS}}", &options)
        .replace("{{DAYS_MIN}}", &DAYS_ATTENDED_MIN.to_string())
        .replace("{{DAYS_MAX}}", &DAYS_ATTENDED_MAX.to_string())
        .replace("{{DAYS_DEFAULT}}", &DAYS_ATTENDED_DEFAULT.to_string())
        .replace("{{DAYS_MARKS}}", &marks)
}
