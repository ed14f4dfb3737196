//! Server-rendered calculator page.
//!
//! The page has a side panel with the inputs and notes and a main panel with
//! the result sentences, the margin slider, the breakdown table and the CSV
//! download link. Every control change submits the form, so each change is
//! one fresh evaluation on the server.

use livingcost_core::CalculatorSettings;
use livingcost_core::expense::{
    ExpenseInput, MARGIN_MAX, MARGIN_MIN, MARGIN_STEP, child_count_options,
};
use livingcost_core::report::{BreakdownTable, Evaluation, Segment, Sentence, format_rate};

const STYLE: &str = "\
body{margin:0;font-family:sans-serif;display:flex;min-height:100vh}\
aside{width:20rem;padding:1.5rem;background:#f0f2f6}\
aside label{display:block;margin-top:1rem}\
aside input,aside select{width:100%;margin-top:.25rem}\
main{flex:1;padding:1.5rem 3rem}\
.value{color:red}\
.error{color:#b00020;font-weight:bold}\
table{border-collapse:collapse}\
th,td{border:1px solid #ddd;padding:.4rem .8rem}\
td.num{text-align:right}";

/// Escapes text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Query string reproducing `input`, used by the download link.
#[must_use]
pub fn input_query(input: &ExpenseInput) -> String {
    format!(
        "exchange_rate={}&duration_months={}&spouse={}&child_count={}&margin_percent={}",
        format_rate(input.exchange_rate),
        input.duration_months,
        if input.spouse_present { "yes" } else { "no" },
        input.child_count,
        input.margin_percent,
    )
}

/// Renders the full calculator page.
#[must_use]
pub fn render_page(
    settings: &CalculatorSettings,
    input: &ExpenseInput,
    evaluation: &Evaluation,
) -> String {
    let mut main = String::new();
    let summary = &evaluation.summary;
    for sentence in [&summary.minimum, &summary.converted, &summary.benchmark] {
        main.push_str(&format!("<p>{}</p>", render_sentence(sentence)));
    }
    main.push_str(&render_margin_slider(input));
    main.push_str(&format!("<p>{}</p><hr>", render_sentence(&summary.adjusted)));
    main.push_str("<h4>Living Expenses Breakdown</h4>");
    main.push_str(&render_table(&evaluation.table));
    main.push_str(&format!(
        "<p><a href=\"/api/v1/breakdown/export?{}\" download=\"{}\">Download as CSV</a></p><hr>",
        escape_html(&input_query(input)),
        escape_html(&settings.export_filename),
    ));
    main.push_str(&render_disclaimer());

    layout(settings, &render_sidebar(settings, input), &main)
}

/// Renders the page with an error message in place of the results.
#[must_use]
pub fn render_error_page(settings: &CalculatorSettings, message: &str) -> String {
    let main = format!(
        "<p class=\"error\">{}</p><p><a href=\"/\">Start over</a></p>",
        escape_html(message)
    );
    layout(settings, &render_sidebar(settings, &settings.defaults), &main)
}

fn layout(settings: &CalculatorSettings, sidebar: &str, main: &str) -> String {
    let title = escape_html(&settings.title);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body><aside>{sidebar}</aside><main><h3>{title}</h3>{main}</main></body></html>\n"
    )
}

fn render_sidebar(settings: &CalculatorSettings, input: &ExpenseInput) -> String {
    let mut html = String::from(
        "<h2>User Inputs</h2>\
         <form id=\"inputs\" method=\"get\" action=\"/\" onchange=\"this.requestSubmit()\">",
    );
    html.push_str(&format!(
        "<label>Enter Exchange Rate:<input type=\"number\" step=\"any\" name=\"exchange_rate\" value=\"{}\"></label>",
        format_rate(input.exchange_rate)
    ));
    html.push_str(&format!(
        "<label>Enter Number of Months:<input type=\"number\" step=\"1\" name=\"duration_months\" value=\"{}\"></label>",
        input.duration_months
    ));

    html.push_str("<label>Is your spouse travelling with you?<select name=\"spouse\">");
    for (value, label, selected) in [
        ("yes", "Yes", input.spouse_present),
        ("no", "No", !input.spouse_present),
    ] {
        html.push_str(&format!(
            "<option value=\"{value}\"{}>{label}</option>",
            selected_attr(selected)
        ));
    }
    html.push_str("</select></label>");

    html.push_str("<label>How many kids do you have?<select name=\"child_count\">");
    for count in child_count_options() {
        html.push_str(&format!(
            "<option value=\"{count}\"{}>{count}</option>",
            selected_attr(count == input.child_count)
        ));
    }
    html.push_str("</select></label>");
    html.push_str("<noscript><button type=\"submit\">Update</button></noscript></form>");

    let pair = settings.currencies;
    html.push_str(&format!(
        "<h2>Notes</h2>\
         <p>Current values taken from \
         <a href=\"https://www.migrationsverket.se/English/Private-individuals/Studying-in-Sweden/Higher-education/Residence-permit-for-studies-in-higher-education.html#family\">Migrationsverket</a>. \
         The current exchange rate ({} to {}) fluctuates around {}, so it's kept as the default. \
         You can change it with the rate of your relevant bank.</p>\
         <p>Based on calculations done through an Excel sheet shared by the \"SL Sweden Members\" group. \
         The group or Admins have no connection with this web app.</p>",
        pair.converted,
        pair.base,
        format_rate(settings.defaults.exchange_rate),
    ));
    html
}

fn render_margin_slider(input: &ExpenseInput) -> String {
    format!(
        "<label>Or change your expected extra % of bank balance: \
         <output>{value}</output><br><input form=\"inputs\" type=\"range\" name=\"margin_percent\" \
         min=\"{MARGIN_MIN}\" max=\"{MARGIN_MAX}\" step=\"{MARGIN_STEP}\" value=\"{value}\" \
         oninput=\"this.previousElementSibling.previousElementSibling.value=this.value\" \
         onchange=\"this.form.requestSubmit()\"></label>",
        value = input.margin_percent,
    )
}

fn render_sentence(sentence: &Sentence) -> String {
    sentence
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => escape_html(text),
            Segment::Emphasis(text) => format!("<b class=\"value\">{}</b>", escape_html(text)),
        })
        .collect()
}

fn render_table(table: &BreakdownTable) -> String {
    let mut html = String::from("<table><thead><tr>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str(&format!("<tr><td>{}</td>", escape_html(row.label)));
        for value in row.display_values() {
            html.push_str(&format!("<td class=\"num\">{value}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn render_disclaimer() -> String {
    "<p>This calculator provides a rough estimate of your living expenses. \
     Keep in mind that costs can fluctuate. We strongly recommend checking the official \
     websites for the latest information. Your privacy is important to us \u{2013} this tool \
     does not collect any personal data. (2025 - Jan)</p>"
        .to_string()
}

const fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}
