//! HTML rendering for the goal listing page

use crate::tracker::GoalOverview;
use url::form_urlencoded::byte_serialize;

/// Location of the index page, keeping the selected category if there is one
pub fn index_location(category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(c) => format!("/?category={}", encode_query(c)),
        None => "/".to_string(),
    }
}

fn encode_query(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

pub fn escape_html(text: &str) -> String {
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

const PAGE_HEAD: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>Life Goals</title>
</head>
<body>
<h1>Life Goals</h1>
";

/// Render the index page for `overview`
pub fn render_index(overview: &GoalOverview) -> String {
    let mut html = String::from(PAGE_HEAD);

    if !overview.categories.is_empty() {
        html.push_str("<nav>\n");
        for cat in &overview.categories {
            let class = if overview.selected_category.as_ref() == Some(cat) {
                " class=\"selected\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<a href=\"{}\"{}>{}</a>\n",
                escape_html(&index_location(Some(cat))),
                class,
                escape_html(cat)
            ));
        }
        html.push_str("</nav>\n");
    }

    if overview.goals.is_empty() {
        html.push_str("<p>No goals yet.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for goal in &overview.goals {
            render_goal(&mut html, overview, goal);
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_goal(html: &mut String, overview: &GoalOverview, goal: &str) {
    let meta = overview.metadata_for(goal);
    let completed = meta.is_some_and(|m| m.completed);

    if completed {
        html.push_str("<li class=\"completed\">\n");
    } else {
        html.push_str("<li>\n");
    }
    html.push_str("<form method=\"post\" action=\"/complete\">\n");
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"goal\" value=\"{}\">\n",
        escape_html(goal)
    ));
    if let Some(cat) = &overview.selected_category {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"category\" value=\"{}\">\n",
            escape_html(cat)
        ));
    }
    html.push_str(&format!(
        "<button type=\"submit\">{}</button>\n{}\n",
        if completed { "&#10003;" } else { "&#9744;" },
        escape_html(goal)
    ));

    if let Some(m) = meta.filter(|m| m.completed) {
        html.push_str(&format!(
            "<small>completed {} {} (UTC{})</small>\n",
            escape_html(m.date.as_deref().unwrap_or_default()),
            escape_html(m.time.as_deref().unwrap_or_default()),
            escape_html(m.timezone.as_deref().unwrap_or_default())
        ));
    }
    html.push_str("</form>\n</li>\n");
}
