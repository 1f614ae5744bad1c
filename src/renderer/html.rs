//! HTML index page listing every generated banner

/// Build the `index.html` document embedding each banner by file name
///
/// `entries` are the names of successfully rendered banners, in run order.
pub fn render_index(entries: &[String]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>Generated banners</title>\n  <style>\n    body { font-family: sans-serif; margin: 2em; }\n    img { max-width: 100%; border: 1px solid #ddd; }\n    section { margin-bottom: 2em; }\n  </style>\n</head>\n<body>\n  <h1>Generated banners</h1>\n",
    );

    for name in entries {
        html.push_str(&format!(
            "  <section>\n    <h2>{name}</h2>\n    <a href=\"{name}.svg\"><img src=\"{name}.svg\" alt=\"{name}\"></a>\n  </section>\n",
            name = escape_html(name)
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
