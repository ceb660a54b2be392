use itertools::Itertools;

pub const DOCUMENT_NAME: &str = "index.html";

const DEFAULT_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

pub fn render_document<'a>(
    template: Option<&str>,
    public_path: &str,
    scripts: impl IntoIterator<Item = &'a str>,
) -> String {
    let template = template.unwrap_or(DEFAULT_DOCUMENT);
    let tags = scripts
        .into_iter()
        .map(|script| format!("<script defer src=\"{public_path}{script}\"></script>\n"))
        .join("");
    let lowercase = template.to_ascii_lowercase();

    match ["</head>", "</body>"]
        .into_iter()
        .find_map(|tag| lowercase.find(tag))
    {
        Some(position) => format!("{}{}{}", &template[..position], tags, &template[position..]),
        None => format!("{template}{tags}"),
    }
}
