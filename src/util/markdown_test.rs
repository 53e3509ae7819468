use super::*;

#[test]
fn headings_and_emphasis_render() {
    let out = render_markdown_html("# Title\n\n**bold** and *italic*");
    assert!(out.contains("<h1>Title</h1>"));
    assert!(out.contains("<strong>bold</strong>"));
    assert!(out.contains("<em>italic</em>"));
}

#[test]
fn fenced_code_keeps_language_class() {
    let out = render_markdown_html("```rust\nfn main() {}\n```");
    assert!(out.contains("<code class=\"language-rust\">"));
}

#[test]
fn raw_html_is_dropped() {
    let out = render_markdown_html("hello <script>alert(1)</script>");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hello"));
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_markdown_html("").is_empty());
}

#[test]
fn script_links_lose_their_target() {
    let out = render_markdown_html("[x](javascript:alert(1))");
    assert!(!out.contains("javascript:"), "{out}");
    assert!(out.contains("<a href=\"\">x</a>"), "{out}");
}

#[test]
fn script_scheme_is_matched_case_insensitively() {
    let out = render_markdown_html("[x](JavaScript:alert(1)) ![i](data:text/html;base64,AAAA)");
    assert!(!out.to_ascii_lowercase().contains("javascript:"), "{out}");
    assert!(!out.contains("data:"), "{out}");
}

#[test]
fn web_mail_and_relative_links_are_kept() {
    let out = render_markdown_html(
        "[a](https://example.com/x) [b](http://example.com) [c](mailto:me@x.io) [d](/blog/2) [e](#top) ![f](img/a.png)",
    );
    assert!(out.contains("href=\"https://example.com/x\""), "{out}");
    assert!(out.contains("href=\"http://example.com\""), "{out}");
    assert!(out.contains("href=\"mailto:me@x.io\""), "{out}");
    assert!(out.contains("href=\"/blog/2\""), "{out}");
    assert!(out.contains("href=\"#top\""), "{out}");
    assert!(out.contains("src=\"img/a.png\""), "{out}");
}

#[test]
fn autolinks_with_script_scheme_are_emptied() {
    let out = render_markdown_html("<javascript:alert(1)>");
    assert!(!out.contains("href=\"javascript:"), "{out}");
}
