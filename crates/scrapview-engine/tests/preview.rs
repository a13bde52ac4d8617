use pretty_assertions::assert_eq;
use scrapview_engine::{HtmlRenderer, PageMeta, parse_line, render_page};

fn meta() -> PageMeta {
    PageMeta {
        title: "Notes".to_string(),
        project: "proj".to_string(),
    }
}

/// Plain lines survive the pipeline unchanged.
#[test]
fn plain_text_round_trips() {
    let page = "first line\nsecond line";
    assert_eq!(
        render_page(&meta(), page),
        vec!["first line".to_string(), "second line".to_string()]
    );
}

#[test]
fn code_block_lifecycle_across_lines() {
    let page = "code:example.sh\n  echo hi\n  echo bye\ndone";
    let fragments = render_page(&meta(), page);
    assert_eq!(fragments.len(), 4);

    assert!(fragments[0].contains("<span class=\"popup-code-block\">"));
    assert!(fragments[0].contains("/api/code/proj/Notes/example.sh"));
    assert!(fragments[0].ends_with("<span class=\"popup-code\">"));

    // Body lines stay inside the block, no closing markup yet.
    assert!(!fragments[1].contains("</span></span>"));
    assert!(!fragments[2].contains("</span></span>"));

    // The dedented line closes the block after its own text.
    assert_eq!(fragments[3], "done</span></span>");
}

#[test]
fn code_block_close_is_deferred_past_blank_lines() {
    let page = "code:f.txt\n  body\n\ntext";
    let fragments = render_page(&meta(), page);
    // The blank line dedents and ends the block, but the closing markup
    // waits for the next text render.
    assert_eq!(fragments[2], "<br />");
    assert_eq!(fragments[3], "text</span></span>");
}

#[test]
fn char_indices_are_monotonic_across_lines() {
    let page = "`ab`\n> cd\n#ef";
    let fragments = render_page(&meta(), page);
    let all = fragments.join("\n");
    for i in 0..6 {
        assert!(all.contains(&format!("class=\"c-{i}\"")), "missing c-{i}");
    }
    assert!(!all.contains("class=\"c-6\""));
}

#[test]
fn shell_lines_do_not_advance_the_page_counter() {
    let page = "$ ls\n`x`";
    let fragments = render_page(&meta(), page);
    // The shell tag used its own local c-0..c-3; the back quote on the next
    // line still starts the page stream at zero.
    assert!(fragments[1].contains("<span class=\"c-0\">x</span>"));
}

#[test]
fn parse_failures_skip_the_line_only() {
    let page = "ok\n]broken\nstill ok";
    let fragments = render_page(&meta(), page);
    assert_eq!(fragments, vec!["ok".to_string(), "still ok".to_string()]);
}

#[test]
fn icon_reference_expands_end_to_end() {
    let fragments = render_page(&meta(), "[smile.icon*2]");
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].matches("<img class=\"popup-tiny-icon\"").count(), 2);
    assert!(fragments[0].contains("https://scrapbox.io/api/pages/proj/smile/icon"));
}

#[test]
fn mixed_line_renders_each_node_in_order() {
    let fragments = render_page(&meta(), "see [Page] and [* note]");
    assert_eq!(fragments.len(), 1);
    let html = &fragments[0];
    let link_at = html.find("page-link").unwrap();
    let bold_at = html.find("<b>").unwrap();
    assert!(html.starts_with("see "));
    assert!(link_at < bold_at);
}

#[test]
fn fresh_renderer_per_page() {
    let m = meta();
    let first = render_page(&m, "`a`");
    let second = render_page(&m, "`a`");
    // Indices restart: pages never share state.
    assert_eq!(first, second);
}

#[test]
fn renderer_state_is_inspectable() {
    let m = meta();
    let mut renderer = HtmlRenderer::new(&m);
    renderer.render_line(&parse_line("code:x").unwrap());
    assert!(renderer.state().in_code_block);
    assert_eq!(renderer.state().active_project, "proj");
}
