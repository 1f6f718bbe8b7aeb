/// Presenter contract tests: document assembly and display hand-off.
///
/// Covers instance-id scoping, style/script composition, title escaping,
/// option plumbing, and the single-call DisplayChannel contract with wrapped
/// errors.
use jsonview_core::{
    display_json, render_document, render_html, DisplayChannel, RenderOptions, ViewerError,
    ViewerInstanceId,
};
use serde_json::json;

/// Test channel capturing every payload it is handed.
#[derive(Default)]
struct CapturingChannel {
    payloads: Vec<String>,
}

impl DisplayChannel for CapturingChannel {
    fn display(
        &mut self,
        markup: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.payloads.push(markup.to_string());
        Ok(())
    }
}

/// Test channel that always rejects the payload.
struct RejectingChannel;

impl DisplayChannel for RejectingChannel {
    fn display(
        &mut self,
        _markup: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("kernel gone".into())
    }
}

/// Extract the root element id (`json-viewer-<hex>`) from a document.
fn root_id(html: &str) -> &str {
    let start = html.find(r#"<div id=""#).expect("document has a root div") + 9;
    let end = html[start..].find('"').unwrap() + start;
    &html[start..end]
}

// ============================================================================
// Document composition
// ============================================================================

#[test]
fn document_contains_style_script_and_viewer() {
    let html = render_document(&json!({"k": 1}), &RenderOptions::default());
    assert!(html.contains("<style>"));
    assert!(html.contains("<script>"));
    assert!(html.contains(r#"<div class="json-viewer">"#));
}

#[test]
fn script_comes_after_viewer_markup() {
    // The delegated listener looks up the instance root when it runs, so in
    // document-order hosts (srcdoc iframes, saved files) the root element
    // must precede the script block or toggling never gets wired.
    let html = render_document(&json!({"k": 1}), &RenderOptions::default());
    let style = html.find("<style>").unwrap();
    let root = html.find(r#"<div id="json-viewer-"#).unwrap();
    let script = html.find("<script>").unwrap();
    assert!(style < root, "style block precedes the viewer markup");
    assert!(root < script, "script block follows the viewer markup");
}

#[test]
fn document_wraps_exactly_one_root() {
    let html = render_document(&json!(42), &RenderOptions::default());
    assert_eq!(html.matches(r#"<div id="json-viewer-"#).count(), 1);
}

#[test]
fn css_selectors_are_instance_scoped() {
    let html = render_document(&json!({"k": 1}), &RenderOptions::default());
    let id = root_id(&html);
    assert!(html.contains(&format!("#{id} .json-viewer")));
    assert!(html.contains(&format!("#{id} .collapsible")));
    // No unscoped class rule leaks out of the instance.
    assert!(!html.contains("\n.json-viewer"));
}

#[test]
fn script_targets_instance_root() {
    let html = render_document(&json!({"k": 1}), &RenderOptions::default());
    let id = root_id(&html);
    assert!(html.contains(&format!(r#"getElementById("{id}")"#)));
}

#[test]
fn indent_size_flows_into_css() {
    let options = RenderOptions {
        indent_size: 32,
        ..Default::default()
    };
    let html = render_document(&json!({"k": 1}), &options);
    assert!(html.contains("padding-left: 32px"));
}

#[test]
fn dark_mode_selects_dark_palette() {
    let light = render_document(&json!({"k": 1}), &RenderOptions::default());
    assert!(light.contains("#f8f9fa"));

    let options = RenderOptions {
        dark_mode: true,
        ..Default::default()
    };
    let dark = render_document(&json!({"k": 1}), &options);
    assert!(dark.contains("#1e1e1e"));
    assert!(!dark.contains("#f8f9fa"));
}

// ============================================================================
// Title
// ============================================================================

#[test]
fn title_rendered_when_present() {
    let options = RenderOptions {
        title: Some("My Data".to_string()),
        ..Default::default()
    };
    let html = render_document(&json!({"k": 1}), &options);
    assert!(html.contains(r#"<div class="json-title">My Data</div>"#));
}

#[test]
fn title_absent_by_default() {
    let html = render_document(&json!({"k": 1}), &RenderOptions::default());
    assert!(!html.contains("json-title\">"));
}

#[test]
fn title_is_escaped() {
    let options = RenderOptions {
        title: Some("<b>bold</b> & more".to_string()),
        ..Default::default()
    };
    let html = render_document(&json!({"k": 1}), &options);
    assert!(!html.contains("<b>bold</b>"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
}

// ============================================================================
// Instance isolation
// ============================================================================

#[test]
fn sequential_renders_get_distinct_ids() {
    let a = render_document(&json!({"k": 1}), &RenderOptions::default());
    let b = render_document(&json!({"k": 1}), &RenderOptions::default());
    assert_ne!(root_id(&a), root_id(&b));
}

#[test]
fn minted_ids_are_unique() {
    let a = ViewerInstanceId::mint();
    let b = ViewerInstanceId::mint();
    assert_ne!(a, b);
    assert_ne!(a.root_id(), b.root_id());
}

// ============================================================================
// render_html — string-in surface
// ============================================================================

#[test]
fn render_html_parses_and_renders() {
    let html = render_html(r#"{"name":"Alice"}"#, &RenderOptions::default()).unwrap();
    assert!(html.contains(r#"<span class="json-key">"name"</span>"#));
}

#[test]
fn render_html_rejects_invalid_json() {
    let err = render_html("{not json", &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ViewerError::JsonParse(_)));
}

// ============================================================================
// Display hand-off
// ============================================================================

#[test]
fn display_makes_exactly_one_call() {
    let mut channel = CapturingChannel::default();
    display_json(r#"{"k":1}"#, &RenderOptions::default(), &mut channel).unwrap();
    assert_eq!(channel.payloads.len(), 1);
    assert!(channel.payloads[0].contains("json-viewer"));
}

#[test]
fn display_failure_is_wrapped_with_cause() {
    let err = display_json(r#"{"k":1}"#, &RenderOptions::default(), &mut RejectingChannel)
        .unwrap_err();
    match &err {
        ViewerError::Display { source } => {
            assert!(source.to_string().contains("kernel gone"));
        }
        other => panic!("expected Display error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("rendering failed"));
}

#[test]
fn invalid_json_never_reaches_channel() {
    let mut channel = CapturingChannel::default();
    let err = display_json("nope{", &RenderOptions::default(), &mut channel).unwrap_err();
    assert!(matches!(err, ViewerError::JsonParse(_)));
    assert!(channel.payloads.is_empty());
}
