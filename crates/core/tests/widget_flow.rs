use html_drop::prelude::*;

/// In-memory stand-in for the four page elements.
#[derive(Debug, Default)]
struct FakePage {
    button_enabled: bool,
    status_markup: String,
    input_files: Vec<FileCandidate>,
    zone: Option<ZonePaint>,
    alerts: Vec<String>,
}

impl FakePage {
    fn pick(&mut self, files: &[FileCandidate]) {
        self.input_files = files.to_vec();
    }
}

impl WidgetSurface for FakePage {
    type Files = Vec<FileCandidate>;

    fn set_upload_enabled(&mut self, enabled: bool) {
        self.button_enabled = enabled;
    }

    fn show_status(&mut self, status: &StatusText) {
        self.status_markup = status.to_markup();
    }

    fn clear_selection(&mut self) {
        self.input_files.clear();
    }

    fn notify_rejected(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn paint_drop_zone(&mut self, paint: &ZonePaint) {
        self.zone = Some(paint.clone());
    }

    fn mirror_files(&mut self, files: &Vec<FileCandidate>) {
        self.input_files = files.clone();
    }
}

fn widget() -> UploadWidget<FakePage> {
    UploadWidget::new(FakePage::default(), WidgetConfig::default())
}

/// Simulate the chooser: the input holds the files, then `change` fires.
fn browse(w: &mut UploadWidget<FakePage>, files: &[FileCandidate]) -> SelectionOutcome {
    w.surface_mut().pick(files);
    let picked = w.surface().input_files.clone();
    w.handle_selection(&picked)
}

fn file(name: &str, mime: &str) -> FileCandidate {
    FileCandidate::new(name, mime)
}

const PROMPT: &str = "Drop Assigned Computer Name here<br><small>or click to browse</small>";

#[test]
fn starts_disabled_with_prompt() {
    let w = widget();
    assert!(!w.surface().button_enabled);
    assert_eq!(w.surface().status_markup, PROMPT);
    assert_eq!(w.selection(), &SelectionState::Empty);
}

#[test]
fn selecting_same_valid_file_twice_is_idempotent() {
    let mut once = widget();
    browse(&mut once, &[file("asset.html", "text/html")]);

    let mut twice = widget();
    browse(&mut twice, &[file("asset.html", "text/html")]);
    browse(&mut twice, &[file("asset.html", "text/html")]);

    assert_eq!(once.selection(), twice.selection());
    assert_eq!(once.surface().button_enabled, twice.surface().button_enabled);
    assert_eq!(once.surface().status_markup, twice.surface().status_markup);
    assert_eq!(once.surface().input_files, twice.surface().input_files);
}

#[test]
fn extension_or_mime_is_enough() {
    let mut w = widget();
    assert_eq!(browse(&mut w, &[file("report.HTML", "")]), SelectionOutcome::Accepted);
    assert!(w.surface().button_enabled);
    assert!(w.selection().is_selected());

    let mut w = widget();
    assert_eq!(browse(&mut w, &[file("export.dat", "text/html")]), SelectionOutcome::Accepted);
    assert!(w.surface().button_enabled);
    assert!(w.surface().alerts.is_empty());
}

#[test]
fn rejection_resets_a_previous_valid_selection() {
    let mut w = widget();
    browse(&mut w, &[file("asset.html", "text/html")]);
    assert!(w.surface().button_enabled);

    assert_eq!(
        browse(&mut w, &[file("notes.pdf", "application/pdf")]),
        SelectionOutcome::Rejected
    );
    assert!(!w.surface().button_enabled);
    assert_eq!(w.surface().status_markup, PROMPT);
    assert!(w.surface().input_files.is_empty());
    assert_eq!(
        w.surface().alerts,
        ["Please upload a valid HTML file (.html or .htm)."]
    );
    assert_eq!(w.selection(), &SelectionState::Empty);
}

#[test]
fn empty_list_leaves_state_untouched() {
    let mut w = widget();
    browse(&mut w, &[file("asset.html", "text/html")]);
    let before = w.surface().status_markup.clone();

    assert_eq!(w.handle_selection(&Vec::new()), SelectionOutcome::Ignored);
    assert!(w.surface().button_enabled);
    assert_eq!(w.surface().status_markup, before);
    assert_eq!(w.selection().file_name(), Some("asset.html"));
    assert!(w.surface().alerts.is_empty());
}

#[test]
fn drop_ends_in_same_state_as_browse() {
    let mut browsed = widget();
    browse(&mut browsed, &[file("page.htm", "text/html")]);

    let mut dropped = widget();
    dropped.on_drag(DragPhase::Enter);
    dropped.on_drag(DragPhase::Over);
    assert_eq!(dropped.drag(), DragState::Hovering);
    let outcome = dropped.on_drop(Some(&vec![file("page.htm", "text/html")]));

    assert_eq!(outcome, SelectionOutcome::Accepted);
    assert_eq!(dropped.drag(), DragState::Neutral);
    assert_eq!(dropped.surface().zone, Some(WidgetConfig::default().neutral_paint()));
    assert_eq!(dropped.selection(), browsed.selection());
    assert_eq!(dropped.surface().button_enabled, browsed.surface().button_enabled);
    assert_eq!(dropped.surface().status_markup, browsed.surface().status_markup);
    assert!(dropped.surface().status_markup.contains("<strong>page.htm</strong>"));
    assert_eq!(dropped.surface().input_files, [file("page.htm", "text/html")]);
}

#[test]
fn drop_without_files_keeps_previous_selection() {
    let mut w = widget();
    w.on_drop(Some(&vec![file("page.htm", "text/html")]));
    let before = w.surface().status_markup.clone();

    w.on_drag(DragPhase::Enter);
    assert_eq!(w.on_drop(Some(&Vec::new())), SelectionOutcome::Ignored);

    assert_eq!(w.surface().input_files, [file("page.htm", "text/html")]);
    assert!(w.surface().button_enabled);
    assert_eq!(w.surface().status_markup, before);
    assert_eq!(w.selection().file_name(), Some("page.htm"));
    assert_eq!(w.drag(), DragState::Neutral);
    assert!(w.surface().alerts.is_empty());
}

#[test]
fn rejected_drop_clears_the_mirrored_input() {
    let mut w = widget();
    let outcome = w.on_drop(Some(&vec![file("photo.png", "image/png")]));
    assert_eq!(outcome, SelectionOutcome::Rejected);
    assert!(w.surface().input_files.is_empty());
    assert_eq!(w.surface().alerts.len(), 1);
}

#[test]
fn uppercase_extension_is_accepted() {
    let mut w = widget();
    assert_eq!(browse(&mut w, &[file("INDEX.HTM", "")]), SelectionOutcome::Accepted);
    assert_eq!(w.selection().file_name(), Some("INDEX.HTM"));
}

#[test]
fn extensionless_name_depends_on_mime() {
    let mut w = widget();
    assert_eq!(browse(&mut w, &[file("README", "")]), SelectionOutcome::Rejected);
    assert_eq!(browse(&mut w, &[file("README", "text/html")]), SelectionOutcome::Accepted);
}

#[test]
fn only_the_first_file_counts() {
    let mut w = widget();
    assert_eq!(
        browse(&mut w, &[file("a.html", ""), file("b.pdf", "")]),
        SelectionOutcome::Accepted
    );
    assert_eq!(w.selection().file_name(), Some("a.html"));

    let mut w = widget();
    assert_eq!(
        browse(&mut w, &[file("b.pdf", ""), file("a.html", "")]),
        SelectionOutcome::Rejected
    );
}

#[test]
fn leaving_the_zone_restores_neutral_paint() {
    let cfg = WidgetConfig::default();
    let mut w = widget();
    w.on_drag(DragPhase::Enter);
    assert_eq!(w.surface().zone, Some(cfg.hover_paint()));
    w.on_drag(DragPhase::Leave);
    assert_eq!(w.surface().zone, Some(cfg.neutral_paint()));
    assert_eq!(w.selection(), &SelectionState::Empty);
}

#[test]
fn crafted_file_name_is_escaped_in_status() {
    let mut w = widget();
    browse(&mut w, &[file("<b>x</b>.html", "")]);
    assert!(w
        .surface()
        .status_markup
        .starts_with("<strong>&lt;b&gt;x&lt;/b&gt;.html</strong> selected"));
}

#[test]
fn custom_config_drives_texts_and_policy() {
    let cfg = WidgetConfig::from_json(
        r#"{
            "accepted_mime_types": [],
            "accepted_extensions": ["xhtml"],
            "rejection_notice": "XHTML only.",
            "ready_hint": "Ready"
        }"#,
    )
    .unwrap();
    let mut w = UploadWidget::new(FakePage::default(), cfg);

    assert_eq!(browse(&mut w, &[file("page.html", "text/html")]), SelectionOutcome::Rejected);
    assert_eq!(w.surface().alerts, ["XHTML only."]);

    assert_eq!(browse(&mut w, &[file("page.xhtml", "")]), SelectionOutcome::Accepted);
    assert!(w.surface().status_markup.ends_with("<small>Ready</small>"));
}
