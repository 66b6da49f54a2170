use maud::{html, Markup};

/// Split on `**` pairs into (bold, text) runs. An unmatched `**` stays literal.
fn emphasis_runs(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        runs.push((false, &rest[..start]));
        runs.push((true, &after[..end]));
        rest = &after[end + 2..];
    }
    runs.push((false, rest));
    runs.retain(|(_, run)| !run.is_empty());
    runs
}

/// Text with `**text**` runs as `<strong>`; everything else is escaped by maud.
pub fn inline_markup(text: &str) -> Markup {
    html! {
        @for (bold, run) in emphasis_runs(text) {
            @if bold {
                strong { (run) }
            } @else {
                (run)
            }
        }
    }
}

/// `<ul>` of points in order. Empty input renders nothing.
pub fn bullet_list(class: &str, points: &[String]) -> Markup {
    html! {
        @if !points.is_empty() {
            ul class=(class) {
                @for point in points {
                    li { (point) }
                }
            }
        }
    }
}
