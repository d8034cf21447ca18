// Pure state -> text rendering. Dispatches on the stage; never mutates the
// model, so the same snapshot always renders the same text.

use std::fmt::Write as _;

use crate::lang::{Label, Language};
use crate::ui::model::{Model, Source, Stage};
use crate::ui::style;

fn header() -> Label {
    Label::bilingual("Random Name Picker\n\n", "Selector de Nombres\n\n")
}

fn footer() -> Label {
    Label::bilingual("Press Esc to quit.\n", "Presiona Esc para salir.\n")
}

/// Plain-text rendering of the current state, before panel decoration.
pub fn render(m: &Model) -> String {
    // the language screen itself always shows in the default language
    let lang = match m.stage {
        Stage::SelectLanguage => Language::English,
        _ => m.display_language(),
    };

    let mut view = String::new();
    view.push_str(header().get(lang));

    if let Some(err) = &m.last_error {
        let _ = writeln!(view, "Error: {err}\n");
    }

    match m.stage {
        Stage::SelectLanguage => {
            let label = Label::bilingual("Select the language:\n", "Selecciona el idioma:\n");
            view.push_str(label.get(lang));
            for (i, l) in Language::ALL.iter().enumerate() {
                push_row(&mut view, m.cursor == i, false, l.code());
            }
        }
        Stage::SelectSource => {
            let label = Label::bilingual("Select the source:\n", "Selecciona la fuente:\n");
            view.push_str(label.get(lang));
            for (i, s) in Source::ALL.iter().enumerate() {
                push_row(&mut view, m.cursor == i, false, s.label());
            }
        }
        Stage::CaptureFilePath => {
            let label =
                Label::bilingual("Enter the file path:\n", "Ingresa la ruta del archivo:\n");
            view.push_str(label.get(lang));
            view.push('\n');
            let _ = writeln!(view, "{}", m.file_path.render());
        }
        Stage::CaptureManualNames => {
            let label = Label::bilingual(
                "Enter the names separated by commas:\n",
                "Ingresa los nombres separados por comas:\n",
            );
            view.push_str(label.get(lang));
            view.push('\n');
            let _ = writeln!(view, "{}", m.manual_names.render());
        }
        Stage::BrowseNames => {
            if m.names.is_empty() {
                let label =
                    Label::bilingual("No names available\n", "No hay nombres disponibles\n");
                view.push_str(label.get(lang));
            } else {
                for (i, name) in m.names.iter().enumerate() {
                    push_row(&mut view, m.cursor == i, m.selected.contains(&i), name);
                }
                let hint = Label::bilingual(
                    "\nPress 'r' to randomize the names\n",
                    "\nPresiona 'r' para mezclar los nombres\n",
                );
                view.push_str(hint.get(lang));
            }
        }
    }

    view.push_str(footer().get(lang));
    view
}

// Row format is load-bearing for golden-output tests: one space around the
// bracketed check marker.
fn push_row(view: &mut String, at_cursor: bool, checked: bool, text: &str) {
    let cursor = if at_cursor { ">" } else { " " };
    let check = if checked { "x" } else { " " };
    let _ = writeln!(view, "{cursor} [{check}] {text}");
}

/// Full view: the rendered text wrapped in the bordered panel.
pub fn view(m: &Model) -> String {
    style::panel(&render(m))
}
