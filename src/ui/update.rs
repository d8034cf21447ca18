use std::collections::BTreeSet;

use crate::lang::Language;
use crate::names;
use crate::ui::model::{Model, Source, Stage};
use crate::ui::Msg;

/// Pure transition function: consumes the previous snapshot and returns the
/// next one. No event ever panics or escapes as an error; recoverable
/// failures land in `last_error`.
pub fn handle_update(mut m: Model, msg: Msg) -> Model {
    match msg {
        Msg::KeyUp => handle_key_up(&mut m),
        Msg::KeyDown => handle_key_down(&mut m),
        Msg::KeyEnter => handle_key_enter(&mut m),
        Msg::KeyBackspace => handle_key_backspace(&mut m),
        Msg::Rune(r) => handle_rune(&mut m, r),
    }
    m
}

fn handle_key_up(m: &mut Model) {
    m.cursor = m.cursor.saturating_sub(1);
}

fn handle_key_down(m: &mut Model) {
    if m.cursor + 1 < m.candidate_len() {
        m.cursor += 1;
    }
}

fn handle_key_backspace(m: &mut Model) {
    if m.file_path.is_focused() {
        m.file_path.delete_back();
    } else if m.manual_names.is_focused() {
        m.manual_names.delete_back();
    }
}

fn handle_rune(m: &mut Model, r: char) {
    if m.file_path.is_focused() {
        m.file_path.append_char(r);
        return;
    }
    if m.manual_names.is_focused() {
        m.manual_names.append_char(r);
        return;
    }
    match r {
        'k' => handle_key_up(m),
        'j' => handle_key_down(m),
        'r' if m.stage == Stage::BrowseNames => shuffle_names(m),
        _ => {}
    }
}

fn handle_key_enter(m: &mut Model) {
    match m.stage {
        Stage::SelectLanguage => confirm_language(m),
        Stage::SelectSource => confirm_source(m),
        Stage::CaptureFilePath => confirm_file_path(m),
        Stage::CaptureManualNames => confirm_manual_names(m),
        Stage::BrowseNames => toggle_selected(m),
    }
}

fn confirm_language(m: &mut Model) {
    m.language = Some(Language::ALL[m.cursor]);
    m.cursor = 0;
    m.stage = Stage::SelectSource;
}

fn confirm_source(m: &mut Model) {
    let source = Source::ALL[m.cursor];
    m.source = Some(source);
    m.cursor = 0;
    match source {
        Source::Random => {
            let fresh = names::shuffled_seed(&mut m.rng);
            replace_names(m, fresh);
            m.stage = Stage::BrowseNames;
        }
        Source::File => {
            m.file_path.focus();
            m.stage = Stage::CaptureFilePath;
        }
        Source::Manual => {
            m.manual_names.focus();
            m.stage = Stage::CaptureManualNames;
        }
    }
}

fn confirm_file_path(m: &mut Model) {
    match names::read_names_from_file(m.file_path.value().trim()) {
        Ok(list) => {
            m.file_path.blur();
            m.last_error = None;
            replace_names(m, list);
            m.stage = Stage::BrowseNames;
        }
        Err(err) => {
            // stay in the capture stage with the typed path intact so the
            // user can fix it and retry
            m.last_error = Some(err.to_string());
        }
    }
}

fn confirm_manual_names(m: &mut Model) {
    let list = names::split_and_trim(m.manual_names.value(), ',');
    m.manual_names.blur();
    m.last_error = None;
    replace_names(m, list);
    m.stage = Stage::BrowseNames;
}

fn toggle_selected(m: &mut Model) {
    if m.names.is_empty() {
        return;
    }
    if !m.selected.remove(&m.cursor) {
        m.selected.insert(m.cursor);
    }
}

// Wholesale replacement invalidates every index into the old list.
fn replace_names(m: &mut Model, list: Vec<String>) {
    m.names = list;
    m.selected.clear();
    m.cursor = 0;
}

fn shuffle_names(m: &mut Model) {
    let checked: Vec<String> = m
        .selected
        .iter()
        .filter_map(|&i| m.names.get(i).cloned())
        .collect();
    names::shuffle(&mut m.rng, &mut m.names);
    m.selected = remap_selection(&m.names, checked);
    if m.cursor >= m.names.len() {
        m.cursor = m.names.len().saturating_sub(1);
    }
}

// Selection follows name values across a reorder. Duplicated names are
// treated as a multiset: each checked occurrence claims one position.
fn remap_selection(names: &[String], mut checked: Vec<String>) -> BTreeSet<usize> {
    let mut selected = BTreeSet::new();
    for (i, name) in names.iter().enumerate() {
        if let Some(pos) = checked.iter().position(|c| c == name) {
            checked.swap_remove(pos);
            selected.insert(i);
        }
    }
    selected
}
