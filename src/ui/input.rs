use crate::ui::app::{App, Focus};
use crate::ui::chat_panel::ChatPanelIntent;
use crate::ui::import_dialog::ImportIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Alerts are modal
    if app.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    if app.import_dialog().is_visible() {
        handle_import_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = key.code {
            handle_shortcut(app, ch.to_ascii_lowercase());
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Esc if app.chat_panel().is_open() => {
            app.dispatch_chat_panel(ChatPanelIntent::Close);
        }
        _ => handle_edit_key(app, key),
    }
}

fn handle_shortcut(app: &mut App, ch: char) {
    match ch {
        'r' => {
            app.process();
        }
        'e' => app.toggle_mode(),
        't' => app.cycle_tone(true),
        'y' => {
            app.copy();
        }
        's' => {
            app.export();
        }
        'o' => app.open_import_dialog(),
        'l' => app.clear_input(),
        'g' => app.dispatch_chat_panel(ChatPanelIntent::Toggle),
        'n' => app.dispatch_chat_panel(ChatPanelIntent::ToggleMinimized),
        _ => {}
    }
}

fn handle_import_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_import(ImportIntent::Close),
        KeyCode::Enter => {
            app.submit_import();
        }
        KeyCode::Backspace => app.dispatch_import(ImportIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_import(ImportIntent::Input(ch.to_string()));
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let focus = app.focus();

    if focus == Focus::Chat
        && key.code == KeyCode::Enter
        && !key.modifiers.contains(KeyModifiers::ALT)
    {
        app.send_chat();
        return;
    }

    let buffer = app.focused_buffer_mut();
    match key.code {
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Up => buffer.move_up(),
        KeyCode::Down => buffer.move_down(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        KeyCode::Enter => buffer.insert_char('\n'),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Char(ch) => buffer.insert_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
