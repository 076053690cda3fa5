use std::time::Instant;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::coin::Press;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent, now: Instant) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, now),
        AppEvent::Tick => handle_tick(state, now),
    }
}

fn handle_tick(state: &mut AppState, now: Instant) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.coin.tick(now) {
        state.dirty = true;
    }
    // fun mode cycles colours every frame
    if state.props.fun_mode && state.props.can_click {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse, now),
        CEvent::FocusLost => {
            // a press cut short by losing focus counts as a release
            state.coin.release();
            state.dirty = true;
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Action::Quit],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let at = state.metrics.cell_center(mouse.column, mouse.row);
            match state.coin.press(&state.props, at, now) {
                Press::Tapped { entry } => {
                    tracing::trace!(?entry, column = mouse.column, row = mouse.row, "tap");
                    state.dirty = true;
                    vec![Action::Click]
                }
                Press::Missed => vec![],
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if !state.coin.tilt().is_neutral() {
                state.coin.release();
                state.dirty = true;
            }
            vec![]
        }
        _ => vec![],
    }
}
