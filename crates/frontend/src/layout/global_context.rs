//! Глобальное UI-состояние приложения
//!
//! Содержит:
//! - `AppGlobalContext` - эфемерное состояние хрома (меню, загрузка,
//!   переход между страницами, режим курсора)
//! - `CursorState` - режимы кастомного курсора
//!
//! Стор передаётся через Leptos context явно; компоненты получают его
//! через `use_context`, а не через скрытые глобалы.

use leptos::prelude::*;

/// Режим кастомного курсора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorState {
    #[default]
    Default,
    Hover,
    View,
}

impl CursorState {
    /// Суффикс CSS-модификатора курсора
    pub fn code(&self) -> &'static str {
        match self {
            CursorState::Default => "default",
            CursorState::Hover => "hover",
            CursorState::View => "view",
        }
    }
}

/// Глобальный стор хрома. Copy-структура из сигналов, как и остальные
/// сторы приложения: дёшево передаётся в замыкания целиком.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub menu_open: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub transitioning: RwSignal<bool>,
    pub cursor: RwSignal<CursorState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            // сайт стартует под экраном загрузки
            loading: RwSignal::new(true),
            transitioning: RwSignal::new(false),
            cursor: RwSignal::new(CursorState::Default),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
        leptos::logging::log!(
            "🍔 menu {}",
            if self.menu_open.get_untracked() { "opened" } else { "closed" }
        );
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    pub fn set_transitioning(&self, transitioning: bool) {
        self.transitioning.set(transitioning);
    }

    pub fn set_cursor(&self, state: CursorState) {
        self.cursor.set(state);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_state_codes() {
        assert_eq!(CursorState::Default.code(), "default");
        assert_eq!(CursorState::Hover.code(), "hover");
        assert_eq!(CursorState::View.code(), "view");
    }
}
