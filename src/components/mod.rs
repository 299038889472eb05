//! UI Components
//!
//! Reusable Leptos components.

mod form_state;
mod icon_select;
mod habit_menu;
mod habit_header;
mod day_list;
mod add_day_form;
mod add_habit_popup;
mod save_error_banner;

pub use form_state::FormState;
pub use icon_select::IconSelect;
pub use habit_menu::HabitMenu;
pub use habit_header::HabitHeader;
pub use day_list::DayList;
pub use add_day_form::AddDayForm;
pub use add_habit_popup::AddHabitPopup;
pub use save_error_banner::SaveErrorBanner;
