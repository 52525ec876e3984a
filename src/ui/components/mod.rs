mod alert_list;
mod badge;
mod card;
mod data_grid;
mod date_filter;
mod header;
mod live_view_dialog;
mod search_bar;
mod sidebar;
mod stat_cards;
mod status_bar;
mod toasts;

pub use alert_list::{AlertList, AlertListEvent};
pub use badge::show_badge;
pub use card::card;
pub use data_grid::{DataGrid, DataGridEvent, GridRecord};
pub use date_filter::{date_heading, DateFilter, DateFilterEvent};
pub use header::{Header, HeaderEvent};
pub use live_view_dialog::{LiveView, LiveViewDialog, LiveViewEvent};
pub use search_bar::{CategoryPicker, SearchBar, SearchBarEvent};
pub use sidebar::{Sidebar, SidebarEvent};
pub use stat_cards::StatCards;
pub use status_bar::StatusBar;
pub use toasts::ToastStack;
