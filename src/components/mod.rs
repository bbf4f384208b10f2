//! UI Components
//!
//! Reusable Leptos components.

mod catalog_browser;
mod filter_group;
mod filter_panel;
mod header;
mod item_card;
mod item_details;
mod item_results;
mod item_row;
mod search_bar;
mod theme_toggle;
mod view_mode_toggle;

pub use catalog_browser::CatalogBrowser;
pub use filter_group::FilterGroup;
pub use filter_panel::FilterPanel;
pub use header::Header;
pub use item_card::ItemCard;
pub use item_details::ItemDetails;
pub use item_results::ItemResults;
pub use item_row::ItemRow;
pub use search_bar::SearchBar;
pub use theme_toggle::ThemeToggle;
pub use view_mode_toggle::ViewModeToggle;
