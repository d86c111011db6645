//! Custom widget components for the TUI

mod confirm_dialog;
mod details_panel;
mod header;
mod help_bar;
mod history_table;
mod result_view;
mod url_form;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState};
pub use details_panel::DetailsPanel;
pub use header::MainHeader;
pub use help_bar::HelpBar;
pub use history_table::HistoryTable;
pub use result_view::ResultView;
pub use url_form::UrlForm;
