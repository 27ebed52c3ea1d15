pub mod assembly;
pub mod selection;
pub mod settings;

pub use assembly::{format_position, format_price, price_in_thousands, unit_display_name, AssemblyState};
pub use selection::{Selection, SelectionState};
pub use settings::{AppSettings, ExportSettings, PanelSettings, ViewportSettings};
