pub mod absence_form;
pub mod analysis;
pub mod records_table;
pub mod roster;
pub mod summary_panel;
