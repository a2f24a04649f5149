pub mod chart;
pub mod compare;
pub mod details;
pub mod panels;
pub mod table;
pub mod widgets;
