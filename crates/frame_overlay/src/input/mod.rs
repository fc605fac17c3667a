//! Input utilities shared by the widget layer

pub mod collision;
