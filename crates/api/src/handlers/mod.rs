pub mod admin_ajax;
pub mod catalog;
