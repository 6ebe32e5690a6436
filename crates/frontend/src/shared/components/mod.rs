pub mod chart_image;
pub mod period_form;
