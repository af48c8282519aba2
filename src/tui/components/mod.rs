// Reusable UI components shared by the views

pub mod status_bar;
pub mod toast;
