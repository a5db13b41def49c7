pub mod contact_dialog;
pub mod option_dialog;
