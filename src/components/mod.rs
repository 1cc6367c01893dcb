pub mod error_list;
pub mod firma_card;
pub mod password_modal;
pub mod status_select;
