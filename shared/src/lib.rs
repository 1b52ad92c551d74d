pub mod constants;
pub mod option_list;
pub mod spinner;
pub mod storage;
pub mod theme;
pub mod wheel;
