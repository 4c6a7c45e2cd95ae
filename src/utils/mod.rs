pub mod db_utils;
pub mod payload;
pub mod validate;
