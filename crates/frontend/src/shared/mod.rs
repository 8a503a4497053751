pub mod api_utils;
