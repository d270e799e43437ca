mod common;
mod directive_test;
mod error_test;
mod parser_test;
mod property_test;
mod text_test;
