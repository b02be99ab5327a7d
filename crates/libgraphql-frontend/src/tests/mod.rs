mod ast_position_tests;
mod file_set_tests;
mod parser_schema_tests;
mod source_set_tests;
mod token_stream_tests;
mod utils;
