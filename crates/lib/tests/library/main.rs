mod common;
mod resolve_tests;
mod selection_file_tests;
