mod interpreter_test;
mod scanner_test;
